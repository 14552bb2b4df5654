pub mod content;
pub mod embedded;
pub mod fs_repo;
