pub mod auth;
pub mod experiences;
pub mod home;
pub mod json_error;
pub mod site;
pub mod skills;
pub mod system;
