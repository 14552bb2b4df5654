pub mod experience;
pub mod session;
pub mod site_config;
pub mod skill;
