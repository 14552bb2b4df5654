use actix_web::web;

use crate::handlers::{home::home, json_error, system::health_check};

mod auth;
mod experiences;
mod site;
mod skills;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home);
    cfg.service(health_check);

    cfg.configure(auth::config_routes)
        .configure(experiences::config_routes)
        .configure(skills::config_routes)
        .configure(site::config_routes);

    cfg.configure(json_error::config_routes);
}
