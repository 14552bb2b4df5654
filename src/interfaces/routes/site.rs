use actix_web::web;

use crate::handlers::site;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/config")
            .service(site::get_site_config)
            .service(site::save_site_config),
    );
}
