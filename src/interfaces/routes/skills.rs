use actix_web::web;

use crate::handlers::skills;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/skills")
            .service(skills::list_skills)
            .service(skills::replace_category)
            .service(skills::patch_skill),
    );
}
