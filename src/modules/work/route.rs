use actix_web::web::{scope, ServiceConfig};

use crate::modules::work::handle::*;

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/works")
            .service(list_works)
            .service(create_work)
            .service(get_work)
            .service(delete_work),
    );
}
