use actix_web::web::ServiceConfig;

use crate::modules::upload::handle::upload_image;

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(upload_image);
}
