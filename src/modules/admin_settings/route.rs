use actix_web::web::{scope, ServiceConfig};

use crate::modules::admin_settings::handle::*;

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(scope("/admin-details").service(get_admin_details).service(update_admin_details));
}
