use actix_web::web::ServiceConfig;

use crate::modules::contact::handle::submit_contact_form;

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(submit_contact_form);
}
