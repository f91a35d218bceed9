use crate::modules::inventory::handle::*;
use actix_web::web::ServiceConfig;

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(register)
        .service(list_items)
        .service(get_photo)
        .service(replace_photo)
        .service(get_item)
        .service(update_item)
        .service(delete_item)
        .service(search);
}
