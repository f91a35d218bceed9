use actix_multipart::form::MultipartFormConfig;
use actix_web::web;

use crate::api::error;

// Room for the text fields that travel next to the photo in one multipart body.
const FORM_FIELDS_ALLOWANCE: usize = 64 * 1024;

pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| error::Error::bad_request(err.to_string()).into())
}

pub fn form_config() -> web::FormConfig {
    web::FormConfig::default()
        .error_handler(|err, _req| error::Error::bad_request(err.to_string()).into())
}

/// A path id that is not an unsigned integer can never name an item.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|_err, _req| error::Error::not_found("Item not found").into())
}

pub fn multipart_config(max_photo_size: usize) -> MultipartFormConfig {
    MultipartFormConfig::default()
        .memory_limit(max_photo_size + FORM_FIELDS_ALLOWANCE)
        .total_limit(max_photo_size + FORM_FIELDS_ALLOWANCE)
        .error_handler(|err, _req| error::Error::bad_request(err.to_string()).into())
}
