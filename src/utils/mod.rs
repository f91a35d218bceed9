use actix_web::{dev, http::header, web, FromRequest, HttpMessage, HttpRequest};
use futures_util::future::LocalBoxFuture;
use serde::de::DeserializeOwned;

use crate::api::error;

/// Public URL under which an item's photo is served.
pub fn photo_url(id: u64) -> String {
    format!("/inventory/{id}/photo")
}

/// Reads an item id the lenient way HTML forms need: surrounding whitespace,
/// a leading `+` and trailing junk are ignored, so `"5abc"` and `"5.0"` are 5.
pub fn parse_leading_id(raw: &str) -> Option<u64> {
    let raw = raw.trim_start();
    let raw = raw.strip_prefix('+').unwrap_or(raw);
    let end = raw.find(|c: char| !c.is_ascii_digit()).unwrap_or(raw.len());
    raw[..end].parse().ok()
}

pub fn is_multipart(req: &HttpRequest) -> bool {
    req.content_type().eq_ignore_ascii_case("multipart/form-data")
}

/// Extractor failures that did not pass through one of our error handlers
/// (multipart content-type errors, for one) become a 400 with an error body.
pub fn as_bad_request(e: actix_web::Error) -> actix_web::Error {
    if e.as_error::<error::Error>().is_some() {
        return e;
    }
    error::Error::bad_request(e.to_string()).into()
}

fn has_body(req: &HttpRequest) -> bool {
    if req.headers().contains_key(header::TRANSFER_ENCODING) {
        return true;
    }
    req.headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse::<u64>().ok())
        .is_some_and(|len| len > 0)
}

/// Body read as JSON or as an urlencoded form, picked by `Content-Type`.
/// A missing body, or one of any other type, yields `T::default()`; a body
/// that claims to be JSON or a form but does not parse is still rejected.
pub struct FormOrJson<T>(pub T);

impl<T> FromRequest for FormOrJson<T>
where
    T: DeserializeOwned + Default + 'static,
{
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut dev::Payload) -> Self::Future {
        if !has_body(req) {
            return Box::pin(async { Ok(FormOrJson(T::default())) });
        }

        let content_type = req.content_type().to_ascii_lowercase();
        if content_type == "application/json" || content_type.ends_with("+json") {
            let fut = web::Json::<T>::from_request(req, payload);
            Box::pin(async move {
                let json = fut.await.map_err(as_bad_request)?;
                Ok(FormOrJson(json.into_inner()))
            })
        } else if content_type == "application/x-www-form-urlencoded" {
            let fut = web::Form::<T>::from_request(req, payload);
            Box::pin(async move {
                let form = fut.await.map_err(as_bad_request)?;
                Ok(FormOrJson(form.into_inner()))
            })
        } else {
            Box::pin(async { Ok(FormOrJson(T::default())) })
        }
    }
}
