use actix_web::{get, http::header::ContentType, web::ServiceConfig, HttpResponse};

const REGISTER_FORM: &str = include_str!("../../../static/RegisterForm.html");
const SEARCH_FORM: &str = include_str!("../../../static/SearchForm.html");

#[utoipa::path(get, path = "/RegisterForm.html", tag = "forms",
    responses((status = 200, description = "Item registration form")))]
#[get("/RegisterForm.html")]
pub async fn register_form() -> HttpResponse {
    HttpResponse::Ok().content_type(ContentType::html()).body(REGISTER_FORM)
}

#[utoipa::path(get, path = "/SearchForm.html", tag = "forms",
    responses((status = 200, description = "Item search form")))]
#[get("/SearchForm.html")]
pub async fn search_form() -> HttpResponse {
    HttpResponse::Ok().content_type(ContentType::html()).body(SEARCH_FORM)
}

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(register_form).service(search_form);
}
