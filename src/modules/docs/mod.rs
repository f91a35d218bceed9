use actix_web::web;
use utoipa::openapi::{server::Server, OpenApi as OpenApiDocument};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::modules::{inventory::handle, pages};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Inventory Service API",
        version = "1.0.0",
        description = "Register inventory items, attach photos and search them by id"
    ),
    paths(
        pages::register_form,
        pages::search_form,
        handle::register,
        handle::list_items,
        handle::get_item,
        handle::update_item,
        handle::get_photo,
        handle::replace_photo,
        handle::delete_item,
        handle::search,
    ),
    tags(
        (name = "forms", description = "HTML forms"),
        (name = "inventory", description = "Inventory items"),
        (name = "photo", description = "Item photos"),
        (name = "search", description = "Lookup by id"),
    )
)]
pub struct ApiDoc;

/// OpenAPI document advertising `base_url` as its server.
pub fn api_doc(base_url: &str) -> OpenApiDocument {
    let mut doc = ApiDoc::openapi();
    doc.servers = Some(vec![Server::new(base_url)]);
    doc
}

/// Swagger UI under `/docs/`, reading the document from `/docs/openapi.json`.
pub fn configure(doc: OpenApiDocument) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.service(web::redirect("/docs", "/docs/"))
            .service(SwaggerUi::new("/docs/{_:.*}").url("/docs/openapi.json", doc));
    }
}
