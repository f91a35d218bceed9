use actix_multipart::Multipart;
use actix_web::{delete, get, http::header::ContentType, post, put, web, HttpRequest, HttpResponse};
use tokio_util::io::ReaderStream;

use crate::api::error::{self, ErrorBody};
use crate::api::success::{self, MessageBody};
use crate::modules::inventory::model::{
    ItemResponse, NewItemModel, PhotoForm, RegisterFields, RegisterForm, RegisterResponse,
    SearchForm, SearchResponse, UpdateItemModel,
};
use crate::modules::inventory::service::InventoryService;
use crate::modules::photo::NewPhoto;
use crate::utils::{is_multipart, FormOrJson};

#[utoipa::path(
    post,
    path = "/register",
    tag = "inventory",
    request_body(content(
        (RegisterForm = "multipart/form-data"),
        (RegisterFields = "application/x-www-form-urlencoded"),
        (RegisterFields = "application/json")
    )),
    responses(
        (status = 201, description = "Item registered", body = RegisterResponse),
        (status = 400, description = "Item name missing", body = ErrorBody),
    )
)]
#[post("/register")]
pub async fn register(
    inventory_service: web::Data<InventoryService>,
    item: NewItemModel,
) -> Result<success::Success<RegisterResponse>, error::Error> {
    let id = inventory_service.register(item).await?;
    Ok(success::Success::created(Some(RegisterResponse { id }))
        .message("Item registered successfully"))
}

#[utoipa::path(
    get,
    path = "/inventory",
    tag = "inventory",
    responses((status = 200, description = "All registered items", body = Vec<ItemResponse>))
)]
#[get("/inventory")]
pub async fn list_items(
    inventory_service: web::Data<InventoryService>,
) -> Result<success::Success<Vec<ItemResponse>>, error::Error> {
    let items = inventory_service.list().await?;
    Ok(success::Success::ok(Some(items)))
}

#[utoipa::path(
    get,
    path = "/inventory/{id}",
    tag = "inventory",
    params(("id" = u64, Path, description = "Item id")),
    responses(
        (status = 200, description = "The item", body = ItemResponse),
        (status = 404, description = "Item not found", body = ErrorBody),
    )
)]
#[get("/inventory/{id}")]
pub async fn get_item(
    inventory_service: web::Data<InventoryService>,
    item_id: web::Path<u64>,
) -> Result<success::Success<ItemResponse>, error::Error> {
    let item = inventory_service.get_by_id(item_id.into_inner()).await?;
    Ok(success::Success::ok(Some(item)))
}

#[utoipa::path(
    put,
    path = "/inventory/{id}",
    tag = "inventory",
    params(("id" = u64, Path, description = "Item id")),
    request_body(content(
        (UpdateItemModel = "application/json"),
        (UpdateItemModel = "application/x-www-form-urlencoded")
    )),
    responses(
        (status = 200, description = "Item updated", body = MessageBody),
        (status = 404, description = "Item not found", body = ErrorBody),
    )
)]
#[put("/inventory/{id}")]
pub async fn update_item(
    inventory_service: web::Data<InventoryService>,
    item_id: web::Path<u64>,
    item_data: FormOrJson<UpdateItemModel>,
) -> Result<success::Success<()>, error::Error> {
    inventory_service.update(item_id.into_inner(), item_data.0).await?;
    Ok(success::Success::ok(None).message("Item updated successfully"))
}

#[utoipa::path(
    get,
    path = "/inventory/{id}/photo",
    tag = "photo",
    params(("id" = u64, Path, description = "Item id")),
    responses(
        (status = 200, description = "Photo bytes, served as image/jpeg"),
        (status = 404, description = "Item, photo or photo file not found", body = ErrorBody),
    )
)]
#[get("/inventory/{id}/photo")]
pub async fn get_photo(
    inventory_service: web::Data<InventoryService>,
    item_id: web::Path<u64>,
) -> Result<HttpResponse, error::Error> {
    let file = inventory_service.get_photo(item_id.into_inner()).await?;
    Ok(HttpResponse::Ok().content_type(ContentType::jpeg()).streaming(ReaderStream::new(file)))
}

#[utoipa::path(
    put,
    path = "/inventory/{id}/photo",
    tag = "photo",
    params(("id" = u64, Path, description = "Item id")),
    request_body(content = PhotoForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Photo replaced", body = MessageBody),
        (status = 400, description = "No photo supplied", body = ErrorBody),
        (status = 404, description = "Item not found", body = ErrorBody),
    )
)]
#[put("/inventory/{id}/photo")]
pub async fn replace_photo(
    inventory_service: web::Data<InventoryService>,
    item_id: web::Path<u64>,
    req: HttpRequest,
    payload: Multipart,
) -> Result<success::Success<()>, error::Error> {
    let id = item_id.into_inner();
    // Unknown ids are reported before the body is looked at.
    inventory_service.ensure_exists(id).await?;

    let photo = if is_multipart(&req) {
        NewPhoto::from_multipart(payload, inventory_service.max_photo_size()).await?
    } else {
        None
    };
    inventory_service.replace_photo(id, photo).await?;
    Ok(success::Success::ok(None).message("Photo updated successfully"))
}

#[utoipa::path(
    delete,
    path = "/inventory/{id}",
    tag = "inventory",
    params(("id" = u64, Path, description = "Item id")),
    responses(
        (status = 200, description = "Item deleted", body = MessageBody),
        (status = 404, description = "Item not found", body = ErrorBody),
    )
)]
#[delete("/inventory/{id}")]
pub async fn delete_item(
    inventory_service: web::Data<InventoryService>,
    item_id: web::Path<u64>,
) -> Result<success::Success<()>, error::Error> {
    inventory_service.delete(item_id.into_inner()).await?;
    Ok(success::Success::ok(None).message("Item deleted successfully"))
}

#[utoipa::path(
    post,
    path = "/search",
    tag = "search",
    request_body(content = SearchForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "The item, photo link on request", body = SearchResponse),
        (status = 404, description = "Item not found", body = ErrorBody),
    )
)]
#[post("/search")]
pub async fn search(
    inventory_service: web::Data<InventoryService>,
    form: web::Form<SearchForm>,
) -> Result<success::Success<SearchResponse>, error::Error> {
    let item = inventory_service.search(form.into_inner()).await?;
    Ok(success::Success::ok(Some(item)))
}

/// Any route or method the service does not serve.
pub async fn method_not_allowed() -> Result<HttpResponse, error::Error> {
    Err(error::Error::MethodNotAllowed)
}
