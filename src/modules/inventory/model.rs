use actix_multipart::form::{bytes::Bytes, text::Text, MultipartForm};
use actix_web::{dev, FromRequest, HttpRequest};
use futures_util::future::LocalBoxFuture;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::modules::inventory::schema::ItemEntity;
use crate::modules::photo::NewPhoto;
use crate::utils::{as_bad_request, is_multipart, photo_url, FormOrJson};

/// Multipart body of `POST /register`.
#[derive(MultipartForm, ToSchema)]
pub struct RegisterForm {
    /// Item name, required
    #[schema(value_type = Option<String>)]
    pub inventory_name: Option<Text<String>>,
    /// Free-form description
    #[schema(value_type = Option<String>)]
    pub description: Option<Text<String>>,
    /// Optional photo of the item
    #[schema(value_type = Option<String>, format = Binary)]
    pub photo: Option<Bytes>,
}

/// Urlencoded or JSON body of `POST /register`. These carry no photo.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct RegisterFields {
    pub inventory_name: Option<String>,
    pub description: Option<String>,
}

/// Multipart body of `PUT /inventory/{id}/photo`.
#[derive(MultipartForm, ToSchema)]
pub struct PhotoForm {
    /// Replacement photo
    #[schema(value_type = Option<String>, format = Binary)]
    pub photo: Option<Bytes>,
}

#[derive(Debug, Validate)]
pub struct NewItemModel {
    #[validate(length(min = 1, message = "Item name is required"))]
    pub inventory_name: String,
    pub description: Option<String>,
    pub photo: Option<NewPhoto>,
}

impl From<RegisterForm> for NewItemModel {
    fn from(form: RegisterForm) -> Self {
        NewItemModel {
            inventory_name: form.inventory_name.map(Text::into_inner).unwrap_or_default(),
            description: form.description.map(Text::into_inner),
            photo: form.photo.and_then(NewPhoto::from_upload),
        }
    }
}

impl From<RegisterFields> for NewItemModel {
    fn from(fields: RegisterFields) -> Self {
        NewItemModel {
            inventory_name: fields.inventory_name.unwrap_or_default(),
            description: fields.description,
            photo: None,
        }
    }
}

/// Registration accepts the HTML form's multipart encoding as well as plain
/// urlencoded and JSON bodies. Anything else registers nothing and fails
/// validation on the missing name.
impl FromRequest for NewItemModel {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut dev::Payload) -> Self::Future {
        if is_multipart(req) {
            let fut = MultipartForm::<RegisterForm>::from_request(req, payload);
            Box::pin(async move { Ok(fut.await.map_err(as_bad_request)?.into_inner().into()) })
        } else {
            let fut = FormOrJson::<RegisterFields>::from_request(req, payload);
            Box::pin(async move { Ok(fut.await?.0.into()) })
        }
    }
}

pub struct InsertItem {
    pub inventory_name: String,
    pub description: String,
    pub photo_filename: Option<String>,
}

/// JSON or urlencoded body of `PUT /inventory/{id}`. Omitted fields are left
/// as they are; a missing body changes nothing.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateItemModel {
    pub inventory_name: Option<String>,
    pub description: Option<String>,
}

impl UpdateItemModel {
    pub fn is_empty(&self) -> bool {
        self.inventory_name.is_none() && self.description.is_none()
    }
}

/// Urlencoded body of `POST /search`, as sent by the search form.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SearchForm {
    pub id: Option<String>,
    /// `"on"` when the photo link checkbox is ticked
    pub has_photo: Option<String>,
}

impl SearchForm {
    pub fn wants_photo(&self) -> bool {
        self.has_photo.as_deref() == Some("on")
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegisterResponse {
    pub id: u64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ItemResponse {
    pub id: u64,
    pub inventory_name: String,
    pub description: String,
    pub photo_url: Option<String>,
}

impl From<ItemEntity> for ItemResponse {
    fn from(entity: ItemEntity) -> Self {
        ItemResponse {
            photo_url: entity.photo_filename.as_ref().map(|_| photo_url(entity.id)),
            id: entity.id,
            inventory_name: entity.inventory_name,
            description: entity.description,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SearchResponse {
    pub id: u64,
    pub inventory_name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

impl SearchResponse {
    pub fn from_entity(entity: ItemEntity, include_photo: bool) -> Self {
        let url = match &entity.photo_filename {
            Some(_) if include_photo => Some(photo_url(entity.id)),
            _ => None,
        };
        SearchResponse {
            id: entity.id,
            inventory_name: entity.inventory_name,
            description: entity.description,
            photo_url: url,
        }
    }
}
