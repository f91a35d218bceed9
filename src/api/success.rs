use actix_web::HttpResponse;
use std::borrow::Cow;

/// JSON body for responses that carry a message next to the payload fields.
/// `T` must serialize as a JSON object.
#[derive(serde::Serialize)]
pub struct SuccessData<T: serde::Serialize> {
    pub message: Cow<'static, str>,
    #[serde(flatten)]
    pub data: T,
}

#[derive(serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
pub struct MessageBody {
    #[schema(value_type = String)]
    pub message: Cow<'static, str>,
}

pub struct Success<T: serde::Serialize> {
    pub status: actix_web::http::StatusCode,
    pub body: Option<T>,
    pub message: Option<Cow<'static, str>>,
}

impl<T: serde::Serialize> Success<T> {
    pub fn ok(data: Option<T>) -> Self {
        Self { status: actix_web::http::StatusCode::OK, body: data, message: None }
    }

    pub fn message<M>(mut self, msg: M) -> Self
    where
        M: Into<Cow<'static, str>>,
    {
        self.message = Some(msg.into());
        self
    }

    pub fn created(data: Option<T>) -> Self {
        Self { status: actix_web::http::StatusCode::CREATED, body: data, message: None }
    }
}

impl<T: serde::Serialize> actix_web::Responder for Success<T> {
    type Body = actix_web::body::BoxBody;

    fn respond_to(self, _req: &actix_web::HttpRequest) -> HttpResponse<Self::Body> {
        let mut response = HttpResponse::build(self.status);

        match (self.body, self.message) {
            (Some(data), Some(message)) => response.json(SuccessData { message, data }),
            (Some(data), None) => response.json(data),
            (None, Some(message)) => response.json(MessageBody { message }),
            (None, None) => response.finish(),
        }
    }
}
