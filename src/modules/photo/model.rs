use actix_multipart::Multipart;
use actix_web::web::{Bytes, BytesMut};
use futures_util::TryStreamExt;

use crate::api::error;

const PHOTO_FIELD: &str = "photo";

/// Photo received from a multipart upload, not yet written to disk.
#[derive(Debug, Clone)]
pub struct NewPhoto {
    pub original_filename: String,
    pub bytes: Bytes,
}

impl NewPhoto {
    /// Browsers submit an empty part with an empty filename when no file was
    /// chosen; that counts as no photo.
    fn from_parts(original_filename: String, bytes: Bytes) -> Option<Self> {
        if original_filename.is_empty() && bytes.is_empty() {
            return None;
        }
        Some(Self { original_filename, bytes })
    }

    pub fn from_upload(upload: actix_multipart::form::bytes::Bytes) -> Option<Self> {
        Self::from_parts(upload.file_name.unwrap_or_default(), upload.data)
    }

    /// Reads the `photo` part of a multipart stream, skipping other parts.
    pub async fn from_multipart(
        mut payload: Multipart,
        max_size: usize,
    ) -> Result<Option<Self>, error::Error> {
        while let Some(mut field) = payload.try_next().await.map_err(bad_multipart)? {
            if field.name() != Some(PHOTO_FIELD) {
                while field.try_next().await.map_err(bad_multipart)?.is_some() {}
                continue;
            }

            let original_filename = field
                .content_disposition()
                .and_then(|disposition| disposition.get_filename())
                .unwrap_or_default()
                .to_string();

            let mut bytes = BytesMut::new();
            while let Some(chunk) = field.try_next().await.map_err(bad_multipart)? {
                if bytes.len() + chunk.len() > max_size {
                    return Err(error::Error::bad_request("Photo is too large"));
                }
                bytes.extend_from_slice(&chunk);
            }
            return Ok(Self::from_parts(original_filename, bytes.freeze()));
        }
        Ok(None)
    }
}

fn bad_multipart(e: actix_multipart::MultipartError) -> error::Error {
    error::Error::bad_request(e.to_string())
}
