//! Shared multipart form reading for the upload endpoints.

use std::collections::HashMap;

use axum::extract::Multipart;

use crate::error::AppError;
use crate::services::media::{DEFAULT_CONTENT_TYPE, ImageUpload};

/// Field name carrying the uploaded file on both upload endpoints.
const IMAGE_FIELD: &str = "image";

/// A fully read `multipart/form-data` request: text fields plus an
/// optional image file.
pub(super) struct UploadForm {
    fields: HashMap<String, String>,
    image: Option<ImageUpload>,
}

impl UploadForm {
    /// Drain the multipart stream into memory.
    pub(super) async fn read(multipart: &mut Multipart) -> Result<Self, AppError> {
        let mut fields = HashMap::new();
        let mut image = None;

        while let Some(field) = multipart.next_field().await? {
            let Some(name) = field.name().map(ToOwned::to_owned) else {
                continue;
            };
            if name == IMAGE_FIELD {
                let file_name = field
                    .file_name()
                    .unwrap_or("upload")
                    .to_owned();
                let content_type = field
                    .content_type()
                    .unwrap_or(DEFAULT_CONTENT_TYPE)
                    .to_owned();
                let bytes = field.bytes().await?.to_vec();
                // A file input submitted empty arrives as a zero-byte part
                if !bytes.is_empty() {
                    image = Some(ImageUpload {
                        file_name,
                        content_type,
                        bytes,
                    });
                }
            } else {
                fields.insert(name, field.text().await?);
            }
        }

        Ok(Self { fields, image })
    }

    /// A non-empty text field, if present.
    pub(super) fn text(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(String::as_str)
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }

    /// Take the uploaded image, if one was sent.
    pub(super) fn into_image(self) -> Option<ImageUpload> {
        self.image
    }
}
