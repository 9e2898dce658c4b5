use std::collections::HashMap;

use axum::extract::Multipart;

use crate::application::http::server::api_entities::api_error::ApiError;

const DEFAULT_IMAGE_MIME: &str = "image/jpeg";

/// A multipart request carrying one `image` part plus plain text fields.
#[derive(Debug)]
pub struct ImageUpload {
    pub image_data: Vec<u8>,
    pub mime_type: String,
    pub fields: HashMap<String, String>,
}

impl ImageUpload {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    pub fn parse_field<T: std::str::FromStr>(&self, name: &str) -> Result<Option<T>, ApiError> {
        self.field(name)
            .map(|raw| {
                raw.parse::<T>()
                    .map_err(|_| ApiError::BadRequest(format!("Invalid {} value: {}", name, raw)))
            })
            .transpose()
    }
}

pub async fn read_image_upload(
    mut multipart: Multipart,
    max_image_size: usize,
) -> Result<ImageUpload, ApiError> {
    let mut image: Option<(Vec<u8>, String)> = None;
    let mut fields = HashMap::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();

        if name == "image" {
            let mime_type = field
                .content_type()
                .unwrap_or(DEFAULT_IMAGE_MIME)
                .to_string();

            if !mime_type.starts_with("image/") {
                return Err(ApiError::BadRequest(format!(
                    "Unsupported image type: {}",
                    mime_type
                )));
            }

            let data = field
                .bytes()
                .await
                .map_err(|e| ApiError::BadRequest(format!("Failed to read image: {}", e)))?;

            if data.len() > max_image_size {
                return Err(ApiError::PayloadTooLarge(format!(
                    "Image too large. Max size is {} bytes",
                    max_image_size
                )));
            }

            image = Some((data.to_vec(), mime_type));
        } else if !name.is_empty() {
            let value = field
                .text()
                .await
                .map_err(|e| ApiError::BadRequest(format!("Failed to read {}: {}", name, e)))?;
            fields.insert(name, value);
        }
    }

    let (image_data, mime_type) =
        image.ok_or_else(|| ApiError::BadRequest("Missing image field".to_string()))?;

    Ok(ImageUpload {
        image_data,
        mime_type,
        fields,
    })
}
