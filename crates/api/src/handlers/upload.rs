//! Handler for admin image uploads.

use axum::extract::{Multipart, State};
use axum::Json;
use makerslab_core::upload::{generate_file_name, validate_image_upload};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::admin::RequireAdmin;
use crate::state::AppState;

/// Multipart field names accepted for the uploaded file.
const FILE_FIELDS: [&str; 2] = ["image", "file"];

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub success: bool,
    pub image_url: String,
}

/// POST /api/upload
///
/// Accepts a single image in the `image` field (or `file`), stores it under
/// a fresh name, and returns the reference content rows should hold.
pub async fn upload_image(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    mut multipart: Multipart,
) -> AppResult<Json<UploadResponse>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart body: {e}")))?
    {
        if !field.name().is_some_and(|name| FILE_FIELDS.contains(&name)) {
            continue;
        }

        let original_name = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().map(str::to_string);
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("Failed to read upload: {e}")))?;

        validate_image_upload(content_type.as_deref(), data.len())?;

        let name = generate_file_name(&original_name);
        let content_type = content_type.unwrap_or_default();
        let image_url = state.uploads.put(&name, &data, &content_type).await?;

        tracing::info!(
            file_name = %name,
            size = data.len(),
            content_type = %content_type,
            "Image uploaded"
        );

        return Ok(Json(UploadResponse {
            success: true,
            image_url,
        }));
    }

    Err(AppError::BadRequest("No file uploaded".into()))
}
