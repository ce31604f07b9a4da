//! Upload acceptance rules.
//!
//! An upload is a single image file of at most [`MAX_UPLOAD_BYTES`]. The
//! stored file name is generated here so every backend names objects the
//! same way: a fresh UUID plus the extension of the original file name.

use crate::error::CoreError;

/// Maximum accepted upload size (10 MiB).
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Slack allowed on top of [`MAX_UPLOAD_BYTES`] for multipart framing.
pub const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Longest extension carried over from the original file name.
const MAX_EXTENSION_LEN: usize = 10;

/// Validate the declared MIME type and size of an incoming upload.
pub fn validate_image_upload(content_type: Option<&str>, size: usize) -> Result<(), CoreError> {
    let is_image = content_type
        .map(|ct| ct.trim().to_ascii_lowercase().starts_with("image/"))
        .unwrap_or(false);
    if !is_image {
        return Err(CoreError::Validation(
            "Only image files are allowed".into(),
        ));
    }
    if size == 0 {
        return Err(CoreError::Validation("Uploaded file is empty".into()));
    }
    if size > MAX_UPLOAD_BYTES {
        return Err(CoreError::Validation(format!(
            "File too large: {size} bytes (max {MAX_UPLOAD_BYTES})"
        )));
    }
    Ok(())
}

/// Extension of `filename` including the leading dot, lower-cased.
///
/// Returns an empty string when the name has no usable extension.
pub fn file_extension(filename: &str) -> String {
    let base = filename.rsplit(['/', '\\']).next().unwrap_or("");
    match base.rsplit_once('.') {
        Some((stem, ext))
            if !stem.is_empty()
                && !ext.is_empty()
                && ext.len() <= MAX_EXTENSION_LEN
                && ext.chars().all(|c| c.is_ascii_alphanumeric()) =>
        {
            format!(".{}", ext.to_ascii_lowercase())
        }
        _ => String::new(),
    }
}

/// Generate the stored file name for an upload originally called `filename`.
pub fn generate_file_name(filename: &str) -> String {
    format!("{}{}", uuid::Uuid::new_v4(), file_extension(filename))
}

/// Whether `key` is safe to resolve beneath a storage root.
///
/// Rejects empty keys, absolute paths, backslashes, and any `.`/`..`/empty
/// path segment.
pub fn is_safe_key(key: &str) -> bool {
    !key.is_empty()
        && !key.starts_with('/')
        && !key.contains('\\')
        && key
            .split('/')
            .all(|segment| !segment.is_empty() && segment != "." && segment != "..")
}
