//! Pure helpers for the image upload endpoints.
//!
//! Uploaded files are stored under a randomized name so client-supplied
//! filenames never touch the filesystem. Validation happens before any
//! disk write.

use uuid::Uuid;

/// Maximum accepted upload size in bytes (5 MB).
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Fallback extension when the client filename has none.
const DEFAULT_EXTENSION: &str = "jpg";

/// Returns `true` for `image/*` content types.
pub fn is_image_content_type(content_type: &str) -> bool {
    content_type.starts_with("image/")
}

/// Build a randomized stored filename, keeping only the (lowercased)
/// extension from the original client filename.
pub fn stored_filename(original: &str) -> String {
    let ext = original
        .rsplit('.')
        .next()
        .filter(|e| !e.is_empty() && e.len() <= 8 && e.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_else(|| DEFAULT_EXTENSION.to_string());
    format!("image-{}.{ext}", Uuid::new_v4())
}

/// Validate a client-supplied filename for the delete endpoint.
///
/// Rejects anything that could escape the upload directory: path
/// separators, parent references, and empty names.
pub fn validate_filename(filename: &str) -> Result<(), String> {
    if filename.is_empty() {
        return Err("Filename must not be empty".to_string());
    }
    if filename.contains('/') || filename.contains('\\') || filename.contains("..") {
        return Err("Filename must not contain path separators".to_string());
    }
    Ok(())
}
