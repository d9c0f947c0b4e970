//! Upload-and-persist workflow for image files.
//!
//! Turns an in-memory multipart file into a durable, publicly addressable
//! object *before* the owning row is written:
//!
//! 1. Build a storage path `{folder}/{unix_millis}_{sanitized_filename}`.
//!    The timestamp keeps concurrent uploads of the same file name from
//!    colliding at this storefront's scale.
//! 2. Upload the bytes with upsert semantics and the declared content type.
//! 3. A failed upload aborts the request; the owning insert only happens
//!    after the upload succeeded, so no row ever references a missing file.
//! 4. On success, hand the public URL back for the insert.
//!
//! The upload and the insert are not transactional. If the insert fails
//! afterwards, the caller uses [`discard_image`] to delete the orphaned
//! object; that cleanup is best-effort and never masks the insert error.

use chrono::Utc;

use crate::supabase::{SupabaseClient, SupabaseError};

/// Fallback content type when the multipart field declares none.
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// An image file received via `multipart/form-data`.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// A stored image: the bucket path it was written to and its public URL.
#[derive(Debug, Clone)]
pub struct StoredImage {
    pub path: String,
    pub url: String,
}

/// Upload an image and resolve its public URL.
///
/// # Errors
///
/// Returns [`SupabaseError`] if the Storage upload fails; nothing has been
/// written to any table at that point.
pub async fn store_image(
    supabase: &SupabaseClient,
    folder: &str,
    image: ImageUpload,
) -> Result<StoredImage, SupabaseError> {
    let path = object_path(folder, &image.file_name, Utc::now().timestamp_millis());
    supabase
        .upload(&path, image.bytes, &image.content_type)
        .await?;
    let url = supabase.public_url(&path);
    tracing::debug!(%path, "image uploaded");
    Ok(StoredImage { path, url })
}

/// Best-effort deletion of an uploaded object whose owning insert failed.
///
/// A failed cleanup leaves an orphaned file in the bucket; that is logged
/// and otherwise accepted, since the client already gets the insert error.
pub async fn discard_image(supabase: &SupabaseClient, path: &str) {
    if let Err(err) = supabase.remove(path).await {
        tracing::warn!(%path, error = %err, "failed to clean up orphaned upload");
    }
}

/// Build the bucket path for an upload.
fn object_path(folder: &str, file_name: &str, uploaded_at_millis: i64) -> String {
    format!(
        "{folder}/{uploaded_at_millis}_{}",
        sanitize_file_name(file_name)
    )
}

/// Collapse whitespace runs in a client-supplied file name to underscores.
///
/// Keeps paths human-traceable without spaces leaking into URLs.
fn sanitize_file_name(file_name: &str) -> String {
    let sanitized = file_name.split_whitespace().collect::<Vec<_>>().join("_");
    if sanitized.is_empty() {
        "upload".to_owned()
    } else {
        sanitized
    }
}
