//! Category route handlers.

use axum::Json;
use axum::extract::{Multipart, Path, State};

use velan_grocery_core::schema::{Categories, Category, NewCategory};

use super::forms::UploadForm;
use crate::error::AppError;
use crate::response::ApiResponse;
use crate::services::media;
use crate::state::AppState;

/// Bucket folder for category images.
const IMAGE_FOLDER: &str = "categories";

/// GET /categories - list all categories, id ascending.
pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Category>>>, AppError> {
    let rows = state.supabase().select::<Categories>(None).await?;
    Ok(ApiResponse::ok(rows))
}

/// POST /categories - create a category from a multipart form.
///
/// `name` is required; `image` is an optional file that is uploaded to the
/// bucket before the row is written. If the insert fails after a successful
/// upload, the orphaned object is removed best-effort.
pub async fn create(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse<Category>>, AppError> {
    let form = UploadForm::read(&mut multipart).await?;
    let Some(name) = form.text("name") else {
        return Err(AppError::missing(&["name"]));
    };
    let name = name.to_owned();

    let stored = match form.into_image() {
        Some(image) => Some(media::store_image(state.supabase(), IMAGE_FOLDER, image).await?),
        None => None,
    };

    let row = NewCategory {
        name,
        image: stored.as_ref().map(|s| s.url.clone()),
    };
    match state.supabase().insert::<Categories, _>(&row).await {
        Ok(created) => Ok(ApiResponse::ok(created)),
        Err(err) => {
            if let Some(stored) = stored {
                media::discard_image(state.supabase(), &stored.path).await;
            }
            Err(err.into())
        }
    }
}

/// DELETE /categories/by-name/{name} - delete every category with this
/// exact name. Zero matches still succeeds.
pub async fn remove(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<ApiResponse<Vec<Category>>>, AppError> {
    let deleted = state.supabase().delete::<Categories>("name", &name).await?;
    Ok(ApiResponse::ok(deleted))
}
