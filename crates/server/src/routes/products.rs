//! Product route handlers.

use axum::Json;
use axum::extract::{Multipart, Path, Query, State};
use serde::Deserialize;

use velan_grocery_core::Price;
use velan_grocery_core::schema::{NewProduct, Product, Products};

use super::forms::UploadForm;
use crate::error::AppError;
use crate::response::ApiResponse;
use crate::services::media;
use crate::state::AppState;

/// Bucket folder for product images.
const IMAGE_FOLDER: &str = "products";

/// Query parameters for the product list.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Restrict the list to one category (exact match).
    pub category: Option<String>,
}

/// GET /products - list products, id ascending, optionally filtered by
/// category.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ApiResponse<Vec<Product>>>, AppError> {
    let filter = query
        .category
        .as_deref()
        .map(|category| (Products::CATEGORY_COLUMN, category));
    let rows = state.supabase().select::<Products>(filter).await?;
    Ok(ApiResponse::ok(rows))
}

/// POST /products - create a product from a multipart form.
///
/// `name`, `price` and `category` are required; `description` and `image`
/// are optional. The price arrives as form text and is coerced to a number
/// before anything is written. The image, if present, is uploaded first;
/// a failed insert afterwards triggers best-effort cleanup of the upload.
pub async fn create(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse<Product>>, AppError> {
    let form = UploadForm::read(&mut multipart).await?;

    let name = form.text("name").map(ToOwned::to_owned);
    let price_text = form.text("price").map(ToOwned::to_owned);
    let category = form.text("category").map(ToOwned::to_owned);

    let mut missing = Vec::new();
    if name.is_none() {
        missing.push("name");
    }
    if price_text.is_none() {
        missing.push("price");
    }
    if category.is_none() {
        missing.push("category");
    }
    let (Some(name), Some(price_text), Some(category)) = (name, price_text, category) else {
        return Err(AppError::missing(&missing));
    };
    let price = Price::parse(&price_text)
        .map_err(|_| AppError::BadRequest(format!("price must be a number, got \"{price_text}\"")))?;
    let description = form.text("description").map(ToOwned::to_owned);

    let stored = match form.into_image() {
        Some(image) => Some(media::store_image(state.supabase(), IMAGE_FOLDER, image).await?),
        None => None,
    };

    let row = NewProduct {
        name,
        description,
        price,
        image: stored.as_ref().map(|s| s.url.clone()),
        category,
    };
    match state.supabase().insert::<Products, _>(&row).await {
        Ok(created) => Ok(ApiResponse::ok(created)),
        Err(err) => {
            if let Some(stored) = stored {
                media::discard_image(state.supabase(), &stored.path).await;
            }
            Err(err.into())
        }
    }
}

/// DELETE /products/by-name/{name} - delete every product with this exact
/// name. Zero matches still succeeds.
pub async fn remove(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<ApiResponse<Vec<Product>>>, AppError> {
    let deleted = state.supabase().delete::<Products>("name", &name).await?;
    Ok(ApiResponse::ok(deleted))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use tower::ServiceExt;

    use crate::routes::tests::{body_json, multipart_body, test_router};

    async fn post_products(fields: &[(&str, &str)]) -> axum::response::Response {
        let (boundary, body) = multipart_body(fields);
        test_router()
            .oneshot(
                Request::post("/products")
                    .header(
                        header::CONTENT_TYPE,
                        format!("multipart/form-data; boundary={boundary}"),
                    )
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_without_price_is_bad_request() {
        let response = post_products(&[("name", "Bananas"), ("category", "Fruits")]).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "missing required field(s): price");
    }

    #[tokio::test]
    async fn test_create_names_every_missing_field() {
        let response = post_products(&[("description", "yellow")]).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(
            json["error"],
            "missing required field(s): name, price, category"
        );
    }

    #[tokio::test]
    async fn test_create_with_non_numeric_price_is_bad_request() {
        let response = post_products(&[
            ("name", "Bananas"),
            ("price", "cheap"),
            ("category", "Fruits"),
        ])
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["error"], "price must be a number, got \"cheap\"");
    }
}
