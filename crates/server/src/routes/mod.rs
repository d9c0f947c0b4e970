//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET    /                          - Liveness payload
//!
//! # Categories
//! GET    /categories                - List categories (id asc)
//! POST   /categories                - Create category (multipart, optional image)
//! DELETE /categories/by-name/{name} - Delete every category with this name
//!
//! # Products
//! GET    /products                  - List products (id asc, ?category= filter)
//! POST   /products                  - Create product (multipart, optional image)
//! DELETE /products/by-name/{name}   - Delete every product with this name
//!
//! # Orders
//! GET    /orders                    - List orders (created_at asc)
//! POST   /orders                    - Place an order (insert-only)
//!
//! # Status
//! GET    /status/leave              - Read the shopkeeper leave flag
//! POST   /status/leave              - Upsert the shopkeeper leave flag
//! ```

pub mod categories;
mod forms;
pub mod health;
pub mod orders;
pub mod products;
pub mod status;

use axum::Router;
use axum::extract::Request;
use axum::http::{HeaderValue, Method, header};
use axum::middleware::from_fn;
use axum::routing::{delete, get};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::middleware::request_id_middleware;
use crate::state::AppState;

/// Browser origins allowed to call this API.
///
/// Boundary configuration: the deployed Netlify frontend plus the local
/// dev servers used while working on it.
const ALLOWED_ORIGINS: [&str; 4] = [
    "http://localhost:5000",
    "http://127.0.0.1:5500",
    "http://localhost:8080",
    "https://velan-grocery.netlify.app",
];

/// Build the application router with all routes and layers attached.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::show))
        .route(
            "/categories",
            get(categories::list).post(categories::create),
        )
        .route("/categories/by-name/{name}", delete(categories::remove))
        .route("/products", get(products::list).post(products::create))
        .route("/products/by-name/{name}", delete(products::remove))
        .route("/orders", get(orders::list).post(orders::create))
        .route("/status/leave", get(status::show).post(status::update))
        .layer(from_fn(request_id_middleware))
        // Declare request_id empty here; the middleware records it
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request| {
            tracing::info_span!(
                "request",
                method = %request.method(),
                uri = %request.uri(),
                request_id = tracing::field::Empty,
            )
        }))
        .layer(cors_layer())
        .with_state(state)
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(
            ALLOWED_ORIGINS.map(HeaderValue::from_static),
        ))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod tests {
    use axum::Router;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use secrecy::SecretString;
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::config::{AppConfig, SupabaseConfig};
    use crate::state::AppState;

    /// Router wired to a client that points nowhere.
    ///
    /// Validation failures must short-circuit before any Supabase call, so
    /// these tests pass without a network.
    pub(crate) fn test_router() -> Router {
        let config = AppConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 0,
            supabase: SupabaseConfig {
                url: "http://127.0.0.1:1".to_owned(),
                service_key: SecretString::from("test-key"),
                bucket: "images".to_owned(),
            },
            sentry_dsn: None,
        };
        super::router(AppState::new(config))
    }

    pub(crate) async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    /// Build a `multipart/form-data` body from text fields.
    pub(crate) fn multipart_body(fields: &[(&str, &str)]) -> (String, String) {
        let boundary = "test-boundary-7MA4YWxkTrZu0gW".to_owned();
        let mut body = String::new();
        for (name, value) in fields {
            body.push_str(&format!(
                "--{boundary}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            ));
        }
        body.push_str(&format!("--{boundary}--\r\n"));
        (boundary, body)
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let response = test_router()
            .oneshot(
                Request::get("/nope")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_request_id_header_is_set() {
        let response = test_router()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert!(response.headers().contains_key("x-request-id"));
    }

    #[tokio::test]
    async fn test_upstream_request_id_is_reused() {
        let response = test_router()
            .oneshot(
                Request::get("/")
                    .header("x-request-id", "proxy-id-123")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let echoed = response.headers().get("x-request-id").unwrap();
        assert_eq!(echoed, "proxy-id-123");
    }
}
