//! Liveness endpoint.

use axum::Json;
use serde::Serialize;

use crate::response::ApiResponse;

/// Liveness payload.
#[derive(Debug, Serialize)]
pub struct HealthPayload {
    pub message: &'static str,
}

/// GET / - confirm the backend is up. No collaborators are touched.
pub async fn show() -> Json<ApiResponse<HealthPayload>> {
    ApiResponse::ok(HealthPayload {
        message: "velan grocery backend is running",
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::routes::tests::{body_json, test_router};

    #[tokio::test]
    async fn test_health_is_ok_without_collaborators() {
        let response = test_router()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["message"], "velan grocery backend is running");
    }
}
