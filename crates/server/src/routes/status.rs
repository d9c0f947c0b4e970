//! Shopkeeper leave-status route handlers.
//!
//! A single key-value flag under the key `"leave"` tells the frontend
//! whether the store is taking orders. These endpoints answer with the
//! flattened shape `{ "success": true, "status": "<value>" }` instead of
//! the generic data envelope - that is the wire shape the frontend binds.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use velan_grocery_core::schema::{Status, StatusFlag};

use crate::error::AppError;
use crate::state::AppState;

/// Response shape for both status endpoints.
#[derive(Debug, Serialize)]
pub struct LeaveStatusResponse {
    pub success: bool,
    pub status: String,
}

/// Body of a status update.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    #[serde(default)]
    pub status: Option<String>,
}

/// GET /status/leave - read the flag; `"none"` if it was never set.
pub async fn show(State(state): State<AppState>) -> Result<Json<LeaveStatusResponse>, AppError> {
    let rows = state
        .supabase()
        .select::<Status>(Some(("key", Status::LEAVE_KEY)))
        .await?;
    Ok(Json(LeaveStatusResponse {
        success: true,
        status: effective_status(rows),
    }))
}

/// The status shown to the frontend: the stored flag value, or the
/// `"none"` sentinel when the flag was never set.
fn effective_status(rows: Vec<StatusFlag>) -> String {
    rows.into_iter()
        .next()
        .map_or_else(|| Status::NONE_VALUE.to_owned(), |flag| flag.value)
}

/// POST /status/leave - upsert the flag, last write wins.
pub async fn update(
    State(state): State<AppState>,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<Json<LeaveStatusResponse>, AppError> {
    let Some(status) = request.status.filter(|s| !s.trim().is_empty()) else {
        return Err(AppError::missing(&["status"]));
    };

    let flag = StatusFlag {
        key: Status::LEAVE_KEY.to_owned(),
        value: status,
    };
    let stored = state.supabase().upsert::<Status, _>(&flag).await?;
    Ok(Json(LeaveStatusResponse {
        success: true,
        status: stored.value,
    }))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use tower::ServiceExt;

    use crate::routes::tests::{body_json, test_router};

    use super::*;

    #[test]
    fn test_unset_flag_reads_as_none() {
        assert_eq!(effective_status(Vec::new()), "none");
    }

    #[test]
    fn test_stored_flag_value_wins() {
        let rows = vec![StatusFlag {
            key: Status::LEAVE_KEY.to_owned(),
            value: "on-leave".to_owned(),
        }];
        assert_eq!(effective_status(rows), "on-leave");
    }

    #[test]
    fn test_response_shape_is_flattened() {
        let json = serde_json::to_value(LeaveStatusResponse {
            success: true,
            status: "none".to_owned(),
        })
        .unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["status"], "none");
        assert!(json.get("data").is_none());
    }

    #[tokio::test]
    async fn test_update_without_status_is_bad_request() {
        let response = test_router()
            .oneshot(
                Request::post("/status/leave")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{}"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["error"], "missing required field(s): status");
    }
}
