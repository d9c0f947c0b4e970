//! Order route handlers.
//!
//! Orders are insert-only. The frontend submits `items` and `details`
//! either as pre-serialized strings or as raw JSON objects; both are
//! stored as text columns.

use axum::Json;
use axum::extract::State;
use serde::Deserialize;
use serde_json::Value;

use velan_grocery_core::schema::{NewOrder, Order, Orders, order::coerce_to_text};

use crate::error::AppError;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Body of a new order. Both fields are optional and loosely typed.
#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    #[serde(default)]
    pub items: Value,
    #[serde(default)]
    pub details: Value,
}

/// GET /orders - list all orders, oldest first.
pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Order>>>, AppError> {
    let rows = state.supabase().select::<Orders>(None).await?;
    Ok(ApiResponse::ok(rows))
}

/// POST /orders - place an order.
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<CreateOrderRequest>,
) -> Result<Json<ApiResponse<Order>>, AppError> {
    let row = NewOrder {
        items: coerce_to_text(request.items),
        details: coerce_to_text(request.details),
    };
    let created = state.supabase().insert::<Orders, _>(&row).await?;
    Ok(ApiResponse::ok(created))
}
