//! The success half of the response envelope.
//!
//! Every endpoint answers `{ "success": true, "data": ... }`; failures are
//! shaped by [`crate::error::AppError`]. The status endpoints use their own
//! flattened shape (see [`crate::routes::status`]).

use axum::Json;
use serde::Serialize;

/// Uniform JSON wrapper for successful responses.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Wrap `data` in the success envelope, ready to return from a handler.
    pub fn ok(data: T) -> Json<Self> {
        Json(Self {
            success: true,
            data,
        })
    }
}
