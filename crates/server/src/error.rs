//! Unified error handling for the API.
//!
//! Every handler returns `Result<T, AppError>`. Errors never escape the
//! handler boundary: `IntoResponse` turns them into the JSON envelope
//! `{ "success": false, "error": "<message>" }` with the matching status
//! code, and upstream failures are captured to Sentry before responding.

use axum::Json;
use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use crate::supabase::SupabaseError;

/// Application-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required field was absent from the request.
    #[error("missing required field(s): {0}")]
    MissingFields(String),

    /// The request was present but unusable (e.g. non-numeric price).
    #[error("{0}")]
    BadRequest(String),

    /// The multipart body could not be read.
    #[error("invalid multipart request: {0}")]
    Multipart(#[from] MultipartError),

    /// A Supabase call failed. The upstream message is passed through
    /// verbatim to the client.
    #[error("{0}")]
    Supabase(#[from] SupabaseError),
}

impl AppError {
    /// Build a [`AppError::MissingFields`] naming every absent field.
    #[must_use]
    pub fn missing(fields: &[&str]) -> Self {
        Self::MissingFields(fields.join(", "))
    }
}

/// The failure half of the response envelope.
#[derive(Debug, Serialize)]
struct ErrorEnvelope {
    success: bool,
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture upstream failures to Sentry; client mistakes are noise
        if matches!(self, Self::Supabase(_)) {
            sentry::capture_error(&self);
            tracing::error!(error = %self, "upstream request failed");
        }

        let status = match &self {
            Self::MissingFields(_) | Self::BadRequest(_) | Self::Multipart(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Supabase(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = ErrorEnvelope {
            success: false,
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
