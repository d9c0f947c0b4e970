//! Supabase REST and Storage clients.
//!
//! # Architecture
//!
//! - Table access goes through PostgREST (`{url}/rest/v1/{table}`)
//! - File access goes through the Storage API (`{url}/storage/v1/object/...`)
//! - Supabase is source of truth - no local persistence, direct API calls
//! - One [`SupabaseClient`] handle is created at startup and shared across
//!   all request tasks via [`crate::state::AppState`]
//!
//! Authentication uses the service role key, sent as both the `apikey`
//! header and a bearer token, which is what the hosted APIs expect from a
//! trusted backend.

mod postgrest;
mod storage;

use std::sync::Arc;

use reqwest::RequestBuilder;
use secrecy::ExposeSecret;
use serde::Deserialize;
use thiserror::Error;

use crate::config::SupabaseConfig;

/// Errors that can occur when talking to Supabase.
#[derive(Debug, Error)]
pub enum SupabaseError {
    /// HTTP transport or body decoding failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    ///
    /// The message is the upstream error text and is surfaced to the client
    /// as-is, matching the passthrough behavior the storefront relies on.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// An insert/upsert with `return=representation` came back empty.
    #[error("no row returned from {0}")]
    EmptyRepresentation(&'static str),
}

/// Client for the Supabase PostgREST and Storage APIs.
///
/// Cheaply cloneable; all request tasks share the same connection pool.
#[derive(Clone)]
pub struct SupabaseClient {
    inner: Arc<SupabaseClientInner>,
}

struct SupabaseClientInner {
    http: reqwest::Client,
    rest_url: String,
    storage_url: String,
    service_key: String,
    bucket: String,
}

impl SupabaseClient {
    /// Create a new client for the configured Supabase project.
    #[must_use]
    pub fn new(config: &SupabaseConfig) -> Self {
        Self {
            inner: Arc::new(SupabaseClientInner {
                http: reqwest::Client::new(),
                rest_url: format!("{}/rest/v1", config.url),
                storage_url: format!("{}/storage/v1", config.url),
                service_key: config.service_key.expose_secret().to_owned(),
                bucket: config.bucket.clone(),
            }),
        }
    }

    /// Attach the service role key headers to a request.
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.inner.service_key)
            .bearer_auth(&self.inner.service_key)
    }

    /// Turn a non-success response into a [`SupabaseError::Api`].
    ///
    /// Both PostgREST and Storage wrap errors in a JSON body with a
    /// `message` field; fall back to the raw body text if the shape differs.
    async fn api_error(response: reqwest::Response) -> SupabaseError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiErrorBody>(&body)
            .ok()
            .and_then(|parsed| parsed.message)
            .unwrap_or(body);
        let message = if message.is_empty() {
            format!("upstream returned status {status}")
        } else {
            message
        };
        SupabaseError::Api { status, message }
    }
}

/// Error body shape shared by PostgREST and Storage.
#[derive(Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
}
