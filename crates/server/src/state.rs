//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::supabase::SupabaseClient;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. The Supabase client handle is created once
/// at startup and injected here rather than living in a global, so handlers
/// can be exercised against any client instance in tests.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AppConfig,
    supabase: SupabaseClient,
}

impl AppState {
    /// Create the application state from loaded configuration.
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        let supabase = SupabaseClient::new(&config.supabase);
        Self {
            inner: Arc::new(AppStateInner { config, supabase }),
        }
    }

    /// Get a reference to the application configuration.
    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    /// Get a reference to the shared Supabase client.
    #[must_use]
    pub fn supabase(&self) -> &SupabaseClient {
        &self.inner.supabase
    }
}
