//! Velan Grocery API - REST backend for the grocery storefront.
//!
//! # Architecture
//!
//! - Axum web framework, one handler per HTTP verb+path
//! - Supabase PostgREST for the four tables (categories, products, orders,
//!   status) and Supabase Storage for uploaded images
//! - No local persistence: every mutating request is a single upstream
//!   write (uploads add one Storage call before the insert)
//!
//! Configuration comes from environment variables; see
//! [`velan_grocery_api::config`] for the full list.

#![cfg_attr(not(test), forbid(unsafe_code))]

use tokio::net::TcpListener;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use velan_grocery_api::config::AppConfig;
use velan_grocery_api::routes;
use velan_grocery_api::state::AppState;

/// Initialize Sentry error tracking and return a guard that must be kept
/// alive for the lifetime of the process.
fn init_sentry(config: &AppConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_ref()?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    tracing::info!("Sentry initialized");
    Some(guard)
}

#[tokio::main]
async fn main() {
    // Missing Supabase credentials are fatal at startup, not at first request
    let config = AppConfig::from_env().expect("Failed to load configuration");

    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "velan_grocery_api=info,tower_http=info".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // After the subscriber, so its own log line is not dropped
    let _sentry_guard = init_sentry(&config);

    let addr = config.socket_addr();
    tracing::info!(
        supabase_url = %config.supabase.url,
        bucket = %config.supabase.bucket,
        "Supabase client configured"
    );

    let state = AppState::new(config);
    let app = routes::router(state);

    let listener = TcpListener::bind(addr)
        .await
        .expect("Failed to bind listen address");
    tracing::info!(%addr, "velan grocery backend listening");

    axum::serve(listener, app).await.expect("Server error");
}
