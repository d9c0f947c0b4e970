//! Velan Grocery Core - Shared types library.
//!
//! This crate provides the types shared between the API server and its tests:
//!
//! - [`schema`] - Typed table definitions for the Supabase-hosted tables
//! - [`types`] - Domain value types (currently [`types::Price`])
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no HTTP clients.
//! Table and column names live here as associated constants instead of being
//! scattered through handlers as free-form strings, so a renamed column is a
//! compile error rather than a silent empty result.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod schema;
pub mod types;

pub use schema::{Table, UpsertTable};
pub use types::Price;
