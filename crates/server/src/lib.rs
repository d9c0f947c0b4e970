//! Velan Grocery API library.
//!
//! The backend functionality lives here as a library so handlers and
//! workflows can be exercised in tests; the binary in `main.rs` only wires
//! configuration, logging and the listener together.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod services;
pub mod state;
pub mod supabase;
