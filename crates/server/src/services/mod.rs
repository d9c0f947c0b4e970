//! Workflows composed from multiple Supabase calls.

pub mod media;
