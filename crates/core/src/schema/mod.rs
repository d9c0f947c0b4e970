//! Typed table schema for the Supabase-hosted tables.
//!
//! The backend does not own migrations; the tables live in the hosted
//! Postgres project. Each table is still represented by a marker type
//! implementing [`Table`] so that handlers never spell table or column
//! names as inline strings.
//!
//! # Tables
//!
//! - `categories` - [`category::Categories`]
//! - `products` - [`product::Products`]
//! - `orders` - [`order::Orders`] (insert-only)
//! - `status` - [`status::Status`] (singleton key-value flags)

pub mod category;
pub mod order;
pub mod product;
pub mod status;

use serde::de::DeserializeOwned;

pub use category::{Categories, Category, NewCategory};
pub use order::{NewOrder, Order, Orders};
pub use product::{NewProduct, Product, Products};
pub use status::{Status, StatusFlag};

/// A table in the hosted Postgres project.
pub trait Table {
    /// Table name as exposed by PostgREST.
    const NAME: &'static str;

    /// Column used for ascending sort on list endpoints.
    const ORDER_COLUMN: &'static str;

    /// The shape of one row of this table.
    type Row: DeserializeOwned + Send;
}

/// A table supporting insert-or-update keyed by a unique column.
pub trait UpsertTable: Table {
    /// The unique column PostgREST resolves conflicts on.
    const CONFLICT_COLUMN: &'static str;
}
