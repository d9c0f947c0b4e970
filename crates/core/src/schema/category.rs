//! The `categories` table.

use serde::{Deserialize, Serialize};

use super::Table;

/// Marker type for the `categories` table.
pub struct Categories;

impl Table for Categories {
    const NAME: &'static str = "categories";
    const ORDER_COLUMN: &'static str = "id";
    type Row = Category;
}

/// One grocery category row.
///
/// `name` doubles as the deletion key; the schema does not enforce
/// uniqueness, so deleting by name removes every match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    /// Public URL of the uploaded category image, if one was provided.
    pub image: Option<String>,
}

/// Insert payload for a new category.
#[derive(Debug, Clone, Serialize)]
pub struct NewCategory {
    pub name: String,
    pub image: Option<String>,
}
