//! The `products` table.

use serde::{Deserialize, Serialize};

use super::Table;
use crate::types::Price;

/// Marker type for the `products` table.
pub struct Products;

impl Table for Products {
    const NAME: &'static str = "products";
    const ORDER_COLUMN: &'static str = "id";
    type Row = Product;
}

impl Products {
    /// Column used for the optional equality filter on the list endpoint.
    pub const CATEGORY_COLUMN: &'static str = "category";
}

/// One product row.
///
/// `category` references a category by name and is deliberately loose:
/// nothing checks that a matching category row exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: Price,
    /// Public URL of the uploaded product image, if one was provided.
    pub image: Option<String>,
    pub category: Option<String>,
}

/// Insert payload for a new product.
#[derive(Debug, Clone, Serialize)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub price: Price,
    pub image: Option<String>,
    pub category: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_product_price_is_numeric_on_the_wire() {
        let json = serde_json::to_value(NewProduct {
            name: "Bananas".to_owned(),
            description: None,
            price: Price::parse("49.5").unwrap(),
            image: None,
            category: "Fruits".to_owned(),
        })
        .unwrap();
        assert!(json["price"].is_number());
    }

    #[test]
    fn test_product_row_deserializes_numeric_price() {
        let product: Product = serde_json::from_str(
            r#"{"id":1,"name":"Bananas","description":null,"price":49.5,"image":null,"category":"Fruits"}"#,
        )
        .unwrap();
        assert_eq!(product.price, Price::parse("49.5").unwrap());
    }
}
