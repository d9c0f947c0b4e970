//! The `orders` table.
//!
//! Orders are insert-only: there is no update or delete path. Line items and
//! the free-form details record are stored as serialized text columns, the
//! shape the storefront frontend already submits.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Table;

/// Marker type for the `orders` table.
pub struct Orders;

impl Table for Orders {
    const NAME: &'static str = "orders";
    const ORDER_COLUMN: &'static str = "created_at";
    type Row = Order;
}

/// One order row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    /// Serialized collection of line items.
    pub items: Option<String>,
    /// Serialized free-form record (customer, address, payment mode, ...).
    pub details: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a new order.
#[derive(Debug, Clone, Serialize)]
pub struct NewOrder {
    pub items: Option<String>,
    pub details: Option<String>,
}

/// Coerce a client-submitted field into its stored text form.
///
/// Strings pass through untouched; any other non-null JSON value is
/// serialized, so an object round-trips deep-equal through the text column.
#[must_use]
pub fn coerce_to_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_coerce_keeps_strings_verbatim() {
        let text = coerce_to_text(json!("[{\"id\":1}]"));
        assert_eq!(text.as_deref(), Some("[{\"id\":1}]"));
    }

    #[test]
    fn test_coerce_null_is_absent() {
        assert_eq!(coerce_to_text(Value::Null), None);
    }

    #[test]
    fn test_coerce_object_round_trips_deep_equal() {
        let original = json!({"customer": "Velan", "lines": [{"id": 1, "qty": 2}]});
        let text = coerce_to_text(original.clone()).unwrap();
        let restored: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(restored, original);
    }

    #[test]
    fn test_coerce_array_round_trips_deep_equal() {
        let original = json!([{"id": 1, "qty": 2}, {"id": 7, "qty": 1}]);
        let text = coerce_to_text(original.clone()).unwrap();
        let restored: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(restored, original);
    }
}
