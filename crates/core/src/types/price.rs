//! Decimal price type with lenient deserialization.
//!
//! Storefront clients submit prices as either a JSON number or a string
//! (`49.5` or `"49.5"`, and multipart form fields are always text). The
//! stored row must carry a numeric column value either way, so `Price`
//! accepts both on the way in and always serializes as a JSON number.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A product price in the store's currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Price(Decimal);

impl Price {
    /// Create a price from a decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// The decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Parse a price from client-submitted text (e.g. a multipart field).
    ///
    /// # Errors
    ///
    /// Returns the underlying decimal parse error if `input` is not a number.
    pub fn parse(input: &str) -> Result<Self, rust_decimal::Error> {
        Decimal::from_str(input.trim()).map(Self)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // PostgREST expects a numeric column value, not a string.
        let amount = self
            .0
            .to_f64()
            .ok_or_else(|| serde::ser::Error::custom("price out of f64 range"))?;
        serializer.serialize_f64(amount)
    }
}

struct PriceVisitor;

impl Visitor<'_> for PriceVisitor {
    type Value = Price;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number or a numeric string")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Price, E> {
        Decimal::try_from(v).map(Price).map_err(de::Error::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Price, E> {
        Ok(Price(Decimal::from(v)))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Price, E> {
        Ok(Price(Decimal::from(v)))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Price, E> {
        Price::parse(v).map_err(de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PriceVisitor)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_from_text() {
        let price = Price::parse("49.5").unwrap();
        assert_eq!(price, Price::new(Decimal::new(495, 1)));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let price = Price::parse(" 12 ").unwrap();
        assert_eq!(price, Price::new(Decimal::from(12)));
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert!(Price::parse("cheap").is_err());
        assert!(Price::parse("").is_err());
    }

    #[test]
    fn test_deserialize_from_number() {
        let price: Price = serde_json::from_str("49.5").unwrap();
        assert_eq!(price, Price::parse("49.5").unwrap());
    }

    #[test]
    fn test_deserialize_from_string() {
        let price: Price = serde_json::from_str("\"49.5\"").unwrap();
        assert_eq!(price, Price::parse("49.5").unwrap());
    }

    #[test]
    fn test_deserialize_from_integer() {
        let price: Price = serde_json::from_str("30").unwrap();
        assert_eq!(price, Price::new(Decimal::from(30)));
    }

    #[test]
    fn test_serializes_as_json_number() {
        let json = serde_json::to_value(Price::parse("49.5").unwrap()).unwrap();
        assert!(json.is_number());
        assert!((json.as_f64().unwrap() - 49.5).abs() < f64::EPSILON);
    }
}
