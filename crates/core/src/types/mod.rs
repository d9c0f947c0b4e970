//! Domain value types.

pub mod price;

pub use price::Price;
