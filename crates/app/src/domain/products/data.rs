//! Products Data

use rust_decimal::Decimal;

/// New Product Data
///
/// Carries no identifier; the store assigns one on insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: Decimal,
}
