use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

/// Quantity price break from a marketplace listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceTier {
    pub start_quantity: u32,
    pub price: BigDecimal,
    #[serde(default)]
    pub promotion_price: Option<BigDecimal>,
}

/// Prices attached to a single SKU
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkuPrice {
    #[serde(default)]
    pub promotion_price: Option<BigDecimal>,
    #[serde(default)]
    pub consign_price: Option<BigDecimal>,
    #[serde(default)]
    pub price: Option<BigDecimal>,
}
