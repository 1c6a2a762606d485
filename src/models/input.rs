use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

/// Calculator input, one per quote request
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalculatorInput {
    pub unit_price_cny: BigDecimal,
    pub quantity: u32,
    /// CNY -> KRW
    pub exchange_rate: BigDecimal,
    pub china_shipping: ChinaShipping,
    /// Dimensions of one shipping unit (a box, or a single piece)
    pub package: PackageDimensions,
    pub shipping_unit_count: u32,
    pub shipping_mode: ShippingMode,
    pub fcl_flat_fee_krw: Option<BigDecimal>,
    pub tariff_rate_percent: BigDecimal,
    pub origin_certificate_required: bool,
    pub origin_certificate_fee_krw: BigDecimal,
    pub customs_broker_fee_krw: BigDecimal,
}

/// China domestic freight: a quoted flat fee or the seller's tiered template
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChinaShipping {
    Flat { fee_cny: BigDecimal },
    Tiered(TieredSchedule),
}

/// Tiered freight template (first unit + next units)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TieredSchedule {
    pub first_unit_threshold: BigDecimal,
    pub first_unit_fee: BigDecimal,
    pub next_unit_size: BigDecimal,
    pub next_unit_fee: BigDecimal,
    pub charge_basis: ChargeBasis,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChargeBasis {
    Quantity,
    Weight,
}

/// Packing unit dimensions in cm / kg
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PackageDimensions {
    pub length_cm: BigDecimal,
    pub width_cm: BigDecimal,
    pub height_cm: BigDecimal,
    pub weight_kg: BigDecimal,
}

impl PackageDimensions {
    pub fn new(length_cm: BigDecimal, width_cm: BigDecimal, height_cm: BigDecimal, weight_kg: BigDecimal) -> Self {
        Self {
            length_cm,
            width_cm,
            height_cm,
            weight_kg,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShippingMode {
    #[default]
    #[serde(rename = "auto")]
    Auto,
    #[serde(rename = "LCL")]
    Lcl,
    #[serde(rename = "FCL")]
    Fcl,
}

impl std::fmt::Display for ShippingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Lcl => write!(f, "LCL"),
            Self::Fcl => write!(f, "FCL"),
        }
    }
}
