use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

/// One named duty rate as returned by the tariff lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TariffRate {
    pub rate: BigDecimal,
    pub type_code: String,
}

/// Rates known for an HS code; any of them may be missing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TariffRates {
    #[serde(default)]
    pub basic: Option<TariffRate>,
    #[serde(default)]
    pub wto: Option<TariffRate>,
    #[serde(default)]
    pub fta_china: Option<TariffRate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TariffKind {
    Basic,
    Wto,
    FtaChina,
    /// No rate was available
    Fallback,
}

/// Selected rate plus the certificate-of-origin consequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedTariff {
    pub kind: TariffKind,
    pub type_code: String,
    pub rate_percent: BigDecimal,
    pub origin_certificate_required: bool,
    pub origin_certificate_fee_krw: BigDecimal,
}
