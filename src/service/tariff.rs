use bigdecimal::BigDecimal;
use indexmap::IndexMap;

use crate::models::{CalculatorInput, ResolvedTariff, TariffKind, TariffRate, TariffRates};

/// Korea-China FTA type codes start with this prefix
pub const FTA_CHINA_CODE_PREFIX: &str = "FCN";
/// Type code reported when no rate was available
pub const FALLBACK_TYPE_CODE: &str = "A";

/// Fallback values used when the lookup returns nothing
#[derive(Debug, Clone)]
pub struct TariffPolicy {
    pub fallback_rate_percent: BigDecimal,
    pub origin_certificate_fee_krw: BigDecimal,
}

impl Default for TariffPolicy {
    fn default() -> Self {
        Self {
            fallback_rate_percent: BigDecimal::from(8),
            origin_certificate_fee_krw: BigDecimal::from(30_000),
        }
    }
}

impl TariffRates {
    /// Present rates in comparison order: basic, WTO, FTA
    pub fn candidates(&self) -> IndexMap<TariffKind, &TariffRate> {
        let mut candidates = IndexMap::new();
        for (kind, rate) in [
            (TariffKind::Basic, &self.basic),
            (TariffKind::Wto, &self.wto),
            (TariffKind::FtaChina, &self.fta_china),
        ] {
            if let Some(rate) = rate {
                candidates.insert(kind, rate);
            }
        }
        candidates
    }
}

/// Pick the lowest available rate; an FTA rate brings a certificate of origin with it.
/// Ties keep the earlier candidate.
pub fn resolve_tariff(rates: &TariffRates, policy: &TariffPolicy) -> ResolvedTariff {
    let lowest = rates
        .candidates()
        .into_iter()
        .reduce(|min, curr| if curr.1.rate < min.1.rate { curr } else { min });

    let Some((kind, rate)) = lowest else {
        tracing::debug!("No tariff candidates, using fallback {}%", policy.fallback_rate_percent);
        return ResolvedTariff {
            kind: TariffKind::Fallback,
            type_code: FALLBACK_TYPE_CODE.to_string(),
            rate_percent: policy.fallback_rate_percent.clone(),
            origin_certificate_required: false,
            origin_certificate_fee_krw: policy.origin_certificate_fee_krw.clone(),
        };
    };

    let needs_certificate = rate.type_code.starts_with(FTA_CHINA_CODE_PREFIX);
    tracing::debug!(
        "Tariff resolved: {}% ({:?}, {}), certificate required: {}",
        rate.rate, kind, rate.type_code, needs_certificate
    );

    ResolvedTariff {
        kind,
        type_code: rate.type_code.clone(),
        rate_percent: rate.rate.clone(),
        origin_certificate_required: needs_certificate,
        origin_certificate_fee_krw: policy.origin_certificate_fee_krw.clone(),
    }
}

impl ResolvedTariff {
    /// Copy the rate and certificate terms into a calculator input
    pub fn apply(&self, mut input: CalculatorInput) -> CalculatorInput {
        input.tariff_rate_percent = self.rate_percent.clone();
        input.origin_certificate_required = self.origin_certificate_required;
        input.origin_certificate_fee_krw = self.origin_certificate_fee_krw.clone();
        input
    }
}
