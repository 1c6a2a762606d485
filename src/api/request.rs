use bigdecimal::BigDecimal;
use serde::Deserialize;

use crate::config::CalculatorDefaults;
use crate::models::{
    CalculatorInput, ChinaShipping, PackageDimensions, PriceTier, ShippingMode, SkuPrice, TariffRates,
};
use crate::service::{price_for_quantity, resolve_tariff, shipping_units_for};

/// Calculator form as posted by the storefront and the staff order editor
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteRequest {
    pub label: Option<String>,
    /// Explicit price wins over the selected SKU, which wins over the listing's price breaks
    pub unit_price_cny: Option<BigDecimal>,
    pub sku_price: Option<SkuPrice>,
    #[serde(default)]
    pub price_tiers: Vec<PriceTier>,
    pub quantity: u32,
    pub exchange_rate: Option<BigDecimal>,
    pub china_shipping: ChinaShipping,
    #[serde(default)]
    pub package: PackageDimensions,
    /// Explicit unit count wins over `pieces_per_box`; neither means one unit per piece
    pub shipping_unit_count: Option<u32>,
    pub pieces_per_box: Option<u32>,
    #[serde(default)]
    pub shipping_mode: ShippingMode,
    pub fcl_flat_fee_krw: Option<BigDecimal>,
    pub tariff_rate_percent: Option<BigDecimal>,
    /// Lookup result; when present it decides the rate and the certificate
    pub tariff_rates: Option<TariffRates>,
    #[serde(default)]
    pub origin_certificate_required: bool,
    pub origin_certificate_fee_krw: Option<BigDecimal>,
    pub customs_broker_fee_krw: Option<BigDecimal>,
}

impl QuoteRequest {
    pub fn into_input(self, defaults: &CalculatorDefaults) -> CalculatorInput {
        let shipping_unit_count = match (self.shipping_unit_count, self.pieces_per_box) {
            (Some(units), _) => units,
            (None, Some(per_box)) => shipping_units_for(self.quantity, per_box),
            (None, None) => self.quantity,
        };

        let unit_price_cny = match (self.unit_price_cny, &self.sku_price) {
            (Some(price), _) => price,
            (None, Some(sku)) => sku.effective(),
            (None, None) => price_for_quantity(&self.price_tiers, self.quantity),
        };

        let input = CalculatorInput {
            unit_price_cny,
            quantity: self.quantity,
            exchange_rate: self.exchange_rate.unwrap_or_else(|| defaults.exchange_rate.clone()),
            china_shipping: self.china_shipping,
            package: self.package,
            shipping_unit_count,
            shipping_mode: self.shipping_mode,
            fcl_flat_fee_krw: self.fcl_flat_fee_krw,
            tariff_rate_percent: self
                .tariff_rate_percent
                .unwrap_or_else(|| defaults.fallback_tariff_rate_percent.clone()),
            origin_certificate_required: self.origin_certificate_required,
            origin_certificate_fee_krw: self
                .origin_certificate_fee_krw
                .unwrap_or_else(|| defaults.origin_certificate_fee_krw.clone()),
            customs_broker_fee_krw: self
                .customs_broker_fee_krw
                .unwrap_or_else(|| defaults.customs_broker_fee_krw.clone()),
        };

        match &self.tariff_rates {
            Some(rates) => resolve_tariff(rates, &defaults.tariff_policy()).apply(input),
            None => input,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TariffRate;

    fn request() -> QuoteRequest {
        serde_json::from_str(
            r#"{
                "unit_price_cny": "15.9",
                "quantity": 100,
                "china_shipping": { "type": "flat", "fee_cny": "50" },
                "package": { "length_cm": "22", "width_cm": "33", "height_cm": "1", "weight_kg": "0.2" }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn missing_fields_take_config_defaults() {
        let input = request().into_input(&CalculatorDefaults::default());
        assert_eq!(input.exchange_rate, BigDecimal::from(203));
        assert_eq!(input.customs_broker_fee_krw, BigDecimal::from(30_000));
        assert_eq!(input.tariff_rate_percent, BigDecimal::from(8));
        assert_eq!(input.shipping_mode, ShippingMode::Auto);
        assert_eq!(input.shipping_unit_count, 100);
        assert!(!input.origin_certificate_required);
    }

    #[test]
    fn pieces_per_box_derives_unit_count() {
        let mut req = request();
        req.pieces_per_box = Some(30);
        assert_eq!(req.clone().into_input(&CalculatorDefaults::default()).shipping_unit_count, 4);

        req.shipping_unit_count = Some(7);
        assert_eq!(req.into_input(&CalculatorDefaults::default()).shipping_unit_count, 7);
    }

    #[test]
    fn unit_price_from_sku_then_tiers() {
        let mut req = request();
        req.unit_price_cny = None;
        req.price_tiers = vec![
            PriceTier { start_quantity: 1, price: BigDecimal::from(20), promotion_price: None },
            PriceTier { start_quantity: 100, price: BigDecimal::from(17), promotion_price: None },
        ];
        assert_eq!(req.clone().into_input(&CalculatorDefaults::default()).unit_price_cny, BigDecimal::from(17));

        req.sku_price = Some(SkuPrice { promotion_price: None, consign_price: None, price: Some(BigDecimal::from(19)) });
        assert_eq!(req.into_input(&CalculatorDefaults::default()).unit_price_cny, BigDecimal::from(19));
    }

    #[test]
    fn tariff_lookup_overrides_manual_rate() {
        let mut req = request();
        req.tariff_rate_percent = Some(BigDecimal::from(13));
        req.tariff_rates = Some(TariffRates {
            basic: Some(TariffRate { rate: BigDecimal::from(8), type_code: "A".into() }),
            wto: None,
            fta_china: Some(TariffRate { rate: BigDecimal::from(0), type_code: "FCN1".into() }),
        });
        let input = req.into_input(&CalculatorDefaults::default());
        assert_eq!(input.tariff_rate_percent, BigDecimal::from(0));
        assert!(input.origin_certificate_required);
        assert_eq!(input.origin_certificate_fee_krw, BigDecimal::from(30_000));
    }
}
