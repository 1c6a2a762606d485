use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use super::ShippingMode;

/// Landed cost breakdown. Money fields are whole KRW unless suffixed `_cny`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostBreakdown {
    // first payment (EXW + commission)
    pub unit_price_krw: BigDecimal,
    pub total_goods_price_krw: BigDecimal,
    pub china_shipping_fee_cny: BigDecimal,
    pub china_shipping_krw: BigDecimal,
    pub exw_total_krw: BigDecimal,
    pub commission_krw: BigDecimal,
    pub commission_vat_krw: BigDecimal,
    pub first_payment_krw: BigDecimal,

    // second payment (freight + customs)
    pub total_cbm: BigDecimal,
    pub total_weight_kg: BigDecimal,
    pub resolved_shipping_mode: ShippingMode,
    pub international_shipping_krw: BigDecimal,
    pub dutiable_value_krw: BigDecimal,
    pub customs_duty_krw: BigDecimal,
    pub import_vat_krw: BigDecimal,
    pub customs_broker_fee_krw: BigDecimal,
    pub customs_broker_vat_krw: BigDecimal,
    pub origin_certificate_fee_krw: BigDecimal,
    pub origin_certificate_vat_krw: BigDecimal,
    pub second_payment_krw: BigDecimal,

    pub total_cost_krw: BigDecimal,
    pub unit_cost_krw: BigDecimal,
}
