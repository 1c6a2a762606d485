use bigdecimal::{BigDecimal, Zero};

use super::rounding::{floor, floor_percent};
use super::shipping::{china_shipping_fee_cny, lcl_freight_krw, resolve_mode};
use crate::error::{CalculatorError, Result};
use crate::models::{CalculatorInput, ChinaShipping, CostBreakdown, ShippingMode};

/// Brokerage commission on the EXW total
pub const COMMISSION_PERCENT: i32 = 5;
/// VAT on commission, import value, broker fee and certificate fee
pub const VAT_PERCENT: i32 = 10;

/// Compute the full landed cost for one order
///
/// Stages run in a fixed order and every monetary result is floored to whole
/// KRW before it feeds the next stage. Caller-quoted KRW fees are floored on entry.
///
/// 1. goods + China freight -> EXW, commission, first payment
/// 2. CBM/weight -> shipping mode -> freight, duty, import VAT, second payment
/// 3. total and per-unit cost
pub fn compute_landed_cost(input: &CalculatorInput) -> Result<CostBreakdown> {
    validate(input)?;

    let vat = BigDecimal::from(VAT_PERCENT);
    let quantity = BigDecimal::from(input.quantity);
    let total_cbm = input.package.total_cbm(input.shipping_unit_count);
    let total_weight_kg = input.package.total_weight_kg(input.shipping_unit_count);

    // Stage 1
    let unit_price_krw = floor(&(&input.unit_price_cny * &input.exchange_rate));
    let total_goods_price_krw = &unit_price_krw * &quantity;
    let china_shipping_fee_cny =
        china_shipping_fee_cny(&input.china_shipping, input.quantity, &total_weight_kg);
    let china_shipping_krw = floor(&(&china_shipping_fee_cny * &input.exchange_rate));
    let exw_total_krw = &total_goods_price_krw + &china_shipping_krw;
    let commission_krw = floor_percent(&exw_total_krw, &BigDecimal::from(COMMISSION_PERCENT));
    let commission_vat_krw = floor_percent(&commission_krw, &vat);
    let first_payment_krw = &exw_total_krw + &commission_krw + &commission_vat_krw;

    tracing::debug!(
        "Stage 1: goods {} + china shipping {} = EXW {}, commission {} (+VAT {}), first payment {}",
        total_goods_price_krw, china_shipping_krw, exw_total_krw, commission_krw, commission_vat_krw, first_payment_krw
    );

    // Stage 2
    let resolved_shipping_mode = resolve_mode(input.shipping_mode, &total_cbm);
    let international_shipping_krw = match resolved_shipping_mode {
        ShippingMode::Fcl => input
            .fcl_flat_fee_krw
            .as_ref()
            .map(floor)
            .ok_or_else(|| CalculatorError::invalid("fcl_flat_fee_krw", "is required when shipping by FCL"))?,
        _ => lcl_freight_krw(&total_cbm),
    };
    let dutiable_value_krw = &exw_total_krw + &international_shipping_krw;
    let customs_duty_krw = floor_percent(&dutiable_value_krw, &input.tariff_rate_percent);
    let import_vat_krw = floor_percent(&(&dutiable_value_krw + &customs_duty_krw), &vat);
    let customs_broker_fee_krw = floor(&input.customs_broker_fee_krw);
    let customs_broker_vat_krw = floor_percent(&customs_broker_fee_krw, &vat);
    let (origin_certificate_fee_krw, origin_certificate_vat_krw) = if input.origin_certificate_required {
        let fee = floor(&input.origin_certificate_fee_krw);
        let fee_vat = floor_percent(&fee, &vat);
        (fee, fee_vat)
    } else {
        (BigDecimal::zero(), BigDecimal::zero())
    };
    let second_payment_krw = &international_shipping_krw
        + &customs_duty_krw
        + &import_vat_krw
        + &customs_broker_fee_krw
        + &customs_broker_vat_krw
        + &origin_certificate_fee_krw
        + &origin_certificate_vat_krw;

    tracing::debug!(
        "Stage 2: {} CBM via {}, freight {}, duty {}, import VAT {}, second payment {}",
        total_cbm, resolved_shipping_mode, international_shipping_krw, customs_duty_krw, import_vat_krw, second_payment_krw
    );

    // Stage 3
    let total_cost_krw = &first_payment_krw + &second_payment_krw;
    let unit_cost_krw = floor(&(&total_cost_krw / &quantity));

    Ok(CostBreakdown {
        unit_price_krw,
        total_goods_price_krw,
        china_shipping_fee_cny,
        china_shipping_krw,
        exw_total_krw,
        commission_krw,
        commission_vat_krw,
        first_payment_krw,
        total_cbm,
        total_weight_kg,
        resolved_shipping_mode,
        international_shipping_krw,
        dutiable_value_krw,
        customs_duty_krw,
        import_vat_krw,
        customs_broker_fee_krw,
        customs_broker_vat_krw,
        origin_certificate_fee_krw,
        origin_certificate_vat_krw,
        second_payment_krw,
        total_cost_krw,
        unit_cost_krw,
    })
}

/// Reject inputs the calculator cannot price
pub fn validate(input: &CalculatorInput) -> Result<()> {
    if input.quantity < 1 {
        return Err(CalculatorError::invalid("quantity", "must be at least 1"));
    }

    let zero = BigDecimal::zero();
    let mut non_negative = vec![
        ("unit_price_cny", &input.unit_price_cny),
        ("exchange_rate", &input.exchange_rate),
        ("tariff_rate_percent", &input.tariff_rate_percent),
        ("origin_certificate_fee_krw", &input.origin_certificate_fee_krw),
        ("customs_broker_fee_krw", &input.customs_broker_fee_krw),
        ("length_cm", &input.package.length_cm),
        ("width_cm", &input.package.width_cm),
        ("height_cm", &input.package.height_cm),
        ("weight_kg", &input.package.weight_kg),
    ];
    if let Some(fee) = &input.fcl_flat_fee_krw {
        non_negative.push(("fcl_flat_fee_krw", fee));
    }
    if let ChinaShipping::Flat { fee_cny } = &input.china_shipping {
        non_negative.push(("china_shipping_fee_cny", fee_cny));
    }
    for (field, value) in non_negative {
        if value < &zero {
            return Err(CalculatorError::invalid(field, "must not be negative"));
        }
    }

    if let ChinaShipping::Tiered(schedule) = &input.china_shipping {
        schedule.validate()?;
    }

    if input.shipping_mode == ShippingMode::Fcl && input.fcl_flat_fee_krw.is_none() {
        return Err(CalculatorError::invalid(
            "fcl_flat_fee_krw",
            "is required when shipping by FCL",
        ));
    }

    Ok(())
}
