use bigdecimal::{BigDecimal, Zero};

use super::rounding::{ceil, floor};
use crate::error::{CalculatorError, Result};
use crate::models::{ChargeBasis, ChinaShipping, PackageDimensions, ShippingMode, TieredSchedule};

/// At or above this volume the shipment goes as a full container
pub const FCL_THRESHOLD_CBM: i32 = 15;
/// Consolidated freight rate per CBM
pub const LCL_RATE_PER_CBM_KRW: i32 = 90_000;
/// Consolidated freight is never billed below one CBM
pub const LCL_MINIMUM_CBM: i32 = 1;

const CM3_PER_M3: i32 = 1_000_000;

impl TieredSchedule {
    pub fn validate(&self) -> Result<()> {
        if self.next_unit_size <= BigDecimal::zero() {
            return Err(CalculatorError::invalid("next_unit_size", "must be greater than zero"));
        }
        for (field, value) in [
            ("first_unit_threshold", &self.first_unit_threshold),
            ("first_unit_fee", &self.first_unit_fee),
            ("next_unit_fee", &self.next_unit_fee),
        ] {
            if value < &BigDecimal::zero() {
                return Err(CalculatorError::invalid(field, "must not be negative"));
            }
        }
        Ok(())
    }

    /// Fee in CNY for `billed` units (pieces or kg); partial next units are billed whole
    pub fn fee_for(&self, billed: &BigDecimal) -> BigDecimal {
        if billed <= &self.first_unit_threshold {
            return self.first_unit_fee.clone();
        }
        let extra = billed - &self.first_unit_threshold;
        let additional_units = ceil(&(extra / &self.next_unit_size));
        &self.first_unit_fee + additional_units * &self.next_unit_fee
    }
}

/// Resolve the China domestic freight in CNY
///
/// Weight-based templates bill the shipment's total weight.
pub fn china_shipping_fee_cny(
    shipping: &ChinaShipping,
    quantity: u32,
    total_weight_kg: &BigDecimal,
) -> BigDecimal {
    match shipping {
        ChinaShipping::Flat { fee_cny } => fee_cny.clone(),
        ChinaShipping::Tiered(schedule) => {
            let billed = match schedule.charge_basis {
                ChargeBasis::Quantity => BigDecimal::from(quantity),
                ChargeBasis::Weight => total_weight_kg.clone(),
            };
            schedule.fee_for(&billed)
        }
    }
}

/// Number of boxes needed for `quantity` pieces; 0 pieces per box counts as 1
pub fn shipping_units_for(quantity: u32, pieces_per_box: u32) -> u32 {
    let per_box = pieces_per_box.max(1);
    quantity.div_ceil(per_box)
}

impl PackageDimensions {
    /// Volume of one unit in m³
    pub fn cbm(&self) -> BigDecimal {
        &self.length_cm * &self.width_cm * &self.height_cm / BigDecimal::from(CM3_PER_M3)
    }

    pub fn total_cbm(&self, units: u32) -> BigDecimal {
        self.cbm() * BigDecimal::from(units)
    }

    pub fn total_weight_kg(&self, units: u32) -> BigDecimal {
        &self.weight_kg * BigDecimal::from(units)
    }
}

/// `auto` picks FCL from 15 CBM up, LCL below
pub fn resolve_mode(requested: ShippingMode, total_cbm: &BigDecimal) -> ShippingMode {
    match requested {
        ShippingMode::Auto if total_cbm >= &BigDecimal::from(FCL_THRESHOLD_CBM) => ShippingMode::Fcl,
        ShippingMode::Auto => ShippingMode::Lcl,
        explicit => explicit,
    }
}

/// LCL freight in KRW, minimum one CBM
pub fn lcl_freight_krw(total_cbm: &BigDecimal) -> BigDecimal {
    let minimum = BigDecimal::from(LCL_MINIMUM_CBM);
    let chargeable = if total_cbm > &minimum { total_cbm } else { &minimum };
    floor(&(chargeable * BigDecimal::from(LCL_RATE_PER_CBM_KRW)))
}
