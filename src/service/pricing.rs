use bigdecimal::{BigDecimal, Zero};

use crate::models::{PriceTier, SkuPrice};

/// Unit price (CNY) for an order quantity from the listing's price breaks
///
/// The last tier whose start quantity is reached wins, promotion price first.
/// Below every break the first tier applies; no tiers at all means zero.
pub fn price_for_quantity(tiers: &[PriceTier], quantity: u32) -> BigDecimal {
    let tier = tiers
        .iter()
        .rev()
        .find(|t| quantity >= t.start_quantity)
        .or_else(|| tiers.first());

    match tier {
        Some(t) => t.promotion_price.clone().unwrap_or_else(|| t.price.clone()),
        None => BigDecimal::zero(),
    }
}

impl SkuPrice {
    /// Promotion, then consignment, then list price
    pub fn effective(&self) -> BigDecimal {
        self.promotion_price
            .as_ref()
            .or(self.consign_price.as_ref())
            .or(self.price.as_ref())
            .cloned()
            .unwrap_or_else(BigDecimal::zero)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    fn tiers() -> Vec<PriceTier> {
        vec![
            PriceTier { start_quantity: 2, price: dec("18.5"), promotion_price: None },
            PriceTier { start_quantity: 50, price: dec("16.8"), promotion_price: Some(dec("15.9")) },
            PriceTier { start_quantity: 500, price: dec("14.2"), promotion_price: None },
        ]
    }

    #[test]
    fn picks_highest_reached_tier() {
        assert_eq!(price_for_quantity(&tiers(), 10), dec("18.5"));
        assert_eq!(price_for_quantity(&tiers(), 100), dec("15.9"));
        assert_eq!(price_for_quantity(&tiers(), 500), dec("14.2"));
    }

    #[test]
    fn below_first_break_uses_first_tier() {
        assert_eq!(price_for_quantity(&tiers(), 1), dec("18.5"));
    }

    #[test]
    fn no_tiers_is_zero() {
        assert_eq!(price_for_quantity(&[], 10), BigDecimal::zero());
    }

    #[test]
    fn sku_price_precedence() {
        let sku = SkuPrice { promotion_price: None, consign_price: Some(dec("12")), price: Some(dec("13")) };
        assert_eq!(sku.effective(), dec("12"));
        assert_eq!(SkuPrice::default().effective(), BigDecimal::zero());
    }
}
