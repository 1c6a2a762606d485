use bigdecimal::{BigDecimal, One};

/// Round toward negative infinity to a whole number
pub fn floor(value: &BigDecimal) -> BigDecimal {
    // with_scale(0) truncates toward zero
    let truncated = value.with_scale(0);
    if &truncated > value {
        truncated - BigDecimal::one()
    } else {
        truncated
    }
}

/// Round toward positive infinity to a whole number
pub fn ceil(value: &BigDecimal) -> BigDecimal {
    let truncated = value.with_scale(0);
    if &truncated < value {
        truncated + BigDecimal::one()
    } else {
        truncated
    }
}

/// `base * percent / 100`, exact
pub fn percent_of(base: &BigDecimal, percent: &BigDecimal) -> BigDecimal {
    base * percent / BigDecimal::from(100)
}

/// Floored percentage, the rounding applied to every fee and tax
pub fn floor_percent(base: &BigDecimal, percent: &BigDecimal) -> BigDecimal {
    floor(&percent_of(base, percent))
}

/// Same value with trailing fractional zeros dropped, never a negative scale
pub fn canonical(value: &BigDecimal) -> BigDecimal {
    let normalized = value.normalized();
    let (_, scale) = normalized.as_bigint_and_exponent();
    if scale < 0 {
        normalized.with_scale(0)
    } else {
        normalized
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn floor_truncates_positive_fractions() {
        assert_eq!(floor(&dec("3227.7")), dec("3227"));
        assert_eq!(floor(&dec("16642.5")), dec("16642"));
        assert_eq!(floor(&dec("42")), dec("42"));
    }

    #[test]
    fn floor_goes_down_for_negatives() {
        assert_eq!(floor(&dec("-0.5")), dec("-1"));
        assert_eq!(floor(&dec("-2")), dec("-2"));
    }

    #[test]
    fn ceil_bills_partial_units() {
        assert_eq!(ceil(&dec("2.5")), dec("3"));
        assert_eq!(ceil(&dec("2.0001")), dec("3"));
        assert_eq!(ceil(&dec("3")), dec("3"));
        assert_eq!(ceil(&dec("0")), dec("0"));
    }

    #[test]
    fn floored_percentages() {
        assert_eq!(floor_percent(&dec("332850"), &dec("5")), dec("16642"));
        assert_eq!(floor_percent(&dec("16642"), &dec("10")), dec("1664"));
        assert_eq!(floor_percent(&dec("422850"), &dec("8")), dec("33828"));
        assert_eq!(floor_percent(&dec("1000"), &dec("6.5")), dec("65"));
    }

    #[test]
    fn canonical_drops_trailing_zeros_only() {
        assert_eq!(canonical(&dec("0.20")).to_string(), "0.2");
        assert_eq!(canonical(&dec("20.00")).to_string(), "20");
        assert_eq!(canonical(&dec("30000")).to_string(), "30000");
        assert_eq!(canonical(&dec("0.000")).to_string(), "0");
    }
}
