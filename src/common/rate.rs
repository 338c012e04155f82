use std::fmt;

use bigdecimal::BigDecimal;

use crate::common::money::Money;

const BASIS_POINTS_PER_PERCENT: i64 = 100;

/// Interest rate expressed as a percentage, held in basis points
/// (`Rate::from_basis_points(120)` is 1.2 %).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rate(i64);

impl Rate {
    pub fn from_basis_points(bp: i64) -> Self {
        Self(bp)
    }

    /// `amount * rate / 100`, truncated toward zero at the fourth decimal.
    pub fn apply(&self, amount: Money) -> Money {
        let scaled = i128::from(amount.as_i64()) * i128::from(self.0)
            / i128::from(BASIS_POINTS_PER_PERCENT * 100);
        let clamped = i64::try_from(scaled).unwrap_or(if scaled > 0 { i64::MAX } else { i64::MIN });
        Money::new(clamped)
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pct = BigDecimal::from(self.0) / BigDecimal::from(BASIS_POINTS_PER_PERCENT);
        write!(f, "{}%", pct.normalized())
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn money(s: &str) -> Money {
        Money::from_str(s).unwrap()
    }

    #[test]
    fn applies_fractional_percentage() {
        let rate = Rate::from_basis_points(120);
        assert_eq!(rate.apply(Money::from_units(200)), money("2.4"));
        assert_eq!(rate.apply(Money::from_units(3000)), money("36"));
        assert_eq!(rate.apply(Money::from_units(70)), money("0.84"));
        assert_eq!(rate.apply(Money::from_units(1300)), money("15.6"));
    }

    #[test]
    fn zero_rate_yields_zero() {
        assert_eq!(Rate::default().apply(Money::from_units(5000)), Money::zero());
    }

    #[test]
    fn truncates_below_fourth_decimal() {
        // 0.7 % of 0.0333 is 0.0002331
        assert_eq!(Rate::from_basis_points(70).apply(money("0.0333")), Money::new(2));
    }

    #[test]
    fn displays_as_percentage() {
        assert_eq!(Rate::from_basis_points(120).to_string(), "1.2%");
        assert_eq!(Rate::from_basis_points(100).to_string(), "1%");
        assert_eq!(Rate::from_basis_points(70).to_string(), "0.7%");
    }
}
