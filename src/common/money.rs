use bigdecimal::{BigDecimal, ParseBigDecimalError, RoundingMode, ToPrimitive};
use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

pub(crate) const SCALE: i64 = 10_000;

#[derive(Debug, Clone, Copy, Default)]
/// A signed monetary amount stored in ten-thousandths of a currency unit.
///
/// Movements, balances and interest are all `Money`. Keeping the value as an
/// integer means summing a ledger is exact, so `balance == sum(movements)`
/// never drifts.
///
/// Operators saturate at the `i64` bounds instead of panicking or wrapping.
/// Ledger writes go through [`Money::checked_add`] first, so a stored balance
/// never reaches a bound.
///
/// # Examples
/// ```
/// use bankist::common::money::Money;
///
/// let amount = Money::from_units(12);
/// assert_eq!(amount.as_i64(), 120_000);
/// assert_eq!(amount.to_string_4dp(), "12.0000");
/// assert_eq!(amount.to_string_2dp(), "12.00");
/// ```
pub struct Money(i64);

impl Money {
    pub const ONE_UNIT: Money = Money(SCALE);

    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Whole currency units, e.g. `from_units(3000)` is 3000.0000.
    pub fn from_units(units: i64) -> Self {
        Money(units.saturating_mul(SCALE))
    }

    pub fn zero() -> Self {
        Money(0)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub fn abs(self) -> Money {
        Money(self.0.saturating_abs())
    }

    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }

    fn to_decimal(self) -> BigDecimal {
        BigDecimal::from(self.0) / BigDecimal::from(SCALE)
    }

    pub fn to_string_4dp(&self) -> String {
        format!("{:.4}", self.to_decimal())
    }

    /// Display form used by reports: two decimals, half away from zero.
    pub fn to_string_2dp(&self) -> String {
        let rounded = self.to_decimal().with_scale_round(2, RoundingMode::HalfUp);
        format!("{:.2}", rounded)
    }
}

impl std::str::FromStr for Money {
    type Err = ParseBigDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.is_empty() {
            return Err(ParseBigDecimalError::Other("empty amount".into()));
        }

        let bd: BigDecimal = t.parse()?;

        let scaled = (bd * BigDecimal::from(SCALE)).round(0);
        let value: i64 = scaled
            .to_i64()
            .ok_or_else(|| ParseBigDecimalError::Other("amount overflow".into()))?;

        Ok(Money(value))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_4dp())
    }
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
impl Eq for Money {}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Money {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl Add for Money {
    type Output = Money;
    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Money {
    type Output = Money;
    fn sub(self, rhs: Money) -> Money {
        Money(self.0.saturating_sub(rhs.0))
    }
}

impl Neg for Money {
    type Output = Money;
    fn neg(self) -> Money {
        Money(self.0.saturating_neg())
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        *self = *self - rhs;
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.copied().sum()
    }
}
