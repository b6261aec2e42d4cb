use bigdecimal::num_traits::ToPrimitive;
use bigdecimal::{BigDecimal, ParseBigDecimalError};
use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};
const SCALE: i64 = 10_000;
const SCALE_TO_CENTS: i64 = 100;

#[derive(Debug, Clone, Copy, Default)]
/// A fixed-point monetary value stored in units of 0.0001.
///
/// Shares are derived by dividing an expense across its participants, so the
/// extra two internal digits keep per-share rounding well below the cent
/// that reports display.
///
/// # Examples
/// ```
/// use split_ledger::common::money::Money;
///
/// let amount: Money = "100".parse().unwrap();
/// assert_eq!(amount.split(3).to_string_2dp(), "33.33");
/// assert_eq!(amount.split(3).as_i64(), 333_333);
/// ```
pub struct Money(i64);

impl Money {
    pub const fn new(value: i64) -> Self {
        Self(value)
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

    /// `None` when the sum does not fit.
    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }

    /// Divides the amount into `parts` equal shares, rounding to the nearest
    /// internal unit. No remainder is redistributed.
    pub fn split(&self, parts: usize) -> Money {
        match i64::try_from(parts) {
            Ok(0) | Err(_) => Money::zero(),
            Ok(n) => Money(narrow(div_round(i128::from(self.0), i128::from(n)))),
        }
    }

    /// Arithmetic mean of `values`; zero for an empty slice. Accumulates in
    /// `i128`, so any slice of valid amounts is accepted.
    pub fn mean(values: &[Money]) -> Money {
        if values.is_empty() {
            return Money::zero();
        }
        let sum: i128 = values.iter().map(|m| i128::from(m.0)).sum();
        let count = i128::try_from(values.len()).unwrap_or(i128::MAX);
        Money(narrow(div_round(sum, count)))
    }

    pub fn to_string_2dp(&self) -> String {
        let cents = narrow(div_round(i128::from(self.0), i128::from(SCALE_TO_CENTS)));
        let bd = BigDecimal::from(cents) / BigDecimal::from(SCALE / SCALE_TO_CENTS);
        format!("{:.2}", bd)
    }
}

// Rounds half away from zero. `divisor` must be positive.
fn div_round(value: i128, divisor: i128) -> i128 {
    let quotient = value / divisor;
    let remainder = value % divisor;
    if remainder.abs() * 2 >= divisor {
        quotient + value.signum()
    } else {
        quotient
    }
}

// Callers divide by a positive count, so the quotient's magnitude never
// exceeds the largest `i64` that went into the dividend.
fn narrow(value: i128) -> i64 {
    i64::try_from(value).unwrap_or(if value < 0 { i64::MIN } else { i64::MAX })
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
        f.write_str(&self.to_string_2dp())
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
        Money(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Money;
    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
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
        iter.fold(Money::zero(), Add::add)
    }
}
