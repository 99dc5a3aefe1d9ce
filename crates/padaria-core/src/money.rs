//! # Money Module
//!
//! Prices, line totals and discounts as whole cents.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  DISCOUNTS ON FLOATS DRIFT                                              │
//! │                                                                         │
//! │  Sonho: R$ 3.50 with 15% off                                           │
//! │    3.5 * (1 - 0.15) = 2.9749999999999996  ❌ rounds to 2.97             │
//! │                                                                         │
//! │  IN CENTS INSTEAD                                                       │
//! │    350 * 85 = 29750 hundredths of a cent                               │
//! │    (29750 + 50) / 100 = 298 cents        ✅ R$ 2.98                     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use padaria_core::money::Money;
//! use padaria_core::types::DiscountRate;
//!
//! let price = Money::from_cents(2500); // R$ 25.00
//! let line = price.discounted_line_total(DiscountRate::from_percent(40), 2);
//! assert_eq!(line.cents(), 3000); // R$ 30.00
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::types::DiscountRate;
use crate::MAX_PRICE_CENTS;

/// Currency symbol used by `Display` (Brazilian real).
pub const DEFAULT_CURRENCY_SYMBOL: &str = "R$";

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in cents.
///
/// ## Where Money is Used
/// ```text
/// Product.price_cents ──► CartItem.line_total() ──► Cart.total() ──► Order.total
///          │
///          └──► Displayed as "R$ 25.00" on the Home screen
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ```rust
    /// use padaria_core::money::Money;
    ///
    /// let price = Money::from_cents(50); // R$ 0.50
    /// assert_eq!(price.cents(), 50);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Parses a decimal amount typed by a person (`"25.00"`, `"0,5"`, `"3"`).
    ///
    /// ## Rules
    /// - Optional `R$` prefix and surrounding whitespace are ignored
    /// - `.` or `,` is accepted as the decimal separator
    /// - At most 2 fractional digits
    /// - No sign: prices are never negative
    /// - At most `MAX_PRICE_CENTS`
    ///
    /// ```rust
    /// use padaria_core::money::Money;
    ///
    /// assert_eq!(Money::parse("25.00").unwrap().cents(), 2500);
    /// assert_eq!(Money::parse("0,5").unwrap().cents(), 50);
    /// assert!(Money::parse("1.999").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Money, ValidationError> {
        let text = input.trim();
        let text = text
            .strip_prefix(DEFAULT_CURRENCY_SYMBOL)
            .map(str::trim_start)
            .unwrap_or(text);

        if text.is_empty() {
            return Err(ValidationError::Required {
                field: "price".to_string(),
            });
        }

        let invalid = |reason: &str| ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: reason.to_string(),
        };

        let (whole, frac) = match text.find(|c| c == '.' || c == ',') {
            Some(idx) => (&text[..idx], &text[idx + 1..]),
            None => (text, ""),
        };

        let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
        if (whole.is_empty() && frac.is_empty()) || !all_digits(whole) || !all_digits(frac) {
            return Err(invalid("must be a non-negative amount like 12.50"));
        }

        if frac.len() > 2 {
            return Err(invalid("must have at most 2 decimal places"));
        }

        let too_large = || invalid("amount is too large");
        let whole_value: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| too_large())?
        };
        let frac_value: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().map_err(|_| too_large())? * 10,
            _ => frac.parse().map_err(|_| too_large())?,
        };

        whole_value
            .checked_mul(100)
            .and_then(|cents| cents.checked_add(frac_value))
            .filter(|cents| *cents <= MAX_PRICE_CENTS)
            .map(Money::from_cents)
            .ok_or_else(too_large)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-currency portion (reais).
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the centavos portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Sum that reports overflow instead of clamping.
    #[inline]
    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Applies a percentage discount to a single unit, rounded half-up.
    ///
    /// ```rust
    /// use padaria_core::money::Money;
    /// use padaria_core::types::DiscountRate;
    ///
    /// let pao = Money::from_cents(50);
    /// assert_eq!(pao.apply_discount(DiscountRate::from_percent(30)).cents(), 35);
    /// ```
    pub fn apply_discount(&self, rate: DiscountRate) -> Money {
        self.discounted_line_total(rate, 1)
    }

    /// Discounted total for `qty` units: `price × (1 − pct/100) × qty`.
    ///
    /// ## Rounding
    /// The exact amount is computed in hundredths of a cent and rounded
    /// half-up to cents once, for the whole line. Rounding per unit and then
    /// multiplying would drift by up to `qty / 2` cents.
    ///
    /// ```text
    /// Sonho R$ 3.50, 15% off, qty 2
    ///   350 × 85 × 2 = 59500  ──►  (59500 + 50) / 100 = 595  ──►  R$ 5.95
    /// ```
    ///
    /// Clamps to the `i64` range; use `checked_line_total` where an
    /// out-of-range line must be rejected.
    pub fn discounted_line_total(&self, rate: DiscountRate, qty: i64) -> Money {
        self.checked_line_total(rate, qty).unwrap_or_else(|| {
            if self.0.signum() * qty.signum() < 0 {
                Money(i64::MIN)
            } else {
                Money(i64::MAX)
            }
        })
    }

    /// Like `discounted_line_total`, but `None` when the result does not
    /// fit in `i64` cents.
    pub fn checked_line_total(&self, rate: DiscountRate, qty: i64) -> Option<Money> {
        let exact = self.exact_line_total(rate, qty)?;
        let rounded = if exact >= 0 {
            (exact + 50) / 100
        } else {
            (exact - 50) / 100
        };
        i64::try_from(rounded).ok().map(Money)
    }

    /// Line amount in hundredths of a cent.
    fn exact_line_total(&self, rate: DiscountRate, qty: i64) -> Option<i128> {
        let kept = i128::from(DiscountRate::MAX_PERCENT.saturating_sub(rate.percent()));
        i128::from(self.0)
            .checked_mul(kept)?
            .checked_mul(i128::from(qty))
    }

    /// Formats with an explicit currency symbol, e.g. `"R$ 12.34"`.
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!(
            "{}{} {}.{:02}",
            sign,
            symbol,
            self.major().abs(),
            self.cents_part()
        )
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol(DEFAULT_CURRENCY_SYMBOL))
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Decimal Serialization
// =============================================================================

/// Serde adapter that stores cents but reads and writes reais as a JSON
/// number (`350` ⇄ `3.5`).
///
/// ```rust,ignore
/// #[serde(rename = "price", with = "crate::money::reais")]
/// pub price_cents: i64,
/// ```
pub mod reais {
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::MAX_PRICE_CENTS;

    pub fn serialize<S>(cents: &i64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(*cents as f64 / 100.0)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<i64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        let max = MAX_PRICE_CENTS as f64 / 100.0;
        if !(0.0..=max).contains(&value) {
            return Err(serde::de::Error::custom(format!(
                "price must be between 0 and {}, got {}",
                max, value
            )));
        }
        Ok((value * 100.0).round() as i64)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(2250);
        assert_eq!(money.cents(), 2250);
        assert_eq!(money.major(), 22);
        assert_eq!(money.cents_part(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(2500).to_string(), "R$ 25.00");
        assert_eq!(Money::from_cents(35).to_string(), "R$ 0.35");
        assert_eq!(Money::from_cents(-550).to_string(), "-R$ 5.50");
        assert_eq!(Money::zero().to_string(), "R$ 0.00");
        assert_eq!(Money::from_cents(1099).format_with_symbol("$"), "$ 10.99");
    }

    #[test]
    fn test_arithmetic_and_sum() {
        let a = Money::from_cents(1_000);
        let b = Money::from_cents(5_00);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);

        let total: Money = vec![a, b, b].into_iter().sum();
        assert_eq!(total.cents(), 2000);
    }

    #[test]
    fn test_discount_exact() {
        // Bolo de Chocolate: R$ 25.00 at 40% off
        let price = Money::from_cents(2500);
        assert_eq!(price.apply_discount(DiscountRate::from_percent(40)).cents(), 1500);
    }

    #[test]
    fn test_discount_rounds_half_up() {
        // Sonho: R$ 3.50 at 15% off = R$ 2.975
        let price = Money::from_cents(350);
        assert_eq!(price.apply_discount(DiscountRate::from_percent(15)).cents(), 298);
    }

    #[test]
    fn test_line_total_rounds_once_per_line() {
        let price = Money::from_cents(350);
        let rate = DiscountRate::from_percent(15);

        // 2.975 × 2 = 5.95 exactly; per-unit rounding would give 5.96
        assert_eq!(price.discounted_line_total(rate, 2).cents(), 595);
    }

    #[test]
    fn test_discount_bounds() {
        let price = Money::from_cents(800);
        assert_eq!(price.apply_discount(DiscountRate::zero()).cents(), 800);
        assert_eq!(price.apply_discount(DiscountRate::from_percent(100)).cents(), 0);
    }

    #[test]
    fn test_parse_accepts_common_inputs() {
        assert_eq!(Money::parse("25.00").unwrap().cents(), 2500);
        assert_eq!(Money::parse("25").unwrap().cents(), 2500);
        assert_eq!(Money::parse("0.5").unwrap().cents(), 50);
        assert_eq!(Money::parse("3,75").unwrap().cents(), 375);
        assert_eq!(Money::parse(" R$ 8,00 ").unwrap().cents(), 800);
        assert_eq!(Money::parse(".99").unwrap().cents(), 99);
    }

    #[test]
    fn test_parse_rejects_bad_inputs() {
        assert!(matches!(
            Money::parse("   "),
            Err(ValidationError::Required { .. })
        ));
        assert!(Money::parse("-1").is_err());
        assert!(Money::parse("1.999").is_err());
        assert!(Money::parse("1.2.3").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse(".").is_err());
        assert!(Money::parse("99999999999999999999").is_err());
    }

    #[test]
    fn test_parse_caps_price() {
        assert_eq!(Money::parse("1000000").unwrap().cents(), MAX_PRICE_CENTS);
        assert!(Money::parse("1000000.01").is_err());
        assert!(Money::parse("92233720368547757").is_err());
    }

    #[test]
    fn test_line_total_out_of_range() {
        let huge = Money::from_cents(i64::MAX / 2);
        let rate = DiscountRate::zero();

        assert_eq!(huge.checked_line_total(rate, 3), None);
        assert_eq!(huge.discounted_line_total(rate, 3).cents(), i64::MAX);
        assert_eq!(huge.checked_line_total(rate, 1), Some(huge));
        assert_eq!(
            Money::from_cents(i64::MAX).checked_line_total(rate, i64::MAX),
            None
        );
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Priced {
        #[serde(rename = "price", with = "reais")]
        price_cents: i64,
    }

    #[test]
    fn test_reais_serde() {
        let json = serde_json::to_value(Priced { price_cents: 790 }).unwrap();
        assert_eq!(json, serde_json::json!({ "price": 7.9 }));

        let back: Priced = serde_json::from_str(r#"{"price": 0.5}"#).unwrap();
        assert_eq!(back.price_cents, 50);
        let whole: Priced = serde_json::from_str(r#"{"price": 25}"#).unwrap();
        assert_eq!(whole.price_cents, 2500);

        assert!(serde_json::from_str::<Priced>(r#"{"price": -1}"#).is_err());
        assert!(serde_json::from_str::<Priced>(r#"{"price": 1e18}"#).is_err());
    }

    #[test]
    fn test_addition_never_wraps() {
        let max = Money::from_cents(i64::MAX);
        let one = Money::from_cents(1);

        assert_eq!(max.checked_add(one), None);
        assert_eq!((max + one).cents(), i64::MAX);

        let total: Money = vec![max, max].into_iter().sum();
        assert_eq!(total.cents(), i64::MAX);
    }
}
