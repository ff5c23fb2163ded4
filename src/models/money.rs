//! Money type for representing currency amounts
//!
//! Amounts are exact decimals. Spreadsheet amounts arrive as loose text and
//! keep every digit they were written with; rounding to cents only happens
//! when a value is displayed. Arithmetic saturates at the representable range
//! instead of overflowing.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub};
use std::str::FromStr;

/// Exponents beyond this saturate or vanish anyway
const MAX_EXPONENT: u32 = 64;

/// A monetary amount in currency units
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Largest representable amount
    pub const MAX: Money = Money(Decimal::MAX);
    /// Smallest representable amount
    pub const MIN: Money = Money(Decimal::MIN);

    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use tally::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// assert_eq!(amount.to_units(), 10.5);
    /// ```
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// Create a Money amount from whole currency units
    pub fn from_units(units: i64) -> Self {
        Self(Decimal::from(units))
    }

    pub const fn from_decimal(value: Decimal) -> Self {
        Self(value)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// The exact decimal value
    pub const fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// Get the amount as floating point currency units
    pub fn to_units(&self) -> f64 {
        self.0.to_f64().unwrap_or_default()
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Check if the amount is positive
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Check if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Round to cents, half away from zero
    pub fn round_cents(&self) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        )
    }

    /// Add, clamping to `MIN`/`MAX` on overflow
    pub fn saturating_add(self, other: Self) -> Self {
        match self.0.checked_add(other.0) {
            Some(sum) => Self(sum),
            None if other.is_negative() => Self::MIN,
            None => Self::MAX,
        }
    }

    /// Subtract, clamping to `MIN`/`MAX` on overflow
    pub fn saturating_sub(self, other: Self) -> Self {
        match self.0.checked_sub(other.0) {
            Some(difference) => Self(difference),
            None if other.is_negative() => Self::MAX,
            None => Self::MIN,
        }
    }

    /// Parse a money amount from loosely formatted text
    ///
    /// Accepts "10.50", "-10.50", "$10.50", "S/ 10.50", "1e3" and text with a
    /// trailing non-numeric suffix such as "12.5 soles": the longest leading
    /// numeric prefix is used. No rounding is applied. Magnitudes beyond the
    /// representable range saturate to `MIN`/`MAX`.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();

        let (negative, rest) = split_sign(trimmed);
        let rest = strip_currency(rest);
        // Sign may also follow the currency marker ("$-10")
        let (inner_negative, rest) = split_sign(rest);

        let (mantissa, exponent) = numeric_prefix(rest)
            .ok_or_else(|| MoneyParseError::InvalidFormat(trimmed.to_string()))?;

        let mut value = parse_mantissa(mantissa);
        if let Some(exponent) = exponent {
            value = apply_exponent(value, exponent);
        }

        Ok(Self(if negative != inner_negative {
            -value
        } else {
            value
        }))
    }

    /// Format with a currency symbol, rounded to cents
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let rounded = self.round_cents();
        if rounded.is_negative() {
            format!("-{}{:.2}", symbol, rounded.0.abs())
        } else {
            format!("{}{:.2}", symbol, rounded.0.abs())
        }
    }
}

fn split_sign(s: &str) -> (bool, &str) {
    if let Some(stripped) = s.strip_prefix('-') {
        (true, stripped.trim_start())
    } else if let Some(stripped) = s.strip_prefix('+') {
        (false, stripped.trim_start())
    } else {
        (false, s)
    }
}

fn strip_currency(s: &str) -> &str {
    for marker in ["S/.", "S/", "$"] {
        if let Some(stripped) = s.strip_prefix(marker) {
            return stripped.trim_start();
        }
    }
    s
}

/// Longest prefix shaped like `digits[.digits][e[+-]digits]` with at least one
/// digit, split into mantissa and exponent
fn numeric_prefix(s: &str) -> Option<(&str, Option<&str>)> {
    let bytes = s.as_bytes();
    let mut end = 0;
    let mut digits = 0;

    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        digits += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
            digits += 1;
        }
    }
    if digits == 0 {
        return None;
    }
    let mantissa = &s[..end];

    // Exponent only counts when digits follow it
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            return Some((mantissa, Some(&s[end + 1..exp_end])));
        }
    }

    Some((mantissa, None))
}

/// Parse `digits[.digits]`; only overflow can fail, and it saturates
fn parse_mantissa(mantissa: &str) -> Decimal {
    let mantissa = mantissa.trim_end_matches('.');
    let normalized = if mantissa.starts_with('.') {
        format!("0{}", mantissa)
    } else {
        mantissa.to_string()
    };
    Decimal::from_str(&normalized).unwrap_or(Decimal::MAX)
}

fn apply_exponent(mut value: Decimal, exponent: &str) -> Decimal {
    if value.is_zero() {
        return value;
    }

    let (shrink, digits) = match exponent.strip_prefix('-') {
        Some(digits) => (true, digits),
        None => (false, exponent.trim_start_matches('+')),
    };
    let power = digits
        .parse::<u32>()
        .unwrap_or(MAX_EXPONENT)
        .min(MAX_EXPONENT);

    for _ in 0..power {
        value = if shrink {
            value.checked_div(Decimal::TEN).unwrap_or(Decimal::ZERO)
        } else {
            match value.checked_mul(Decimal::TEN) {
                Some(next) => next,
                None => return Decimal::MAX,
            }
        };
    }
    value
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self.round_cents();
        if rounded.is_negative() {
            write!(f, "-{:.2}", rounded.0.abs())
        } else {
            write!(f, "{:.2}", rounded.0.abs())
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.saturating_add(other)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        *self = self.saturating_add(other);
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self.saturating_sub(other)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: '{}'", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
