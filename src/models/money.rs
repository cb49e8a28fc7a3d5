//! Fixed-point money amounts.
//!
//! Receipts carry prices and totals as decimal strings (`"35.35"`). They are
//! parsed once into whole cents so every rule compares integers.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

const CENTS_PER_DOLLAR: u64 = 100;

/// Reason a decimal string was rejected as a money amount.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseMoneyError {
    #[error("amount is empty")]
    Empty,

    #[error("amount must start with a digit")]
    MissingWholePart,

    #[error("unexpected character '{0}' in amount")]
    InvalidCharacter(char),

    #[error("amount has no digits after the decimal point")]
    MissingFraction,

    #[error("amount has more than two decimal places")]
    TooPrecise,

    #[error("amount is too large")]
    Overflow,
}

/// A non-negative amount of money in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub const fn cents(self) -> u64 {
        self.0
    }

    /// True when the amount has no cents component.
    pub fn is_whole_dollars(self) -> bool {
        self.0 % CENTS_PER_DOLLAR == 0
    }

    /// True when the amount is an exact multiple of `cents`.
    pub fn is_multiple_of(self, cents: u64) -> bool {
        cents != 0 && self.0 % cents == 0
    }

    /// One fifth of the amount in whole dollars, rounded up.
    pub fn ceil_fifth(self) -> u64 {
        self.0.div_ceil(5 * CENTS_PER_DOLLAR)
    }
}

impl FromStr for Money {
    type Err = ParseMoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseMoneyError::Empty);
        }

        let (whole, fraction) = match s.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (s, None),
        };

        if whole.is_empty() {
            return Err(ParseMoneyError::MissingWholePart);
        }
        if let Some(c) = whole.chars().find(|c| !c.is_ascii_digit()) {
            return Err(ParseMoneyError::InvalidCharacter(c));
        }

        let fraction_cents = match fraction {
            None => 0,
            Some("") => return Err(ParseMoneyError::MissingFraction),
            Some(digits) => {
                if let Some(c) = digits.chars().find(|c| !c.is_ascii_digit()) {
                    return Err(ParseMoneyError::InvalidCharacter(c));
                }
                match digits.len() {
                    1 => u64::from(digits.as_bytes()[0] - b'0') * 10,
                    2 => digits.parse::<u64>().map_err(|_| ParseMoneyError::Overflow)?,
                    _ => return Err(ParseMoneyError::TooPrecise),
                }
            }
        };

        let dollars: u64 = whole.parse().map_err(|_| ParseMoneyError::Overflow)?;
        dollars
            .checked_mul(CENTS_PER_DOLLAR)
            .and_then(|cents| cents.checked_add(fraction_cents))
            .map(Money)
            .ok_or(ParseMoneyError::Overflow)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{:02}",
            self.0 / CENTS_PER_DOLLAR,
            self.0 % CENTS_PER_DOLLAR
        )
    }
}
