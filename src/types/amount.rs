use crate::types::errors::AmountError;
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Decimal separator used by the Czech exports unless a profile says otherwise.
pub const DEFAULT_DECIMAL_SEPARATOR: char = ',';

/// A signed monetary value as posted on a statement line.
///
/// Amounts keep the scale they were written with (`"100,00"` stays `100.00`),
/// while equality compares numeric value only.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Amount(Decimal);

impl Amount {
    pub fn zero() -> Self {
        Amount(Decimal::ZERO)
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    #[cfg(test)]
    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn checked_add(self, rhs: Amount) -> Option<Amount> {
        self.0.checked_add(rhs.0).map(Amount)
    }

    /// Canonical text without trailing zeros, used wherever two spellings of the
    /// same value must produce the same bytes.
    pub fn canonical(&self) -> String {
        self.0.normalize().to_string()
    }

    /// Parses a bank-formatted cell such as `"-1 234,56 Kč"`.
    ///
    /// The decimal separator becomes a period, then whitespace and alphabetic
    /// characters (currency suffixes, non-breaking spaces) are dropped. An empty
    /// cell is zero, never missing.
    pub fn parse_localized(value: &str, decimal_separator: char) -> Result<Self, AmountError> {
        let mut cleaned = String::with_capacity(value.len());

        for character in value.chars() {
            if character == decimal_separator {
                cleaned.push('.');
            } else if !character.is_whitespace() && !character.is_alphabetic() {
                cleaned.push(character);
            }
        }

        if cleaned.is_empty() {
            return Ok(Amount::zero());
        }

        Decimal::from_str(&cleaned).map(Amount).map_err(|error| {
            AmountError::InvalidFormat(format!("Value {value:?} is not a decimal number: {error}"))
        })
    }
}

impl Display for Amount {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Amount::parse_localized(value, DEFAULT_DECIMAL_SEPARATOR)
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
