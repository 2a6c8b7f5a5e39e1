//! Stored quantity values and form-input parsing.

use serde::{Deserialize, Serialize};
use stockroom_core::{DomainError, DomainResult};

use crate::status::{LOW_STOCK_THRESHOLD, StockStatus};

/// Quantity held by an inventory row.
///
/// Design intent is a non-negative unit count, but the update form forwards
/// whatever it parses, so a row can also hold a negative count or the
/// not-a-number sentinel produced by unparseable input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quantity {
    Units(i64),
    NotANumber,
}

impl Quantity {
    pub fn is_nan(&self) -> bool {
        matches!(self, Quantity::NotANumber)
    }

    /// Stock band of this quantity. `NotANumber` compares false against both
    /// zero and the threshold, so it lands in [`StockStatus::InStock`].
    pub fn status(&self) -> StockStatus {
        match self {
            Quantity::Units(n) => StockStatus::classify(*n),
            Quantity::NotANumber => StockStatus::InStock,
        }
    }

    /// Strictly between zero and the threshold (what the low-stock banner counts).
    pub fn is_low_stock(&self) -> bool {
        matches!(self, Quantity::Units(n) if *n > 0 && *n < LOW_STOCK_THRESHOLD)
    }

    /// Below the threshold, zero included (quantity cell rendered bold).
    pub fn is_emphasized(&self) -> bool {
        matches!(self, Quantity::Units(n) if *n < LOW_STOCK_THRESHOLD)
    }

    pub fn is_out_of_stock(&self) -> bool {
        matches!(self, Quantity::Units(0))
    }

    /// Parse form input the way a browser `parseInt(text, 10)` does.
    ///
    /// Leading whitespace is skipped, one optional sign is accepted, and the
    /// leading run of decimal digits is taken; anything after it is ignored.
    /// No digits yields `NotANumber`; a digit run beyond the `i64` range
    /// saturates to `i64::MAX` / `i64::MIN`. Never fails.
    pub fn parse_lenient(input: &str) -> Self {
        let trimmed = input.trim_start();
        let (negative, rest) = if let Some(rest) = trimmed.strip_prefix('-') {
            (true, rest)
        } else if let Some(rest) = trimmed.strip_prefix('+') {
            (false, rest)
        } else {
            (false, trimmed)
        };

        let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digits_len == 0 {
            return Self::NotANumber;
        }

        let digits = &rest[..digits_len];
        let parsed = if negative {
            format!("-{digits}").parse::<i64>()
        } else {
            digits.parse::<i64>()
        };
        match parsed {
            Ok(units) => Self::Units(units),
            Err(_) if negative => Self::Units(i64::MIN),
            Err(_) => Self::Units(i64::MAX),
        }
    }

    /// Parse form input, accepting only a whole non-negative decimal number
    /// (surrounding whitespace allowed).
    pub fn parse_strict(input: &str) -> DomainResult<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("quantity is required"));
        }
        if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::validation(format!(
                "quantity must be a whole non-negative number (got {trimmed:?})"
            )));
        }
        trimmed
            .parse::<i64>()
            .map(Self::Units)
            .map_err(|e| DomainError::validation(format!("quantity out of range: {e}")))
    }
}

impl From<i64> for Quantity {
    fn from(value: i64) -> Self {
        Self::Units(value)
    }
}

impl core::fmt::Display for Quantity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Quantity::Units(n) => write!(f, "{n}"),
            Quantity::NotANumber => f.write_str("NaN"),
        }
    }
}
