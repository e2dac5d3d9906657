use std::fmt;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Overflow error while applying {0} operation on {1} and {2}")]
    Overflow(&'static str, Money, Money),

    #[error("Underflow error while applying {0} operation on {1} and {2}")]
    Underflow(&'static str, Money, Money),

    #[error("Money parse error: {0}, {1:?}")]
    Parse(&'static str, String),
}

/// Amount of money in minor units (cents)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(pub i64);

impl Money {
    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(i64::MAX);
    pub const MIN: Self = Self(i64::MIN);

    const SCALE: i64 = 100;
    const DECIMALS: usize = 2;

    /// Parses a decimal string such as `"12"`, `"12.5"` or `"-0.05"` into cents.
    /// More than two fraction digits is an error rather than a silent truncation.
    pub fn parse(string: &str) -> Result<Self, MoneyError> {
        let (negative, unsigned) = match string.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, string),
        };

        let mut parts = unsigned.split('.');

        let whole = parts.next().unwrap_or_default();
        let fraction = parts.next().unwrap_or_default();

        if parts.next().is_some() {
            return Err(MoneyError::Parse("Too many decimal points", string.to_string()));
        }

        if whole.is_empty() && fraction.is_empty() {
            return Err(MoneyError::Parse("No digits", string.to_string()));
        }

        if fraction.len() > Self::DECIMALS {
            return Err(MoneyError::Parse("Too many decimal places", string.to_string()));
        }

        let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
        if !all_digits(whole) || !all_digits(fraction) {
            return Err(MoneyError::Parse("Invalid digit", string.to_string()));
        }

        let whole: i64 = if whole.is_empty() {
            0
        } else {
            whole
                .parse()
                .map_err(|_| MoneyError::Parse("Value out of range", string.to_string()))?
        };

        let fraction: i64 = format!("{:0<width$}", fraction, width = Self::DECIMALS)
            .parse()
            .map_err(|_| MoneyError::Parse("Invalid fraction", string.to_string()))?;

        let cents = whole
            .checked_mul(Self::SCALE)
            .and_then(|c| c.checked_add(fraction))
            .ok_or_else(|| MoneyError::Parse("Value out of range", string.to_string()))?;

        return Ok(Money(if negative { -cents } else { cents }));
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub fn checked_add(self, other: Self) -> Result<Self, MoneyError> {
        return match self.0.checked_add(other.0) {
            Some(sum) => Ok(Money(sum)),
            None if other.0 > 0 => Err(MoneyError::Overflow("add", self, other)),
            None => Err(MoneyError::Underflow("add", self, other)),
        };
    }

    pub fn checked_sub(self, other: Self) -> Result<Self, MoneyError> {
        return match self.0.checked_sub(other.0) {
            Some(diff) => Ok(Money(diff)),
            None if other.0 < 0 => Err(MoneyError::Overflow("sub", self, other)),
            None => Err(MoneyError::Underflow("sub", self, other)),
        };
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let scale = Self::SCALE as u64;

        return write!(f, "{sign}{}.{:02}", abs / scale, abs % scale);
    }
}
