use std::{
    collections::HashMap,
    ops::{BitAnd, BitOr, BitXor, Not},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::error::BindingError;

/// Variable bindings supplied by the caller of the evaluator.
///
/// Names are case-sensitive and map to exactly one [`Bit`].
pub type Bindings = HashMap<String, Bit>;

/// One of the two logic values.
///
/// All evaluation results and variable bindings are bits. A bit displays and
/// serializes as the number `0` or `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Bit {
    /// Logical false.
    Zero,
    /// Logical true.
    One,
}

impl Bit {
    /// Returns `true` for [`Bit::One`].
    #[must_use]
    pub const fn is_set(self) -> bool {
        matches!(self, Self::One)
    }
}

impl From<bool> for Bit {
    fn from(value: bool) -> Self {
        if value { Self::One } else { Self::Zero }
    }
}

impl From<Bit> for bool {
    fn from(bit: Bit) -> Self {
        bit.is_set()
    }
}

impl From<Bit> for u8 {
    fn from(bit: Bit) -> Self {
        match bit {
            Bit::Zero => 0,
            Bit::One => 1,
        }
    }
}

impl TryFrom<u8> for Bit {
    type Error = BindingError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Zero),
            1 => Ok(Self::One),
            other => Err(BindingError::InvalidBit { text: other.to_string() }),
        }
    }
}

impl FromStr for Bit {
    type Err = BindingError;

    /// Parses `"0"` or `"1"`, ignoring surrounding whitespace.
    ///
    /// # Example
    /// ```
    /// use boolcalc::interpreter::value::Bit;
    ///
    /// assert_eq!(" 1 ".parse::<Bit>().unwrap(), Bit::One);
    /// assert!("2".parse::<Bit>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "0" => Ok(Self::Zero),
            "1" => Ok(Self::One),
            other => Err(BindingError::InvalidBit { text: other.to_string() }),
        }
    }
}

impl std::fmt::Display for Bit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", u8::from(*self))
    }
}

impl Not for Bit {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            Self::Zero => Self::One,
            Self::One => Self::Zero,
        }
    }
}

impl BitAnd for Bit {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self::from(self.is_set() && rhs.is_set())
    }
}

impl BitOr for Bit {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::from(self.is_set() || rhs.is_set())
    }
}

impl BitXor for Bit {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self::Output {
        Self::from(self != rhs)
    }
}
