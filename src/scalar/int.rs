use num::{BigInt, ToPrimitive};
use std::fmt;

/// Integer scalar. `BigInt` is only used for values that do not fit `i64`,
/// the constructors normalize so derived equality and hashing never see the
/// same number in both variants.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Int {
    Int64(i64),
    BigInt(BigInt),
}

impl From<i64> for Int {
    fn from(value: i64) -> Self {
        Self::Int64(value)
    }
}

impl From<BigInt> for Int {
    fn from(value: BigInt) -> Self {
        match value.to_i64() {
            Some(small) => Self::Int64(small),
            None => Self::BigInt(value),
        }
    }
}

impl fmt::Display for Int {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int64(i) => write!(f, "{i}"),
            Self::BigInt(b) => write!(f, "{b}"),
        }
    }
}
