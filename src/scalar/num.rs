use std::fmt;
use std::hash::{Hash, Hasher};

use ordered_float::OrderedFloat;

use super::int::Int;

/// Numeric scalar.
#[derive(Debug, Clone)]
pub enum Number {
    Int(Int),
    Float(f64),
}

impl From<Int> for Number {
    fn from(value: Int) -> Self {
        Self::Int(value)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Int(Int::Int64(value))
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        // Int and Float never compare equal, a flexible 1 == 1.0 would make
        // Number unusable as a hash key.
        match (self, other) {
            (Self::Int(left), Self::Int(right)) => left.eq(right),
            (Self::Float(left), Self::Float(right)) => {
                OrderedFloat(*left).eq(&OrderedFloat(*right))
            }
            _ => false,
        }
    }
}

impl Eq for Number {}

impl Hash for Number {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Int(i) => {
                state.write_u8(1);
                i.hash(state);
            }
            Self::Float(f) => {
                state.write_u8(2);
                OrderedFloat(*f).hash(state);
            }
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(value) => {
                let mut buffer = ryu::Buffer::new();
                write!(f, "{}", buffer.format(*value))
            }
        }
    }
}
