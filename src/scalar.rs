use std::fmt;

pub mod int;
pub mod num;

pub use self::int::Int;
pub use self::num::Number;

/// A single value in a sequence. Keys compare strictly by type and value,
/// the number `1` and the text `"1"` are always distinct.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Scalar {
    Number(Number),
    Text(String),
}

impl Scalar {
    /// A view that renders the scalar the way it appears in sequence input,
    /// with text quoted and escaped.
    #[must_use]
    pub fn literal(&self) -> Literal<'_> {
        Literal(self)
    }
}

// -----------------------------------------------------
// Into scalar
// -----------------------------------------------------

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Self::Number(Number::from(value))
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Self::Number(Number::from(value))
    }
}

impl From<Int> for Scalar {
    fn from(value: Int) -> Self {
        Self::Number(Number::Int(value))
    }
}

impl From<Number> for Scalar {
    fn from(value: Number) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(text) => write!(f, "{text}"),
        }
    }
}

/// Quoted-and-escaped rendering of a scalar, see [`Scalar::literal`].
pub struct Literal<'a>(&'a Scalar);

impl fmt::Display for Literal<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Scalar::Number(n) => write!(f, "{n}"),
            Scalar::Text(text) => {
                write!(f, "\"")?;
                for ch in text.chars() {
                    match ch {
                        '\n' => write!(f, "\\n")?,
                        '\r' => write!(f, "\\r")?,
                        '\t' => write!(f, "\\t")?,
                        '\0' => write!(f, "\\0")?,
                        '\\' => write!(f, "\\\\")?,
                        '"' => write!(f, "\\\"")?,
                        ch => write!(f, "{ch}")?,
                    }
                }
                write!(f, "\"")
            }
        }
    }
}
