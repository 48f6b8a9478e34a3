use miette::SourceSpan;
use num::BigInt;
use std::fmt;

/// A scalar literal or structural symbol in sequence input.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Double quoted text
    Text(String),
    /// Bare word, also a text value
    Word(String),
    Int64(i64),
    BigInt(BigInt),
    Float64(f64),
    Comma,
    LeftSquareBracket,
    RightSquareBracket,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TokenSpan {
    pub token: Token,
    pub span: SourceSpan,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) | Self::Word(text) => write!(f, "{text}"),
            Self::Int64(n) => write!(f, "{n}"),
            Self::BigInt(n) => write!(f, "{n}"),
            Self::Float64(n) => {
                let mut buffer = ryu::Buffer::new();
                write!(f, "{}", buffer.format(*n))
            }
            Self::Comma => write!(f, ","),
            Self::LeftSquareBracket => write!(f, "["),
            Self::RightSquareBracket => write!(f, "]"),
        }
    }
}
