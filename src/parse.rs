use miette::{Diagnostic, SourceSpan};

use crate::lexer::{Lexer, Token, TokenSpan};
use crate::scalar::{Int, Scalar};

/// Reads a textual sequence into scalar values.
///
/// Values are separated by whitespace and/or commas and may be wrapped in a
/// single pair of square brackets. A bracket anywhere a value is expected
/// would start a nested sequence, which is not a scalar and is rejected.
pub fn parse_str(source: &str) -> Result<Vec<Scalar>, Error> {
    let mut values = Vec::new();
    let mut open: Option<SourceSpan> = None;
    let mut closed = false;
    let mut first = true;

    for result in Lexer::new(source) {
        let TokenSpan { token, span } = result?;

        if closed {
            return Err(Error::TrailingContent { span });
        }

        match token {
            Token::Comma => {}
            Token::LeftSquareBracket if first => open = Some(span),
            Token::LeftSquareBracket => return Err(Error::NestedSequence { span }),
            Token::RightSquareBracket => {
                if open.is_none() {
                    return Err(Error::UnbalancedBracket { span });
                }
                closed = true;
            }
            Token::Int64(i) => values.push(Scalar::from(i)),
            Token::BigInt(b) => values.push(Scalar::from(Int::from(b))),
            Token::Float64(f) => values.push(Scalar::from(f)),
            Token::Text(text) | Token::Word(text) => values.push(Scalar::from(text)),
        }

        first = false;
    }

    if let (Some(span), false) = (open, closed) {
        return Err(Error::UnclosedBracket { span });
    }

    Ok(values)
}

#[derive(thiserror::Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Lexer(#[from] crate::lexer::Error),

    #[error("nested sequence")]
    #[diagnostic(
        code(tally::parse::nested_sequence),
        help("sequences hold scalar values only, flatten the input")
    )]
    NestedSequence {
        #[label("a sequence cannot contain another sequence")]
        span: SourceSpan,
    },

    #[error("unbalanced ']'")]
    #[diagnostic(code(tally::parse::unbalanced_bracket))]
    UnbalancedBracket {
        #[label("no matching '['")]
        span: SourceSpan,
    },

    #[error("unclosed '['")]
    #[diagnostic(code(tally::parse::unclosed_bracket), help("add a closing ']'"))]
    UnclosedBracket {
        #[label("opened here")]
        span: SourceSpan,
    },

    #[error("unexpected content after ']'")]
    #[diagnostic(code(tally::parse::trailing_content))]
    TrailingContent {
        #[label("sequence already closed")]
        span: SourceSpan,
    },
}
