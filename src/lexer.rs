use miette::{Diagnostic, SourceSpan};
use num::BigInt;
use std::iter::Peekable;
use std::str::CharIndices;

mod token;

pub use token::{Token, TokenSpan};

pub struct Lexer<'a> {
    source: SourceIterator<'a>,
}

impl<'a> Lexer<'a> {
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Self {
            source: SourceIterator {
                inner: source.char_indices().peekable(),
                offset: 0,
            },
        }
    }

    fn lex_text(&mut self, start: usize) -> Result<TokenSpan, Error> {
        let mut buf = String::new();
        #[allow(clippy::while_let_on_iterator)]
        while let Some(next_ch) = self.source.next() {
            match next_ch {
                '\\' => match self.source.next() {
                    Some('n') => buf.push('\n'),
                    Some('r') => buf.push('\r'),
                    Some('t') => buf.push('\t'),
                    Some('0') => buf.push('\0'),
                    Some('\\') => buf.push('\\'),
                    Some('"') => buf.push('"'),
                    Some(other) => {
                        let escape_start = self.source.offset - other.len_utf8() - 1;
                        return Err(Error::InvalidEscapeSequence {
                            sequence: format!("\\{other}"),
                            span: self.source.span_from(escape_start),
                        });
                    }
                    None => {
                        return Err(Error::UnterminatedText {
                            span: self.source.span_from(start),
                        });
                    }
                },
                '"' => {
                    return Ok(TokenSpan {
                        token: Token::Text(buf),
                        span: self.source.span_from(start),
                    });
                }
                _ => buf.push(next_ch),
            }
        }

        Err(Error::UnterminatedText {
            span: self.source.span_from(start),
        })
    }

    fn lex_number(&mut self, start: usize, first: char) -> Result<TokenSpan, Error> {
        let mut buf = String::new();
        buf.push(first);

        if first == '-' && !self.source.peek_one().is_some_and(|c| c.is_ascii_digit()) {
            return Err(Error::UnexpectedCharacter {
                char: '-',
                span: self.source.span_from(start),
            });
        }

        let mut float = false;
        while let Some(next_char) = self.source.peek_one() {
            match next_char {
                c if c.is_ascii_digit() => {
                    self.source.next();
                    buf.push(c);
                }
                '_' => {
                    // underscores are separators for readable numbers
                    self.source.next();
                }
                '.' if !float => {
                    float = true;
                    self.source.next();
                    buf.push('.');
                }
                _ => break,
            }
        }

        let token = if float {
            match buf.parse::<f64>() {
                Ok(num) => Token::Float64(num),
                Err(_) => {
                    return Err(Error::InvalidFloat {
                        string: buf,
                        span: self.source.span_from(start),
                    });
                }
            }
        } else if let Ok(num) = buf.parse::<i64>() {
            Token::Int64(num)
        } else {
            let num = buf
                .parse::<BigInt>()
                .expect("a signed digit sequence is always a valid BigInt");
            Token::BigInt(num)
        };

        Ok(TokenSpan {
            token,
            span: self.source.span_from(start),
        })
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<TokenSpan, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        'iterator: while let Some(char) = self.source.next() {
            let start = self.source.offset - char.len_utf8();
            let next = self.source.peek_one();

            // Exclude // comments
            if matches!((char, next), ('/', Some('/'))) {
                while let Some(ch) = self.source.peek_one() {
                    if ch == '\n' {
                        continue 'iterator;
                    }

                    // Just consume the characters
                    self.source.next();
                }

                continue 'iterator;
            }

            let token = match char {
                ' ' | '\t' | '\r' | '\n' => continue 'iterator,
                ',' => Token::Comma,
                '[' => Token::LeftSquareBracket,
                ']' => Token::RightSquareBracket,
                '"' => return Some(self.lex_text(start)),
                char if char.is_ascii_digit() || char == '-' => {
                    return Some(self.lex_number(start, char));
                }
                char if char.is_alphabetic() || char == '_' => {
                    let mut buf = String::new();
                    buf.push(char);
                    while let Some(next_char) = self.source.peek_one() {
                        if next_char.is_alphanumeric() || next_char == '_' {
                            buf.push(next_char);
                            self.source.next();
                        } else {
                            break;
                        }
                    }
                    Token::Word(buf)
                }
                char => {
                    return Some(Err(Error::UnexpectedCharacter {
                        char,
                        span: self.source.span_from(start),
                    }));
                }
            };

            return Some(Ok(TokenSpan {
                token,
                span: self.source.span_from(start),
            }));
        }

        None
    }
}

struct SourceIterator<'a> {
    inner: Peekable<CharIndices<'a>>,
    offset: usize,
}

impl SourceIterator<'_> {
    fn span_from(&self, start: usize) -> SourceSpan {
        (start, self.offset - start).into()
    }

    fn peek_one(&mut self) -> Option<char> {
        self.inner.peek().map(|&(_, ch)| ch)
    }
}

impl Iterator for SourceIterator<'_> {
    type Item = char;

    fn next(&mut self) -> Option<Self::Item> {
        let (index, ch) = self.inner.next()?;
        self.offset = index + ch.len_utf8();
        Some(ch)
    }
}

#[derive(thiserror::Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("invalid floating point literal '{string}'")]
    #[diagnostic(code(tally::lexer::invalid_float))]
    InvalidFloat {
        string: String,
        #[label("not a valid float")]
        span: SourceSpan,
    },

    #[error("unexpected character '{char}'")]
    #[diagnostic(
        code(tally::lexer::unexpected_character),
        help("values are numbers, bare words or double quoted text")
    )]
    UnexpectedCharacter {
        char: char,
        #[label("here")]
        span: SourceSpan,
    },

    #[error("unterminated text literal")]
    #[diagnostic(code(tally::lexer::unterminated_text), help("add a closing '\"'"))]
    UnterminatedText {
        #[label("starts here")]
        span: SourceSpan,
    },

    #[error("invalid escape sequence '{sequence}'")]
    #[diagnostic(code(tally::lexer::invalid_escape))]
    InvalidEscapeSequence {
        sequence: String,
        #[label("here")]
        span: SourceSpan,
    },
}
