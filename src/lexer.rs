use std::fmt;

use crate::position::{Position, Span};
use crate::token::Token;

/// Classifies a lexer error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexErrorKind {
    /// Character that cannot start any token.
    IllegalCharacter(char),
    /// Numeric literal whose value does not fit the token's value type.
    NumberOutOfRange(String),
}

impl LexErrorKind {
    /// Fixed category name, the `{category}` slot of the rendered message.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::IllegalCharacter(_) => "Illegal Character",
            Self::NumberOutOfRange(_) => "Number Out Of Range",
        }
    }
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IllegalCharacter(ch) => write!(f, "'{ch}'"),
            Self::NumberOutOfRange(literal) => write!(f, "'{literal}'"),
        }
    }
}

/// Error produced during scanning.
///
/// Renders as the single-line message
/// `ERROR: {filename}:{line}:{column}: {category}: {description}`,
/// located at the span's *start* position.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("ERROR: {}: {}: {kind}", span.start, kind.category())]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
}

/// Tokenize an expression source string into a sequence of tokens.
///
/// `filename` tags every position for diagnostic rendering; nothing is
/// opened or read from disk.
///
/// # Errors
///
/// Returns `LexError` on the first character that cannot start a token,
/// or on an integer literal too large for a 64-bit value. An error means
/// no tokens were produced.
pub fn tokenize(filename: &str, input: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(filename, input).tokenize()
}

struct Lexer {
    chars: Vec<char>,
    pos: Position,
    current: Option<char>,
}

impl Lexer {
    fn new(filename: &str, input: &str) -> Self {
        let mut lexer = Self {
            chars: input.chars().collect(),
            pos: Position::start(filename, input),
            current: None,
        };
        lexer.advance();
        lexer
    }

    /// Step the cursor and reload the current character, leaving `None`
    /// as the end-of-input sentinel once the buffer is exhausted.
    fn advance(&mut self) {
        self.pos.advance(self.current);
        self.current = usize::try_from(self.pos.offset)
            .ok()
            .and_then(|idx| self.chars.get(idx))
            .copied();
    }

    fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        while let Some(ch) = self.current {
            match ch {
                // Newlines are not expression whitespace; they fall
                // through to the illegal-character arm below.
                ' ' | '\t' => self.advance(),
                '0'..='9' => tokens.push(self.scan_number()?),
                '+' => {
                    tokens.push(Token::Plus);
                    self.advance();
                }
                '-' => {
                    tokens.push(Token::Minus);
                    self.advance();
                }
                '*' => {
                    tokens.push(Token::Mul);
                    self.advance();
                }
                '/' => {
                    tokens.push(Token::Div);
                    self.advance();
                }
                '(' => {
                    tokens.push(Token::LParen);
                    self.advance();
                }
                ')' => {
                    tokens.push(Token::RParen);
                    self.advance();
                }
                _ => {
                    let start = self.pos.clone();
                    self.advance();
                    let end = self.pos.clone();
                    return Err(LexError {
                        kind: LexErrorKind::IllegalCharacter(ch),
                        span: Span { start, end },
                    });
                }
            }
        }

        Ok(tokens)
    }

    /// Scan a numeric literal starting at the current digit.
    ///
    /// Accepts digits and at most one decimal point. A second point ends
    /// the literal and stays unconsumed for the main loop, which rejects
    /// it. A trailing point is accepted: `3.` is the float 3.0.
    fn scan_number(&mut self) -> Result<Token, LexError> {
        let start = self.pos.clone();
        let mut literal = String::new();
        let mut seen_dot = false;

        while let Some(ch) = self.current {
            match ch {
                '0'..='9' => literal.push(ch),
                '.' if !seen_dot => {
                    seen_dot = true;
                    literal.push('.');
                }
                _ => break,
            }
            self.advance();
        }

        if seen_dot {
            return match literal.parse::<f64>() {
                Ok(value) => Ok(Token::Float(value)),
                Err(_) => Err(self.number_error(literal, start)),
            };
        }
        match literal.parse::<i64>() {
            Ok(value) => Ok(Token::Int(value)),
            Err(_) => Err(self.number_error(literal, start)),
        }
    }

    /// Out-of-range error spanning the consumed literal.
    fn number_error(&self, literal: String, start: Position) -> LexError {
        LexError {
            kind: LexErrorKind::NumberOutOfRange(literal),
            span: Span {
                start,
                end: self.pos.clone(),
            },
        }
    }
}
