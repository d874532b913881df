//! Lexer for a small arithmetic expression language.
//!
//! The scanner turns raw source text into a sequence of classified tokens,
//! tracking precise source positions for diagnostics. It is the front end
//! of what will grow into a full interpreter; parsing and evaluation are
//! later stages that consume the token sequence produced here.
//!
//! # Quick start
//!
//! ## Scan an expression
//!
//! ```
//! use calclex::{Token, tokenize};
//!
//! let tokens = tokenize("<repl>", "3 + 4 * 2").unwrap();
//! assert_eq!(
//!     tokens,
//!     vec![
//!         Token::Int(3),
//!         Token::Plus,
//!         Token::Int(4),
//!         Token::Mul,
//!         Token::Int(2),
//!     ]
//! );
//! ```
//!
//! ## Render a diagnostic
//!
//! ```
//! use calclex::tokenize;
//!
//! let err = tokenize("calc.txt", "5 & 2").unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "ERROR: calc.txt:1:2: Illegal Character: '&'",
//! );
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod lexer;
pub mod position;
pub mod token;

pub use lexer::{LexError, LexErrorKind, tokenize};
pub use position::{Position, Span};
pub use token::Token;
