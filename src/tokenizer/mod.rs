//! # Tokenizer Component
//!
//! The Tokenizer performs lexical analysis of source text, turning it into a stream of
//! classified tokens for a downstream parser.
//!
//! ## Design Principles
//!
//! * **Explicit Longest Match**: every rule is tried at the current position and the
//!   longest match wins, with ties broken by rule order (see [`rule`]).
//! * **Fail Fast**: an unrecognized character stops tokenization with a
//!   [`LexError`](token::LexError); nothing is skipped silently.
//! * **Stateless**: a [`Tokenizer`](token::Tokenizer) holds only the static rule table and
//!   can be shared across threads and inputs.
//! * **Lossless Scanning**: the [`scanner`] yields whitespace and comments as segments, so
//!   the original text can always be reconstructed.
//!
//! ## Component Structure
//!
//! * [`token`]: token types, the tokenizer and its error type
//! * [`rule`]: the ordered rule table and longest-match selection
//! * [`scanner`]: the lazy scan loop
//! * [`keyword`]: keyword and identifier words
//! * [`literal`]: integer and real numbers
//! * [`symbol`]: assignment, operators and delimiters
//! * [`comment`]: `[* ... *]` comments
//! * [`whitespace`]: spaces, tabs and line breaks
//!
//! ## Usage Example
//!
//! ```rust
//! use ratlex::tokenizer::token::{Token, TokenKind, Tokenizer};
//!
//! let tokenizer = Tokenizer::new();
//! let tokens = tokenizer.tokenize("[* ignored *] y").unwrap();
//! assert_eq!(tokens.into_vec(), vec![Token::new(TokenKind::Identifier, "y")]);
//! ```

pub mod comment;
pub mod keyword;
pub mod literal;
pub mod rule;
pub mod scanner;
pub mod symbol;
pub mod token;
pub mod whitespace;

use token::{LexResult, TokenStream, Tokenizer};

/// Tokenizes `input` with the standard rules.
pub fn tokenize(input: &str) -> LexResult<TokenStream> {
    Tokenizer::new().tokenize(input)
}
