//! # ratlex: a tokenizer for a small procedural language
//!
//! ratlex turns source text into a stream of classified tokens for a downstream parser.
//! The language has keywords (`if`, `fi`, `while`, `function`, ...), identifiers, integer
//! and real literals, `=` assignment, arithmetic and comparison operators, the delimiters
//! `; { } , ( )`, and `[* ... *]` comments.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Source Files → Batch → Tokenizer → Report
//! ```
//!
//! * [`tokenizer`]: the lexical rules and the longest-match scan loop
//! * [`report`]: the fixed-width token report
//! * [`batch`]: per-file processing with failure isolation
//! * [`config`]: serde-backed settings for reports and batches
//! * [`error`]: the crate-level error type
//!
//! ## Usage Example
//!
//! ```rust
//! use ratlex::{tokenize, Token, TokenKind};
//!
//! let tokens = tokenize("a <= b").unwrap();
//! assert_eq!(
//!     tokens.into_vec(),
//!     vec![
//!         Token::new(TokenKind::Identifier, "a"),
//!         Token::new(TokenKind::Operator, "<="),
//!         Token::new(TokenKind::Identifier, "b"),
//!     ]
//! );
//! ```

pub mod batch;
pub mod config;
pub mod error;
pub mod report;
pub mod tokenizer;

// Re-exports
pub use error::*;
pub use tokenizer::{
    token::{LexError, Token, TokenKind, TokenStream, Tokenizer},
    tokenize,
};
