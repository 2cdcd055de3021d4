//! # Whitespace Handling
//!
//! Whitespace separates tokens and is discarded by the tokenizer. A single WHITESPACE match
//! covers the whole run of spaces, tabs and line breaks, so a blank region is one segment
//! no matter how many lines it spans. Carriage returns are accepted so that CRLF sources
//! tokenize the same way as LF sources.

use nom::{bytes::complete::take_while1, error::context};

use super::token::ParserResult;

pub(crate) fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// Recognizes the WHITESPACE rule.
///
/// ```
/// # use ratlex::tokenizer::whitespace::parse_whitespace;
/// let (rest, ws) = parse_whitespace(" \t\n x").unwrap();
/// assert_eq!(ws, " \t\n ");
/// assert_eq!(rest, "x");
/// ```
pub fn parse_whitespace(input: &str) -> ParserResult<&str> {
    context("whitespace expected", take_while1(is_whitespace))(input)
}
