//! Block comments, `[* ... *]`. A comment may span several lines; the scanner discards
//! it like whitespace.

use nom::{
    bytes::complete::{tag, take_until},
    combinator::recognize,
    error::context,
    sequence::delimited,
};

use super::token::ParserResult;

/// Recognizes the COMMENT rule: `[*` up to and including the first `*]`.
///
/// Comments may span lines and do not nest. An unterminated comment does not match.
#[tracing::instrument(level = "trace", skip(input))]
pub fn parse_comment(input: &str) -> ParserResult<&str> {
    context(
        "block comment",
        recognize(delimited(tag("[*"), take_until("*]"), tag("*]"))),
    )(input)
}
