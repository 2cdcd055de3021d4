use nom::{
    character::complete::{char, digit1, satisfy},
    combinator::{not, peek, recognize},
    error::context,
    sequence::{terminated, tuple},
};

use super::{keyword::is_word_char, token::ParserResult};

// Numbers are bounded as whole words: `12abc` is not an integer followed by an identifier.
fn word_boundary(input: &str) -> ParserResult<()> {
    not(peek(satisfy(is_word_char)))(input)
}

/// Recognizes the INTEGER rule: one or more digits.
#[tracing::instrument(level = "trace", skip(input))]
pub fn parse_integer(input: &str) -> ParserResult<&str> {
    context("integer literal", terminated(digit1, word_boundary))(input)
}

/// Recognizes the REAL rule: digits, a decimal point, digits.
#[tracing::instrument(level = "trace", skip(input))]
pub fn parse_real(input: &str) -> ParserResult<&str> {
    context(
        "real literal",
        terminated(
            recognize(tuple((digit1, char('.'), digit1))),
            word_boundary,
        ),
    )(input)
}
