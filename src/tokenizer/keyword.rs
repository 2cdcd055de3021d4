//! # Keyword and Identifier Words
//!
//! This module defines the reserved words of the language and the recognizers for the
//! two word-shaped rules: KEYWORD and IDENTIFIER.
//!
//! ## Boundary Handling
//!
//! A keyword only matches as a whole word. `if` is a keyword, while `iffy`, `if2` and
//! `if_` are not: the word is read up to the first non-word character and only then
//! compared against the keyword set. Identifiers are plain ASCII (`[a-zA-Z][a-zA-Z0-9]*`),
//! so a keyword spelling always matches IDENTIFIER with the same length and the rule
//! order decides in favour of KEYWORD.

use std::str::FromStr;

use nom::{
    bytes::complete::{take_while, take_while1},
    character::complete::satisfy,
    combinator::{map_res, recognize},
    error::context,
    sequence::pair,
};

use super::token::ParserResult;

/// The reserved words of the language.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::EnumString,
    strum::Display,
    strum::EnumIter,
    strum::AsRefStr,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum Keyword {
    If,
    Else,
    /// Closes an `if` statement.
    Fi,
    While,
    Return,
    /// Reads a value from standard input.
    Get,
    /// Writes a value to standard output.
    Put,
    Integer,
    Boolean,
    Real,
    Function,
}

impl Keyword {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// Returns true for characters that continue a word: letters, digits and `_`.
pub(crate) fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Parses a keyword as a whole word.
///
/// ```
/// # use ratlex::tokenizer::keyword::{parse_keyword, Keyword};
/// let (rest, keyword) = parse_keyword("while (x)").unwrap();
/// assert_eq!(keyword, Keyword::While);
/// assert_eq!(rest, " (x)");
///
/// assert!(parse_keyword("whiles").is_err());
/// ```
pub fn parse_keyword(input: &str) -> ParserResult<Keyword> {
    context(
        "keyword",
        map_res(take_while1(is_word_char), |word: &str| {
            Keyword::from_str(word)
        }),
    )(input)
}

/// Recognizes the KEYWORD rule, returning the matched spelling.
pub fn recognize_keyword(input: &str) -> ParserResult<&str> {
    recognize(parse_keyword)(input)
}

/// Recognizes the IDENTIFIER rule: one letter followed by letters or digits.
pub fn parse_identifier(input: &str) -> ParserResult<&str> {
    context(
        "identifier",
        recognize(pair(
            satisfy(|c: char| c.is_ascii_alphabetic()),
            take_while(|c: char| c.is_ascii_alphanumeric()),
        )),
    )(input)
}
