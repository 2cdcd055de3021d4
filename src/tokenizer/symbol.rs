//! # Symbol Token Handling
//!
//! This module defines the symbols recognized by the language and the recognizers for
//! the three symbol rules:
//!
//! * ASSIGN: a single `=`
//! * [`Operator`]: `+ - * / < > !`, each optionally followed by `=`
//! * [`Delimiter`]: `; { } , ( )`
//!
//! ## Parsing Strategy
//!
//! [`parse_operator`] tries two-character operators before their one-character prefixes, so
//! `<=` is never split into `<` and `=`. There is no `==` operator: it lexes as two ASSIGN
//! tokens.

use std::fmt;

use nom::{
    branch::alt,
    bytes::complete::tag,
    combinator::{recognize, value},
    error::context,
};

use super::token::ParserResult;

/// Represents operators.
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
    strum::IntoStaticStr,
)]
pub enum Operator {
    /// Addition operator (`+`)
    #[strum(serialize = "+")]
    Plus,
    /// Subtraction operator (`-`)
    #[strum(serialize = "-")]
    Minus,
    /// Multiplication operator (`*`)
    #[strum(serialize = "*")]
    Multiply,
    /// Division operator (`/`)
    #[strum(serialize = "/")]
    Divide,
    /// Less than comparison operator (`<`)
    #[strum(serialize = "<")]
    Less,
    /// Greater than comparison operator (`>`)
    #[strum(serialize = ">")]
    Greater,
    /// Logical NOT operator (`!`)
    #[strum(serialize = "!")]
    Not,
    #[strum(serialize = "+=")]
    PlusEqual,
    #[strum(serialize = "-=")]
    MinusEqual,
    #[strum(serialize = "*=")]
    MultiplyEqual,
    #[strum(serialize = "/=")]
    DivideEqual,
    /// Less than or equal comparison operator (`<=`)
    #[strum(serialize = "<=")]
    LessEqual,
    /// Greater than or equal comparison operator (`>=`)
    #[strum(serialize = ">=")]
    GreaterEqual,
    /// Inequality comparison operator (`!=`)
    #[strum(serialize = "!=")]
    NotEqual,
}

impl Operator {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// Represents delimiters.
///
/// `Display` is implemented by hand: strum's `Display` derive rejects a `}` spelling.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
pub enum Delimiter {
    /// Semicolon (`;`) for terminating statements
    #[strum(serialize = ";")]
    Semicolon,
    /// Opening brace (`{`) for blocks
    #[strum(serialize = "{")]
    OpenBrace,
    /// Closing brace (`}`) for blocks
    #[strum(serialize = "}")]
    CloseBrace,
    /// Comma (`,`) for separating parameters and arguments
    #[strum(serialize = ",")]
    Comma,
    /// Opening parenthesis (`(`)
    #[strum(serialize = "(")]
    OpenParen,
    /// Closing parenthesis (`)`)
    #[strum(serialize = ")")]
    CloseParen,
}

impl Delimiter {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Recognizes the ASSIGN rule.
pub fn parse_assign(input: &str) -> ParserResult<&str> {
    context("assign", tag("="))(input)
}

/// Parses an operator token from the input string.
///
/// ```
/// # use ratlex::tokenizer::symbol::{parse_operator, Operator};
/// let (rest, op) = parse_operator("<= b").unwrap();
/// assert_eq!(op, Operator::LessEqual);
/// assert_eq!(rest, " b");
/// ```
pub fn parse_operator(input: &str) -> ParserResult<Operator> {
    context(
        "operator",
        alt((
            // Two-character operators (matched first for longest-match)
            value(Operator::PlusEqual, tag("+=")),
            value(Operator::MinusEqual, tag("-=")),
            value(Operator::MultiplyEqual, tag("*=")),
            value(Operator::DivideEqual, tag("/=")),
            value(Operator::LessEqual, tag("<=")),
            value(Operator::GreaterEqual, tag(">=")),
            value(Operator::NotEqual, tag("!=")),
            // Single-character operators
            value(Operator::Plus, tag("+")),
            value(Operator::Minus, tag("-")),
            value(Operator::Multiply, tag("*")),
            value(Operator::Divide, tag("/")),
            value(Operator::Less, tag("<")),
            value(Operator::Greater, tag(">")),
            value(Operator::Not, tag("!")),
        )),
    )(input)
}

/// Recognizes the OPERATOR rule, returning the matched spelling.
pub fn recognize_operator(input: &str) -> ParserResult<&str> {
    recognize(parse_operator)(input)
}

/// Parses a delimiter token from the input string.
pub fn parse_delimiter(input: &str) -> ParserResult<Delimiter> {
    context(
        "delimiter",
        alt((
            value(Delimiter::Semicolon, tag(";")),
            value(Delimiter::OpenBrace, tag("{")),
            value(Delimiter::CloseBrace, tag("}")),
            value(Delimiter::Comma, tag(",")),
            value(Delimiter::OpenParen, tag("(")),
            value(Delimiter::CloseParen, tag(")")),
        )),
    )(input)
}

/// Recognizes the DELIMITER rule, returning the matched spelling.
pub fn recognize_delimiter(input: &str) -> ParserResult<&str> {
    recognize(parse_delimiter)(input)
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_operators() {
        let test_cases = [
            ("+", Operator::Plus),
            ("-", Operator::Minus),
            ("*", Operator::Multiply),
            ("/", Operator::Divide),
            ("<", Operator::Less),
            (">", Operator::Greater),
            ("!", Operator::Not),
            ("<=", Operator::LessEqual),
            (">=", Operator::GreaterEqual),
            ("!=", Operator::NotEqual),
            ("+=", Operator::PlusEqual),
        ];

        for (input, expected) in test_cases.iter() {
            let (rest, op) = parse_operator(input).unwrap();
            assert_eq!(op, *expected);
            assert_eq!(rest, "");
        }
    }

    #[test]
    fn test_operator_precedence() {
        // ">=" must not be read as ">"
        let (rest, op) = parse_operator(">=").unwrap();
        assert_eq!(op, Operator::GreaterEqual);
        assert_eq!(rest, "");

        // only one trailing "=" belongs to the operator
        let (rest, op) = parse_operator("<==").unwrap();
        assert_eq!(op, Operator::LessEqual);
        assert_eq!(rest, "=");
    }

    #[test]
    fn test_equal_is_not_an_operator() {
        assert!(parse_operator("=").is_err());
        assert!(parse_operator("==").is_err());

        let (rest, assign) = parse_assign("==").unwrap();
        assert_eq!(assign, "=");
        assert_eq!(rest, "=");
    }

    #[test]
    fn test_delimiters() {
        let test_cases = [
            (";", Delimiter::Semicolon),
            ("{", Delimiter::OpenBrace),
            ("}", Delimiter::CloseBrace),
            (",", Delimiter::Comma),
            ("(", Delimiter::OpenParen),
            (")", Delimiter::CloseParen),
        ];

        for (input, expected) in test_cases.iter() {
            let (rest, delimiter) = parse_delimiter(input).unwrap();
            assert_eq!(delimiter, *expected);
            assert_eq!(rest, "");
        }

        assert!(parse_delimiter("[").is_err());
        assert!(parse_delimiter(":").is_err());
    }

    #[test]
    fn test_symbol_spelling_round_trips() {
        for op in Operator::iter() {
            assert_eq!(op.as_str().parse::<Operator>(), Ok(op));
            assert_eq!(op.to_string(), op.as_str());
        }
        for delimiter in Delimiter::iter() {
            assert_eq!(delimiter.as_str().parse::<Delimiter>(), Ok(delimiter));
            assert_eq!(delimiter.to_string(), delimiter.as_str());
        }
    }

    #[test]
    fn test_brace_spellings() {
        assert_eq!("}".parse::<Delimiter>(), Ok(Delimiter::CloseBrace));
        assert_eq!("{".parse::<Delimiter>(), Ok(Delimiter::OpenBrace));
        assert_eq!(Delimiter::CloseBrace.as_str(), "}");
        assert_eq!(format!("{:<3}|", Delimiter::OpenBrace), "{  |");
    }

    #[test]
    fn test_unknown_symbol_spelling() {
        assert_eq!(
            "==".parse::<Operator>(),
            Err(strum::ParseError::VariantNotFound)
        );
        assert_eq!(
            "[".parse::<Delimiter>(),
            Err(strum::ParseError::VariantNotFound)
        );
    }
}
