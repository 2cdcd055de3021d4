//! # Lexical Rules
//!
//! The tokenizer is driven by a fixed, ordered table of [`Rule`]s. Each rule pairs a
//! [`RuleKind`] with a recognizer that reports how much of the input, starting at the
//! current position, the rule matches.
//!
//! ## Longest Match
//!
//! [`RuleSet::longest_match`] applies every rule at the same position and keeps the
//! longest match. When two rules match the same length the rule listed first wins. This
//! single policy resolves every overlap in the table:
//!
//! | Input  | Candidates                        | Winner     |
//! |--------|-----------------------------------|------------|
//! | `if`   | KEYWORD (2), IDENTIFIER (2)       | KEYWORD    |
//! | `iffy` | IDENTIFIER (4)                    | IDENTIFIER |
//! | `3.14` | INTEGER (1), REAL (4)             | REAL       |
//! | `<=`   | OPERATOR (2)                      | OPERATOR   |
//!
//! The table is process-wide constant data; every [`RuleSet`] refers to the same static
//! slice.

use std::fmt;

use super::{
    comment::parse_comment,
    keyword::{parse_identifier, recognize_keyword},
    literal::{parse_integer, parse_real},
    symbol::{parse_assign, recognize_delimiter, recognize_operator},
    token::{ParserResult, TokenKind},
    whitespace::parse_whitespace,
};

/// What a rule recognizes: one of the token kinds, or one of the two discarded kinds.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum RuleKind {
    Keyword,
    Identifier,
    Integer,
    Real,
    Assign,
    Operator,
    Delimiter,
    Comment,
    Whitespace,
}

impl RuleKind {
    /// The token kind emitted for this rule, or `None` for discarded rules.
    pub fn token_kind(self) -> Option<TokenKind> {
        match self {
            RuleKind::Keyword => Some(TokenKind::Keyword),
            RuleKind::Identifier => Some(TokenKind::Identifier),
            RuleKind::Integer => Some(TokenKind::Integer),
            RuleKind::Real => Some(TokenKind::Real),
            RuleKind::Assign => Some(TokenKind::Assign),
            RuleKind::Operator => Some(TokenKind::Operator),
            RuleKind::Delimiter => Some(TokenKind::Delimiter),
            RuleKind::Comment | RuleKind::Whitespace => None,
        }
    }

    pub fn is_trivia(self) -> bool {
        self.token_kind().is_none()
    }
}

/// A recognizer returns the matched prefix of its input.
pub type Recognizer = fn(&str) -> ParserResult<'_, &str>;

#[derive(Clone, Copy)]
pub struct Rule {
    kind: RuleKind,
    recognizer: Recognizer,
}

impl Rule {
    pub const fn new(kind: RuleKind, recognizer: Recognizer) -> Self {
        Self { kind, recognizer }
    }

    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    /// Length in bytes of this rule's match at the start of `input`, if it matches.
    pub fn match_len(&self, input: &str) -> Option<usize> {
        match (self.recognizer)(input) {
            Ok((_, matched)) if !matched.is_empty() => Some(matched.len()),
            _ => None,
        }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule").field("kind", &self.kind).finish()
    }
}

/// The rules in precedence order.
static STANDARD_RULES: [Rule; 9] = [
    Rule::new(RuleKind::Keyword, recognize_keyword),
    Rule::new(RuleKind::Identifier, parse_identifier),
    Rule::new(RuleKind::Integer, parse_integer),
    Rule::new(RuleKind::Real, parse_real),
    Rule::new(RuleKind::Assign, parse_assign),
    Rule::new(RuleKind::Operator, recognize_operator),
    Rule::new(RuleKind::Delimiter, recognize_delimiter),
    Rule::new(RuleKind::Comment, parse_comment),
    Rule::new(RuleKind::Whitespace, parse_whitespace),
];

/// An ordered, immutable view of the rule table.
#[derive(Debug, Clone, Copy)]
pub struct RuleSet {
    rules: &'static [Rule],
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::standard()
    }
}

impl RuleSet {
    pub fn standard() -> Self {
        Self {
            rules: &STANDARD_RULES,
        }
    }

    pub fn rules(&self) -> &'static [Rule] {
        self.rules
    }

    /// Selects the rule with the longest match at the start of `input`.
    ///
    /// Returns the winning kind and the match length in bytes, or `None` when no rule
    /// matches.
    pub fn longest_match(&self, input: &str) -> Option<(RuleKind, usize)> {
        let mut best: Option<(RuleKind, usize)> = None;
        for rule in self.rules {
            let Some(len) = rule.match_len(input) else {
                continue;
            };
            // strictly longer: an equal match keeps the earlier rule
            if best.map_or(true, |(_, best_len)| len > best_len) {
                best = Some((rule.kind, len));
            }
        }
        best
    }
}
