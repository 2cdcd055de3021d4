//! # Scanner
//!
//! The scan loop behind [`Tokenizer`](super::token::Tokenizer). A [`Scanner`] walks the
//! input left to right. At each position it asks the [`RuleSet`] for the longest match,
//! yields it as a [`Segment`] and advances past it. Whitespace and comments are yielded
//! too, so the segments of a successful scan concatenate back to the exact input.
//!
//! The scan offset only ever moves forward. When no rule matches, the scanner yields a
//! single [`LexError`] and then stops.

use std::iter::FusedIterator;

use super::{
    rule::{RuleKind, RuleSet},
    token::{LexError, LexResult},
};

/// One match of one rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment<'a> {
    pub kind: RuleKind,
    pub text: &'a str,
    /// Byte offset of `text` in the scanned input.
    pub offset: usize,
}

impl Segment<'_> {
    /// Byte offset one past the end of the segment.
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }
}

#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    rules: RuleSet,
    input: &'a str,
    position: usize,
    line: usize,
    column: usize,
    failed: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(rules: RuleSet, input: &'a str) -> Self {
        Self {
            rules,
            input,
            position: 0,
            line: 1,   // 1-based
            column: 1, // 1-based
            failed: false,
        }
    }

    /// Byte offset of the next segment.
    pub fn position(&self) -> usize {
        self.position
    }

    fn update_position(&mut self, text: &str) {
        for c in text.chars() {
            self.position += c.len_utf8();
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = LexResult<Segment<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let remaining = &self.input[self.position..];
        let character = remaining.chars().next()?;

        match self.rules.longest_match(remaining) {
            Some((kind, len)) => {
                let text = &remaining[..len];
                let segment = Segment {
                    kind,
                    text,
                    offset: self.position,
                };
                tracing::trace!(%kind, offset = segment.offset, len, "matched");
                self.update_position(text);
                Some(Ok(segment))
            }
            None => {
                self.failed = true;
                let error = LexError {
                    character,
                    offset: self.position,
                    line: self.line,
                    column: self.column,
                };
                tracing::debug!(%error, "no rule matches");
                Some(Err(error))
            }
        }
    }
}

impl FusedIterator for Scanner<'_> {}
