use std::ops::Deref;

use nom::IResult;
use thiserror::Error;

use super::{
    keyword::Keyword,
    rule::{Rule, RuleSet},
    scanner::Scanner,
    symbol::{Delimiter, Operator},
};

/// The classification of an emitted token.
///
/// Whitespace and comments are recognized by the tokenizer but never emitted, so they
/// have no `TokenKind`.
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
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    Keyword,
    Identifier,
    Integer,
    Real,
    Assign,
    Operator,
    Delimiter,
}

impl TokenKind {
    /// The upper-case name used in reports, e.g. `KEYWORD`.
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// A classified lexeme: the exact source text matched by a rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    kind: TokenKind,
    lexeme: String,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    pub fn keyword(&self) -> Option<Keyword> {
        match self.kind {
            TokenKind::Keyword => self.lexeme.parse().ok(),
            _ => None,
        }
    }

    pub fn operator(&self) -> Option<Operator> {
        match self.kind {
            TokenKind::Operator => self.lexeme.parse().ok(),
            _ => None,
        }
    }

    pub fn delimiter(&self) -> Option<Delimiter> {
        match self.kind {
            TokenKind::Delimiter => self.lexeme.parse().ok(),
            _ => None,
        }
    }
}

/// The tokens of one input text, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_vec(self) -> Vec<Token> {
        self.tokens
    }
}

impl Deref for TokenStream {
    type Target = [Token];

    fn deref(&self) -> &Self::Target {
        &self.tokens
    }
}

impl From<Vec<Token>> for TokenStream {
    fn from(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }
}

impl FromIterator<Token> for TokenStream {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for TokenStream {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

/// Converts source text into tokens.
///
/// A `Tokenizer` holds nothing but a reference to the static rule table, so it is cheap
/// to copy and may be shared freely between threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer {
    rules: RuleSet,
}

impl Tokenizer {
    pub fn new() -> Self {
        Self {
            rules: RuleSet::standard(),
        }
    }

    /// The rules in precedence order.
    pub fn rules(&self) -> &'static [Rule] {
        self.rules.rules()
    }

    /// Lazily scans `input`, yielding every match including whitespace and comments.
    pub fn scan<'a>(&self, input: &'a str) -> Scanner<'a> {
        Scanner::new(self.rules, input)
    }

    /// Lazily scans `input`, yielding only the emitted tokens.
    pub fn tokens<'a>(&self, input: &'a str) -> Tokens<'a> {
        Tokens {
            scanner: self.scan(input),
        }
    }

    /// Tokenizes the whole input, failing on the first unrecognized character.
    #[tracing::instrument(level = "debug", skip(self, input), fields(len = input.len()))]
    pub fn tokenize(&self, input: &str) -> LexResult<TokenStream> {
        let stream = self.tokens(input).collect::<LexResult<TokenStream>>()?;
        tracing::debug!(count = stream.len(), "tokenized input");
        Ok(stream)
    }
}

/// Iterator over the tokens of an input, created by [`Tokenizer::tokens`].
///
/// Yields at most one error, after which it is exhausted.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    scanner: Scanner<'a>,
}

impl Iterator for Tokens<'_> {
    type Item = LexResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.scanner.next()? {
                Ok(segment) => {
                    if let Some(kind) = segment.kind.token_kind() {
                        return Some(Ok(Token::new(kind, segment.text)));
                    }
                }
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

impl std::iter::FusedIterator for Tokens<'_> {}

/// No rule matches at `offset`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unrecognized character {character:?} at offset {offset} (line {line}, column {column})")]
pub struct LexError {
    pub character: char,
    /// Byte offset into the input.
    pub offset: usize,
    /// 1-based line.
    pub line: usize,
    /// 1-based column, counted in characters.
    pub column: usize,
}

pub type ParserResult<'a, T> = IResult<&'a str, T>;

pub type LexResult<T> = Result<T, LexError>;

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn tok(kind: TokenKind, lexeme: &str) -> Token {
        Token::new(kind, lexeme)
    }

    #[test]
    fn test_assignment_statement() {
        let tokens = Tokenizer::new().tokenize("x = 3 + 4;").unwrap();
        assert_eq!(
            tokens.into_vec(),
            vec![
                tok(TokenKind::Identifier, "x"),
                tok(TokenKind::Assign, "="),
                tok(TokenKind::Integer, "3"),
                tok(TokenKind::Operator, "+"),
                tok(TokenKind::Integer, "4"),
                tok(TokenKind::Delimiter, ";"),
            ]
        );
    }

    #[test]
    fn test_keyword_and_identifier_boundary() {
        let tokenizer = Tokenizer::new();
        assert_eq!(
            tokenizer.tokenize("if").unwrap().into_vec(),
            vec![tok(TokenKind::Keyword, "if")]
        );
        assert_eq!(
            tokenizer.tokenize("iffy").unwrap().into_vec(),
            vec![tok(TokenKind::Identifier, "iffy")]
        );
    }

    #[test]
    fn test_real_beats_integer_prefix() {
        let tokens = Tokenizer::new().tokenize("3.14").unwrap();
        assert_eq!(tokens.into_vec(), vec![tok(TokenKind::Real, "3.14")]);
    }

    #[test]
    fn test_double_equal_is_two_assigns() {
        let tokens = Tokenizer::new().tokenize("a == b").unwrap();
        assert_eq!(
            tokens.into_vec(),
            vec![
                tok(TokenKind::Identifier, "a"),
                tok(TokenKind::Assign, "="),
                tok(TokenKind::Assign, "="),
                tok(TokenKind::Identifier, "b"),
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        let tokens = Tokenizer::new().tokenize("").unwrap();
        assert!(tokens.is_empty());
        assert_eq!(tokens, TokenStream::new());
    }

    #[test]
    fn test_only_trivia() {
        let tokens = Tokenizer::new().tokenize("  [* nothing *]\n\t").unwrap();
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_unrecognized_character() {
        let err = Tokenizer::new().tokenize("x = #1").unwrap_err();
        assert_eq!(
            err,
            LexError {
                character: '#',
                offset: 4,
                line: 1,
                column: 5,
            }
        );
        assert_eq!(
            err.to_string(),
            "unrecognized character '#' at offset 4 (line 1, column 5)"
        );
    }

    #[test]
    fn test_error_position_on_later_line() {
        let err = Tokenizer::new().tokenize("a\n  b @").unwrap_err();
        assert_eq!(err.character, '@');
        assert_eq!(err.offset, 6);
        assert_eq!(err.line, 2);
        assert_eq!(err.column, 5);
    }

    #[test]
    fn test_lazy_tokens_stop_after_error() {
        let tokenizer = Tokenizer::new();
        let mut tokens = tokenizer.tokens("a $ b");
        assert_eq!(tokens.next(), Some(Ok(tok(TokenKind::Identifier, "a"))));
        assert!(matches!(tokens.next(), Some(Err(LexError { character: '$', offset: 2, .. }))));
        assert_eq!(tokens.next(), None);
    }

    #[test]
    fn test_typed_views() {
        let tokens = Tokenizer::new().tokenize("while (x != 0) put(x);").unwrap();
        assert_eq!(tokens[0].keyword(), Some(Keyword::While));
        assert_eq!(tokens[1].delimiter(), Some(Delimiter::OpenParen));
        assert_eq!(tokens[3].operator(), Some(Operator::NotEqual));
        assert_eq!(tokens[2].keyword(), None);
        assert_eq!(tokens[2].operator(), None);
    }

    #[test]
    fn test_token_kind_names() {
        assert_eq!(TokenKind::Keyword.as_str(), "KEYWORD");
        assert_eq!(TokenKind::Identifier.to_string(), "IDENTIFIER");
        assert_eq!("REAL".parse::<TokenKind>().unwrap(), TokenKind::Real);
    }

    #[test]
    fn test_tokenizer_is_shareable() {
        fn assert_send_sync<T: Send + Sync + Copy>() {}
        assert_send_sync::<Tokenizer>();
    }
}
