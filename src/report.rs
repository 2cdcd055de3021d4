//! # Token Reports
//!
//! Renders a token stream as the fixed-width text table written for each input file:
//!
//! ```text
//! Token           Lexeme
//! ------------------------------
//! KEYWORD         while
//! DELIMITER       (
//! ```
//!
//! The kind column is left-justified to [`ReportConfig::kind_width`] characters and
//! followed by a single space. Every line, including the last, ends with `\n`.

use std::{io, path::Path};

use crate::{config::ReportConfig, tokenizer::token::Token};

/// Formats one token as a report line, without the trailing newline.
pub fn token_line(token: &Token, config: &ReportConfig) -> String {
    format!(
        "{:<width$} {}",
        token.kind().as_str(),
        token.lexeme(),
        width = config.kind_width
    )
}

/// Renders the full report: header, rule and one line per token.
pub fn render(tokens: &[Token], config: &ReportConfig) -> String {
    let header = format!(
        "{:<width$} {}",
        config.kind_header,
        config.lexeme_header,
        width = config.kind_width
    );
    let mut out = header + "\n" + &"-".repeat(config.rule_width) + "\n";
    out.push_str(&token_lines(tokens, config));
    out
}

fn token_lines(tokens: &[Token], config: &ReportConfig) -> String {
    tokens
        .iter()
        .map(|token| token_line(token, config) + "\n")
        .collect()
}

/// Writes the rendered report to `writer`.
pub fn write_report<W: io::Write>(
    mut writer: W,
    tokens: &[Token],
    config: &ReportConfig,
) -> io::Result<()> {
    writer.write_all(render(tokens, config).as_bytes())?;
    writer.flush()
}

/// The console listing printed after a file is processed. Listings are separated by two
/// blank lines.
pub fn console_listing(input: &Path, tokens: &[Token], config: &ReportConfig) -> String {
    let mut out = format!("Tokens from {}:\n", input.display());
    out.push_str(&token_lines(tokens, config));
    out.push_str("\n\n");
    out
}
