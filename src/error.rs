/*
 * ==========================================================================
 * BLPARSE - BL Language Parser
 * ==========================================================================
 *
 * Author:   Sam Wilcox
 *
 * License:
 * This file is part of the BLPARSE project.
 *
 * BLPARSE is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use serde::Serialize;
use thiserror::Error;

use crate::lexer::keywords::{CONDITION_LITERALS, IDENTIFIER_PATTERN};
use crate::lexer::token::Token;
use crate::span::Span;

/// The result of a parse operation.
pub type ParseResult<T> = Result<T, ParseError>;

/// Every way a BL parse can fail.
///
/// All kinds are fatal: the parse stops at the first one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ParseErrorKind {
    /// A specific keyword was required but another token was found.
    KeywordExpected,

    /// An identifier was required.
    IdentifierExpected,

    /// A condition literal was required after `IF` or `WHILE`.
    ConditionExpected,

    /// An instruction was named after a primitive.
    ReservedNameUsed,

    /// Two instructions share a name.
    DuplicateInstructionName,

    /// An `END` name differs from the name it closes.
    NameMismatch,

    /// Tokens remain after the program's closing name.
    TrailingTokens,

    /// A statement was required but the token cannot begin one.
    UnrecognizedStatementStart,
}

impl ParseErrorKind {
    /// Stable error code (B0001, B0002, …)
    pub fn code(self) -> &'static str {
        match self {
            ParseErrorKind::KeywordExpected => "B0001",
            ParseErrorKind::IdentifierExpected => "B0002",
            ParseErrorKind::ConditionExpected => "B0003",
            ParseErrorKind::ReservedNameUsed => "B0004",
            ParseErrorKind::DuplicateInstructionName => "B0005",
            ParseErrorKind::NameMismatch => "B0006",
            ParseErrorKind::TrailingTokens => "B0007",
            ParseErrorKind::UnrecognizedStatementStart => "B0008",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{message}")]
pub struct ParseError {
    /// What went wrong
    pub kind: ParseErrorKind,

    /// Human-readable error message, quoting the offending token
    pub message: String,

    /// Location of the offending token
    pub span: Span,

    /// Optional note / help text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
}

impl ParseError {
    /// Generic constructor
    pub fn new(kind: ParseErrorKind, message: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            message: message.into(),
            span,
            help: None,
        }
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn keyword_expected(expected: &str, found: &Token) -> Self {
        Self::new(
            ParseErrorKind::KeywordExpected,
            format!("expected keyword \"{}\", found {}", expected, describe(found)),
            found.span,
        )
    }

    pub fn keywords_expected(expected: &[&str], found: &Token) -> Self {
        let quoted: Vec<String> = expected.iter().map(|k| format!("\"{}\"", k)).collect();
        Self::new(
            ParseErrorKind::KeywordExpected,
            format!("expected one of {}, found {}", quoted.join(", "), describe(found)),
            found.span,
        )
    }

    pub fn identifier_expected(what: &str, found: &Token) -> Self {
        Self::new(
            ParseErrorKind::IdentifierExpected,
            format!("expected {} to be an identifier, found {}", what, describe(found)),
            found.span,
        )
        .with_help(format!("identifiers must match {}", IDENTIFIER_PATTERN))
    }

    pub fn condition_expected(found: &Token) -> Self {
        Self::new(
            ParseErrorKind::ConditionExpected,
            format!("expected a condition, found {}", describe(found)),
            found.span,
        )
        .with_help(format!("conditions are {}", CONDITION_LITERALS.join(", ")))
    }

    pub fn reserved_name(found: &Token) -> Self {
        Self::new(
            ParseErrorKind::ReservedNameUsed,
            format!("instruction name \"{}\" is a primitive instruction", found.lexeme),
            found.span,
        )
        .with_help("primitive instructions cannot be redefined; choose another name")
    }

    pub fn duplicate_instruction(found: &Token) -> Self {
        Self::new(
            ParseErrorKind::DuplicateInstructionName,
            format!("instruction \"{}\" is already defined", found.lexeme),
            found.span,
        )
    }

    /// `construct` is what is being closed, e.g. `instruction` or `program`.
    pub fn name_mismatch(construct: &str, expected: &str, found: &Token) -> Self {
        Self::new(
            ParseErrorKind::NameMismatch,
            format!(
                "{} \"{}\" must end with its own name, found {}",
                construct,
                expected,
                describe(found)
            ),
            found.span,
        )
        .with_help(format!("write \"END {}\"", expected))
    }

    pub fn trailing_tokens(found: &Token) -> Self {
        Self::new(
            ParseErrorKind::TrailingTokens,
            format!("expected end of input, found {}", describe(found)),
            found.span,
        )
    }

    pub fn unrecognized_statement_start(found: &Token) -> Self {
        Self::new(
            ParseErrorKind::UnrecognizedStatementStart,
            format!("expected a statement, found {}", describe(found)),
            found.span,
        )
        .with_help("a statement is IF, WHILE or an instruction call")
    }

    /// Attach a help message to the error (builder-style).
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

/// Fails with `error()` unless `condition` holds.
///
/// This is the single point where a parse turns an unmet expectation into
/// a fatal error; callers propagate it with `?`.
pub fn ensure(condition: bool, error: impl FnOnce() -> ParseError) -> ParseResult<()> {
    if condition {
        Ok(())
    } else {
        Err(error())
    }
}

fn describe(token: &Token) -> String {
    if token.is_eof() {
        "end of input".to_string()
    } else {
        format!("\"{}\"", token.lexeme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_passes_and_fails() {
        let token = Token::new("x", Span::new(2, 5));
        assert!(ensure(true, || ParseError::trailing_tokens(&token)).is_ok());

        let err = ensure(false, || ParseError::trailing_tokens(&token)).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::TrailingTokens);
        assert_eq!(err.span, Span::new(2, 5));
    }

    #[test]
    fn messages_quote_the_token() {
        let token = Token::new("THEN", Span::default());
        let err = ParseError::keyword_expected("DO", &token);
        assert_eq!(err.to_string(), "expected keyword \"DO\", found \"THEN\"");
        assert_eq!(err.code(), "B0001");
    }

    #[test]
    fn end_of_input_is_named() {
        let err = ParseError::keyword_expected("END", &Token::eof(Span::default()));
        assert_eq!(err.message, "expected keyword \"END\", found end of input");
    }

    #[test]
    fn help_lists_every_condition() {
        let err = ParseError::condition_expected(&Token::new("maybe", Span::default()));
        let help = err.help.unwrap();
        for literal in CONDITION_LITERALS {
            assert!(help.contains(literal), "{}", literal);
        }

        let err = ParseError::identifier_expected("program name", &Token::new("%", Span::default()));
        assert!(err.help.unwrap().contains(IDENTIFIER_PATTERN));
    }

    #[test]
    fn codes_are_distinct() {
        let kinds = [
            ParseErrorKind::KeywordExpected,
            ParseErrorKind::IdentifierExpected,
            ParseErrorKind::ConditionExpected,
            ParseErrorKind::ReservedNameUsed,
            ParseErrorKind::DuplicateInstructionName,
            ParseErrorKind::NameMismatch,
            ParseErrorKind::TrailingTokens,
            ParseErrorKind::UnrecognizedStatementStart,
        ];
        let codes: std::collections::HashSet<_> = kinds.iter().map(|k| k.code()).collect();
        assert_eq!(codes.len(), kinds.len());
    }
}
