/*
 * ==========================================================================
 * BLPARSE - BL Language Parser
 * ==========================================================================
 *
 * File:      token.rs
 * Purpose:   Defines the lexical token types produced by the BL lexer and
 *            consumed by the parser.
 *
 * Author:    Sam Wilcox
 *
 * License:
 * This file is part of the BLPARSE project.
 *
 * BLPARSE is dual-licensed under the terms of:
 *   - The MIT License
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

use crate::lexer::keywords::{is_condition, is_identifier, is_keyword, END_OF_INPUT};
use crate::span::Span;
use std::fmt;

/// Represents the **category of a lexical token** in BL.
///
/// # Compiler Pipeline Role
/// ```text
/// Source Code → Lexer → TokenKind → Parser → Program
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A reserved word such as `PROGRAM`, `IF` or `END`.
    Keyword,

    /// A condition literal such as `next-is-wall` or `random`.
    Condition,

    /// A user-chosen name: instruction names, calls, the program name.
    Identifier,

    /// Anything the lexer could not classify.
    ///
    /// Unknown tokens are not rejected by the lexer; the parser reports
    /// them when it expected something else.
    Unknown,

    /// End-of-input sentinel.
    ///
    /// Always the **final token** of every stream.
    Eof,
}

impl TokenKind {
    /// Classifies a bare lexeme.
    pub fn classify(lexeme: &str) -> Self {
        if lexeme == END_OF_INPUT {
            TokenKind::Eof
        } else if is_keyword(lexeme) {
            TokenKind::Keyword
        } else if is_condition(lexeme) {
            TokenKind::Condition
        } else if is_identifier(lexeme) {
            TokenKind::Identifier
        } else {
            TokenKind::Unknown
        }
    }
}

/// A single lexical token produced by the BL lexer.
///
/// # Example Tokens
/// ```text
/// WHILE        →  { kind: Keyword,    lexeme: "WHILE" }
/// next-is-wall →  { kind: Condition,  lexeme: "next-is-wall" }
/// find-wall    →  { kind: Identifier, lexeme: "find-wall" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The classified category of the token.
    pub kind: TokenKind,

    /// The exact source text that produced this token.
    pub lexeme: String,

    /// Where the token starts in the source.
    pub span: Span,
}

impl Token {
    /// Builds a token, classifying `lexeme`.
    pub fn new(lexeme: impl Into<String>, span: Span) -> Self {
        let lexeme = lexeme.into();
        Self {
            kind: TokenKind::classify(&lexeme),
            lexeme,
            span,
        }
    }

    /// Builds the end-of-input sentinel.
    pub fn eof(span: Span) -> Self {
        Self {
            kind: TokenKind::Eof,
            lexeme: END_OF_INPUT.to_string(),
            span,
        }
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token {
    /// Prints **only the token's lexeme**, which is what error messages
    /// should quote back to the user.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lexeme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_lexemes() {
        assert_eq!(TokenKind::classify("BEGIN"), TokenKind::Keyword);
        assert_eq!(TokenKind::classify("next-is-enemy"), TokenKind::Condition);
        assert_eq!(TokenKind::classify("turnleft"), TokenKind::Identifier);
        assert_eq!(TokenKind::classify("%"), TokenKind::Unknown);
        assert_eq!(TokenKind::classify(END_OF_INPUT), TokenKind::Eof);
    }

    #[test]
    fn display_is_lexeme() {
        let token = Token::new("move", Span::new(3, 4));
        assert_eq!(token.to_string(), "move");
    }
}
