/*
 * ==========================================================================
 * BLPARSE - BL Language Parser
 * ==========================================================================
 *
 * File:     lexer/mod.rs
 * Purpose:  Root module for BL lexical analysis.
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

/// Character scanner producing classified tokens.
#[allow(clippy::module_inception)]
pub mod lexer;

/// Reserved words, condition literals, primitive names and the
/// classification predicates built on them.
pub mod keywords;

/// The front-consumed queue handed to the parser.
pub mod stream;

/// Token and token-kind definitions.
pub mod token;

pub use keywords::{is_condition, is_identifier, is_keyword, is_primitive, END_OF_INPUT};
pub use stream::TokenStream;
pub use token::{Token, TokenKind};

/// Converts BL source text into a token list ending with the sentinel.
///
/// Lexing never fails; characters that do not form a valid word are
/// emitted as `TokenKind::Unknown` tokens for the parser to reject.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = lexer::Lexer::new(source);
    lexer.scan_tokens();
    lexer.tokens
}
