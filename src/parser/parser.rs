/*
 * ==========================================================================
 * BLPARSE - BL Language Parser
 * ==========================================================================
 *
 * Core Recursive-Descent Parser Entry Point
 *
 * This file defines the primary `Parser` structure and the public parse
 * drivers used to transform a token stream into a `Program` or a
 * `Statement`.
 *
 * The grammar itself is split across multiple modules:
 * - `program.rs`     → Program header, instruction definitions, footer
 * - `statements.rs`  → Blocks, IF / IF-ELSE, WHILE and calls
 * - `helpers.rs`     → Token expectations and lookahead checks
 *
 * --------------------------------------------------------------------------
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

use crate::ast::{Program, Statement};
use crate::error::{ensure, ParseError, ParseResult};
use crate::lexer::{tokenize, TokenStream};

/// The BL recursive-descent parser.
///
/// The parser holds the only mutable borrow of the token stream for the
/// duration of a parse and consumes it strictly front to back, one token
/// of lookahead at a time. The grammar logic lives in extension modules
/// (`program`, `statements`, `helpers`) via additional `impl Parser`
/// blocks.
///
/// Nested IF/WHILE statements are parsed by plain recursion, so the call
/// depth grows with the nesting depth of the source. Extremely deep
/// nesting can overflow the stack; that is a known limit, not a reported
/// error.
pub struct Parser<'a> {
    /// Remaining tokens, always ending with the end-of-input sentinel.
    pub tokens: &'a mut TokenStream,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a mut TokenStream) -> Self {
        Self { tokens }
    }
}

/// Parses a complete BL program from `tokens`.
///
/// On success the stream holds only the sentinel. On failure the parse
/// stops at the first violation and no partial program is returned.
///
/// # Pipeline
/// ```text
/// Source → Lexer → TokenStream → Parser → Program
/// ```
pub fn parse_program(tokens: &mut TokenStream) -> ParseResult<Program> {
    Parser::new(tokens).program()
}

/// Parses a single statement (IF, IF-ELSE, WHILE or a call) from the front
/// of `tokens`, leaving whatever follows it in the stream.
pub fn parse_statement(tokens: &mut TokenStream) -> ParseResult<Statement> {
    Parser::new(tokens).statement()
}

/// Parses a (possibly empty) block from the front of `tokens`.
///
/// Stops, without consuming, at the first token that cannot begin a
/// statement. Always returns a `Statement::Block`.
pub fn parse_block(tokens: &mut TokenStream) -> ParseResult<Statement> {
    Parser::new(tokens).block()
}

/// Tokenizes and parses BL program source text.
pub fn parse_source(source: &str) -> ParseResult<Program> {
    let mut tokens = TokenStream::new(tokenize(source));
    parse_program(&mut tokens)
}

/// Tokenizes and parses BL source text that holds only a block of
/// statements, requiring the block to reach the end of input.
pub fn parse_block_source(source: &str) -> ParseResult<Statement> {
    let mut tokens = TokenStream::new(tokenize(source));
    let block = parse_block(&mut tokens)?;
    ensure(tokens.at_end(), || ParseError::unrecognized_statement_start(tokens.front()))?;
    Ok(block)
}
