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

//! Parser for BL, a small educational imperative language.
//!
//! ```text
//! Source → lexer::tokenize → TokenStream → parser::parse_program → Program
//! ```
//!
//! A parse either yields a complete `Program` (or `Statement`) or stops at
//! the first violation with a `ParseError`; there is no recovery.

pub mod ast;
pub mod diagnostics;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod printer;
pub mod span;

pub use ast::{Condition, Context, Program, Statement};
pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use lexer::{tokenize, Token, TokenKind, TokenStream};
pub use parser::{
    parse_block, parse_block_source, parse_program, parse_source, parse_statement,
};
pub use printer::{pretty_print_program, pretty_print_statement};
pub use span::Span;
