/*
 * ==========================================================================
 * BLPARSE - BL Language Parser
 * ==========================================================================
 *
 * File:     parser/mod.rs
 * Purpose:  Root module for the BL recursive-descent parser.
 *
 * This module wires together all parser sub-modules, including:
 *   - Core parser control logic
 *   - Program and instruction parsing
 *   - Statement parsing
 *   - Shared helper utilities
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

/// Core parser orchestration:
/// - Owns the `Parser` struct
/// - Exposes the public parse entry points
#[allow(clippy::module_inception)]
pub mod parser;

/// Program-level parsing:
/// - header / footer
/// - instruction definitions and the instruction context
pub mod program;

/// Statement-level parsing:
/// - blocks
/// - IF / IF-ELSE / WHILE
/// - instruction calls
pub mod statements;

/// Shared parser helpers:
/// - keyword, identifier and condition expectations
/// - statement-start lookahead
pub mod helpers;

/// Re-export the public parse entry points so callers can use:
/// `crate::parser::parse_program(...)`
pub use parser::{
    parse_block, parse_block_source, parse_program, parse_source, parse_statement, Parser,
};
