/*
 * ==========================================================================
 * BLPARSE - BL Language Parser
 * ==========================================================================
 *
 * File:      keywords.rs
 * Purpose:   Defines the reserved words, condition literals and primitive
 *            instruction names of the BL language, plus the lexeme
 *            classification predicates the parser relies on.
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

use regex::Regex;
use std::sync::LazyLock;

/// Lexeme of the sentinel token that terminates every token stream.
///
/// It contains spaces, so no word scanned from source text can ever
/// collide with it.
pub const END_OF_INPUT: &str = "### END OF INPUT ###";

/// All reserved BL keywords.
///
/// Keywords are case-sensitive: `IF` is a keyword, `if` is an identifier.
pub const KEYWORDS: &[&str] = &[
    "PROGRAM",
    "IS",
    "BEGIN",
    "END",
    "INSTRUCTION",
    "IF",
    "THEN",
    "ELSE",
    "WHILE",
    "DO",
];

/// Condition literals accepted after `IF` and `WHILE`.
///
/// Each entry maps one-to-one onto a `Condition` variant.
pub const CONDITION_LITERALS: &[&str] = &[
    "next-is-empty",
    "next-is-not-empty",
    "next-is-wall",
    "next-is-not-wall",
    "next-is-friend",
    "next-is-not-friend",
    "next-is-enemy",
    "next-is-not-enemy",
    "random",
    "true",
];

/// Built-in instructions. User-defined instructions may call these but
/// may never be named after one.
pub const PRIMITIVE_INSTRUCTIONS: &[&str] = &["move", "turnleft", "turnright", "infect", "skip"];

/// Shape of an identifier: a letter followed by letters, digits or `-`.
pub const IDENTIFIER_PATTERN: &str = r"^[a-zA-Z][a-zA-Z0-9-]*$";

static IDENTIFIER_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(IDENTIFIER_PATTERN).expect("identifier pattern compiles"));

/// Determines whether a given word is a **reserved keyword** in BL.
///
/// # Examples
/// ```text
/// WHILE   -> keyword
/// while   -> identifier
/// ```
pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(&word)
}

/// Returns `true` if `word` is one of the condition literals.
pub fn is_condition(word: &str) -> bool {
    CONDITION_LITERALS.contains(&word)
}

/// Returns `true` if `word` can name an instruction or appear as a call.
///
/// A valid identifier has identifier shape and is neither a keyword nor
/// a condition literal. Primitive names *are* identifiers; they are only
/// rejected as instruction definition names.
pub fn is_identifier(word: &str) -> bool {
    IDENTIFIER_SHAPE.is_match(word) && !is_keyword(word) && !is_condition(word)
}

/// Returns `true` if `word` names a built-in instruction.
pub fn is_primitive(word: &str) -> bool {
    PRIMITIVE_INSTRUCTIONS.contains(&word)
}
