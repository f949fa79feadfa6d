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

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

use crate::ast::Statement;
use crate::lexer::keywords::{is_identifier, is_primitive};

/// Instruction name → instruction body.
///
/// Keys are unique and their order carries no meaning; a `BTreeMap` keeps
/// printing and comparison deterministic.
pub type Context = BTreeMap<String, Statement>;

/// A parsed BL program.
///
/// Deserializing goes through the same checks the parser applies to the
/// context and body, so a `Program` read from JSON is never malformed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedProgram")]
pub struct Program {
    /// The name declared after `PROGRAM` (and repeated after the final `END`).
    pub name: String,

    /// User-defined instructions.
    pub context: Context,

    /// The main body between `BEGIN` and `END`; always a `Statement::Block`.
    pub body: Statement,
}

impl Program {
    pub fn new(name: impl Into<String>, context: Context, body: Statement) -> Self {
        Self {
            name: name.into(),
            context,
            body,
        }
    }

    /// Looks up a user-defined instruction body.
    pub fn instruction(&self, name: &str) -> Option<&Statement> {
        self.context.get(name)
    }

    /// Names of all user-defined instructions, in sorted order.
    pub fn instruction_names(&self) -> impl Iterator<Item = &str> {
        self.context.keys().map(String::as_str)
    }
}

/// Why a deserialized program was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidProgram {
    #[error("instruction name \"{0}\" is not an identifier")]
    NotAnIdentifier(String),

    #[error("instruction name \"{0}\" is a primitive instruction")]
    PrimitiveName(String),

    #[error("body of instruction \"{0}\" is not a block")]
    InstructionNotBlock(String),

    #[error("program body is not a block")]
    BodyNotBlock,
}

#[derive(Deserialize)]
struct UncheckedProgram {
    name: String,
    context: Context,
    body: Statement,
}

impl TryFrom<UncheckedProgram> for Program {
    type Error = InvalidProgram;

    fn try_from(raw: UncheckedProgram) -> Result<Self, Self::Error> {
        for (name, body) in &raw.context {
            if !is_identifier(name) {
                return Err(InvalidProgram::NotAnIdentifier(name.clone()));
            }
            if is_primitive(name) {
                return Err(InvalidProgram::PrimitiveName(name.clone()));
            }
            if body.block_len().is_none() {
                return Err(InvalidProgram::InstructionNotBlock(name.clone()));
            }
        }
        if raw.body.block_len().is_none() {
            return Err(InvalidProgram::BodyNotBlock);
        }
        Ok(Program::new(raw.name, raw.context, raw.body))
    }
}

impl Default for Program {
    /// An unnamed program with no instructions and an empty body.
    fn default() -> Self {
        Self::new("Unnamed", Context::new(), Statement::empty_block())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_program() {
        let program = Program::default();
        assert_eq!(program.name, "Unnamed");
        assert!(program.context.is_empty());
        assert_eq!(program.body, Statement::empty_block());
    }

    #[test]
    fn instruction_lookup() {
        let mut context = Context::new();
        context.insert("spin".to_string(), Statement::Block(vec![Statement::call("turnleft")]));
        context.insert("hop".to_string(), Statement::empty_block());
        let program = Program::new("p", context, Statement::empty_block());

        assert!(program.instruction("spin").is_some());
        assert!(program.instruction("move").is_none());
        assert_eq!(program.instruction_names().collect::<Vec<_>>(), vec!["hop", "spin"]);
    }

    #[test]
    fn json_input_is_checked() {
        let ok = r#"{"name":"p","context":{"hop":{"block":[]}},"body":{"block":[{"call":"hop"}]}}"#;
        assert!(serde_json::from_str::<Program>(ok).is_ok());

        let cases = [
            (
                r#"{"name":"p","context":{"move":{"block":[]}},"body":{"block":[]}}"#,
                "primitive instruction",
            ),
            (
                r#"{"name":"p","context":{"2x":{"block":[]}},"body":{"block":[]}}"#,
                "not an identifier",
            ),
            (
                r#"{"name":"p","context":{"hop":{"call":"move"}},"body":{"block":[]}}"#,
                "instruction \"hop\" is not a block",
            ),
            (
                r#"{"name":"p","context":{},"body":{"call":"move"}}"#,
                "program body is not a block",
            ),
        ];
        for (json, message) in cases {
            let err = serde_json::from_str::<Program>(json).unwrap_err();
            assert!(err.to_string().contains(message), "{}: {}", json, err);
        }
    }
}
