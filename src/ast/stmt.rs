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

use crate::ast::Condition;

/// All BL statements.
///
/// Every child is owned by its parent; a tree is built bottom-up by the
/// parser and never mutated afterwards. A `Statement` deserialized on its
/// own is taken as-is; `Program` checks its context and body on the way in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Statement {
    /* ----------------------------- */
    /* SEQUENCING                    */
    /* ----------------------------- */

    /// Statements in source order. May be empty.
    Block(Vec<Statement>),

    /* ----------------------------- */
    /* CONTROL FLOW                  */
    /* ----------------------------- */

    If {
        condition: Condition,
        body: Box<Statement>,
    },

    IfElse {
        condition: Condition,
        then_branch: Box<Statement>,
        else_branch: Box<Statement>,
    },

    While {
        condition: Condition,
        body: Box<Statement>,
    },

    /* ----------------------------- */
    /* INSTRUCTION CALLS             */
    /* ----------------------------- */

    /// A call to a primitive or user-defined instruction.
    Call(String),
}

impl Statement {
    pub fn empty_block() -> Self {
        Statement::Block(Vec::new())
    }

    pub fn call(name: impl Into<String>) -> Self {
        Statement::Call(name.into())
    }

    pub fn if_then(condition: Condition, body: Statement) -> Self {
        Statement::If {
            condition,
            body: Box::new(body),
        }
    }

    pub fn if_else(condition: Condition, then_branch: Statement, else_branch: Statement) -> Self {
        Statement::IfElse {
            condition,
            then_branch: Box::new(then_branch),
            else_branch: Box::new(else_branch),
        }
    }

    pub fn while_do(condition: Condition, body: Statement) -> Self {
        Statement::While {
            condition,
            body: Box::new(body),
        }
    }

    /// Number of statements in a block; `None` for any other kind.
    pub fn block_len(&self) -> Option<usize> {
        match self {
            Statement::Block(statements) => Some(statements.len()),
            _ => None,
        }
    }

    /// Deepest IF/WHILE nesting below (and including) this statement.
    ///
    /// Parsing recurses once per nesting level, so this is also the
    /// parser's recursion depth for the statement.
    pub fn nesting_depth(&self) -> usize {
        match self {
            Statement::Block(statements) => {
                statements.iter().map(Statement::nesting_depth).max().unwrap_or(0)
            }
            Statement::If { body, .. } | Statement::While { body, .. } => 1 + body.nesting_depth(),
            Statement::IfElse {
                then_branch,
                else_branch,
                ..
            } => 1 + then_branch.nesting_depth().max(else_branch.nesting_depth()),
            Statement::Call(_) => 0,
        }
    }
}

impl Default for Statement {
    fn default() -> Self {
        Statement::empty_block()
    }
}
