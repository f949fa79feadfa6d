/*
 * ==========================================================================
 * BLPARSE - BL Language Parser
 * ==========================================================================
 *
 * Program-Level Parsing Logic
 *
 * ```text
 * Program   := "PROGRAM" id "IS" InstrDef* "BEGIN" Block "END" id
 * InstrDef  := "INSTRUCTION" id "IS" Block "END" id
 * ```
 *
 * A program is read in one linear pass:
 * header → instruction definitions → body → footer → end of input.
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

use tracing::debug;

use crate::ast::{Context, Program, Statement};
use crate::error::{ensure, ParseError, ParseResult};
use crate::lexer::keywords::is_primitive;
use crate::lexer::token::Token;
use crate::parser::parser::Parser;

impl Parser<'_> {
    /// Parses a whole program and checks that nothing but the end-of-input
    /// sentinel follows it.
    pub fn program(&mut self) -> ParseResult<Program> {
        // Header
        self.expect_keyword("PROGRAM")?;
        let name = self.advance().lexeme;
        self.expect_keyword("IS")?;

        // Instruction definitions
        let mut context = Context::new();
        while self.check_keyword("INSTRUCTION") {
            let (instruction, body) = self.instruction()?;
            ensure(!context.contains_key(&instruction.lexeme), || {
                ParseError::duplicate_instruction(&instruction)
            })?;
            debug!(name = %instruction.lexeme, statements = ?body.block_len(), "parsed instruction");
            context.insert(instruction.lexeme, body);
        }

        // Body
        self.expect_keyword("BEGIN")?;
        let body = self.block()?;

        // Footer
        self.expect_keyword("END")?;
        self.expect_end_name("program", &name)?;
        ensure(self.tokens.len() == 1, || ParseError::trailing_tokens(self.front()))?;

        debug!(%name, instructions = context.len(), "parsed program");
        Ok(Program::new(name, context, body))
    }

    /// Parses one `INSTRUCTION … END name` definition.
    ///
    /// Returns the token holding the instruction's name (so duplicate
    /// definitions can be reported at their location) and its body block.
    pub fn instruction(&mut self) -> ParseResult<(Token, Statement)> {
        self.expect_keyword("INSTRUCTION")?;

        let name = self.expect_identifier("instruction name")?;
        ensure(!is_primitive(&name.lexeme), || ParseError::reserved_name(&name))?;

        self.expect_keyword("IS")?;
        let body = self.block()?;
        self.expect_keyword("END")?;
        self.expect_end_name("instruction", &name.lexeme)?;

        Ok((name, body))
    }
}
