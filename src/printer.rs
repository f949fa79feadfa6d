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

use std::fmt;

use crate::ast::{Program, Statement};

/// Spaces added per nesting level.
pub const INDENT: usize = 2;

/// ============================================================================
/// pretty_print_program
/// ============================================================================
/// Renders a `Program` as canonical BL source.
///
/// Instructions appear in name order, separated by blank lines:
///
/// ```text
/// PROGRAM walker IS
///
///   INSTRUCTION step IS
///     move
///   END step
///
/// BEGIN
///   step
/// END walker
/// ```
///
/// Parsing the output yields a program equal to the input.
/// ============================================================================
pub fn pretty_print_program(program: &Program) -> String {
    let mut out = String::new();

    out.push_str(&format!("PROGRAM {} IS\n\n", program.name));

    for (name, body) in &program.context {
        push_line(&mut out, INDENT, &format!("INSTRUCTION {} IS", name));
        out.push_str(&pretty_print_statement(body, 2 * INDENT));
        push_line(&mut out, INDENT, &format!("END {}", name));
        out.push('\n');
    }

    out.push_str("BEGIN\n");
    out.push_str(&pretty_print_statement(&program.body, INDENT));
    out.push_str(&format!("END {}\n", program.name));

    out
}

/// ============================================================================
/// pretty_print_statement
/// ============================================================================
/// Renders a `Statement` as BL source, every line prefixed with `indent`
/// spaces. A block prints its statements one after another; an empty
/// block prints nothing.
/// ============================================================================
pub fn pretty_print_statement(statement: &Statement, indent: usize) -> String {
    let mut out = String::new();
    write_statement(&mut out, statement, indent);
    out
}

fn write_statement(out: &mut String, statement: &Statement, indent: usize) {
    match statement {
        Statement::Block(statements) => {
            for stmt in statements {
                write_statement(out, stmt, indent);
            }
        }

        Statement::If { condition, body } => {
            push_line(out, indent, &format!("IF {} THEN", condition));
            write_statement(out, body, indent + INDENT);
            push_line(out, indent, "END IF");
        }

        Statement::IfElse {
            condition,
            then_branch,
            else_branch,
        } => {
            push_line(out, indent, &format!("IF {} THEN", condition));
            write_statement(out, then_branch, indent + INDENT);
            push_line(out, indent, "ELSE");
            write_statement(out, else_branch, indent + INDENT);
            push_line(out, indent, "END IF");
        }

        Statement::While { condition, body } => {
            push_line(out, indent, &format!("WHILE {} DO", condition));
            write_statement(out, body, indent + INDENT);
            push_line(out, indent, "END WHILE");
        }

        Statement::Call(name) => push_line(out, indent, name),
    }
}

fn push_line(out: &mut String, indent: usize, text: &str) {
    out.push_str(&" ".repeat(indent));
    out.push_str(text);
    out.push('\n');
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&pretty_print_program(self))
    }
}

impl fmt::Display for Statement {
    /// Prints the statement at indentation 0 without a trailing newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(pretty_print_statement(self, 0).trim_end_matches('\n'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Condition, Context};
    use crate::parser::{parse_block_source, parse_source};

    #[test]
    fn prints_empty_program() {
        let program = Program::new("p", Context::new(), Statement::empty_block());
        assert_eq!(pretty_print_program(&program), "PROGRAM p IS\n\nBEGIN\nEND p\n");
    }

    #[test]
    fn prints_nested_statements() {
        let stmt = Statement::Block(vec![
            Statement::while_do(
                Condition::True,
                Statement::Block(vec![Statement::if_else(
                    Condition::NextIsWall,
                    Statement::Block(vec![Statement::call("turnleft")]),
                    Statement::Block(vec![Statement::call("move")]),
                )]),
            ),
            Statement::call("skip"),
        ]);

        let expected = "\
WHILE true DO
  IF next-is-wall THEN
    turnleft
  ELSE
    move
  END IF
END WHILE
skip";
        assert_eq!(stmt.to_string(), expected);
    }

    #[test]
    fn prints_instructions_in_name_order() {
        let mut context = Context::new();
        context.insert("zig".to_string(), Statement::Block(vec![Statement::call("move")]));
        context.insert("alpha".to_string(), Statement::empty_block());
        let program = Program::new("p", context, Statement::Block(vec![Statement::call("zig")]));

        let expected = "\
PROGRAM p IS

  INSTRUCTION alpha IS
  END alpha

  INSTRUCTION zig IS
    move
  END zig

BEGIN
  zig
END p
";
        assert_eq!(program.to_string(), expected);
    }

    #[test]
    fn output_parses_back() {
        let src = "PROGRAM p IS INSTRUCTION a IS IF random THEN move END IF END a \
                   BEGIN WHILE next-is-not-wall DO a END WHILE END p";
        let program = parse_source(src).unwrap();
        let reparsed = parse_source(&pretty_print_program(&program)).unwrap();
        assert_eq!(program, reparsed);

        let block = parse_block_source("IF true THEN ELSE infect END IF").unwrap();
        assert_eq!(parse_block_source(&block.to_string()).unwrap(), block);
    }
}
