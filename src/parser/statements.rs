/*
 * ==========================================================================
 * BLPARSE - BL Language Parser
 * ==========================================================================
 *
 * Statement-Level Parsing Logic
 *
 * This file contains the grammar rules that turn BL statements into
 * `Statement` trees:
 *
 * ```text
 * Block     := Statement*
 * Statement := If | While | Call
 * If        := "IF" cond "THEN" Block ("ELSE" Block)? "END" "IF"
 * While     := "WHILE" cond "DO" Block "END" "WHILE"
 * Call      := id
 * ```
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

use tracing::trace;

use crate::ast::Statement;
use crate::error::{ensure, ParseError, ParseResult};
use crate::lexer::keywords::is_identifier;
use crate::parser::parser::Parser;

impl Parser<'_> {
    /// Parses a single BL statement.
    ///
    /// This is the **main dispatcher** for all statement grammar forms.
    /// It inspects the front token and routes to the matching rule:
    /// - `IF`        → `if_statement`
    /// - `WHILE`     → `while_statement`
    /// - identifier  → `call_statement`
    ///
    /// Any other token is an `UnrecognizedStatementStart` error.
    pub fn statement(&mut self) -> ParseResult<Statement> {
        let lexeme = self.front().lexeme.clone();
        trace!(token = %lexeme, span = ?self.front().span, "statement");

        match lexeme.as_str() {
            "IF" if self.check_keyword("IF") => self.if_statement(),
            "WHILE" if self.check_keyword("WHILE") => self.while_statement(),
            name if is_identifier(name) => self.call_statement(),
            _ => Err(ParseError::unrecognized_statement_start(self.front())),
        }
    }

    /// Parses statements until the front token cannot begin one.
    ///
    /// The terminating token (`END`, `ELSE`, `BEGIN`, end of input, …) is
    /// left in the stream for the caller to check.
    pub fn block(&mut self) -> ParseResult<Statement> {
        let mut statements = Vec::new();

        while self.can_start_statement() {
            statements.push(self.statement()?);
        }

        Ok(Statement::Block(statements))
    }

    /// Parses an `IF` or `IF … ELSE` statement.
    ///
    /// ```text
    /// IF next-is-wall THEN
    ///     turnleft
    /// ELSE
    ///     move
    /// END IF
    /// ```
    pub fn if_statement(&mut self) -> ParseResult<Statement> {
        self.expect_keyword("IF")?;
        let condition = self.expect_condition()?;
        self.expect_keyword("THEN")?;

        let then_branch = self.block()?;

        ensure(self.check_keyword("ELSE") || self.check_keyword("END"), || {
            ParseError::keywords_expected(&["ELSE", "END"], self.front())
        })?;

        let statement = if self.check_keyword("ELSE") {
            self.advance();
            let else_branch = self.block()?;
            Statement::if_else(condition, then_branch, else_branch)
        } else {
            Statement::if_then(condition, then_branch)
        };

        self.expect_keyword("END")?;
        self.expect_keyword("IF")?;

        Ok(statement)
    }

    /// Parses a `WHILE` loop.
    pub fn while_statement(&mut self) -> ParseResult<Statement> {
        self.expect_keyword("WHILE")?;
        let condition = self.expect_condition()?;
        self.expect_keyword("DO")?;

        let body = self.block()?;

        self.expect_keyword("END")?;
        self.expect_keyword("WHILE")?;

        Ok(Statement::while_do(condition, body))
    }

    /// Parses an instruction call: a single identifier.
    pub fn call_statement(&mut self) -> ParseResult<Statement> {
        let name = self.expect_identifier("called instruction")?;
        Ok(Statement::Call(name.lexeme))
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::{Condition, Statement};
    use crate::error::ParseErrorKind;
    use crate::lexer::TokenStream;
    use crate::parser::{parse_block, parse_statement};

    fn stream(src: &str) -> TokenStream {
        TokenStream::from_lexemes(src.split_whitespace())
    }

    fn block(statements: Vec<Statement>) -> Statement {
        Statement::Block(statements)
    }

    #[test]
    fn if_without_else() {
        let mut tokens = stream("IF next-is-wall THEN x END IF");
        let stmt = parse_statement(&mut tokens).unwrap();
        assert_eq!(
            stmt,
            Statement::if_then(Condition::NextIsWall, block(vec![Statement::call("x")]))
        );
        assert!(tokens.at_end());
    }

    #[test]
    fn if_with_else() {
        let mut tokens = stream("IF random THEN turnleft ELSE turnright move END IF");
        let stmt = parse_statement(&mut tokens).unwrap();
        assert_eq!(
            stmt,
            Statement::if_else(
                Condition::Random,
                block(vec![Statement::call("turnleft")]),
                block(vec![Statement::call("turnright"), Statement::call("move")]),
            )
        );
    }

    #[test]
    fn while_loop() {
        let mut tokens = stream("WHILE next-is-empty DO x END WHILE");
        let stmt = parse_statement(&mut tokens).unwrap();
        assert_eq!(
            stmt,
            Statement::while_do(Condition::NextIsEmpty, block(vec![Statement::call("x")]))
        );
    }

    #[test]
    fn call_consumes_one_token() {
        let mut tokens = stream("hop skip");
        assert_eq!(parse_statement(&mut tokens).unwrap(), Statement::call("hop"));
        assert_eq!(tokens.front().lexeme, "skip");
    }

    #[test]
    fn empty_bodies_are_allowed() {
        let mut tokens = stream("IF true THEN ELSE END IF");
        let stmt = parse_statement(&mut tokens).unwrap();
        assert_eq!(
            stmt,
            Statement::if_else(Condition::True, block(vec![]), block(vec![]))
        );
    }

    #[test]
    fn nested_statements_keep_order() {
        let src = "infect WHILE true DO IF next-is-enemy THEN infect END IF move END WHILE skip";
        let mut tokens = stream(src);
        let stmt = parse_block(&mut tokens).unwrap();
        assert_eq!(
            stmt,
            block(vec![
                Statement::call("infect"),
                Statement::while_do(
                    Condition::True,
                    block(vec![
                        Statement::if_then(
                            Condition::NextIsEnemy,
                            block(vec![Statement::call("infect")])
                        ),
                        Statement::call("move"),
                    ])
                ),
                Statement::call("skip"),
            ])
        );
    }

    #[test]
    fn block_stops_without_consuming() {
        for terminator in ["END", "ELSE", "BEGIN"] {
            let mut tokens = stream(&format!("move {terminator} x"));
            let stmt = parse_block(&mut tokens).unwrap();
            assert_eq!(stmt, block(vec![Statement::call("move")]));
            assert_eq!(tokens.front().lexeme, terminator);
        }
    }

    #[test]
    fn empty_block_at_end_of_input() {
        let mut tokens = stream("");
        assert_eq!(parse_block(&mut tokens).unwrap(), block(vec![]));
        assert!(tokens.at_end());
    }

    #[test]
    fn missing_then() {
        let err = parse_statement(&mut stream("IF random move END IF")).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::KeywordExpected);
        assert!(err.message.contains("THEN"), "{}", err.message);
    }

    #[test]
    fn missing_do() {
        let err = parse_statement(&mut stream("WHILE true move END WHILE")).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::KeywordExpected);
    }

    #[test]
    fn bad_condition() {
        let err = parse_statement(&mut stream("IF move THEN END IF")).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::ConditionExpected);

        let err = parse_statement(&mut stream("WHILE NEXT-IS-WALL DO END WHILE")).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::ConditionExpected);
    }

    #[test]
    fn mismatched_closers() {
        let err = parse_statement(&mut stream("IF true THEN move END WHILE")).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::KeywordExpected);

        let err = parse_statement(&mut stream("WHILE true DO move END IF")).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::KeywordExpected);
    }

    #[test]
    fn then_block_must_end_in_else_or_end() {
        let err = parse_statement(&mut stream("IF true THEN move BEGIN")).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::KeywordExpected);
        assert!(err.message.contains("ELSE"), "{}", err.message);
    }

    #[test]
    fn truncated_input() {
        let err = parse_statement(&mut stream("WHILE true DO move")).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::KeywordExpected);
        assert!(err.message.ends_with("end of input"), "{}", err.message);
    }

    #[test]
    fn unrecognized_start() {
        for src in ["END", "THEN", "random", "%", ""] {
            let err = parse_statement(&mut stream(src)).unwrap_err();
            assert_eq!(err.kind, ParseErrorKind::UnrecognizedStatementStart, "{src:?}");
        }
    }
}
