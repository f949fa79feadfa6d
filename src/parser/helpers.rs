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

use crate::ast::Condition;
use crate::error::{ensure, ParseError, ParseResult};
use crate::lexer::keywords::{is_condition, is_identifier};
use crate::lexer::token::{Token, TokenKind};
use crate::parser::parser::Parser;

impl Parser<'_> {
    /// Returns the front token without consuming it.
    pub fn front(&self) -> &Token {
        self.tokens.front()
    }

    /// Consumes and returns the front token.
    pub fn advance(&mut self) -> Token {
        self.tokens.dequeue()
    }

    /// Checks for a keyword without consuming it.
    pub fn check_keyword(&self, kw: &str) -> bool {
        let token = self.front();
        token.kind == TokenKind::Keyword && token.lexeme == kw
    }

    /// Returns `true` if the front token can begin a statement:
    /// `IF`, `WHILE` or an identifier.
    pub fn can_start_statement(&self) -> bool {
        self.check_keyword("IF") || self.check_keyword("WHILE") || is_identifier(&self.front().lexeme)
    }

    /// Consumes a required keyword or fails with `KeywordExpected`.
    pub fn expect_keyword(&mut self, kw: &str) -> ParseResult<Token> {
        ensure(self.check_keyword(kw), || ParseError::keyword_expected(kw, self.front()))?;
        Ok(self.advance())
    }

    /// Consumes and returns an identifier or fails with
    /// `IdentifierExpected`. `what` names the role of the identifier in
    /// the error message (e.g. "instruction name").
    pub fn expect_identifier(&mut self, what: &str) -> ParseResult<Token> {
        ensure(is_identifier(&self.front().lexeme), || {
            ParseError::identifier_expected(what, self.front())
        })?;
        Ok(self.advance())
    }

    /// Consumes a condition literal and resolves it.
    pub fn expect_condition(&mut self) -> ParseResult<Condition> {
        ensure(is_condition(&self.front().lexeme), || ParseError::condition_expected(self.front()))?;
        let token = self.advance();
        Condition::from_lexeme(&token.lexeme).ok_or_else(|| ParseError::condition_expected(&token))
    }

    /// Consumes the closing name of a construct, which must equal `name`.
    pub fn expect_end_name(&mut self, construct: &str, name: &str) -> ParseResult<()> {
        ensure(self.front().lexeme == name, || {
            ParseError::name_mismatch(construct, name, self.front())
        })?;
        self.advance();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ParseErrorKind;
    use crate::lexer::TokenStream;
    use crate::parser::parser::Parser;

    #[test]
    fn expect_keyword_consumes_only_on_match() {
        let mut tokens = TokenStream::from_lexemes(["IS", "BEGIN"]);
        let mut parser = Parser::new(&mut tokens);

        let err = parser.expect_keyword("BEGIN").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::KeywordExpected);
        assert_eq!(parser.front().lexeme, "IS");

        assert!(parser.expect_keyword("IS").is_ok());
        assert_eq!(parser.front().lexeme, "BEGIN");
    }

    #[test]
    fn keyword_match_is_exact() {
        let mut tokens = TokenStream::from_lexemes(["is"]);
        let parser = Parser::new(&mut tokens);
        assert!(!parser.check_keyword("IS"));
    }

    #[test]
    fn statement_starters() {
        for (lexeme, starts) in [
            ("IF", true),
            ("WHILE", true),
            ("move", true),
            ("END", false),
            ("ELSE", false),
            ("BEGIN", false),
            ("random", false),
            ("?", false),
        ] {
            let mut tokens = TokenStream::from_lexemes([lexeme]);
            let parser = Parser::new(&mut tokens);
            assert_eq!(parser.can_start_statement(), starts, "{lexeme}");
        }

        let mut tokens = TokenStream::from_lexemes(Vec::<String>::new());
        assert!(!Parser::new(&mut tokens).can_start_statement());
    }

    #[test]
    fn expect_condition_resolves() {
        let mut tokens = TokenStream::from_lexemes(["next-is-friend", "THEN"]);
        let mut parser = Parser::new(&mut tokens);
        assert_eq!(
            parser.expect_condition().unwrap(),
            crate::ast::Condition::NextIsFriend
        );

        let err = parser.expect_condition().unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::ConditionExpected);
    }
}
