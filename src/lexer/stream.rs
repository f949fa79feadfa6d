/*
 * ==========================================================================
 * BLPARSE - BL Language Parser
 * ==========================================================================
 *
 * File:      stream.rs
 * Purpose:   Front-consumed token queue shared by every parse function.
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

use std::collections::VecDeque;

use crate::lexer::token::Token;
use crate::span::Span;

/// An ordered queue of tokens, consumed strictly from the front.
///
/// The stream supports only one token of lookahead (`front`) and
/// destructive removal (`dequeue`). It always ends with the
/// end-of-input sentinel, and that sentinel is never removed: once it is
/// the only token left, `dequeue` hands back a copy and leaves it in
/// place. A truncated program therefore fails with an ordinary
/// "expected X, found end of input" error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenStream {
    tokens: VecDeque<Token>,
}

#[allow(clippy::len_without_is_empty)]
impl TokenStream {
    /// Wraps a lexer token list.
    ///
    /// Everything after the first sentinel is dropped; the sentinel is
    /// appended if the list has none.
    pub fn new(tokens: Vec<Token>) -> Self {
        let mut tokens: VecDeque<Token> = tokens.into();
        match tokens.iter().position(Token::is_eof) {
            Some(eof) => tokens.truncate(eof + 1),
            None => {
                let span = tokens.back().map(|t| t.span).unwrap_or_default();
                tokens.push_back(Token::eof(span));
            }
        }
        Self { tokens }
    }

    /// Builds a stream from bare lexemes, classifying each one.
    ///
    /// Every token gets line 1 and its index as column, which is enough to
    /// tell tokens apart in diagnostics.
    ///
    /// ```text
    /// ["IF", "random", "THEN", "move", "END", "IF"]
    /// ```
    pub fn from_lexemes<I, S>(lexemes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens = lexemes
            .into_iter()
            .enumerate()
            .map(|(i, lexeme)| Token::new(lexeme, Span::new(1, i)))
            .collect();
        Self::new(tokens)
    }

    /// Returns the front token without removing it.
    pub fn front(&self) -> &Token {
        // `new` guarantees the sentinel and `dequeue` never removes it.
        &self.tokens[0]
    }

    /// Removes and returns the front token.
    pub fn dequeue(&mut self) -> Token {
        if self.tokens.len() > 1 {
            if let Some(token) = self.tokens.pop_front() {
                return token;
            }
        }
        self.front().clone()
    }

    /// Number of tokens left, sentinel included.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// `true` once only the sentinel is left, i.e. when `len()` is 1.
    pub fn at_end(&self) -> bool {
        self.tokens.len() <= 1
    }
}

impl From<Vec<Token>> for TokenStream {
    fn from(tokens: Vec<Token>) -> Self {
        Self::new(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::keywords::END_OF_INPUT;

    #[test]
    fn appends_missing_sentinel() {
        let stream = TokenStream::from_lexemes(["move"]);
        assert_eq!(stream.len(), 2);
        assert_eq!(stream.front().lexeme, "move");
    }

    #[test]
    fn keeps_existing_sentinel() {
        let stream = TokenStream::from_lexemes(["move", END_OF_INPUT]);
        assert_eq!(stream.len(), 2);
    }

    #[test]
    fn drops_tokens_after_first_sentinel() {
        let mut stream = TokenStream::from_lexemes(["move", END_OF_INPUT, "x", END_OF_INPUT]);
        assert_eq!(stream.len(), 2);
        assert_eq!(stream.dequeue().lexeme, "move");
        assert!(stream.at_end());
        assert!(stream.dequeue().is_eof());
        assert!(stream.front().is_eof());
    }

    #[test]
    fn dequeue_in_order() {
        let mut stream = TokenStream::from_lexemes(["a", "b"]);
        assert_eq!(stream.dequeue().lexeme, "a");
        assert_eq!(stream.dequeue().lexeme, "b");
        assert!(stream.at_end());
    }

    #[test]
    fn sentinel_is_never_removed() {
        let mut stream = TokenStream::from_lexemes(Vec::<String>::new());
        assert!(stream.dequeue().is_eof());
        assert!(stream.dequeue().is_eof());
        assert_eq!(stream.len(), 1);
        assert!(stream.front().is_eof());
    }
}
