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

use crate::lexer::token::Token;
use crate::span::Span;

pub struct Lexer {
    chars: Vec<char>,
    current: usize,
    line: usize,
    line_start: usize,
    pub tokens: Vec<Token>,
}

impl Lexer {
    /// Creates a new BL lexer instance from raw source code.
    ///
    /// # Returns
    /// A fully initialized `Lexer` with:
    /// - Cursor at position `0`
    /// - Line counter set to `1`
    /// - Empty token output buffer
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            current: 0,
            line: 1,
            line_start: 0,
            tokens: Vec::new(),
        }
    }

    /// Performs complete lexical analysis over the entire source input.
    ///
    /// # Behavior
    /// - Ignores whitespace and `#` comments
    /// - Emits classified `Token` objects
    /// - Guarantees exactly one terminating `TokenKind::Eof` marker
    ///
    /// Call it once per lexer; a second call appends another sentinel.
    pub fn scan_tokens(&mut self) {
        while !self.is_at_end() {
            self.scan_token();
        }

        let span = self.span_at(self.current);
        self.tokens.push(Token::eof(span));
    }

    /// Scans and emits a single token from the source stream.
    ///
    /// Words (letters, digits, `-`, `_`) are emitted whole; any other
    /// visible character becomes a one-character token, which the parser
    /// will later reject as unclassified.
    fn scan_token(&mut self) {
        let start = self.current;
        let ch = self.advance();

        match ch {
            // Whitespace
            ' ' | '\r' | '\t' => {}
            '\n' => self.new_line(),

            // Comment to end of line
            '#' => {
                while self.peek() != '\n' && !self.is_at_end() {
                    self.advance();
                }
            }

            c if is_word_char(c) => self.word(start),

            c if c.is_whitespace() => {}

            _ => {
                let span = self.span_at(start);
                self.tokens.push(Token::new(ch.to_string(), span));
            }
        }
    }

    /// Scans the rest of a word that started at `start`.
    ///
    /// Classification into keyword, condition, identifier or unknown is
    /// done by `Token::new`.
    fn word(&mut self, start: usize) {
        while is_word_char(self.peek()) {
            self.advance();
        }

        let text: String = self.chars[start..self.current].iter().collect();
        let span = self.span_at(start);
        self.tokens.push(Token::new(text, span));
    }

    fn new_line(&mut self) {
        self.line += 1;
        self.line_start = self.current;
    }

    fn span_at(&self, offset: usize) -> Span {
        Span::new(self.line, offset - self.line_start)
    }

    /// Advances the lexer cursor by one character.
    ///
    /// # Panics
    /// Panics if the cursor is already past the last character.
    fn advance(&mut self) -> char {
        let ch = self.chars[self.current];
        self.current += 1;
        ch
    }

    /// Returns the current character without consuming it, or `'\0'` at
    /// end of input.
    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.chars[self.current]
        }
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.chars.len()
    }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}
