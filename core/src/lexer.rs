/*
 * Copyright (c) 2026 Mohamad Al-Zawahreh (dba Sovereign Systems).
 *
 * This file is part of the BL Statement Kernel.
 *
 * LICENSE: DUAL-LICENSED (AGPLv3 or COMMERCIAL).
 *
 * 1. OPEN SOURCE: You may use this file under the terms of the GNU Affero
 * General Public License v3.0. If you link to this code, your ENTIRE
 * application must be open-sourced under AGPLv3.
 *
 * 2. COMMERCIAL: For proprietary use, you must obtain a Commercial License
 * from Sovereign Systems.
 *
 * PATENT NOTICE: Protected by US Patent App #63/935,467.
 * NO IMPLIED LICENSE to rights of Mohamad Al-Zawahreh or Sovereign Systems.
 */

//! BL Lexer
//!
//! Splits BL source text into keywords, condition spellings, and identifiers.
//! `#` starts a comment that runs to end of line.

use crate::ast::Condition;
use crate::parser::ParseError;
use std::fmt;

// ─── Token Types ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Program,
    Procedure,
    /// Legacy spelling of `PROCEDURE`.
    Instruction,
    Is,
    Begin,
    End,
    If,
    Then,
    Else,
    While,
    Do,
    Call,
}

impl Keyword {
    pub const ALL: [Keyword; 12] = [
        Keyword::Program,
        Keyword::Procedure,
        Keyword::Instruction,
        Keyword::Is,
        Keyword::Begin,
        Keyword::End,
        Keyword::If,
        Keyword::Then,
        Keyword::Else,
        Keyword::While,
        Keyword::Do,
        Keyword::Call,
    ];

    pub fn spelling(self) -> &'static str {
        match self {
            Keyword::Program => "PROGRAM",
            Keyword::Procedure => "PROCEDURE",
            Keyword::Instruction => "INSTRUCTION",
            Keyword::Is => "IS",
            Keyword::Begin => "BEGIN",
            Keyword::End => "END",
            Keyword::If => "IF",
            Keyword::Then => "THEN",
            Keyword::Else => "ELSE",
            Keyword::While => "WHILE",
            Keyword::Do => "DO",
            Keyword::Call => "CALL",
        }
    }

    pub fn from_spelling(text: &str) -> Option<Keyword> {
        Keyword::ALL.into_iter().find(|k| k.spelling() == text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    Keyword(Keyword),
    Condition(Condition),
    Identifier(String),
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Keyword(k) => f.write_str(k.spelling()),
            TokenKind::Condition(c) => f.write_str(c.spelling()),
            TokenKind::Identifier(name) => f.write_str(name),
            TokenKind::Eof => f.write_str("end of input"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub line: u32,
    pub col: u32,
}

impl Token {
    pub fn new(kind: TokenKind, line: u32, col: u32) -> Self {
        Token { kind, line, col }
    }

    pub fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }
}

fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '-'
}

fn classify(word: String) -> TokenKind {
    if let Some(k) = Keyword::from_spelling(&word) {
        TokenKind::Keyword(k)
    } else if let Some(c) = Condition::from_spelling(&word) {
        TokenKind::Condition(c)
    } else {
        TokenKind::Identifier(word)
    }
}

/// True iff `text` is a BL identifier: a letter followed by letters, digits,
/// or `-`, and not a keyword or condition spelling.
pub fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(is_word_char)
        && Keyword::from_spelling(text).is_none()
        && Condition::from_spelling(text).is_none()
}

// ─── Lexer ───────────────────────────────────────────────────────────────────

pub struct Lexer {
    source: Vec<char>,
    pos: usize,
    line: u32,
    col: u32,
    file: String,
}

impl Lexer {
    pub fn new(source: &str, file: &str) -> Self {
        Lexer {
            source: source.chars().collect(),
            pos: 0,
            line: 1,
            col: 1,
            file: file.to_string(),
        }
    }

    /// Whole-input tokenization; the result always ends with an `Eof` token.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, ParseError> {
        let mut tokens = Vec::new();
        loop {
            self.skip_whitespace_and_comments();
            if self.pos >= self.source.len() {
                tokens.push(Token::new(TokenKind::Eof, self.line, self.col));
                break;
            }
            let tok = self.next_token()?;
            tokens.push(tok);
        }
        tracing::trace!(file = %self.file, count = tokens.len(), "tokenized source");
        Ok(tokens)
    }

    fn peek(&self) -> Option<char> {
        self.source.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.source.get(self.pos).copied()?;
        self.pos += 1;
        if ch == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        Some(ch)
    }

    fn skip_whitespace_and_comments(&mut self) {
        loop {
            while let Some(ch) = self.peek() {
                if ch.is_whitespace() {
                    self.advance();
                } else {
                    break;
                }
            }

            if self.peek() == Some('#') {
                while let Some(ch) = self.peek() {
                    if ch == '\n' {
                        break;
                    }
                    self.advance();
                }
                continue;
            }

            break;
        }
    }

    fn next_token(&mut self) -> Result<Token, ParseError> {
        let start_line = self.line;
        let start_col = self.col;

        let ch = self.peek().ok_or_else(|| ParseError::UnexpectedEof {
            expected: "token".into(),
            line: start_line,
            col: start_col,
            file: self.file.clone(),
        })?;

        if !is_word_char(ch) {
            return Err(ParseError::Syntax {
                message: format!("Unexpected character: '{}'", ch),
                line: start_line,
                col: start_col,
                file: self.file.clone(),
            });
        }

        let mut word = String::new();
        while let Some(c) = self.peek() {
            if is_word_char(c) {
                word.push(c);
                self.advance();
            } else {
                break;
            }
        }

        if !ch.is_ascii_alphabetic() {
            return Err(ParseError::Syntax {
                message: format!("Malformed token '{}': must start with a letter", word),
                line: start_line,
                col: start_col,
                file: self.file.clone(),
            });
        }

        Ok(Token::new(classify(word), start_line, start_col))
    }
}

/// Tokenizes `source`, tagging errors with `file`.
pub fn tokenize(source: &str, file: &str) -> Result<Vec<Token>, ParseError> {
    Lexer::new(source, file).tokenize()
}

// ─── Tests ───────────────────────────────────────────────────────────────────
