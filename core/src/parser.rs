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

//! BL Source Parser (recursive descent)
//!
//! Builds [`Statement`] trees and [`Program`]s from lexer tokens.
//!
//! ```text
//! program    ::= PROGRAM id IS procedure* BEGIN block END id
//! procedure  ::= (PROCEDURE | INSTRUCTION) id IS block END id
//! block      ::= statement*
//! statement  ::= IF cond THEN block [ELSE block] END IF
//!              | WHILE cond DO block END WHILE
//!              | [CALL] id
//! ```
//!
//! A block stops, without consuming, at `END`, `ELSE`, or end of input.
//! `parse_block` and the control-statement routines recurse into each other;
//! recursion depth is bounded by [`ParserConfig::max_depth`].

use crate::ast::{Condition, Statement};
use crate::config::ParserConfig;
use crate::lexer::{tokenize, Keyword, Token, TokenKind};
use crate::program::{Context, Program, PRIMITIVE_INSTRUCTIONS};
use std::io;
use std::str::FromStr;
use thiserror::Error;

// ─── Error Types ─────────────────────────────────────────────────────────────

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Syntax Error at {file}:{line}:{col}: {message}")]
    Syntax {
        message: String,
        line: u32,
        col: u32,
        file: String,
    },
    #[error("Unexpected token: expected {expected}, found {found} at {file}:{line}:{col}")]
    UnexpectedToken {
        expected: String,
        found: String,
        line: u32,
        col: u32,
        file: String,
    },
    #[error("Name mismatch at {file}:{line}:{col}: '{opening}' closed by '{closing}'")]
    NameMismatch {
        opening: String,
        closing: String,
        line: u32,
        col: u32,
        file: String,
    },
    #[error("Duplicate procedure '{name}' at {file}:{line}:{col}")]
    DuplicateProcedure {
        name: String,
        line: u32,
        col: u32,
        file: String,
    },
    #[error("Procedure '{name}' redefines a primitive instruction at {file}:{line}:{col}")]
    PrimitiveRedefinition {
        name: String,
        line: u32,
        col: u32,
        file: String,
    },
    #[error("Nesting deeper than {limit} blocks at {file}:{line}:{col}")]
    TooDeep {
        limit: usize,
        line: u32,
        col: u32,
        file: String,
    },
    #[error("Unexpected end of input at {file}:{line}:{col}: expected {expected}")]
    UnexpectedEof {
        expected: String,
        line: u32,
        col: u32,
        file: String,
    },
}

impl ParseError {
    fn unexpected(expected: impl Into<String>, tok: &Token, file: &str) -> Self {
        if tok.is_eof() {
            return ParseError::UnexpectedEof {
                expected: expected.into(),
                line: tok.line,
                col: tok.col,
                file: file.to_string(),
            };
        }
        ParseError::UnexpectedToken {
            expected: expected.into(),
            found: tok.kind.to_string(),
            line: tok.line,
            col: tok.col,
            file: file.to_string(),
        }
    }
}

/// Failure of a reader-based parse.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

// ─── Parser ──────────────────────────────────────────────────────────────────

pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    file: String,
    depth: usize,
    max_depth: usize,
    eof: Token,
}

impl Parser {
    pub fn new(tokens: Vec<Token>, file: &str) -> Self {
        let eof = match tokens.last() {
            Some(last) => Token::new(TokenKind::Eof, last.line, last.col),
            None => Token::new(TokenKind::Eof, 1, 1),
        };
        Parser {
            tokens,
            pos: 0,
            file: file.to_string(),
            depth: 0,
            max_depth: ParserConfig::default().max_depth,
            eof,
        }
    }

    pub fn from_source(source: &str, file: &str) -> Result<Self, ParseError> {
        Ok(Parser::new(tokenize(source, file)?, file))
    }

    pub fn with_config(mut self, config: &ParserConfig) -> Self {
        self.max_depth = config.max_depth;
        self
    }

    fn peek(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&self.eof)
    }

    fn advance(&mut self) -> Token {
        let tok = self.peek().clone();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }

    fn check(&self, keyword: Keyword) -> bool {
        self.peek().kind == TokenKind::Keyword(keyword)
    }

    fn expect(&mut self, keyword: Keyword) -> Result<Token, ParseError> {
        if self.check(keyword) {
            Ok(self.advance())
        } else {
            Err(ParseError::unexpected(
                keyword.spelling(),
                self.peek(),
                &self.file,
            ))
        }
    }

    fn expect_identifier(&mut self, what: &str) -> Result<(String, Token), ParseError> {
        let tok = self.peek().clone();
        match &tok.kind {
            TokenKind::Identifier(name) => {
                let name = name.clone();
                self.advance();
                Ok((name, tok))
            }
            _ => Err(ParseError::unexpected(what, &tok, &self.file)),
        }
    }

    fn expect_condition(&mut self) -> Result<Condition, ParseError> {
        let tok = self.peek().clone();
        match tok.kind {
            TokenKind::Condition(c) => {
                self.advance();
                Ok(c)
            }
            _ => Err(ParseError::unexpected("condition", &tok, &self.file)),
        }
    }

    /// True once every token except the trailing `Eof` has been consumed.
    pub fn at_end(&self) -> bool {
        self.peek().is_eof()
    }

    /// Fails unless every token has been consumed.
    pub fn expect_end(&self) -> Result<(), ParseError> {
        if self.at_end() {
            Ok(())
        } else {
            Err(ParseError::unexpected(
                "end of input",
                self.peek(),
                &self.file,
            ))
        }
    }

    fn nested<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        if self.depth >= self.max_depth {
            let tok = self.peek();
            tracing::debug!(file = %self.file, limit = self.max_depth, "nesting limit reached");
            return Err(ParseError::TooDeep {
                limit: self.max_depth,
                line: tok.line,
                col: tok.col,
                file: self.file.clone(),
            });
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    // ─── Block ───────────────────────────────────────────────────────────

    /// Parses statements until `END`, `ELSE`, or end of input, none of which
    /// is consumed.
    pub fn parse_block(&mut self) -> Result<Statement, ParseError> {
        self.nested(|p| {
            let mut block = Statement::new();
            loop {
                match &p.peek().kind {
                    TokenKind::Keyword(Keyword::End | Keyword::Else) | TokenKind::Eof => break,
                    _ => {
                        let stmt = p.parse_statement()?;
                        let len = block.length_of_block();
                        block.add_to_block(len, stmt);
                    }
                }
            }
            Ok(block)
        })
    }

    /// Parses exactly one IF, IF_ELSE, WHILE, or CALL.
    pub fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        match &self.peek().kind {
            TokenKind::Keyword(Keyword::If) => self.parse_if(),
            TokenKind::Keyword(Keyword::While) => self.parse_while(),
            TokenKind::Keyword(Keyword::Call) | TokenKind::Identifier(_) => self.parse_call(),
            _ => Err(ParseError::unexpected("statement", self.peek(), &self.file)),
        }
    }

    // ─── Statements ──────────────────────────────────────────────────────

    /// `IF cond THEN block END IF`, or the IF_ELSE form when an `ELSE`
    /// appears before the terminator.
    pub fn parse_if(&mut self) -> Result<Statement, ParseError> {
        self.parse_conditional(false)
    }

    /// Like [`Parser::parse_if`] but the `ELSE` branch is mandatory.
    pub fn parse_if_else(&mut self) -> Result<Statement, ParseError> {
        self.parse_conditional(true)
    }

    fn parse_conditional(&mut self, require_else: bool) -> Result<Statement, ParseError> {
        self.expect(Keyword::If)?;
        let condition = self.expect_condition()?;
        self.expect(Keyword::Then)?;
        let then_body = self.parse_block()?;

        let mut stmt = Statement::new();
        if self.check(Keyword::Else) {
            self.advance();
            let else_body = self.parse_block()?;
            stmt.assemble_if_else(condition, then_body, else_body);
        } else if require_else {
            return Err(ParseError::unexpected("ELSE", self.peek(), &self.file));
        } else {
            stmt.assemble_if(condition, then_body);
        }

        self.expect(Keyword::End)?;
        self.expect(Keyword::If)?;
        Ok(stmt)
    }

    pub fn parse_while(&mut self) -> Result<Statement, ParseError> {
        self.expect(Keyword::While)?;
        let condition = self.expect_condition()?;
        self.expect(Keyword::Do)?;
        let body = self.parse_block()?;
        self.expect(Keyword::End)?;
        self.expect(Keyword::While)?;

        let mut stmt = Statement::new();
        stmt.assemble_while(condition, body);
        Ok(stmt)
    }

    /// `[CALL] name`.
    pub fn parse_call(&mut self) -> Result<Statement, ParseError> {
        if self.check(Keyword::Call) {
            self.advance();
        }
        let (name, _) = self.expect_identifier("procedure name")?;
        let mut stmt = Statement::new();
        stmt.assemble_call(name);
        Ok(stmt)
    }

    // ─── Program ─────────────────────────────────────────────────────────

    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        self.expect(Keyword::Program)?;
        let (name, _) = self.expect_identifier("program name")?;
        self.expect(Keyword::Is)?;

        let mut program = Program::new();
        let mut context = program.new_context();
        while self.check(Keyword::Procedure) || self.check(Keyword::Instruction) {
            let (proc_name, body) = self.parse_procedure(&context)?;
            context.insert(proc_name, body);
        }

        self.expect(Keyword::Begin)?;
        let body = self.parse_block()?;
        self.expect(Keyword::End)?;
        self.expect_closing_name(&name)?;
        self.expect_end()?;

        tracing::debug!(
            file = %self.file,
            program = %name,
            procedures = context.len(),
            statements = body.length_of_block(),
            "parsed program"
        );

        program.set_name(name);
        program.swap_context(context);
        program.swap_body(body);
        Ok(program)
    }

    fn parse_procedure(&mut self, context: &Context) -> Result<(String, Statement), ParseError> {
        self.advance();
        let (name, name_tok) = self.expect_identifier("procedure name")?;
        if PRIMITIVE_INSTRUCTIONS.contains(&name.as_str()) {
            return Err(ParseError::PrimitiveRedefinition {
                name,
                line: name_tok.line,
                col: name_tok.col,
                file: self.file.clone(),
            });
        }
        if context.contains_key(&name) {
            return Err(ParseError::DuplicateProcedure {
                name,
                line: name_tok.line,
                col: name_tok.col,
                file: self.file.clone(),
            });
        }

        self.expect(Keyword::Is)?;
        let body = self.parse_block()?;
        self.expect(Keyword::End)?;
        self.expect_closing_name(&name)?;

        tracing::trace!(file = %self.file, procedure = %name, "parsed procedure");
        Ok((name, body))
    }

    fn expect_closing_name(&mut self, opening: &str) -> Result<(), ParseError> {
        let (closing, tok) = self.expect_identifier(opening)?;
        if closing != opening {
            return Err(ParseError::NameMismatch {
                opening: opening.to_string(),
                closing,
                line: tok.line,
                col: tok.col,
                file: self.file.clone(),
            });
        }
        Ok(())
    }
}

// ─── Entry Points ────────────────────────────────────────────────────────────

/// Parses `source` as a single block that must consume the whole input.
pub fn parse_block_source(source: &str, file: &str) -> Result<Statement, ParseError> {
    let mut parser = Parser::from_source(source, file)?;
    let block = parser.parse_block()?;
    parser.expect_end()?;
    Ok(block)
}

/// Parses `source` as one non-BLOCK statement that must consume the whole
/// input. This is the inverse of printing an IF, IF_ELSE, WHILE, or CALL.
pub fn parse_statement_source(source: &str, file: &str) -> Result<Statement, ParseError> {
    let mut parser = Parser::from_source(source, file)?;
    let stmt = parser.parse_statement()?;
    parser.expect_end()?;
    Ok(stmt)
}

pub fn parse_program_source(source: &str, file: &str) -> Result<Program, ParseError> {
    Parser::from_source(source, file)?.parse_program()
}

impl Statement {
    /// Fills an empty BLOCK receiver with the next block from `parser`. On
    /// error the receiver is left untouched.
    ///
    /// # Panics
    /// If the receiver is not an empty BLOCK.
    pub fn parse_block(&mut self, parser: &mut Parser) -> Result<(), ParseError> {
        assert!(
            self.is_empty_block(),
            "parse_block requires an empty BLOCK receiver, found {}",
            self.kind()
        );
        *self = parser.parse_block()?;
        Ok(())
    }
}

impl FromStr for Statement {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_block_source(s, "<string>")
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Kind;
    use crate::fixtures;

    fn call(name: &str) -> Statement {
        let mut s = Statement::new();
        s.assemble_call(name);
        s
    }

    #[test]
    fn test_parse_statement_sample() {
        let mut block = parse_block_source(&fixtures::statement_sample(), "statement-sample.bl")
            .unwrap();
        assert_eq!(block.kind(), Kind::Block);
        assert_eq!(block.length_of_block(), 5);

        let mut first = block.remove_from_block(0);
        assert_eq!(first.disassemble_call(), "look-for-something");
        assert_eq!(block.remove_from_block(0).kind(), Kind::If);
        assert_eq!(block.remove_from_block(0).kind(), Kind::IfElse);
        assert_eq!(block.remove_from_block(0).kind(), Kind::While);
        assert_eq!(block.remove_from_block(0), call("go-home"));
    }

    #[test]
    fn test_statement_parse_block_into_receiver() {
        let mut parser = Parser::from_source("move IF true THEN skip END IF END", "t.bl").unwrap();
        let mut s = Statement::new();
        s.parse_block(&mut parser).unwrap();
        assert_eq!(s.length_of_block(), 2);
        assert!(!parser.at_end());
    }

    #[test]
    fn test_statement_parse_failure_leaves_receiver_empty() {
        let mut parser = Parser::from_source("move WHILE true DO skip", "t.bl").unwrap();
        let mut s = Statement::new();
        assert!(s.parse_block(&mut parser).is_err());
        assert!(s.is_empty_block());
    }

    #[test]
    #[should_panic(expected = "parse_block requires an empty BLOCK receiver")]
    fn test_statement_parse_block_on_populated_receiver_panics() {
        let mut parser = Parser::from_source("move", "t.bl").unwrap();
        let mut s: Statement = "skip".parse().unwrap();
        let _ = s.parse_block(&mut parser);
    }

    #[test]
    fn test_parse_if_builds_nested_block() {
        let mut block = parse_block_source("IF next-is-enemy THEN infect END IF", "t.bl").unwrap();
        let mut stmt = block.remove_from_block(0);
        let (c, mut body) = stmt.disassemble_if();
        assert_eq!(c, Condition::NextIsEnemy);
        assert_eq!(body.length_of_block(), 1);
        assert_eq!(body.remove_from_block(0), call("infect"));
    }

    #[test]
    fn test_else_turns_if_into_if_else() {
        let block = parse_block_source(
            "IF next-is-wall THEN turnleft ELSE move move END IF",
            "t.bl",
        )
        .unwrap();
        assert_eq!(block.length_of_block(), 1);
        let mut stmt = block.block().unwrap()[0].clone();
        let (c, then_body, else_body) = stmt.disassemble_if_else();
        assert_eq!(c, Condition::NextIsWall);
        assert_eq!(then_body.length_of_block(), 1);
        assert_eq!(else_body.length_of_block(), 2);
    }

    #[test]
    fn test_parse_if_else_requires_else() {
        let mut parser = Parser::from_source("IF true THEN move END IF", "t.bl").unwrap();
        let err = parser.parse_if_else().unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedToken { ref expected, ref found, .. }
            if expected == "ELSE" && found == "END"));
    }

    #[test]
    fn test_parse_if_else_success() {
        let mut parser =
            Parser::from_source("IF next-is-friend THEN skip ELSE infect END IF move", "t.bl")
                .unwrap();
        let mut stmt = parser.parse_if_else().unwrap();
        assert_eq!(stmt.kind(), Kind::IfElse);
        assert_eq!(parser.peek().kind, TokenKind::Identifier("move".into()));

        let (c, then_body, else_body) = stmt.disassemble_if_else();
        assert_eq!(c, Condition::NextIsFriend);
        assert_eq!(then_body.block().unwrap(), &[call("skip")]);
        assert_eq!(else_body.block().unwrap(), &[call("infect")]);
    }

    #[test]
    fn test_parse_statement_source_single_statement() {
        let stmt = parse_statement_source("WHILE true DO move END WHILE", "t.bl").unwrap();
        assert_eq!(stmt.kind(), Kind::While);
        assert_eq!(parse_statement_source("CALL go-home", "t.bl").unwrap(), call("go-home"));
    }

    #[test]
    fn test_parse_statement_source_rejects_extra_input() {
        let err = parse_statement_source("move skip", "t.bl").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedToken { ref expected, line: 1, col: 6, .. }
            if expected == "end of input"));
        let err = parse_statement_source("", "t.bl").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedEof { ref expected, .. }
            if expected == "statement"));
    }

    #[test]
    fn test_parse_while_and_explicit_call() {
        let mut parser =
            Parser::from_source("WHILE true DO CALL move END WHILE", "t.bl").unwrap();
        let mut stmt = parser.parse_while().unwrap();
        assert!(parser.at_end());
        let (c, body) = stmt.disassemble_while();
        assert_eq!(c, Condition::True);
        assert_eq!(body.block().unwrap(), &[call("move")]);
    }

    #[test]
    fn test_empty_bodies() {
        let block = parse_block_source("WHILE random DO END WHILE", "t.bl").unwrap();
        let mut expected = Statement::new();
        expected.assemble_while(Condition::Random, Statement::new());
        assert_eq!(block.block().unwrap(), &[expected]);
    }

    #[test]
    fn test_block_stops_at_terminator() {
        let mut parser = Parser::from_source("move skip END", "t.bl").unwrap();
        let block = parser.parse_block().unwrap();
        assert_eq!(block.length_of_block(), 2);
        assert!(!parser.at_end());
        assert!(parser.expect_end().is_err());
    }

    #[test]
    fn test_missing_terminator_is_eof_error() {
        let err = parse_block_source("WHILE true DO\n    move", "t.bl").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnexpectedEof {
                expected: "END".into(),
                line: 2,
                col: 9,
                file: "t.bl".into()
            }
        );
        assert_eq!(
            err.to_string(),
            "Unexpected end of input at t.bl:2:9: expected END"
        );
    }

    #[test]
    fn test_eof_position_without_trailing_token() {
        let tokens = vec![Token::new(TokenKind::Keyword(Keyword::While), 3, 5)];
        let mut parser = Parser::new(tokens, "raw");
        let err = parser.parse_while().unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedEof { line: 3, col: 5, .. }));
    }

    #[test]
    fn test_mismatched_terminator() {
        let err = parse_block_source("IF true THEN move END WHILE", "t.bl").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedToken { ref expected, line: 1, col: 23, .. }
            if expected == "IF"));
    }

    #[test]
    fn test_unknown_statement_keyword() {
        let err = parse_block_source("move THEN", "t.bl").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedToken { ref expected, ref found, .. }
            if expected == "statement" && found == "THEN"));
    }

    #[test]
    fn test_condition_required() {
        let err = parse_block_source("IF move THEN END IF", "t.bl").unwrap_err();
        assert!(err.to_string().contains("expected condition, found move"));
    }

    #[test]
    fn test_stray_else_at_top_level() {
        assert!(parse_block_source("move ELSE skip", "t.bl").is_err());
    }

    #[test]
    fn test_depth_limit() {
        let source = "WHILE true DO ".repeat(4) + &"END WHILE ".repeat(4);
        let config = ParserConfig { max_depth: 4 };
        let mut parser = Parser::from_source(&source, "deep.bl")
            .unwrap()
            .with_config(&config);
        let err = parser.parse_block().unwrap_err();
        assert!(matches!(err, ParseError::TooDeep { limit: 4, .. }));

        let config = ParserConfig { max_depth: 5 };
        let mut parser = Parser::from_source(&source, "deep.bl")
            .unwrap()
            .with_config(&config);
        assert!(parser.parse_block().is_ok());
    }

    #[test]
    fn test_default_depth_handles_deep_nesting() {
        let source = "IF true THEN ".repeat(100) + &"END IF ".repeat(100);
        let block = parse_block_source(&source, "deep.bl").unwrap();
        assert_eq!(block.length_of_block(), 1);
    }

    #[test]
    fn test_parse_program_sample() {
        let p = parse_program_source(&fixtures::program_sample(), "program-sample.bl").unwrap();
        assert_eq!(p.name(), "Test");
        assert_eq!(p.context().len(), 2);
        assert!(p.context().contains_key("one"));
        assert!(p.context().contains_key("two"));
        let body = p.body().block().unwrap();
        assert_eq!(body[1].kind(), Kind::If);
        assert_eq!(body[2].kind(), Kind::IfElse);
        assert_eq!(body[3].kind(), Kind::While);
    }

    #[test]
    fn test_instruction_keyword_accepted() {
        let source = "PROGRAM P IS INSTRUCTION hop IS move move END hop BEGIN hop END P";
        let p = parse_program_source(source, "t.bl").unwrap();
        assert_eq!(p.context()["hop"].length_of_block(), 2);
    }

    #[test]
    fn test_program_name_mismatch() {
        let err = parse_program_source("PROGRAM A IS BEGIN move END B", "t.bl").unwrap_err();
        assert!(matches!(err, ParseError::NameMismatch { ref opening, ref closing, .. }
            if opening == "A" && closing == "B"));
    }

    #[test]
    fn test_procedure_name_mismatch() {
        let source = "PROGRAM A IS PROCEDURE x IS move END y BEGIN END A";
        let err = parse_program_source(source, "t.bl").unwrap_err();
        assert!(matches!(err, ParseError::NameMismatch { ref opening, .. } if opening == "x"));
    }

    #[test]
    fn test_duplicate_procedure() {
        let source = "PROGRAM A IS
            PROCEDURE x IS move END x
            PROCEDURE x IS skip END x
        BEGIN x END A";
        let err = parse_program_source(source, "t.bl").unwrap_err();
        assert!(matches!(err, ParseError::DuplicateProcedure { ref name, line: 3, .. } if name == "x"));
    }

    #[test]
    fn test_primitive_redefinition() {
        let source = "PROGRAM A IS PROCEDURE move IS skip END move BEGIN END A";
        let err = parse_program_source(source, "t.bl").unwrap_err();
        assert!(matches!(err, ParseError::PrimitiveRedefinition { ref name, .. } if name == "move"));
    }

    #[test]
    fn test_trailing_tokens_after_program() {
        let err = parse_program_source("PROGRAM A IS BEGIN END A move", "t.bl").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedToken { ref expected, .. }
            if expected == "end of input"));
    }

    #[test]
    fn test_parser_over_tokens_without_eof() {
        let tokens = vec![Token::new(TokenKind::Identifier("move".into()), 1, 1)];
        let mut parser = Parser::new(tokens, "raw");
        let block = parser.parse_block().unwrap();
        assert_eq!(block.block().unwrap(), &[call("move")]);
        assert!(parser.at_end());
    }
}
