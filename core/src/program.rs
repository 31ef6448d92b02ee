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

//! BL Program: a name, a procedure context, and a main body.

use crate::ast::{Kind, Statement};
use crate::config::ParserConfig;
use crate::lexer::is_identifier;
use crate::parser::{parse_program_source, ParseError, Parser, SourceError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::Read;
use std::mem;
use std::str::FromStr;

/// Instructions built into BL; no procedure may take one of these names.
pub const PRIMITIVE_INSTRUCTIONS: [&str; 5] = ["move", "turnleft", "turnright", "infect", "skip"];

/// Procedure name → procedure body.
pub type Context = BTreeMap<String, Statement>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    name: String,
    context: Context,
    body: Statement,
}

impl Default for Program {
    fn default() -> Self {
        Program::new()
    }
}

impl Program {
    /// `("Unnamed", {}, empty BLOCK)`.
    pub fn new() -> Self {
        Program {
            name: "Unnamed".to_string(),
            context: Context::new(),
            body: Statement::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// # Panics
    /// If `name` is not an identifier.
    pub fn set_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        assert!(
            is_identifier(&name),
            "set_name requires an identifier, found '{}'",
            name
        );
        self.name = name;
    }

    pub fn new_context(&self) -> Context {
        Context::new()
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    /// Installs `context` and hands back the one it replaces.
    pub fn swap_context(&mut self, context: Context) -> Context {
        mem::replace(&mut self.context, context)
    }

    pub fn new_body(&self) -> Statement {
        Statement::new()
    }

    pub fn body(&self) -> &Statement {
        &self.body
    }

    /// Installs `body` and hands back the one it replaces.
    ///
    /// # Panics
    /// If `body` is not a BLOCK.
    pub fn swap_body(&mut self, body: Statement) -> Statement {
        assert!(
            body.kind() == Kind::Block,
            "swap_body requires a BLOCK body, found {}",
            body.kind()
        );
        mem::replace(&mut self.body, body)
    }

    /// Replaces the receiver with the program read from `parser`. On error
    /// the receiver is left untouched.
    pub fn parse(&mut self, parser: &mut Parser) -> Result<(), ParseError> {
        *self = parser.parse_program()?;
        Ok(())
    }

    /// Reads all of `reader` and parses it. The reader is dropped before
    /// this returns, whatever the outcome.
    pub fn parse_reader<R: Read>(&mut self, reader: R, file: &str) -> Result<(), SourceError> {
        self.parse_reader_with(reader, file, &ParserConfig::default())
    }

    pub fn parse_reader_with<R: Read>(
        &mut self,
        mut reader: R,
        file: &str,
        config: &ParserConfig,
    ) -> Result<(), SourceError> {
        let mut source = String::new();
        reader.read_to_string(&mut source)?;
        drop(reader);

        let mut parser = Parser::from_source(&source, file)?.with_config(config);
        self.parse(&mut parser)?;
        Ok(())
    }
}

impl FromStr for Program {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_program_source(s, "<string>")
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
