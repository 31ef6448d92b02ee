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

//! Canonical BL text for statements and programs.
//!
//! A BLOCK prints as its children, one per line, so its text re-parses with
//! `str::parse::<Statement>`. Any other kind prints as that single statement
//! and re-parses with [`parse_statement_source`]. Both directions are exact as
//! long as every nested body is a BLOCK, which holds for anything the parser
//! produced.
//!
//! [`parse_statement_source`]: crate::parser::parse_statement_source

use crate::ast::Statement;
use crate::config::PrinterConfig;
use crate::program::Program;
use std::fmt;

pub struct Printer<'a> {
    config: &'a PrinterConfig,
    out: String,
}

impl<'a> Printer<'a> {
    pub fn new(config: &'a PrinterConfig) -> Self {
        Printer {
            config,
            out: String::new(),
        }
    }

    pub fn finish(self) -> String {
        self.out
    }

    fn line(&mut self, offset: usize, text: &str) {
        self.out.extend(std::iter::repeat(' ').take(offset));
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn blank(&mut self) {
        self.out.push('\n');
    }

    /// Appends `stmt` with its first line indented by `offset` spaces.
    pub fn statement(&mut self, stmt: &Statement, offset: usize) {
        let inner = offset + self.config.indent;
        match stmt {
            Statement::Block { children } => {
                for child in children {
                    self.statement(child, offset);
                }
            }
            Statement::If { condition, body } => {
                self.line(offset, &format!("IF {} THEN", condition));
                self.statement(body, inner);
                self.line(offset, "END IF");
            }
            Statement::IfElse {
                condition,
                then_body,
                else_body,
            } => {
                self.line(offset, &format!("IF {} THEN", condition));
                self.statement(then_body, inner);
                self.line(offset, "ELSE");
                self.statement(else_body, inner);
                self.line(offset, "END IF");
            }
            Statement::While { condition, body } => {
                self.line(offset, &format!("WHILE {} DO", condition));
                self.statement(body, inner);
                self.line(offset, "END WHILE");
            }
            Statement::Call { name } => {
                if self.config.explicit_calls {
                    self.line(offset, &format!("CALL {}", name));
                } else {
                    self.line(offset, name);
                }
            }
        }
    }

    /// Procedures print in name order.
    pub fn program(&mut self, program: &Program) {
        let step = self.config.indent;
        self.line(0, &format!("PROGRAM {} IS", program.name()));
        self.blank();
        for (name, body) in program.context() {
            self.line(step, &format!("PROCEDURE {} IS", name));
            self.statement(body, 2 * step);
            self.line(step, &format!("END {}", name));
            self.blank();
        }
        self.line(0, "BEGIN");
        self.statement(program.body(), step);
        self.line(0, &format!("END {}", program.name()));
    }
}

pub fn statement_to_string(stmt: &Statement, config: &PrinterConfig) -> String {
    let mut printer = Printer::new(config);
    printer.statement(stmt, 0);
    printer.finish()
}

pub fn program_to_string(program: &Program, config: &PrinterConfig) -> String {
    let mut printer = Printer::new(config);
    printer.program(program);
    printer.finish()
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&statement_to_string(self, &PrinterConfig::default()))
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&program_to_string(self, &PrinterConfig::default()))
    }
}
