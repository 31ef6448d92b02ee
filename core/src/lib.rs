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

//! BL statement kernel: the `Statement` tree, the `Program` aggregate, and the
//! recursive-descent parser and printer that move them to and from BL text.

pub mod ast;
pub mod config;
pub mod lexer;
pub mod parser;
pub mod printer;
pub mod program;

#[cfg(test)]
mod fixtures;

pub use ast::{Condition, Kind, Statement};
pub use config::{Config, ParserConfig, PrinterConfig};
pub use parser::{ParseError, Parser, SourceError};
pub use program::{Context, Program};
