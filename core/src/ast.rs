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

//! BL Abstract Syntax: the Statement kernel
//!
//! `Statement` is a closed tagged union with one variant per [`Kind`].
//! Every structural edit moves ownership: assemble operations consume their
//! parts, disassemble operations hand the parts back by value and leave the
//! receiver as an empty BLOCK. No operation ever aliases a nested Statement.
//!
//! Precondition violations (wrong kind, index out of range) are programming
//! errors and panic.

use crate::lexer::is_identifier;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::mem;
use std::str::FromStr;
use thiserror::Error;

// ─── Kind ────────────────────────────────────────────────────────────────────

/// Structural shape of a [`Statement`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Kind {
    Block,
    If,
    IfElse,
    While,
    Call,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Block => write!(f, "BLOCK"),
            Kind::If => write!(f, "IF"),
            Kind::IfElse => write!(f, "IF_ELSE"),
            Kind::While => write!(f, "WHILE"),
            Kind::Call => write!(f, "CALL"),
        }
    }
}

// ─── Condition ───────────────────────────────────────────────────────────────

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown condition: '{0}'")]
pub struct UnknownCondition(pub String);

/// Test guarding an IF, IF_ELSE, or WHILE statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Condition {
    NextIsEmpty,
    NextIsNotEmpty,
    NextIsWall,
    NextIsNotWall,
    NextIsFriend,
    NextIsNotFriend,
    NextIsEnemy,
    NextIsNotEnemy,
    Random,
    True,
}

impl Condition {
    pub const ALL: [Condition; 10] = [
        Condition::NextIsEmpty,
        Condition::NextIsNotEmpty,
        Condition::NextIsWall,
        Condition::NextIsNotWall,
        Condition::NextIsFriend,
        Condition::NextIsNotFriend,
        Condition::NextIsEnemy,
        Condition::NextIsNotEnemy,
        Condition::Random,
        Condition::True,
    ];

    /// Source spelling, e.g. `next-is-not-wall`.
    pub fn spelling(self) -> &'static str {
        match self {
            Condition::NextIsEmpty => "next-is-empty",
            Condition::NextIsNotEmpty => "next-is-not-empty",
            Condition::NextIsWall => "next-is-wall",
            Condition::NextIsNotWall => "next-is-not-wall",
            Condition::NextIsFriend => "next-is-friend",
            Condition::NextIsNotFriend => "next-is-not-friend",
            Condition::NextIsEnemy => "next-is-enemy",
            Condition::NextIsNotEnemy => "next-is-not-enemy",
            Condition::Random => "random",
            Condition::True => "true",
        }
    }

    pub fn from_spelling(text: &str) -> Option<Condition> {
        Condition::ALL.into_iter().find(|c| c.spelling() == text)
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.spelling())
    }
}

impl FromStr for Condition {
    type Err = UnknownCondition;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Condition::from_spelling(s).ok_or_else(|| UnknownCondition(s.to_string()))
    }
}

// ─── Statement ───────────────────────────────────────────────────────────────

/// A BL statement tree.
///
/// Nested bodies are normally BLOCKs; the parser only ever produces BLOCK
/// bodies, but the type itself does not forbid other shapes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Statement {
    Block {
        children: Vec<Statement>,
    },
    If {
        condition: Condition,
        body: Box<Statement>,
    },
    IfElse {
        condition: Condition,
        then_body: Box<Statement>,
        else_body: Box<Statement>,
    },
    While {
        condition: Condition,
        body: Box<Statement>,
    },
    Call {
        name: String,
    },
}

impl Default for Statement {
    fn default() -> Self {
        Statement::new()
    }
}

impl Statement {
    /// A fresh, empty BLOCK.
    pub fn new() -> Self {
        Statement::Block {
            children: Vec::new(),
        }
    }

    pub fn kind(&self) -> Kind {
        match self {
            Statement::Block { .. } => Kind::Block,
            Statement::If { .. } => Kind::If,
            Statement::IfElse { .. } => Kind::IfElse,
            Statement::While { .. } => Kind::While,
            Statement::Call { .. } => Kind::Call,
        }
    }

    /// True for the canonical freshly-constructed state.
    pub fn is_empty_block(&self) -> bool {
        matches!(self, Statement::Block { children } if children.is_empty())
    }

    /// Children of a BLOCK, `None` for any other kind.
    pub fn block(&self) -> Option<&[Statement]> {
        match self {
            Statement::Block { children } => Some(children),
            _ => None,
        }
    }

    /// Guard of an IF, IF_ELSE, or WHILE.
    pub fn condition(&self) -> Option<Condition> {
        match self {
            Statement::If { condition, .. }
            | Statement::IfElse { condition, .. }
            | Statement::While { condition, .. } => Some(*condition),
            _ => None,
        }
    }

    pub fn call_name(&self) -> Option<&str> {
        match self {
            Statement::Call { name } => Some(name),
            _ => None,
        }
    }

    fn require_kind(&self, kind: Kind, op: &str) {
        assert!(
            self.kind() == kind,
            "{} requires a {} statement, found {}",
            op,
            kind,
            self.kind()
        );
    }

    fn require_empty_block(&self, op: &str) {
        assert!(
            self.is_empty_block(),
            "{} requires an empty BLOCK receiver, found {}",
            op,
            self.kind()
        );
    }

    fn children_mut(&mut self, op: &str) -> &mut Vec<Statement> {
        self.require_kind(Kind::Block, op);
        match self {
            Statement::Block { children } => children,
            _ => unreachable!(),
        }
    }

    // ─── Block Operations ────────────────────────────────────────────────

    /// Number of children of a BLOCK.
    ///
    /// # Panics
    /// If the receiver is not a BLOCK.
    pub fn length_of_block(&self) -> usize {
        self.require_kind(Kind::Block, "length_of_block");
        self.block().map_or(0, <[Statement]>::len)
    }

    /// Inserts `child` at `index`, shifting later children right.
    ///
    /// # Panics
    /// If the receiver is not a BLOCK or `index > length_of_block()`.
    pub fn add_to_block(&mut self, index: usize, child: Statement) {
        let children = self.children_mut("add_to_block");
        assert!(
            index <= children.len(),
            "add_to_block index {} out of range for block of length {}",
            index,
            children.len()
        );
        children.insert(index, child);
    }

    /// Removes and returns the child at `index`, shifting later children left.
    ///
    /// # Panics
    /// If the receiver is not a BLOCK or `index >= length_of_block()`.
    pub fn remove_from_block(&mut self, index: usize) -> Statement {
        let children = self.children_mut("remove_from_block");
        assert!(
            index < children.len(),
            "remove_from_block index {} out of range for block of length {}",
            index,
            children.len()
        );
        children.remove(index)
    }

    // ─── Assemble / Disassemble ──────────────────────────────────────────

    /// Turns an empty BLOCK into `IF condition THEN body END IF`.
    pub fn assemble_if(&mut self, condition: Condition, body: Statement) {
        self.require_empty_block("assemble_if");
        *self = Statement::If {
            condition,
            body: Box::new(body),
        };
    }

    /// Inverse of [`Statement::assemble_if`]; the receiver becomes an empty BLOCK.
    pub fn disassemble_if(&mut self) -> (Condition, Statement) {
        self.require_kind(Kind::If, "disassemble_if");
        match mem::take(self) {
            Statement::If { condition, body } => (condition, *body),
            _ => unreachable!(),
        }
    }

    pub fn assemble_if_else(
        &mut self,
        condition: Condition,
        then_body: Statement,
        else_body: Statement,
    ) {
        self.require_empty_block("assemble_if_else");
        *self = Statement::IfElse {
            condition,
            then_body: Box::new(then_body),
            else_body: Box::new(else_body),
        };
    }

    /// Returns `(condition, then_body, else_body)`.
    pub fn disassemble_if_else(&mut self) -> (Condition, Statement, Statement) {
        self.require_kind(Kind::IfElse, "disassemble_if_else");
        match mem::take(self) {
            Statement::IfElse {
                condition,
                then_body,
                else_body,
            } => (condition, *then_body, *else_body),
            _ => unreachable!(),
        }
    }

    pub fn assemble_while(&mut self, condition: Condition, body: Statement) {
        self.require_empty_block("assemble_while");
        *self = Statement::While {
            condition,
            body: Box::new(body),
        };
    }

    pub fn disassemble_while(&mut self) -> (Condition, Statement) {
        self.require_kind(Kind::While, "disassemble_while");
        match mem::take(self) {
            Statement::While { condition, body } => (condition, *body),
            _ => unreachable!(),
        }
    }

    /// # Panics
    /// If the receiver is not an empty BLOCK or `name` is not a BL identifier.
    pub fn assemble_call(&mut self, name: impl Into<String>) {
        self.require_empty_block("assemble_call");
        let name = name.into();
        assert!(
            is_identifier(&name),
            "assemble_call requires an identifier, found '{}'",
            name
        );
        *self = Statement::Call { name };
    }

    pub fn disassemble_call(&mut self) -> String {
        self.require_kind(Kind::Call, "disassemble_call");
        match mem::take(self) {
            Statement::Call { name } => name,
            _ => unreachable!(),
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
