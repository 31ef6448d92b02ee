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

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid value for {param}: {value}")]
    InvalidValue { param: String, value: String },
}

/// Recursive-descent limits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Deepest block nesting accepted before `ParseError::TooDeep`.
    pub max_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig { max_depth: 256 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrinterConfig {
    /// Spaces per nesting level.
    pub indent: usize,
    /// Print calls as `CALL name` instead of a bare `name`.
    pub explicit_calls: bool,
}

impl Default for PrinterConfig {
    fn default() -> Self {
        PrinterConfig {
            indent: 4,
            explicit_calls: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub parser: ParserConfig,
    pub printer: PrinterConfig,
}

impl Config {
    /// Reads a config from JSON; absent fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.parser.max_depth == 0 {
            return Err(ConfigError::InvalidValue {
                param: "parser.max_depth".into(),
                value: "0".into(),
            });
        }
        Ok(())
    }
}
