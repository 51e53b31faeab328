// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustpwgen
// File: error.rs
// Author: Volker Schwaberow <volker@schwaberow.de>

//! Error taxonomy shared by every pipeline stage.

use std::collections::TryReserveError;
use std::fmt;

use crate::rpg::config::ConfigError;
use crate::rpg::encode::EncodeError;
use crate::rpg::mac::registry::MacError;

#[derive(Debug)]
pub enum PwGenError {
	/// Rejected before any derivation work starts.
	Config(ConfigError),
	/// An intermediate buffer could not be reserved.
	Allocation(TryReserveError),
	/// The MAC stage was handed an algorithm it does not know.
	Algorithm(MacError),
	Encoding(String),
}

impl PwGenError {
	pub fn is_config(&self) -> bool {
		matches!(self, PwGenError::Config(_))
	}
}

impl fmt::Display for PwGenError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			PwGenError::Config(err) => write!(f, "{}", err),
			PwGenError::Allocation(_) => {
				write!(f, "Memory allocation failed")
			}
			PwGenError::Algorithm(err) => write!(f, "{}", err),
			PwGenError::Encoding(msg) => {
				write!(f, "Failed to generate password: {}", msg)
			}
		}
	}
}

impl std::error::Error for PwGenError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			PwGenError::Config(err) => Some(err),
			PwGenError::Allocation(err) => Some(err),
			PwGenError::Algorithm(err) => Some(err),
			PwGenError::Encoding(_) => None,
		}
	}
}

impl From<ConfigError> for PwGenError {
	fn from(err: ConfigError) -> Self {
		PwGenError::Config(err)
	}
}

impl From<TryReserveError> for PwGenError {
	fn from(err: TryReserveError) -> Self {
		PwGenError::Allocation(err)
	}
}

impl From<MacError> for PwGenError {
	fn from(err: MacError) -> Self {
		PwGenError::Algorithm(err)
	}
}

impl From<EncodeError> for PwGenError {
	fn from(err: EncodeError) -> Self {
		PwGenError::Encoding(err.to_string())
	}
}
