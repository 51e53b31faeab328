// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustpwgen
// File: config.rs
// Author: Volker Schwaberow <volker@schwaberow.de>

//! Validated derivation settings.
//!
//! A [`Configuration`] can only be obtained through validation, so the
//! pipeline never sees an out-of-range length, an unknown case mode, or an
//! empty input or key.

use std::fmt;
use std::str::FromStr;

use strum::{Display, EnumIter, EnumString};
use zeroize::Zeroizing;

pub use crate::rpg::case::CaseMode;

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_PASSWORD_LENGTH: usize = 32;
pub const DEFAULT_PASSWORD_LENGTH: usize = 12;
pub const MAX_INPUT_LENGTH: usize = 1024;
pub const DEFAULT_ALGORITHM: &str = "SHA256";
pub const DEFAULT_CASE: &str = "none";

#[derive(
	Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumIter, EnumString,
)]
pub enum Algorithm {
	#[default]
	#[strum(serialize = "SHA256")]
	Sha256,
	#[strum(serialize = "SHA512")]
	Sha512,
}

impl Algorithm {
	/// Identifier understood by the MAC registry.
	pub fn identifier(self) -> &'static str {
		match self {
			Algorithm::Sha256 => "SHA256",
			Algorithm::Sha512 => "SHA512",
		}
	}
}

/// Uppercases `name` and drops every `-`, so `sha-256` becomes `SHA256`.
pub fn normalize_algorithm_name(name: &str) -> String {
	name.chars()
		.filter(|&c| c != '-')
		.map(|c| c.to_ascii_uppercase())
		.collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
	InvalidLength(i64),
	EmptyInputOrKey,
	InputTooLong(usize),
	InvalidAlgorithm(String),
	InvalidCase(String),
}

impl fmt::Display for ConfigError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ConfigError::InvalidLength(_) => write!(
				f,
				"Password length must be between {} and {}",
				MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH
			),
			ConfigError::EmptyInputOrKey => {
				write!(f, "Input and key cannot be empty")
			}
			ConfigError::InputTooLong(len) => write!(
				f,
				"Input must be at most {} characters (got {})",
				MAX_INPUT_LENGTH, len
			),
			ConfigError::InvalidAlgorithm(name) => {
				write!(f, "Invalid algorithm '{}'", name)
			}
			ConfigError::InvalidCase(name) => {
				write!(f, "Invalid case type '{}'", name)
			}
		}
	}
}

impl std::error::Error for ConfigError {}

/// Unvalidated option values as they arrive from the command line.
#[derive(Clone)]
pub struct RawOptions {
	pub algorithm: String,
	pub length: i64,
	pub case: String,
	pub input: String,
	pub key: String,
}

impl Default for RawOptions {
	fn default() -> Self {
		Self {
			algorithm: DEFAULT_ALGORITHM.to_string(),
			length: DEFAULT_PASSWORD_LENGTH as i64,
			case: DEFAULT_CASE.to_string(),
			input: String::new(),
			key: String::new(),
		}
	}
}

pub struct Configuration {
	algorithm: Algorithm,
	length: usize,
	case: CaseMode,
	input: Zeroizing<String>,
	key: Zeroizing<String>,
}

impl Configuration {
	pub fn new(
		algorithm: Algorithm,
		length: usize,
		case: CaseMode,
		input: impl Into<String>,
		key: impl Into<String>,
	) -> Result<Self, ConfigError> {
		let input = Zeroizing::new(input.into());
		let key = Zeroizing::new(key.into());
		check_length(i64::try_from(length).unwrap_or(i64::MAX))?;
		check_secrets(&input, &key)?;
		Ok(Self {
			algorithm,
			length,
			case,
			input,
			key,
		})
	}

	/// Checks run in a fixed order: length, input and key, algorithm, case.
	/// The first failure is reported.
	pub fn from_raw(raw: RawOptions) -> Result<Self, ConfigError> {
		let RawOptions {
			algorithm,
			length,
			case,
			input,
			key,
		} = raw;
		let input = Zeroizing::new(input);
		let key = Zeroizing::new(key);

		let length = check_length(length)?;
		check_secrets(&input, &key)?;
		let normalized = normalize_algorithm_name(&algorithm);
		let algorithm = Algorithm::from_str(&normalized)
			.map_err(|_| ConfigError::InvalidAlgorithm(algorithm))?;
		let case = CaseMode::from_str(&case)
			.map_err(|_| ConfigError::InvalidCase(case))?;

		Ok(Self {
			algorithm,
			length,
			case,
			input,
			key,
		})
	}

	pub fn algorithm(&self) -> Algorithm {
		self.algorithm
	}

	pub fn length(&self) -> usize {
		self.length
	}

	pub fn case(&self) -> CaseMode {
		self.case
	}

	pub fn input(&self) -> &str {
		&self.input
	}

	pub fn key(&self) -> &str {
		&self.key
	}
}

impl fmt::Debug for Configuration {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Configuration")
			.field("algorithm", &self.algorithm)
			.field("length", &self.length)
			.field("case", &self.case)
			.field("input", &"<redacted>")
			.field("key", &"<redacted>")
			.finish()
	}
}

fn check_length(length: i64) -> Result<usize, ConfigError> {
	match usize::try_from(length) {
		Ok(len)
			if (MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH)
				.contains(&len) =>
		{
			Ok(len)
		}
		_ => Err(ConfigError::InvalidLength(length)),
	}
}

fn check_secrets(input: &str, key: &str) -> Result<(), ConfigError> {
	if input.is_empty() || key.is_empty() {
		return Err(ConfigError::EmptyInputOrKey);
	}
	let chars = input.chars().count();
	if chars > MAX_INPUT_LENGTH {
		return Err(ConfigError::InputTooLong(chars));
	}
	Ok(())
}
