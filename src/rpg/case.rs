// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustpwgen
// File: case.rs
// Author: Volker Schwaberow <volker@schwaberow.de>

//! Case folding applied to the input text before it is authenticated.
//! The key is never folded.

use strum::{Display, EnumIter, EnumString};

/// Only ASCII letters are folded; other characters pass through unchanged.
#[derive(
	Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumIter, EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum CaseMode {
	#[default]
	None,
	Lower,
	Upper,
}

impl CaseMode {
	pub fn apply(self, text: &str) -> String {
		match self {
			CaseMode::None => text.to_owned(),
			CaseMode::Lower => text.to_ascii_lowercase(),
			CaseMode::Upper => text.to_ascii_uppercase(),
		}
	}
}
