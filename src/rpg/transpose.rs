// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustpwgen
// File: transpose.rs
// Author: Volker Schwaberow <volker@schwaberow.de>

//! Two-row rail fence transposition.
//!
//! Characters at even positions come first, followed by characters at odd
//! positions, each group keeping its original order. The rail count is
//! fixed at two.

use crate::rpg::error::PwGenError;
use zeroize::Zeroizing;

pub fn rail_fence(text: &str) -> Result<Zeroizing<String>, PwGenError> {
	let mut out = Zeroizing::new(String::new());
	out.try_reserve_exact(text.len())?;
	out.extend(text.chars().step_by(2));
	out.extend(text.chars().skip(1).step_by(2));
	Ok(out)
}
