// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustpwgen
// File: executor.rs
// Author: Volker Schwaberow <volker@schwaberow.de>

//! Helpers that drive a MAC executor and expand its digest to hex text.

use super::registry::MacExecutor;
use crate::rpg::error::PwGenError;
use zeroize::Zeroizing;

pub fn consume_bytes(
	data: &[u8],
	mut executor: Box<dyn MacExecutor>,
) -> Vec<u8> {
	executor.update(data);
	executor.finalize()
}

/// Renders `bytes` as lowercase hex, two characters per byte.
pub fn digest_to_hex(
	bytes: &[u8],
) -> Result<Zeroizing<String>, PwGenError> {
	let mut buf: Zeroizing<Vec<u8>> = Zeroizing::new(Vec::new());
	buf.try_reserve_exact(bytes.len() * 2)?;
	buf.resize(bytes.len() * 2, 0);
	hex::encode_to_slice(bytes, &mut buf[..])
		.map_err(|err| PwGenError::Encoding(err.to_string()))?;

	let mut out = Zeroizing::new(String::new());
	out.try_reserve_exact(buf.len())?;
	out.extend(buf.iter().map(|&b| char::from(b)));
	Ok(out)
}
