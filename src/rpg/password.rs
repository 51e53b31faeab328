// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustpwgen
// File: password.rs
// Author: Volker Schwaberow <volker@schwaberow.de>

//! Password derivation pipeline.
//!
//! case fold -> HMAC -> hex -> rail fence -> bounded base64 -> truncate.
//! Every stage owns its buffer and hands it to the next one; nothing is
//! kept between calls.

use std::fmt;

use tracing::debug;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::rpg::config::Configuration;
use crate::rpg::encode::{encode_bounded, natural_encoded_len};
use crate::rpg::error::PwGenError;
use crate::rpg::mac::executor::{consume_bytes, digest_to_hex};
use crate::rpg::mac::registry::{
	self, MacAlgorithmMetadata, MacError, MacExecutor,
};
use crate::rpg::transpose::rail_fence;

/// A derived password. The buffer is wiped when dropped.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Password(String);

impl Password {
	pub fn as_str(&self) -> &str {
		&self.0
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl fmt::Display for Password {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl fmt::Debug for Password {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Password(<{} chars>)", self.0.len())
	}
}

pub fn derive_password(
	config: &Configuration,
) -> Result<Password, PwGenError> {
	derive_password_with(config, registry::create_executor)
}

/// Runs the pipeline with a caller-supplied MAC factory.
pub fn derive_password_with<F>(
	config: &Configuration,
	create_executor: F,
) -> Result<Password, PwGenError>
where
	F: FnOnce(
		&str,
		&[u8],
	) -> Result<
		(Box<dyn MacExecutor>, MacAlgorithmMetadata),
		MacError,
	>,
{
	let input = Zeroizing::new(config.case().apply(config.input()));
	let (executor, metadata) = create_executor(
		config.algorithm().identifier(),
		config.key().as_bytes(),
	)?;
	debug!(
		algorithm = metadata.display_name,
		case = %config.case(),
		"computing keyed digest"
	);

	let digest =
		Zeroizing::new(consume_bytes(input.as_bytes(), executor));
	let hex = digest_to_hex(&digest)?;
	let transposed = rail_fence(&hex)?;
	debug!(
		digest_len = digest.len(),
		hex_len = hex.len(),
		natural_len = natural_encoded_len(transposed.len()),
		bound = config.length(),
		"encoding transposed digest text"
	);
	let encoded =
		encode_bounded(transposed.as_bytes(), config.length() + 1)?;
	let password = truncate_to_length(encoded, config.length())?;
	debug!(length = password.len(), "derived password");
	Ok(password)
}

/// Cuts `encoded` to exactly `length` characters.
pub fn truncate_to_length(
	mut encoded: String,
	length: usize,
) -> Result<Password, PwGenError> {
	if encoded.len() < length {
		let short = encoded.len();
		encoded.zeroize();
		return Err(PwGenError::Encoding(format!(
			"encoded text has {} characters, {} requested",
			short, length
		)));
	}
	encoded.truncate(length);
	Ok(Password(encoded))
}
