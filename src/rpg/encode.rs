// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustpwgen
// File: encode.rs
// Author: Volker Schwaberow <volker@schwaberow.de>

//! Base64 encoding into a bounded output.
//!
//! The encoder writes standard base64 (`A-Z a-z 0-9 + /`, `=` padding) one
//! 3-byte group at a time and stops as soon as the output bound is reached.
//! `capacity` counts the terminator slot of the output buffer, so at most
//! `capacity - 1` characters are produced. Data characters and `=` padding
//! past the bound are dropped, never wrapped or reordered. Passwords derived
//! with earlier releases depend on this exact cut-off.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::fmt;

const GROUP_BYTES: usize = 3;
const GROUP_CHARS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
	EmptyInput,
	ZeroCapacity,
	GroupOverflow,
}

impl fmt::Display for EncodeError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			EncodeError::EmptyInput => {
				write!(f, "nothing to encode")
			}
			EncodeError::ZeroCapacity => {
				write!(f, "output buffer has no room")
			}
			EncodeError::GroupOverflow => {
				write!(f, "encoded group exceeded four characters")
			}
		}
	}
}

impl std::error::Error for EncodeError {}

/// Number of characters the unbounded standard encoding of `len` bytes has.
pub fn natural_encoded_len(len: usize) -> usize {
	len.div_ceil(GROUP_BYTES) * GROUP_CHARS
}

pub fn encode_bounded(
	input: &[u8],
	capacity: usize,
) -> Result<String, EncodeError> {
	if input.is_empty() {
		return Err(EncodeError::EmptyInput);
	}
	if capacity == 0 {
		return Err(EncodeError::ZeroCapacity);
	}

	let limit = capacity - 1;
	let mut out = String::with_capacity(limit);
	let mut group = [0u8; GROUP_CHARS];
	for chunk in input.chunks(GROUP_BYTES) {
		if out.len() >= limit {
			break;
		}
		let written = STANDARD
			.encode_slice(chunk, &mut group)
			.map_err(|_| EncodeError::GroupOverflow)?;
		let room = limit - out.len();
		out.extend(
			group[..written].iter().take(room).map(|&b| char::from(b)),
		);
	}
	Ok(out)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn generous_capacity_matches_standard_encoding() {
		for input in [&b"f"[..], b"fo", b"foo", b"foob", b"fooba", b"foobar"]
		{
			let expected = STANDARD.encode(input);
			let got = encode_bounded(input, expected.len() + 1).unwrap();
			assert_eq!(got, expected);
		}
	}

	#[test]
	fn stops_when_bound_is_reached() {
		assert_eq!(encode_bounded(b"foobar", 7).unwrap(), "Zm9vYm");
		assert_eq!(encode_bounded(b"foobar", 1).unwrap(), "");
	}

	#[test]
	fn padding_is_cut_by_the_bound() {
		// Unbounded: "Zm9vYg==".
		assert_eq!(encode_bounded(b"foob", 7).unwrap(), "Zm9vYg");
		assert_eq!(encode_bounded(b"foob", 8).unwrap(), "Zm9vYg=");
		assert_eq!(encode_bounded(b"foob", 9).unwrap(), "Zm9vYg==");
	}

	#[test]
	fn oversized_capacity_does_not_pad_further() {
		assert_eq!(encode_bounded(b"fo", 64).unwrap(), "Zm8=");
	}

	#[test]
	fn rejects_empty_input_and_zero_capacity() {
		assert_eq!(encode_bounded(b"", 13), Err(EncodeError::EmptyInput));
		assert_eq!(
			encode_bounded(b"abc", 0),
			Err(EncodeError::ZeroCapacity)
		);
	}

	#[test]
	fn natural_length_rounds_up_to_groups() {
		assert_eq!(natural_encoded_len(64), 88);
		assert_eq!(natural_encoded_len(128), 172);
		assert_eq!(natural_encoded_len(1), 4);
	}
}
