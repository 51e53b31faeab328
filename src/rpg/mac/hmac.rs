// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustpwgen
// File: hmac.rs
// Author: Volker Schwaberow <volker@schwaberow.de>

//! HMAC executors over SHA-256 and SHA-512.

use super::registry::{
	MacAlgorithm, MacAlgorithmMetadata, MacError, MacErrorKind,
	MacExecutor,
};
use digest::OutputSizeUser;
use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha512};

type HmacSha256 = Hmac<Sha256>;
type HmacSha512 = Hmac<Sha512>;

pub fn catalog() -> &'static [MacAlgorithm] {
	const ALGORITHMS: &[MacAlgorithm] = &[
		MacAlgorithm::new(
			MacAlgorithmMetadata::new("SHA256", "HMAC-SHA256", 32),
			create_hmac_sha256,
		),
		MacAlgorithm::new(
			MacAlgorithmMetadata::new("SHA512", "HMAC-SHA512", 64),
			create_hmac_sha512,
		),
	];
	ALGORITHMS
}

enum HmacVariant {
	Sha256(HmacSha256),
	Sha512(HmacSha512),
}

struct HmacExecutor {
	inner: HmacVariant,
}

impl MacExecutor for HmacExecutor {
	fn update(&mut self, data: &[u8]) {
		match &mut self.inner {
			HmacVariant::Sha256(mac) => mac.update(data),
			HmacVariant::Sha512(mac) => mac.update(data),
		}
	}

	fn output_len(&self) -> usize {
		match self.inner {
			HmacVariant::Sha256(_) => HmacSha256::output_size(),
			HmacVariant::Sha512(_) => HmacSha512::output_size(),
		}
	}

	fn finalize(self: Box<Self>) -> Vec<u8> {
		match self.inner {
			HmacVariant::Sha256(mac) => {
				mac.finalize().into_bytes().to_vec()
			}
			HmacVariant::Sha512(mac) => {
				mac.finalize().into_bytes().to_vec()
			}
		}
	}
}

fn create_hmac_sha256(
	key: &[u8],
) -> Result<Box<dyn MacExecutor>, MacError> {
	let mac = HmacSha256::new_from_slice(key).map_err(|_| {
		MacError::new(
			MacErrorKind::InvalidKeyLength,
			"HMAC key was rejected by the SHA-256 backend",
		)
	})?;
	Ok(Box::new(HmacExecutor {
		inner: HmacVariant::Sha256(mac),
	}))
}

fn create_hmac_sha512(
	key: &[u8],
) -> Result<Box<dyn MacExecutor>, MacError> {
	let mac = HmacSha512::new_from_slice(key).map_err(|_| {
		MacError::new(
			MacErrorKind::InvalidKeyLength,
			"HMAC key was rejected by the SHA-512 backend",
		)
	})?;
	Ok(Box::new(HmacExecutor {
		inner: HmacVariant::Sha512(mac),
	}))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn metadata_matches_native_output_size() {
		for algorithm in catalog() {
			let executor = (algorithm.factory)(b"k").expect("executor");
			assert_eq!(
				executor.output_len(),
				algorithm.metadata.digest_len
			);
			assert_eq!(
				executor.finalize().len(),
				algorithm.metadata.digest_len
			);
		}
	}

	#[test]
	fn keys_longer_than_block_size_are_accepted() {
		let key = [0x42u8; 200];
		assert!(create_hmac_sha256(&key).is_ok());
		assert!(create_hmac_sha512(&key).is_ok());
	}
}
