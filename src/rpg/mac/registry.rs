// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustpwgen
// File: registry.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025

//! Registry of the keyed hash algorithms the pipeline can run, with factory
//! dispatch by identifier.

use std::borrow::Cow;

use super::hmac;

pub trait MacExecutor: Send + 'static {
	fn update(&mut self, data: &[u8]);
	fn output_len(&self) -> usize;
	fn finalize(self: Box<Self>) -> Vec<u8>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MacAlgorithmMetadata {
	pub identifier: &'static str,
	pub display_name: &'static str,
	pub digest_len: usize,
}

impl MacAlgorithmMetadata {
	pub const fn new(
		identifier: &'static str,
		display_name: &'static str,
		digest_len: usize,
	) -> Self {
		Self {
			identifier,
			display_name,
			digest_len,
		}
	}
}

pub type MacFactory =
	fn(&[u8]) -> Result<Box<dyn MacExecutor>, MacError>;

#[derive(Clone, Copy)]
pub struct MacAlgorithm {
	pub metadata: MacAlgorithmMetadata,
	pub factory: MacFactory,
}

impl MacAlgorithm {
	pub const fn new(
		metadata: MacAlgorithmMetadata,
		factory: MacFactory,
	) -> Self {
		Self { metadata, factory }
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MacErrorKind {
	UnsupportedAlgorithm,
	InvalidKeyLength,
}

#[derive(Debug)]
pub struct MacError {
	kind: MacErrorKind,
	message: Cow<'static, str>,
}

impl MacError {
	pub fn new(
		kind: MacErrorKind,
		message: impl Into<Cow<'static, str>>,
	) -> Self {
		Self {
			kind,
			message: message.into(),
		}
	}

	pub fn kind(&self) -> MacErrorKind {
		self.kind
	}

	pub fn message(&self) -> &str {
		self.message.as_ref()
	}
}

impl std::fmt::Display for MacError {
	fn fmt(
		&self,
		f: &mut std::fmt::Formatter<'_>,
	) -> std::fmt::Result {
		write!(f, "{}", self.message)
	}
}

impl std::error::Error for MacError {}

pub fn algorithms() -> impl Iterator<Item = &'static MacAlgorithm> {
	hmac::catalog().iter()
}

pub fn metadata() -> Vec<MacAlgorithmMetadata> {
	algorithms().map(|alg| alg.metadata).collect()
}

/// Identifiers are matched exactly. Normalizing user spellings such as
/// `sha-256` is the configuration layer's job.
pub fn find_algorithm(
	identifier: &str,
) -> Option<&'static MacAlgorithm> {
	algorithms().find(|alg| alg.metadata.identifier == identifier)
}

pub fn create_executor(
	identifier: &str,
	key: &[u8],
) -> Result<(Box<dyn MacExecutor>, MacAlgorithmMetadata), MacError> {
	let algorithm = find_algorithm(identifier).ok_or_else(|| {
		MacError::new(
			MacErrorKind::UnsupportedAlgorithm,
			format!("Unsupported algorithm '{}'", identifier),
		)
	})?;
	let executor = (algorithm.factory)(key)?;
	Ok((executor, algorithm.metadata))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn catalog_lists_both_variants() {
		let ids: Vec<&str> =
			metadata().iter().map(|meta| meta.identifier).collect();
		assert_eq!(ids, vec!["SHA256", "SHA512"]);
	}

	#[test]
	fn lookup_is_exact() {
		assert!(find_algorithm("SHA256").is_some());
		assert!(find_algorithm("sha256").is_none());
		assert!(find_algorithm("SHA-512").is_none());
	}

	#[test]
	fn unknown_identifier_is_rejected() {
		let err = create_executor("MD5", b"key")
			.err()
			.expect("MD5 must not resolve");
		assert_eq!(err.kind(), MacErrorKind::UnsupportedAlgorithm);
		assert_eq!(err.message(), "Unsupported algorithm 'MD5'");
	}
}
