// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustpwgen
// File: lib.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025 Volker Schwaberow

pub mod rpg {
	pub mod app;
	pub mod case;
	pub mod config;
	pub mod encode;
	pub mod error;
	pub mod mac;
	pub mod password;
	pub mod transpose;
}

pub use rpg::config::{Algorithm, Configuration};
pub use rpg::error::PwGenError;
pub use rpg::password::{derive_password, Password};
