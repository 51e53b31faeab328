// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustpwgen
// File: main.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025 Volker Schwaberow

use rustpwgen::rpg::app;
use std::process::ExitCode;

fn main() -> ExitCode {
	app::run()
}
