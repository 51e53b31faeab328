// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustpwgen
// File: app.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025 Volker Schwaberow

use crate::rpg::config::{
	Configuration, RawOptions, DEFAULT_ALGORITHM, DEFAULT_CASE,
};
use crate::rpg::password::derive_password;
use clap::{Arg, ArgAction, ArgMatches};
use clap_complete::{generate, Generator, Shell};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

const BIN_NAME: &str = "pw_gen";

const HELP_TEMPLATE: &str = "{before-help}{name} {version}
Written by {author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

const EXAMPLES: &str = "Example:
  pw_gen -a SHA512 -l 16 -c lower \"user@example.com\" \"mykey\"
  pw_gen \"user@example.com\" \"mykey\"";

pub fn build_cli() -> clap::Command {
	clap::Command::new(BIN_NAME)
		.color(clap::ColorChoice::Never)
		.help_template(HELP_TEMPLATE)
		.bin_name(BIN_NAME)
		.version(clap::crate_version!())
		.author(clap::crate_authors!())
		.about("Derive a reproducible password from an input and a key")
		.after_help(EXAMPLES)
		.arg(
			Arg::new("algorithm")
				.short('a')
				.long("algorithm")
				.value_name("ALGO")
				.help("Hash algorithm (SHA256 or SHA512)")
				.default_value(DEFAULT_ALGORITHM),
		)
		.arg(
			Arg::new("length")
				.short('l')
				.long("length")
				.value_name("LENGTH")
				.help("Password length (8-32) [default: 12]")
				.value_parser(clap::value_parser!(i64))
				.allow_negative_numbers(true),
		)
		.arg(
			Arg::new("case")
				.short('c')
				.long("case")
				.value_name("CASE")
				.help("Case conversion applied to INPUT (none, lower, upper)")
				.default_value(DEFAULT_CASE),
		)
		.arg(
			Arg::new("verbose")
				.short('v')
				.long("verbose")
				.help("Log pipeline stages to stderr")
				.action(ArgAction::SetTrue),
		)
		.arg(
			Arg::new("completions")
				.long("completions")
				.value_name("SHELL")
				.value_parser(clap::value_parser!(Shell))
				.help("Print shell completions and exit"),
		)
		.arg(
			Arg::new("INPUT")
				.help("Text the password is derived from")
				.required_unless_present("completions"),
		)
		.arg(
			Arg::new("KEY")
				.help("Secret key for the keyed hash")
				.required_unless_present("completions"),
		)
}

/// Collects option values without judging them; validation happens in
/// [`Configuration::from_raw`].
pub fn raw_options(matches: &ArgMatches) -> RawOptions {
	let defaults = RawOptions::default();
	RawOptions {
		algorithm: matches
			.get_one::<String>("algorithm")
			.cloned()
			.unwrap_or(defaults.algorithm),
		length: matches
			.get_one::<i64>("length")
			.copied()
			.unwrap_or(defaults.length),
		case: matches
			.get_one::<String>("case")
			.cloned()
			.unwrap_or(defaults.case),
		input: matches
			.get_one::<String>("INPUT")
			.cloned()
			.unwrap_or_default(),
		key: matches
			.get_one::<String>("KEY")
			.cloned()
			.unwrap_or_default(),
	}
}

pub fn run() -> ExitCode {
	let m = build_cli().get_matches();
	init_logging(m.get_flag("verbose"));

	if let Some(shell) = m.get_one::<Shell>("completions") {
		print_completions(*shell, &mut build_cli());
		return ExitCode::SUCCESS;
	}

	let config = match Configuration::from_raw(raw_options(&m)) {
		Ok(config) => config,
		Err(err) => {
			eprintln!("Error: {}", err);
			eprintln!("{}", build_cli().render_help());
			return ExitCode::FAILURE;
		}
	};
	debug!(?config, "configuration accepted");

	let password = match derive_password(&config) {
		Ok(password) => password,
		Err(err) => {
			eprintln!("Error: {}", err);
			return ExitCode::FAILURE;
		}
	};

	let mut stdout = io::stdout().lock();
	match writeln!(stdout, "{}", password).and_then(|_| stdout.flush()) {
		Ok(()) => ExitCode::SUCCESS,
		Err(err) => {
			eprintln!("Error: failed to write password: {}", err);
			ExitCode::FAILURE
		}
	}
}

/// `RUST_LOG` takes precedence; otherwise only warnings are shown unless
/// `--verbose` is given.
fn init_logging(verbose: bool) {
	let default_filter = if verbose { "debug" } else { "warn" };
	let env_filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(default_filter));
	let subscriber = FmtSubscriber::builder()
		.with_env_filter(env_filter)
		.with_writer(io::stderr)
		.with_ansi(false)
		.with_target(false)
		.finish();
	if tracing::subscriber::set_global_default(subscriber).is_err() {
		eprintln!("Unable to set global default subscriber");
	}
}

fn print_completions<G: Generator>(gen: G, cmd: &mut clap::Command) {
	generate(
		gen,
		cmd,
		cmd.get_name().to_string(),
		&mut std::io::stdout(),
	);
}
