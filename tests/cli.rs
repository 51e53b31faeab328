// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustpwgen

use std::process::{Command, Output};

fn pw_gen(args: &[&str]) -> Output {
	Command::new(assert_cmd::cargo::cargo_bin!("pw_gen"))
		.env_remove("RUST_LOG")
		.args(args)
		.output()
		.expect("failed to run pw_gen")
}

#[test]
fn prints_reference_password_and_newline() {
	let output = pw_gen(&["user@example.com", "mykey"]);
	assert!(output.status.success());
	assert_eq!(String::from_utf8_lossy(&output.stdout), "MmU4ZjFlOTg1\n");
	assert!(output.stderr.is_empty());
}

#[test]
fn options_select_algorithm_length_and_case() {
	let output = pw_gen(&[
		"-a",
		"sha-512",
		"-l",
		"16",
		"-c",
		"lower",
		"User@Example.com",
		"mykey",
	]);
	assert!(output.status.success());
	assert_eq!(
		String::from_utf8_lossy(&output.stdout),
		"NzFiMmE3MGYyODU4\n"
	);

	let output = pw_gen(&[
		"--algorithm",
		"SHA256",
		"--length",
		"32",
		"--case",
		"none",
		"user@example.com",
		"mykey",
	]);
	assert!(output.status.success());
	assert_eq!(
		String::from_utf8_lossy(&output.stdout),
		"MmU4ZjFlOTg1ZTZlYWYxZGE3ZmRlYjk4\n"
	);
}

#[test]
fn out_of_range_length_fails_without_output() {
	for length in ["7", "33"] {
		let output = pw_gen(&["-l", length, "user@example.com", "mykey"]);
		assert!(!output.status.success());
		assert!(output.stdout.is_empty());
		let stderr = String::from_utf8_lossy(&output.stderr);
		assert!(stderr.contains("Password length must be between 8 and 32"));
		assert!(stderr.contains("Usage:"));
	}
}

#[test]
fn invalid_algorithm_and_case_are_rejected() {
	let output = pw_gen(&["-a", "md5", "in", "key"]);
	assert_eq!(output.status.code(), Some(1));
	assert!(output.stdout.is_empty());
	assert!(String::from_utf8_lossy(&output.stderr)
		.contains("Invalid algorithm 'md5'"));

	let output = pw_gen(&["-c", "title", "in", "key"]);
	assert_eq!(output.status.code(), Some(1));
	assert!(String::from_utf8_lossy(&output.stderr)
		.contains("Invalid case type 'title'"));
}

#[test]
fn empty_key_is_rejected() {
	let output = pw_gen(&["input", ""]);
	assert_eq!(output.status.code(), Some(1));
	assert!(output.stdout.is_empty());
	assert!(String::from_utf8_lossy(&output.stderr)
		.contains("Input and key cannot be empty"));
}

#[test]
fn missing_positionals_print_usage_to_stderr() {
	let output = pw_gen(&["only-input"]);
	assert!(!output.status.success());
	assert!(output.stdout.is_empty());
	assert!(String::from_utf8_lossy(&output.stderr).contains("Usage:"));
}

#[test]
fn help_goes_to_stdout_with_success() {
	let output = pw_gen(&["--help"]);
	assert!(output.status.success());
	let stdout = String::from_utf8_lossy(&output.stdout);
	assert!(stdout.contains("--algorithm"));
	assert!(stdout.contains("--length"));
	assert!(stdout.contains("--case"));
	assert!(stdout.contains("pw_gen \"user@example.com\" \"mykey\""));
}

#[test]
fn verbose_logs_to_stderr_only() {
	let output = pw_gen(&["-v", "user@example.com", "mykey"]);
	assert!(output.status.success());
	assert_eq!(String::from_utf8_lossy(&output.stdout), "MmU4ZjFlOTg1\n");
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("derived password"));
	assert!(!stderr.contains("user@example.com"));
	assert!(!stderr.contains("mykey"));
}

#[test]
fn completions_are_generated() {
	let output = pw_gen(&["--completions", "bash"]);
	assert!(output.status.success());
	assert!(String::from_utf8_lossy(&output.stdout).contains("pw_gen"));
}
