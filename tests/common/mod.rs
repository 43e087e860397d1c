//! Common test helpers and utilities.

#![allow(dead_code)]

use std::process::{Command, Output};

/// Path to the built calculator binary.
pub fn binary() -> &'static str {
    env!("CARGO_BIN_EXE_calculator")
}

/// Runs the calculator binary with the given arguments.
///
/// `RUST_LOG` is cleared so a developer's environment cannot change what
/// ends up on stderr.
pub fn run_calculator(args: &[&str]) -> Output {
    Command::new(binary())
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run calculator binary")
}

/// Stdout of a finished run as UTF-8.
pub fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout is not UTF-8")
}

/// Stderr of a finished run as UTF-8.
pub fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).expect("stderr is not UTF-8")
}
