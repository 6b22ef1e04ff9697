//! # Deskbot CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! This module provides shared utility functions used across the integration
//! test files (`main_tests.rs`, `chat.rs`). This avoids code duplication in
//! the test suite.
//!
//! Integration tests are located in the `cli/tests/` directory and each `.rs`
//! file in that directory (that isn't a module like this one) is compiled as
//! a separate test crate linked against the main `deskbot` binary crate.
//!

// Allow potentially unused code in this common module, as different test
// files might use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;

/// # Get Deskbot Command (`deskbot_cmd`)
///
/// Helper function to create an `assert_cmd::Command` instance pointing to
/// the compiled `deskbot` binary target for the current test run.
///
/// ## Panics
/// Panics if the `deskbot` binary cannot be found via `Command::cargo_bin`.
pub fn deskbot_cmd() -> Command {
    Command::cargo_bin("deskbot").expect("Failed to find deskbot binary for testing")
}
