//! CLI integration tests for listmark.
//!
//! These tests execute the compiled binary and verify CLI behavior including:
//! - Subcommand behavior (annotate, labels, validate)
//! - Stdin/stdout handling
//! - Exit codes
//! - Config discovery

mod annotate;
mod common;
mod validate;
