//! End-to-end tests for the annotation pipeline.
//!
//! Each test runs full passes through `listmark::process` and checks either
//! the raw instructions or the text a host would display after applying
//! every replacement.

mod definitions;
mod examples;
mod helpers;
mod inline_spans;
mod lists;
mod properties;
mod strict_mode;
