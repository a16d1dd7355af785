//! Test Utilities and Mocks
//!
//! Shared by the integration and property tests via `#[path]` includes.

#![allow(dead_code)]

pub mod mock_runner;

// Re-exports for convenience
pub use fixtures::{submit_line, type_text};
pub use mock_runner::{MockRunner, RecordingWindow};
