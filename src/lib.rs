//! termo - a minimal GUI pseudo-terminal
//!
//! A window showing one read-only text surface. Typed characters collect
//! into a pending command line; Enter submits it. `exit` closes the window,
//! `clear` wipes the surface, and anything else runs through the user's
//! shell with the surface replaced by the captured output.
//!
//! ## Module Organization
//!
//! - [`terminal`] - Line buffer, display surface, submission state machine
//! - [`commands`] - Built-in / shell command classification
//! - [`execution`] - Synchronous shell invocation and output capture
//! - [`platform`] - Shell resolution per platform
//! - [`config`] - Configuration loading and validation
//! - [`ui`] - egui rendering of the surface
//! - [`mod@error`] - Error types and Result aliases
//!
//! ## Quick Start
//!
//! ```no_run
//! use termo::execution::ShellExecutor;
//! use termo::terminal::{KeyInput, Session, TextSurface, WindowControl};
//!
//! struct NoWindow;
//! impl WindowControl for NoWindow {
//!     fn request_termination(&mut self) {}
//! }
//!
//! let mut session = Session::new(ShellExecutor::new());
//! let mut surface = TextSurface::new();
//! for ch in "echo hi".chars() {
//!     session.handle_key(KeyInput::Char(ch), &mut surface, &mut NoWindow);
//! }
//! session.handle_key(KeyInput::Submit, &mut surface, &mut NoWindow);
//! ```
//!
//! ## Architecture
//!
//! Single-threaded: key handling and command execution both run on the
//! `egui` UI thread. A running command blocks redraws and input until it
//! exits; there is no timeout and no way to interrupt it from the window.

#[macro_use]
extern crate tracing;

pub mod commands;
pub mod config;
pub mod error;
pub mod execution;
pub mod platform;
pub mod terminal;
pub mod ui;

// Re-exports for core functionality
pub use commands::Command;
pub use config::Config;
pub use error::{Error, Result};
pub use execution::{CapturedOutput, CommandRunner, ExecutionResult, ShellExecutor};
pub use terminal::{DisplaySink, KeyInput, Session, TextSurface, WindowControl};

// Convenience re-exports for common types
pub use config::loader::ConfigLoader;

// Version information
/// The current version of termo from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The application name from Cargo.toml
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// The application description from Cargo.toml
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Build a session from an already loaded configuration
pub fn init_with_config(config: &Config) -> Session<ShellExecutor> {
    if std::env::var_os(&config.shell.env_var).is_none() {
        debug!("${} not set, using fallback shell", config.shell.env_var);
    }

    Session::new(ShellExecutor::from_config(&config.shell))
}
