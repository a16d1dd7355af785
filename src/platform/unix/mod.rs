//! Unix-specific platform implementations

mod shell;

pub use shell::{UnixShell, DEFAULT_SHELL};
