//! Unix shell operations

use crate::platform::traits::ShellOps;
use std::path::PathBuf;

/// Default interpreter when `$SHELL` is not set
pub const DEFAULT_SHELL: &str = "/bin/sh";

pub struct UnixShell;

impl UnixShell {
    pub fn new() -> Self {
        Self
    }
}

impl Default for UnixShell {
    fn default() -> Self {
        Self::new()
    }
}

impl ShellOps for UnixShell {
    fn fallback_shell(&self) -> PathBuf {
        PathBuf::from(DEFAULT_SHELL)
    }

    fn command_flag(&self) -> &'static str {
        "-c"
    }
}
