//! Platform-specific operation traits
//!
//! These traits define the interface for platform-specific operations,
//! allowing for clean abstraction and easier testing.

use std::path::PathBuf;

/// Platform-specific shell operations
pub trait ShellOps: Send + Sync {
    /// Interpreter used when the environment does not name one
    fn fallback_shell(&self) -> PathBuf;

    /// Flag that makes the interpreter run its next argument as a script
    fn command_flag(&self) -> &'static str;

    /// Resolve the interpreter from `env_var`, looked up through `lookup`.
    ///
    /// An unset or empty variable yields `fallback`, or the platform
    /// fallback when none is configured.
    fn resolve_shell(
        &self,
        env_var: &str,
        fallback: Option<&PathBuf>,
        lookup: &dyn Fn(&str) -> Option<String>,
    ) -> PathBuf {
        match lookup(env_var) {
            Some(shell) if !shell.is_empty() => PathBuf::from(shell),
            _ => fallback.cloned().unwrap_or_else(|| self.fallback_shell()),
        }
    }
}
