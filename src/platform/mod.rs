//! Platform abstraction layer
//!
//! Shell resolution differs per platform; everything else in termo is
//! platform-neutral.

mod traits;
#[cfg(unix)]
mod unix;

pub use traits::*;

#[cfg(unix)]
pub use unix::DEFAULT_SHELL;

/// Platform implementation factory
pub struct Platform;

impl Platform {
    /// Get the platform-specific shell operations
    pub fn shell() -> Box<dyn ShellOps> {
        #[cfg(unix)]
        {
            Box::new(unix::UnixShell::new())
        }

        #[cfg(not(unix))]
        {
            compile_error!("Unsupported platform");
        }
    }
}
