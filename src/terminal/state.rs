//! Session State
//!
//! The submission state machine has two states and one kind of transition
//! result.

use crate::error::Error;

/// Where the session is in the edit/submit cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Accepting key input into the line buffer
    #[default]
    Editing,
    /// A submitted line is being classified and run
    Dispatching,
}

/// What a submission did to the display
#[derive(Debug)]
pub enum DispatchOutcome {
    /// Termination was requested; the display is untouched
    Exited,
    /// The display was wiped
    Cleared,
    /// The display now shows the command's output
    Replaced {
        /// Size of the shown output in bytes
        bytes: usize,
        /// Whether undecodable bytes were replaced
        lossy: bool,
        /// Exit code of the command
        exit_code: Option<i32>,
    },
    /// The command could not be launched; the display is untouched
    Failed(Error),
}

impl DispatchOutcome {
    /// Whether the display content changed
    pub fn changed_display(&self) -> bool {
        matches!(
            self,
            DispatchOutcome::Cleared | DispatchOutcome::Replaced { .. }
        )
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, DispatchOutcome::Failed(_))
    }
}
