//! Command Classification
//!
//! A submitted line is either one of the two built-ins handled in-process
//! (`exit`, `clear`) or a shell command handed to the executor. Matching is
//! exact: no trimming, no case folding.

/// Name of the built-in that closes the window
pub const EXIT_BUILTIN: &str = "exit";

/// Name of the built-in that wipes the display
pub const CLEAR_BUILTIN: &str = "clear";

/// A finalized command line, classified
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Close the owning window
    Exit,
    /// Wipe all display content
    Clear,
    /// Anything else, including the empty line
    Shell(String),
}

impl Command {
    /// Classify a submitted line
    pub fn classify(text: impl Into<String>) -> Self {
        let text = text.into();
        match text.as_str() {
            EXIT_BUILTIN => Command::Exit,
            CLEAR_BUILTIN => Command::Clear,
            _ => Command::Shell(text),
        }
    }

    /// Whether the command is handled without spawning a process
    pub fn is_builtin(&self) -> bool {
        !matches!(self, Command::Shell(_))
    }
}
