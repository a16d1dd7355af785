//! Terminal Session Core
//!
//! Turns key presses into a command line and routes each submitted line to a
//! built-in or to the shell. Everything runs on the caller's thread: while a
//! shell command runs, no further keys are processed.

pub mod input;
pub mod output;
pub mod state;

// Re-exports for convenience
pub use input::{is_printable, KeyInput, LineBuffer};
pub use output::{DisplaySink, TextSurface};
pub use state::{DispatchOutcome, SessionState};

use crate::commands::Command;
use crate::execution::{CommandRunner, ShellExecutor};

/// Lifecycle of the window owning the session
pub trait WindowControl {
    /// Ask the owning window or process to close
    fn request_termination(&mut self);
}

/// The submission state machine.
///
/// Owns the pending line and the runner used for shell commands.
pub struct Session<R: CommandRunner = ShellExecutor> {
    buffer: LineBuffer,
    runner: R,
    state: SessionState,
}

impl<R: CommandRunner> Session<R> {
    /// Create a session that runs shell commands with `runner`
    pub fn new(runner: R) -> Self {
        Self {
            buffer: LineBuffer::new(),
            runner,
            state: SessionState::Editing,
        }
    }

    /// Feed one key press.
    ///
    /// Returns the dispatch outcome when the key submitted the line.
    pub fn handle_key(
        &mut self,
        key: KeyInput,
        sink: &mut dyn DisplaySink,
        window: &mut dyn WindowControl,
    ) -> Option<DispatchOutcome> {
        match key {
            KeyInput::Submit => Some(self.submit(sink, window)),
            KeyInput::Backspace => {
                self.buffer.backspace(sink);
                None
            }
            KeyInput::Char(ch) => {
                self.buffer.append(ch, sink);
                None
            }
        }
    }

    /// Submit the pending line: classify it, run it, apply the result.
    ///
    /// The line buffer is empty afterwards whatever the outcome.
    pub fn submit(
        &mut self,
        sink: &mut dyn DisplaySink,
        window: &mut dyn WindowControl,
    ) -> DispatchOutcome {
        self.state = SessionState::Dispatching;
        let text = self.buffer.take_and_clear();

        let outcome = match Command::classify(text) {
            Command::Exit => {
                info!("exit requested");
                window.request_termination();
                DispatchOutcome::Exited
            }
            Command::Clear => {
                sink.clear_all_content();
                DispatchOutcome::Cleared
            }
            Command::Shell(line) => match self.runner.run(&line) {
                Ok(output) => {
                    sink.set_all_content(&output.text);
                    DispatchOutcome::Replaced {
                        bytes: output.text.len(),
                        lossy: output.lossy,
                        exit_code: output.exit_code,
                    }
                }
                Err(e) => {
                    error!("Error running command: {}", e);
                    DispatchOutcome::Failed(e)
                }
            },
        };

        self.state = SessionState::Editing;
        outcome
    }

    /// Current state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The line typed so far
    pub fn pending(&self) -> &str {
        self.buffer.as_str()
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn runner_mut(&mut self) -> &mut R {
        &mut self.runner
    }
}

impl Default for Session<ShellExecutor> {
    fn default() -> Self {
        Self::new(ShellExecutor::new())
    }
}
