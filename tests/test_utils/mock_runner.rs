//! Mock command runner and window for session tests

use termo::error::Error;
use termo::execution::{CapturedOutput, CommandRunner, ExecutionResult};
use termo::terminal::WindowControl;

/// What the mock runner answers with
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Succeed with these output bytes
    Output(Vec<u8>),
    /// Fail as if the interpreter could not be launched
    SpawnFailure,
}

/// Records every command it is asked to run
#[derive(Debug)]
pub struct MockRunner {
    pub calls: Vec<String>,
    pub reply: MockReply,
}

impl MockRunner {
    /// Runner that answers every command with `output`
    pub fn with_output(output: &str) -> Self {
        Self {
            calls: Vec::new(),
            reply: MockReply::Output(output.as_bytes().to_vec()),
        }
    }

    /// Runner that answers every command with raw `bytes`
    pub fn with_bytes(bytes: &[u8]) -> Self {
        Self {
            calls: Vec::new(),
            reply: MockReply::Output(bytes.to_vec()),
        }
    }

    /// Runner whose every launch fails
    pub fn failing() -> Self {
        Self {
            calls: Vec::new(),
            reply: MockReply::SpawnFailure,
        }
    }
}

impl CommandRunner for MockRunner {
    fn run(&mut self, command: &str) -> ExecutionResult {
        self.calls.push(command.to_string());
        match &self.reply {
            MockReply::Output(bytes) => Ok(CapturedOutput::decode(bytes, Some(0))),
            MockReply::SpawnFailure => Err(Error::CommandSpawnFailed {
                command: command.to_string(),
                reason: "mock spawn failure".to_string(),
            }),
        }
    }
}

/// Counts termination requests
#[derive(Debug, Default)]
pub struct RecordingWindow {
    pub termination_requests: usize,
}

impl WindowControl for RecordingWindow {
    fn request_termination(&mut self) {
        self.termination_requests += 1;
    }
}
