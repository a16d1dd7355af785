//! Synchronous shell command execution
//!
//! Each submitted line runs as `<shell> -c "<line>"`. The calling thread
//! blocks until the child exits; there is no timeout and no cancellation.

pub mod command_line;

use crate::config::{ShellConfig, StderrMode};
use crate::error::{Error, Result};
use crate::platform::Platform;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Output captured from one finished command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedOutput {
    /// Decoded output, ready for display
    pub text: String,
    /// Exit code, `None` when the child was killed by a signal
    pub exit_code: Option<i32>,
    /// Whether invalid UTF-8 had to be replaced during decoding
    pub lossy: bool,
}

impl CapturedOutput {
    /// Decode raw output bytes, replacing invalid sequences
    pub fn decode(bytes: &[u8], exit_code: Option<i32>) -> Self {
        let (text, lossy) = match String::from_utf8_lossy(bytes) {
            Cow::Borrowed(text) => (text.to_string(), false),
            Cow::Owned(text) => (text, true),
        };

        Self {
            text,
            exit_code,
            lossy,
        }
    }

    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Captured output, or the reason the command could not be launched
pub type ExecutionResult = Result<CapturedOutput>;

/// Anything that can run a submitted shell line
pub trait CommandRunner {
    fn run(&mut self, command: &str) -> ExecutionResult;
}

/// Runs lines through the user's shell
#[derive(Debug, Clone)]
pub struct ShellExecutor {
    /// Interpreter path
    shell: PathBuf,
    /// Flag introducing the script argument
    flag: &'static str,
    /// Standard error handling
    stderr: StderrMode,
}

impl ShellExecutor {
    /// Create an executor with the shell resolved from the process environment
    pub fn new() -> Self {
        Self::from_config(&ShellConfig::default())
    }

    /// Create an executor from shell configuration
    pub fn from_config(config: &ShellConfig) -> Self {
        Self::from_config_with_lookup(config, &|name| std::env::var(name).ok())
    }

    /// Create an executor resolving the environment variable through `lookup`
    pub fn from_config_with_lookup(
        config: &ShellConfig,
        lookup: &dyn Fn(&str) -> Option<String>,
    ) -> Self {
        let shell_ops = Platform::shell();
        let shell = shell_ops.resolve_shell(&config.env_var, config.fallback.as_ref(), lookup);
        debug!("Using shell {} (from ${})", shell.display(), config.env_var);

        Self {
            shell,
            flag: shell_ops.command_flag(),
            stderr: config.stderr,
        }
    }

    /// Create an executor for an explicit interpreter
    pub fn with_shell(shell: impl Into<PathBuf>) -> Self {
        Self {
            shell: shell.into(),
            flag: Platform::shell().command_flag(),
            stderr: StderrMode::default(),
        }
    }

    /// Set how the child's standard error is handled
    pub fn with_stderr(mut self, stderr: StderrMode) -> Self {
        self.stderr = stderr;
        self
    }

    /// Interpreter in use
    pub fn shell(&self) -> &Path {
        &self.shell
    }

    /// The command line `text` is executed as
    pub fn command_line(&self, text: &str) -> String {
        command_line::render(&self.shell, self.flag, text)
    }

    /// Run `text` and wait for it to finish
    pub fn execute(&self, text: &str) -> ExecutionResult {
        let line = self.command_line(text);
        debug!("Executing: {}", line);

        let argv = command_line::split(&line)?;
        let (program, args) = argv.split_first().ok_or_else(|| Error::CommandLineParseFailed {
            line: line.clone(),
            reason: "empty command line".to_string(),
        })?;

        let stderr = match self.stderr {
            StderrMode::Inherit => Stdio::inherit(),
            StderrMode::Merge => Stdio::piped(),
            StderrMode::Discard => Stdio::null(),
        };

        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(stderr)
            .output()
            .map_err(|e| Error::CommandSpawnFailed {
                command: line.clone(),
                reason: e.to_string(),
            })?;

        let mut bytes = output.stdout;
        if self.stderr == StderrMode::Merge {
            bytes.extend_from_slice(&output.stderr);
        }

        let captured = CapturedOutput::decode(&bytes, output.status.code());
        if captured.lossy {
            warn!("Output of '{}' was not valid UTF-8; invalid bytes replaced", text);
        }
        if !captured.success() {
            debug!("'{}' exited with {:?}", text, output.status);
        }

        Ok(captured)
    }
}

impl Default for ShellExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for ShellExecutor {
    fn run(&mut self, command: &str) -> ExecutionResult {
        self.execute(command)
    }
}
