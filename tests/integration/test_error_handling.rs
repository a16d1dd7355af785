//! Integration Tests for Error Handling
//!
//! A command that cannot be launched must leave the surface exactly as it
//! was and must not stop the session.

#[path = "../test_utils/mod.rs"]
mod test_utils;

use termo::error::Error;
use termo::execution::ShellExecutor;
use termo::terminal::{DispatchOutcome, DisplaySink, Session, SessionState, TextSurface};
use test_utils::{submit_line, MockRunner, RecordingWindow};

#[test]
fn test_spawn_failure_leaves_surface_untouched() {
    let mut session = Session::new(MockRunner::failing());
    let mut surface = TextSurface::with_content("keep me\n");
    let mut window = RecordingWindow::default();

    let outcome = submit_line(&mut session, "ls", &mut surface, &mut window);

    assert!(matches!(
        outcome,
        DispatchOutcome::Failed(Error::CommandSpawnFailed { .. })
    ));
    // The typed line stays visible; nothing was replaced
    assert_eq!(surface.content(), "keep me\nls");
    assert_eq!(session.pending(), "");
    assert_eq!(session.state(), SessionState::Editing);
}

#[test]
fn test_session_recovers_after_failure() {
    let mut session = Session::new(MockRunner::failing());
    let mut surface = TextSurface::new();
    let mut window = RecordingWindow::default();

    submit_line(&mut session, "first", &mut surface, &mut window);
    let outcome = submit_line(&mut session, "clear", &mut surface, &mut window);

    assert!(matches!(outcome, DispatchOutcome::Cleared));
    assert_eq!(surface.content(), "");
    assert_eq!(session.runner().calls, vec!["first".to_string()]);
}

#[cfg(unix)]
#[test]
fn test_unresolvable_shell_path() {
    let mut session = Session::new(ShellExecutor::with_shell("/nonexistent/bin/termo-sh"));
    let mut surface = TextSurface::with_content("before\n");
    let mut window = RecordingWindow::default();

    let outcome = submit_line(&mut session, "echo hi", &mut surface, &mut window);

    match outcome {
        DispatchOutcome::Failed(err) => {
            assert!(err.is_spawn_failure());
            assert!(err.to_string().contains("/nonexistent/bin/termo-sh"));
        }
        other => panic!("expected failure, got {:?}", other),
    }
    assert_eq!(surface.content(), "before\necho hi");
    assert_eq!(window.termination_requests, 0);
}

#[cfg(unix)]
#[test]
fn test_command_not_found_is_not_a_spawn_failure() {
    // The shell itself starts fine; the missing program is the shell's problem
    let executor = ShellExecutor::with_shell("/bin/sh");
    let result = executor.execute("this_command_does_not_exist_xyz123");

    let output = result.expect("shell should launch");
    assert_eq!(output.exit_code, Some(127));
}

#[cfg(unix)]
#[test]
fn test_syntax_error_in_command() {
    let executor = ShellExecutor::with_shell("/bin/sh");
    let output = executor.execute("echo 'unclosed quote").expect("shell should launch");
    assert!(!output.success());
}
