//! Shell command line rendering
//!
//! The submitted text is embedded in a double-quoted `-c` argument:
//! `<shell> -c "<escaped text>"`. Only the enclosing quote is protected.
//! Shell metacharacters (`;`, `|`, `$()`, backticks) pass through untouched
//! and are interpreted by the shell.

use crate::error::{Error, Result};
use std::path::Path;

/// Escape `text` for embedding between double quotes
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len() + 2);
    for ch in text.chars() {
        if matches!(ch, '"' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// Render the full command line for `text`
pub fn render(shell: &Path, flag: &str, text: &str) -> String {
    format!("{} {} \"{}\"", shell.display(), flag, escape(text))
}

/// Split a command line into arguments with POSIX shell quoting rules.
///
/// Inside double quotes a backslash only escapes `"`, `\`, `$`, `` ` `` and
/// newline, which is what [`escape`] relies on. A line with no words is an
/// error.
pub fn split(line: &str) -> Result<Vec<String>> {
    let parse_error = |reason: String| Error::CommandLineParseFailed {
        line: line.to_string(),
        reason,
    };

    let args = shell_words::split(line).map_err(|e| parse_error(e.to_string()))?;
    if args.is_empty() {
        return Err(parse_error("empty command line".to_string()));
    }

    Ok(args)
}
