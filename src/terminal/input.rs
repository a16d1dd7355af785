//! Command Input Processing
//!
//! Holds the line being typed and keeps it mirrored on the display surface.

use super::output::DisplaySink;
use unicode_general_category::{get_general_category, GeneralCategory};

/// A key press, already reduced to what the line editor cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    /// Enter / Return / keypad Enter
    Submit,
    /// Backspace
    Backspace,
    /// A character produced by the key press
    Char(char),
}

/// Whether a code point is printable.
///
/// Everything except control (Cc), format (Cf), surrogate (Cs) and
/// unassigned (Cn) code points. Space, private-use characters and the
/// line/paragraph separators are printable.
pub fn is_printable(ch: char) -> bool {
    !matches!(
        get_general_category(ch),
        GeneralCategory::Control
            | GeneralCategory::Format
            | GeneralCategory::Surrogate
            | GeneralCategory::Unassigned
    )
}

/// The in-progress, not yet submitted command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBuffer {
    text: String,
}

impl LineBuffer {
    /// Create an empty line buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a printable character and mirror it onto `sink`.
    ///
    /// Returns false, touching nothing, for non-printable input.
    pub fn append(&mut self, ch: char, sink: &mut dyn DisplaySink) -> bool {
        if !is_printable(ch) {
            trace!("Ignoring non-printable input U+{:04X}", ch as u32);
            return false;
        }

        self.text.push(ch);
        let mut utf8 = [0u8; 4];
        sink.append_char(ch.encode_utf8(&mut utf8));
        true
    }

    /// Remove the last character from the buffer and from `sink`.
    ///
    /// An empty buffer leaves `sink` alone, so output shown by the previous
    /// command is never eaten.
    pub fn backspace(&mut self, sink: &mut dyn DisplaySink) -> bool {
        if self.text.pop().is_none() {
            return false;
        }

        if !sink.remove_last_char() {
            warn!("Display surface was shorter than the pending line");
        }
        true
    }

    /// Hand over the finished line and reset to empty
    pub fn take_and_clear(&mut self) -> String {
        std::mem::take(&mut self.text)
    }

    /// Current pending text
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in code points
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
