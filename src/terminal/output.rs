//! Display Surface
//!
//! The read-only text surface the session writes into. The GUI renders a
//! [`TextSurface`]; anything else implementing [`DisplaySink`] can stand in
//! for it.

/// Text presentation surface driven by the session
pub trait DisplaySink {
    /// Append text at the current end of the surface
    fn append_char(&mut self, text: &str);

    /// Remove one trailing character. Returns false when the surface is
    /// already empty; the surface never underflows its start.
    fn remove_last_char(&mut self) -> bool;

    /// Replace everything with `text`
    fn set_all_content(&mut self, text: &str);

    /// Remove everything
    fn clear_all_content(&mut self);

    /// Current content
    fn content(&self) -> &str;
}

/// In-memory surface backed by a `String`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextSurface {
    text: String,
    /// Bumped on every mutation so the renderer can tell when to repaint
    revision: u64,
}

impl TextSurface {
    /// Create an empty surface
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a surface pre-filled with `text`
    pub fn with_content(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            revision: 0,
        }
    }

    /// Number of characters (code points) currently shown
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Whether nothing is shown
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Mutation counter
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl DisplaySink for TextSurface {
    fn append_char(&mut self, text: &str) {
        self.text.push_str(text);
        self.touch();
    }

    fn remove_last_char(&mut self) -> bool {
        if self.text.pop().is_some() {
            self.touch();
            true
        } else {
            false
        }
    }

    fn set_all_content(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
        self.touch();
    }

    fn clear_all_content(&mut self) {
        self.text.clear();
        self.touch();
    }

    fn content(&self) -> &str {
        &self.text
    }
}
