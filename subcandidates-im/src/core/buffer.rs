//! CompositionBuffer: raw input and its converted form.
//!
//! `original` holds the keystroke text since the last commit or cancel,
//! `composed` holds what conversion or candidate selection installed.
//! `composed` is empty whenever `original` is.

/// The two text buffers of one composition plus conversion flags.
#[derive(Debug, Clone, Default)]
pub struct CompositionBuffer {
    /// Raw input since the last commit/cancel
    original: String,
    /// Converted text currently displayed
    composed: String,
    /// Insertion point within `composed` (in characters, not bytes)
    insertion_index: usize,
    /// Set once the current `original` has been converted
    did_convert: bool,
    /// Set while a candidate list is visible to the host
    did_show_candidates: bool,
}

impl CompositionBuffer {
    /// Create a new empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn composed(&self) -> &str {
        &self.composed
    }

    pub fn insertion_index(&self) -> usize {
        self.insertion_index
    }

    pub fn did_convert(&self) -> bool {
        self.did_convert
    }

    pub fn did_show_candidates(&self) -> bool {
        self.did_show_candidates
    }

    /// True when no composition is in progress.
    pub fn is_empty(&self) -> bool {
        self.original.is_empty()
    }

    /// Append raw input. Any earlier conversion of `original` is dropped.
    pub fn append(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if self.did_convert {
            self.composed.clear();
            self.insertion_index = 0;
        }
        self.original.push_str(text);
        self.did_convert = false;
        self.did_show_candidates = false;
    }

    /// Remove the last character of `original`.
    ///
    /// Returns the removed character; the conversion is dropped as with
    /// [`append`](Self::append).
    pub fn remove_last_char(&mut self) -> Option<char> {
        let removed = self.original.pop()?;
        self.revert_conversion();
        Some(removed)
    }

    /// Replace `composed` wholesale and move the insertion point to its end.
    pub fn set_composed(&mut self, text: &str) {
        self.composed.clear();
        self.composed.push_str(text);
        self.insertion_index = self.composed.chars().count();
    }

    /// Record that `original` was converted and candidates are on screen.
    pub fn mark_converted(&mut self) {
        self.did_convert = true;
        self.did_show_candidates = true;
    }

    /// Drop the converted text but keep `original`.
    pub fn revert_conversion(&mut self) {
        self.composed.clear();
        self.insertion_index = 0;
        self.did_convert = false;
        self.did_show_candidates = false;
    }

    /// Clear everything, ending the composition.
    pub fn reset(&mut self) {
        self.original.clear();
        self.composed.clear();
        self.insertion_index = 0;
        self.did_convert = false;
        self.did_show_candidates = false;
    }
}
