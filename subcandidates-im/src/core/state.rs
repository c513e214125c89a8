//! Composition state machine
//!
//! The state is derived from the composition buffer rather than stored, so
//! it can never disagree with the text it describes. Committing is not a
//! resting state: a commit runs to completion inside one event and leaves
//! the controller in `Idle`.

use super::buffer::CompositionBuffer;

/// The current state of a composition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComposeState {
    /// No composition in progress
    #[default]
    Idle,
    /// Raw input is being accumulated and has not been converted
    Composing,
    /// Candidates are shown; the next trigger commits
    Converted,
}

impl ComposeState {
    /// Derive the state described by a buffer.
    pub fn of(buffer: &CompositionBuffer) -> Self {
        if buffer.is_empty() {
            Self::Idle
        } else if buffer.did_convert() {
            Self::Converted
        } else {
            Self::Composing
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_converted(&self) -> bool {
        matches!(self, Self::Converted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_follows_buffer() {
        let mut buffer = CompositionBuffer::new();
        assert_eq!(ComposeState::of(&buffer), ComposeState::Idle);

        buffer.append("a");
        assert_eq!(ComposeState::of(&buffer), ComposeState::Composing);

        buffer.set_composed("あ");
        buffer.mark_converted();
        assert_eq!(ComposeState::of(&buffer), ComposeState::Converted);

        buffer.reset();
        assert!(ComposeState::of(&buffer).is_idle());
    }
}
