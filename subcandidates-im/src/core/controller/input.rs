//! Raw input handling (append, backspace, commit)

use super::*;

impl CompositionController {
    /// Append raw keystroke text.
    ///
    /// After a conversion the new text extends `original`; the candidates
    /// are discarded and the composition goes back to Composing.
    pub fn append(&mut self, text: &str, client: ClientId) -> ControllerResult {
        if text.is_empty() {
            return ControllerResult::not_consumed();
        }
        self.client = Some(client);

        let candidates_shown = self.buffer.did_show_candidates();
        if self.buffer.did_convert() {
            debug!(
                "new input after conversion, discarding {} candidates",
                self.candidates.len()
            );
            self.candidates.clear();
        }
        self.buffer.append(text);

        let result =
            ControllerResult::consumed().with_action(HostAction::ShowComposed(self.preedit()));
        if candidates_shown {
            result.with_action(HostAction::HideCandidates)
        } else {
            result
        }
    }

    /// Delete the last raw character; in Converted, return to Composing
    /// with the raw input intact.
    pub fn backspace(&mut self) -> ControllerResult {
        match self.state() {
            ComposeState::Idle => ControllerResult::not_consumed(),
            ComposeState::Composing => {
                self.buffer.remove_last_char();
                if self.buffer.is_empty() {
                    return self.reset_session();
                }
                ControllerResult::consumed().with_action(HostAction::ShowComposed(self.preedit()))
            }
            ComposeState::Converted => {
                debug!("conversion of {:?} undone", self.buffer.original());
                self.buffer.revert_conversion();
                self.candidates.clear();
                ControllerResult::consumed()
                    .with_action(HostAction::ShowComposed(self.preedit()))
                    .with_action(HostAction::HideCandidates)
            }
        }
    }

    /// Commit the composition as displayed: the raw input while Composing,
    /// the converted text while Converted.
    pub fn commit(&mut self) -> ControllerResult {
        let text = match self.state() {
            ComposeState::Idle => return ControllerResult::not_consumed(),
            ComposeState::Composing => self.buffer.original().to_string(),
            ComposeState::Converted => self.buffer.composed().to_string(),
        };
        self.commit_text(text)
    }

    /// Send `text` to the host and end the composition
    pub(super) fn commit_text(&mut self, text: String) -> ControllerResult {
        debug!("commit: {:?}", text);
        let mut result = self.reset_session();
        result.actions.push(HostAction::Commit(text));
        result
    }
}
