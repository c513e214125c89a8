//! Candidate and sub-candidate navigation in the Converted state

use super::*;

impl CompositionController {
    /// Apply a selection change, then show the selected text
    fn navigate_candidate(
        &mut self,
        op: impl FnOnce(&mut CandidateSet) -> bool,
    ) -> ControllerResult {
        if !self.state().is_converted() {
            return ControllerResult::not_consumed();
        }
        if !op(&mut self.candidates) {
            return ControllerResult::consumed();
        }
        self.sync_composed();
        self.conversion_display()
    }

    /// Apply a sub-candidate selection change, then show the selected text
    fn navigate_sub_candidate(
        &mut self,
        op: impl FnOnce(&mut CandidateSet) -> bool,
    ) -> ControllerResult {
        if !self.state().is_converted() {
            return ControllerResult::not_consumed();
        }
        if !op(&mut self.candidates) {
            return ControllerResult::consumed();
        }
        self.sync_composed();
        ControllerResult::consumed()
            .with_action(HostAction::ShowComposed(self.preedit()))
            .with_action(HostAction::sub_candidates(&self.candidates))
    }

    /// Install the selected sub-candidate, or else the selected candidate
    fn sync_composed(&mut self) {
        let text = self
            .candidates
            .selected_sub_text()
            .or_else(|| self.candidates.selected_text())
            .unwrap_or(self.buffer.original())
            .to_string();
        self.buffer.set_composed(&text);
    }

    /// Select the next candidate
    pub fn select_next(&mut self) -> ControllerResult {
        self.navigate_candidate(CandidateSet::select_next)
    }

    /// Select the previous candidate
    pub fn select_previous(&mut self) -> ControllerResult {
        self.navigate_candidate(CandidateSet::select_previous)
    }

    /// Select an absolute row of the candidate window
    pub fn select_candidate_by_row_offset(&mut self, offset: isize) -> ControllerResult {
        self.navigate_candidate(|c| c.select_by_row_offset(offset))
    }

    /// Go to next candidate page
    pub fn next_page(&mut self) -> ControllerResult {
        self.navigate_candidate(CandidateSet::next_page)
    }

    /// Go to previous candidate page
    pub fn previous_page(&mut self) -> ControllerResult {
        self.navigate_candidate(CandidateSet::previous_page)
    }

    /// Select a row (1-9) on the current page
    pub fn select_on_page(&mut self, row: usize) -> ControllerResult {
        self.navigate_candidate(|c| c.select_on_page(row).is_some())
    }

    pub fn select_next_sub_candidate(&mut self) -> ControllerResult {
        self.navigate_sub_candidate(CandidateSet::select_next_sub)
    }

    pub fn select_previous_sub_candidate(&mut self) -> ControllerResult {
        self.navigate_sub_candidate(CandidateSet::select_previous_sub)
    }

    pub fn select_sub_candidate_by_row_offset(&mut self, offset: isize) -> ControllerResult {
        self.navigate_sub_candidate(|c| c.select_sub_by_row_offset(offset))
    }
}
