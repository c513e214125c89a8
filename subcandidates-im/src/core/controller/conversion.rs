//! Trigger handling and candidate construction

use std::collections::HashSet;

use tracing::warn;

use super::*;

/// Helper for building a deduplicated list of candidates.
struct CandidateBuilder {
    candidates: Vec<Candidate>,
    seen: HashSet<String>,
    dedup: bool,
}

impl CandidateBuilder {
    fn new(dedup: bool) -> Self {
        Self {
            candidates: Vec::new(),
            seen: HashSet::new(),
            dedup,
        }
    }

    /// Push a candidate unless its text is empty or already seen.
    fn push(&mut self, candidate: Candidate) {
        if candidate.text.is_empty() {
            return;
        }
        if self.dedup && !self.seen.insert(candidate.text.clone()) {
            return;
        }
        self.candidates.push(candidate);
    }

    fn into_candidates(self) -> Vec<Candidate> {
        self.candidates
    }
}

impl CompositionController {
    /// Handle a trigger: the first one after raw input converts, a trigger
    /// while converted commits.
    pub fn trigger(&mut self, name: &str, client: ClientId) -> ControllerResult {
        match self.state() {
            ComposeState::Idle => ControllerResult::not_consumed(),
            ComposeState::Composing => {
                self.client = Some(client);
                debug!("trigger {:?}: converting {:?}", name, self.buffer.original());
                self.start_conversion()
            }
            ComposeState::Converted => {
                self.client = Some(client);
                let text = self.buffer.composed().to_string();
                self.commit_text(text)
            }
        }
    }

    /// Convert `original` and enter the Converted state
    fn start_conversion(&mut self) -> ControllerResult {
        let raw = self.buffer.original().to_string();
        let candidates = self.build_candidates(&raw);
        self.candidates.populate(candidates);

        let text = self.candidates.selected_text().unwrap_or(&raw).to_string();
        self.buffer.set_composed(&text);
        self.buffer.mark_converted();
        debug!(
            "converted {:?} into {} candidates, top {:?}",
            raw,
            self.candidates.len(),
            text
        );

        self.conversion_display()
    }

    /// Ask the service for candidates; failures count as no candidates
    fn request_candidates(&self, raw: &str) -> Vec<String> {
        match self.service.convert(raw) {
            Ok(candidates) => candidates,
            Err(e) => {
                warn!("conversion service failed for {:?}: {}", raw, e);
                Vec::new()
            }
        }
    }

    /// Decode, filter and limit the service output.
    /// Falls back to the raw input itself if nothing is left.
    pub(super) fn build_candidates(&self, raw: &str) -> Vec<Candidate> {
        let mut builder = CandidateBuilder::new(self.config.dedup);
        for (i, s) in self.request_candidates(raw).iter().enumerate() {
            builder.push(Candidate::decode(s).with_index(i));
        }

        let mut candidates = builder.into_candidates();
        if self.config.max_candidates > 0 {
            candidates.truncate(self.config.max_candidates);
        }
        if candidates.is_empty() {
            debug!("no candidates for {:?}, using the raw input", raw);
            candidates.push(Candidate::new(raw));
        }
        candidates
    }
}
