//! Composition controller - the core state machine
//!
//! This module contains `CompositionController`, which receives host
//! events, drives the conversion service, and keeps the composition buffer
//! and candidate set consistent with what the host displays.

mod conversion;
mod input;
mod keys;
mod selection;
mod types;

pub use keys::map_key;
pub use types::*;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use subcandidates_engine::ConversionService;
use tracing::{debug, trace};

use super::buffer::CompositionBuffer;
use super::candidate::{Candidate, CandidateSet};
use super::keycode::{KeyEvent, Keysym};
use super::preedit::Preedit;
use super::state::ComposeState;

/// Controller for one input session
pub struct CompositionController {
    /// Conversion service, shared with other controllers
    service: Arc<dyn ConversionService>,
    /// Controller configuration
    config: ControllerConfig,
    /// Raw and converted text
    buffer: CompositionBuffer,
    /// Candidates for the current conversion
    candidates: CandidateSet,
    /// Last client that delivered input
    client: Option<ClientId>,
}

impl CompositionController {
    /// Create a controller with the default configuration
    pub fn new(service: Arc<dyn ConversionService>) -> Self {
        Self::with_config(service, ControllerConfig::default())
    }

    /// Create with configuration
    pub fn with_config(service: Arc<dyn ConversionService>, config: ControllerConfig) -> Self {
        let mut candidates = CandidateSet::with_page_size(config.page_size);
        candidates.set_sub_candidates_enabled(config.sub_candidates);
        Self {
            service,
            config,
            buffer: CompositionBuffer::new(),
            candidates,
            client: None,
        }
    }

    /// Get the current state
    pub fn state(&self) -> ComposeState {
        ComposeState::of(&self.buffer)
    }

    pub fn buffer(&self) -> &CompositionBuffer {
        &self.buffer
    }

    pub fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// The client that last delivered input, if any
    pub fn current_client(&self) -> Option<ClientId> {
        self.client
    }

    /// Handle one host event.
    ///
    /// Events that do not apply to the current state are not consumed and
    /// leave everything unchanged.
    pub fn handle_event(&mut self, event: HostEvent) -> ControllerResult {
        trace!("handling {:?} in state {:?}", event, self.state());
        match event {
            HostEvent::Append { text, client } => self.append(&text, client),
            HostEvent::Trigger { name, client } => self.trigger(&name, client),
            HostEvent::Commit => self.commit(),
            HostEvent::Backspace => self.backspace(),
            HostEvent::SelectNext => self.select_next(),
            HostEvent::SelectPrevious => self.select_previous(),
            HostEvent::SelectByRowOffset(offset) => self.select_candidate_by_row_offset(offset),
            HostEvent::NextPage => self.next_page(),
            HostEvent::PreviousPage => self.previous_page(),
            HostEvent::SelectOnPage(row) => self.select_on_page(row),
            HostEvent::SelectNextSub => self.select_next_sub_candidate(),
            HostEvent::SelectPreviousSub => self.select_previous_sub_candidate(),
            HostEvent::SelectSubByRowOffset(offset) => {
                self.select_sub_candidate_by_row_offset(offset)
            }
            HostEvent::Cancel => self.cancel(),
        }
    }

    /// Process a key event
    pub fn process_key(&mut self, key: &KeyEvent, client: ClientId) -> ControllerResult {
        match map_key(key, self.state(), &self.config.keys, client) {
            Some(event) => self.handle_event(event),
            None => ControllerResult::not_consumed(),
        }
    }

    /// Abandon the composition without committing
    pub fn cancel(&mut self) -> ControllerResult {
        if self.state().is_idle() {
            return ControllerResult::not_consumed();
        }
        debug!("composition cancelled: {:?}", self.buffer.original());
        self.reset_session()
    }

    /// Clear buffer and candidates, telling the host to drop transient UI
    fn reset_session(&mut self) -> ControllerResult {
        self.buffer.reset();
        self.candidates.clear();
        ControllerResult::consumed().with_action(HostAction::Clear)
    }

    /// Marked text for the current state
    fn preedit(&self) -> Preedit {
        if self.buffer.did_convert() {
            Preedit::highlighted(self.buffer.composed(), self.buffer.insertion_index())
        } else {
            Preedit::underlined(self.buffer.original())
        }
    }

    /// Full display for the Converted state
    fn conversion_display(&self) -> ControllerResult {
        ControllerResult::consumed()
            .with_action(HostAction::ShowComposed(self.preedit()))
            .with_action(HostAction::show_candidates(&self.candidates))
            .with_action(HostAction::sub_candidates(&self.candidates))
    }
}
