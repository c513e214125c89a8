//! Type definitions for the composition controller

use tracing::warn;

use crate::config::Settings;

use super::super::candidate::CandidateSet;
use super::super::keycode::Keysym;
use super::super::preedit::Preedit;

/// Opaque identifier of the host text-input client.
///
/// Recorded for append targeting only; the controller never interprets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClientId(pub u64);

/// An input event delivered by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    /// Raw keystroke text
    Append { text: String, client: ClientId },
    /// Convert, or commit when already converted
    Trigger { name: String, client: ClientId },
    /// Commit the composition as displayed
    Commit,
    /// Delete the last raw character, or undo a conversion
    Backspace,
    SelectNext,
    SelectPrevious,
    /// Absolute row clicked or highlighted in the candidate window
    SelectByRowOffset(isize),
    NextPage,
    PreviousPage,
    /// 1-based row within the current page
    SelectOnPage(usize),
    SelectNextSub,
    SelectPreviousSub,
    SelectSubByRowOffset(isize),
    /// Abandon the composition without committing
    Cancel,
}

/// Instruction for the host display
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostAction {
    /// Render marked text
    ShowComposed(Preedit),
    /// Show the candidate window
    ShowCandidates { items: Vec<String>, selected: usize },
    /// Show the sub-candidate list attached at `anchor`
    ShowSubCandidates {
        items: Vec<String>,
        anchor: String,
        selected: Option<usize>,
    },
    /// Hide the sub-candidate list
    HideSubCandidates,
    /// Hide the candidate window
    HideCandidates,
    /// Insert final text into the document
    Commit(String),
    /// Hide all transient UI, including marked text
    Clear,
}

impl HostAction {
    /// Candidate window contents for a set
    pub(super) fn show_candidates(candidates: &CandidateSet) -> Self {
        HostAction::ShowCandidates {
            items: candidates.texts(),
            selected: candidates.selected_index().unwrap_or(0),
        }
    }

    /// Sub-candidate list for a set, or hide it when there is none
    pub(super) fn sub_candidates(candidates: &CandidateSet) -> Self {
        match candidates.sub_candidate_anchor() {
            Some(anchor) => HostAction::ShowSubCandidates {
                items: candidates.sub_candidates().to_vec(),
                anchor: anchor.to_string(),
                selected: candidates.sub_selected_index(),
            },
            None => HostAction::HideSubCandidates,
        }
    }
}

/// Result of handling one host event
#[derive(Debug, Clone, Default)]
pub struct ControllerResult {
    /// Whether the event was consumed by the input method
    pub consumed: bool,
    /// Actions to perform, in order
    pub actions: Vec<HostAction>,
}

impl ControllerResult {
    pub fn consumed() -> Self {
        Self {
            consumed: true,
            actions: Vec::new(),
        }
    }

    pub fn not_consumed() -> Self {
        Self {
            consumed: false,
            actions: Vec::new(),
        }
    }

    pub fn with_action(mut self, action: HostAction) -> Self {
        self.actions.push(action);
        self
    }

    /// The committed text, if this result commits anything
    pub fn committed(&self) -> Option<&str> {
        self.actions.iter().find_map(|a| match a {
            HostAction::Commit(text) => Some(text.as_str()),
            _ => None,
        })
    }
}

/// Keys bound to trigger and commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    pub trigger: Vec<Keysym>,
    pub commit: Vec<Keysym>,
}

impl KeyBindings {
    /// Resolve key names, skipping unknown ones with a warning
    pub fn from_names(trigger: &[String], commit: &[String]) -> Self {
        Self {
            trigger: resolve_keys(trigger),
            commit: resolve_keys(commit),
        }
    }

    pub fn is_trigger(&self, keysym: Keysym) -> bool {
        self.trigger.contains(&keysym)
    }

    pub fn is_commit(&self, keysym: Keysym) -> bool {
        self.commit.contains(&keysym)
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            trigger: vec![Keysym::SPACE],
            commit: vec![Keysym::RETURN],
        }
    }
}

fn resolve_keys(names: &[String]) -> Vec<Keysym> {
    names
        .iter()
        .filter_map(|name| {
            let keysym = Keysym::from_name(name);
            if keysym.is_none() {
                warn!("unknown key name in settings: {:?}", name);
            }
            keysym
        })
        .collect()
}

/// Configuration for the composition controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerConfig {
    /// Maximum number of candidates kept from the service (0 = unlimited)
    pub max_candidates: usize,
    /// Drop later candidates whose text repeats an earlier one
    pub dedup: bool,
    /// Rows per page in the candidate window
    pub page_size: usize,
    /// Whether sub-candidates are exposed
    pub sub_candidates: bool,
    /// Trigger and commit keys
    pub keys: KeyBindings,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            max_candidates: 0,
            dedup: true,
            page_size: CandidateSet::DEFAULT_PAGE_SIZE,
            sub_candidates: true,
            keys: KeyBindings::default(),
        }
    }
}

impl From<&Settings> for ControllerConfig {
    fn from(settings: &Settings) -> Self {
        Self {
            max_candidates: settings.conversion.max_candidates,
            dedup: settings.conversion.dedup,
            page_size: settings.candidates.page_size,
            sub_candidates: settings.candidates.sub_candidates,
            keys: KeyBindings::from_names(&settings.keys.trigger, &settings.keys.commit),
        }
    }
}
