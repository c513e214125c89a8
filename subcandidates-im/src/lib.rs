//! subcandidates-im: composition controller for an input method
//!
//! Buffers raw keystrokes, converts them through a shared
//! [`ConversionService`](subcandidates_engine::ConversionService) on a
//! trigger, and lets the user pick among candidates and the sub-candidates
//! attached to a position of a candidate. Host bindings feed
//! [`HostEvent`]s in and render the returned [`HostAction`]s.

pub mod config;
pub mod core;
pub mod logging;

pub use core::buffer::CompositionBuffer;
pub use core::candidate::{Candidate, CandidateSet};
pub use core::controller::{
    ClientId, CompositionController, ControllerConfig, ControllerResult, HostAction, HostEvent,
    KeyBindings,
};
pub use core::keycode::{KeyEvent, KeyModifiers, Keysym};
pub use core::preedit::{Preedit, PreeditStyle};
pub use core::state::ComposeState;
