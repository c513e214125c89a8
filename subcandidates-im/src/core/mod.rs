//! Core composition functionality
//!
//! This module contains the composition state machine and the data it
//! drives: the text buffers, the candidate set and the host-facing types.

pub mod buffer;
pub mod candidate;
pub mod controller;
pub mod keycode;
pub mod preedit;
pub mod state;
