//! Tests for the composition controller

use super::*;
use crate::core::keycode::KeyModifiers;
use crate::core::preedit::PreeditStyle;
use subcandidates_engine::{ConversionError, TableConversion};

mod selection;

const CLIENT: ClientId = ClientId(1);

/// A service that is always down
struct FailingConversion;

impl ConversionService for FailingConversion {
    fn convert(&self, _raw: &str) -> Result<Vec<String>, ConversionError> {
        Err(ConversionError::Unavailable("offline".to_string()))
    }
}

fn sample_table() -> TableConversion {
    TableConversion::new()
        .with_entry("nihon", ["日本", "にほん", "ニホン"])
        .with_entry("a", ["あ", "ア"])
        .with_entry("ab", ["あb", "アb"])
        .with_entry("nippon", ["日本{2:ニッポン|にっぽん}", "にっぽん", "ニッポン{1:日本国}"])
        .with_entry("dup", ["同", "どう", "同", ""])
        .with_entry("bad", ["x{:y}", "z}"])
        .with_entry("many", ["m1", "m2", "m3", "m4", "m5"])
}

fn make_controller() -> CompositionController {
    CompositionController::new(Arc::new(sample_table()))
}

fn make_controller_with(config: ControllerConfig) -> CompositionController {
    CompositionController::with_config(Arc::new(sample_table()), config)
}

/// Append `raw` and trigger once
fn convert(controller: &mut CompositionController, raw: &str) -> ControllerResult {
    controller.append(raw, CLIENT);
    controller.trigger("space", CLIENT)
}

fn press(ch: char) -> KeyEvent {
    KeyEvent::char(ch)
}

fn press_key(keysym: Keysym) -> KeyEvent {
    KeyEvent::press(keysym)
}

fn release_key(keysym: Keysym) -> KeyEvent {
    KeyEvent::new(keysym, KeyModifiers::default(), false)
}

fn press_ctrl(ch: char) -> KeyEvent {
    KeyEvent::new(
        Keysym(ch as u32),
        KeyModifiers::new().with_control(true),
        true,
    )
}

fn has_action(result: &ControllerResult, pred: impl Fn(&HostAction) -> bool) -> bool {
    result.actions.iter().any(pred)
}

fn shown_candidates(result: &ControllerResult) -> Option<(Vec<String>, usize)> {
    result.actions.iter().find_map(|a| match a {
        HostAction::ShowCandidates { items, selected } => Some((items.clone(), *selected)),
        _ => None,
    })
}

fn shown_preedit(result: &ControllerResult) -> Option<&Preedit> {
    result.actions.iter().find_map(|a| match a {
        HostAction::ShowComposed(preedit) => Some(preedit),
        _ => None,
    })
}
