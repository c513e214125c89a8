//! Key event to host event mapping

use super::*;

/// Map a key event to the host event it stands for in `state`.
///
/// Returns `None` for keys the input method leaves to the application:
/// releases, modifiers, shortcuts, and editing keys while idle.
pub fn map_key(
    key: &KeyEvent,
    state: ComposeState,
    keys: &KeyBindings,
    client: ClientId,
) -> Option<HostEvent> {
    if !key.is_press || key.keysym.is_modifier() || key.modifiers.is_chord() {
        return None;
    }

    let keysym = key.keysym;
    if state.is_idle() {
        // Trigger and commit keys type normally when nothing is composed
        if keys.is_trigger(keysym) || keys.is_commit(keysym) {
            return None;
        }
        return append_event(key, client);
    }

    if keys.is_trigger(keysym) {
        return Some(HostEvent::Trigger {
            name: keysym.to_string(),
            client,
        });
    }
    if keys.is_commit(keysym) {
        return Some(HostEvent::Commit);
    }

    match keysym {
        Keysym::ESCAPE => return Some(HostEvent::Cancel),
        Keysym::BACKSPACE => return Some(HostEvent::Backspace),
        _ => {}
    }

    if state.is_converted() {
        let event = match keysym {
            Keysym::DOWN => Some(HostEvent::SelectNext),
            Keysym::UP => Some(HostEvent::SelectPrevious),
            Keysym::RIGHT => Some(HostEvent::SelectNextSub),
            Keysym::LEFT => Some(HostEvent::SelectPreviousSub),
            Keysym::PAGE_DOWN => Some(HostEvent::NextPage),
            Keysym::PAGE_UP => Some(HostEvent::PreviousPage),
            _ => keysym.digit_value().map(HostEvent::SelectOnPage),
        };
        if event.is_some() {
            return event;
        }
    }

    append_event(key, client)
}

fn append_event(key: &KeyEvent, client: ClientId) -> Option<HostEvent> {
    key.to_char().map(|ch| HostEvent::Append {
        text: ch.to_string(),
        client,
    })
}
