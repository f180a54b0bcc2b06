//! Pure classification of raw key presses into combobox interaction actions.
//!
//! [`resolve`] is the single entry point: it owns the full key-to-action
//! mapping of the combobox pattern (open keys, Home/End, typeahead
//! characters, in-menu navigation) and has no state of its own.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A typeahead input carried by [`Action::Type`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypedKey {
    /// A printable character to append to the search buffer.
    Char(char),
    /// Erase the most recent search character.
    Backspace,
}

/// Symbolic interpretation of a key event, decoupled from the physical key.
///
/// Produced fresh per key press by [`resolve`]; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Open the menu without moving focus.
    Open,
    /// Close the menu without committing.
    Close,
    /// Commit the focused option and close the menu.
    CloseSelect,
    /// Move focus to the first option.
    First,
    /// Move focus to the last option.
    Last,
    /// Move focus down one option.
    Next,
    /// Move focus up one option.
    Previous,
    /// Jump focus up by one page.
    PageUp,
    /// Jump focus down by one page.
    PageDown,
    /// Feed a character into the typeahead search.
    Type(TypedKey),
}

/// Modifiers that disqualify a character from being typeahead input.
const NON_TYPING: KeyModifiers = KeyModifiers::ALT
    .union(KeyModifiers::CONTROL)
    .union(KeyModifiers::META)
    .union(KeyModifiers::SUPER);

/// Map a raw key press (plus the current open/closed state) to an [`Action`].
///
/// Returns `None` when the key is not part of the combobox interaction
/// contract; the caller must leave the event unhandled so the host's default
/// behavior is preserved.
///
/// Rules are evaluated in order:
/// 1. menu closed + one of ArrowDown/ArrowUp/Enter/Space → [`Action::Open`]
/// 2. Home → [`Action::First`], End → [`Action::Last`] (either state)
/// 3. printable character without Alt/Ctrl/Meta (space excluded), or
///    Backspace → [`Action::Type`]
/// 4. menu open: Alt+ArrowUp → [`Action::CloseSelect`], plain arrows and
///    page keys navigate, Escape closes, Enter/Space commit-close
pub fn resolve(key: &KeyEvent, menu_open: bool) -> Option<Action> {
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    if !menu_open
        && matches!(
            key.code,
            KeyCode::Down | KeyCode::Up | KeyCode::Enter | KeyCode::Char(' ')
        )
    {
        return Some(Action::Open);
    }

    match key.code {
        KeyCode::Home => return Some(Action::First),
        KeyCode::End => return Some(Action::Last),
        _ => {}
    }

    if let KeyCode::Char(c) = key.code {
        if c != ' ' && !key.modifiers.intersects(NON_TYPING) {
            return Some(Action::Type(TypedKey::Char(c)));
        }
    }
    if key.code == KeyCode::Backspace {
        return Some(Action::Type(TypedKey::Backspace));
    }

    if menu_open {
        return match key.code {
            KeyCode::Up if alt => Some(Action::CloseSelect),
            KeyCode::Down if !alt => Some(Action::Next),
            KeyCode::Up => Some(Action::Previous),
            KeyCode::PageUp => Some(Action::PageUp),
            KeyCode::PageDown => Some(Action::PageDown),
            KeyCode::Esc => Some(Action::Close),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::CloseSelect),
            _ => None,
        };
    }

    None
}
