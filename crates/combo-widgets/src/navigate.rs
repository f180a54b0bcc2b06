//! Pure focused-index arithmetic for menu navigation.

use crate::action::Action;

/// Number of options a PageUp/PageDown jump skips.
pub const PAGE_SIZE: usize = 10;

/// Compute the next focused index from the current one and an [`Action`].
///
/// `max` is the option count minus one. Arrow and page navigation clamp at
/// the bounds — there is no wraparound. Actions that are not focus motions
/// return `current` unchanged.
pub fn next_index(current: usize, max: usize, action: Action) -> usize {
    match action {
        Action::First => 0,
        Action::Last => max,
        Action::Previous => current.saturating_sub(1),
        Action::Next => (current + 1).min(max),
        Action::PageUp => current.saturating_sub(PAGE_SIZE),
        Action::PageDown => (current + PAGE_SIZE).min(max),
        _ => current,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::TypedKey;

    #[test]
    fn first_and_last() {
        assert_eq!(next_index(5, 9, Action::First), 0);
        assert_eq!(next_index(5, 9, Action::Last), 9);
    }

    #[test]
    fn next_clamps_at_max() {
        assert_eq!(next_index(0, 3, Action::Next), 1);
        assert_eq!(next_index(3, 3, Action::Next), 3);
        // Idempotent at the boundary.
        assert_eq!(next_index(next_index(3, 3, Action::Next), 3, Action::Next), 3);
    }

    #[test]
    fn previous_clamps_at_zero() {
        assert_eq!(next_index(1, 3, Action::Previous), 0);
        assert_eq!(next_index(0, 3, Action::Previous), 0);
        assert_eq!(
            next_index(next_index(0, 3, Action::Previous), 3, Action::Previous),
            0
        );
    }

    #[test]
    fn page_jumps_are_ten() {
        assert_eq!(next_index(0, 25, Action::PageDown), 10);
        assert_eq!(next_index(10, 25, Action::PageDown), 20);
        assert_eq!(next_index(20, 25, Action::PageDown), 25);
        assert_eq!(next_index(25, 25, Action::PageUp), 15);
        assert_eq!(next_index(5, 25, Action::PageUp), 0);
    }

    #[test]
    fn non_motion_actions_are_identity() {
        for action in [
            Action::Open,
            Action::Close,
            Action::CloseSelect,
            Action::Type(TypedKey::Char('x')),
        ] {
            assert_eq!(next_index(4, 9, action), 4);
        }
    }
}
