//! Single-step navigation history over the folder subset of the registry.
//!
//! The explorer keeps one level of backward and one level of forward
//! history: two slots, not stacks. Choosing a new folder overwrites the
//! forward slot and pushes the previous choice backward.

use crate::model::SessionState;

/// Chooses `key`: the previous choice moves to the back slot and the
/// forward slot clears.
pub fn enter(state: &mut SessionState, key: &'static str) {
    state.back_key = state.chosen_key.take();
    state.next_key = None;
    state.chosen_key = Some(key);
}

/// Steps backward: the current choice becomes the forward slot.
pub fn go_back(state: &mut SessionState) {
    state.next_key = state.chosen_key.take();
    state.chosen_key = state.back_key.take();
}

/// Steps forward: the current choice becomes the back slot.
pub fn go_next(state: &mut SessionState) {
    state.back_key = state.chosen_key.take();
    state.chosen_key = state.next_key.take();
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn enter_pushes_previous_choice_back_and_clears_forward() {
        let mut state = SessionState::default();
        enter(&mut state, "computer");
        enter(&mut state, "music");

        assert_eq!(state.chosen_key, Some("music"));
        assert_eq!(state.back_key, Some("computer"));
        assert_eq!(state.next_key, None);
    }

    #[test]
    fn back_and_forward_swap_the_two_slots() {
        let mut state = SessionState::default();
        enter(&mut state, "computer");
        enter(&mut state, "music");

        go_back(&mut state);
        assert_eq!(state.chosen_key, Some("computer"));
        assert_eq!(state.back_key, None);
        assert_eq!(state.next_key, Some("music"));

        go_next(&mut state);
        assert_eq!(state.chosen_key, Some("music"));
        assert_eq!(state.back_key, Some("computer"));
        assert_eq!(state.next_key, None);
    }

    #[test]
    fn history_never_holds_more_than_one_step_each_way() {
        let mut state = SessionState::default();
        enter(&mut state, "computer");
        enter(&mut state, "music");
        enter(&mut state, "social");

        go_back(&mut state);
        assert_eq!(state.chosen_key, Some("music"));
        // The first choice fell out of the two-slot window.
        go_back(&mut state);
        assert_eq!(state.chosen_key, None);
        assert_eq!(state.next_key, Some("music"));
    }
}
