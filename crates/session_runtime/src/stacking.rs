//! Stacking-order transitions bridging session state to rendered surfaces.

use platform_host::SurfaceStacking;

use crate::model::SessionState;

/// Raises the surface tagged with `key` to the top of the window stack.
///
/// Returns `false` without touching state when no surface is rendered for
/// `key`, or when that surface already holds the session's top index. The
/// second case is what lets a taskbar click fall through to minimize
/// instead of redundantly re-raising.
///
/// This is the sole writer of [`SessionState::top_index`], which never
/// decreases within a session.
pub fn raise_to_front(
    state: &mut SessionState,
    surfaces: &dyn SurfaceStacking,
    key: &str,
    new_index: Option<i32>,
) -> bool {
    let Some(current) = surfaces.stack_index(key) else {
        return false;
    };
    if current == state.top_index {
        return false;
    }

    let new_index = new_index.unwrap_or(state.top_index + 1);
    state.top_index = new_index;
    surfaces.set_stack_index(key, new_index);
    true
}

#[cfg(test)]
mod tests {
    use platform_host::{MemorySurfaceStacking, SurfaceStacking};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{SessionState, BASE_STACK_INDEX};

    #[test]
    fn raising_assigns_the_next_stack_index() {
        let mut state = SessionState::default();
        let surfaces = MemorySurfaceStacking::default();
        surfaces.place("notepad", 3);

        assert!(raise_to_front(&mut state, &surfaces, "notepad", None));
        assert_eq!(state.top_index, BASE_STACK_INDEX + 1);
        assert_eq!(surfaces.stack_index("notepad"), Some(BASE_STACK_INDEX + 1));
    }

    #[test]
    fn raising_is_idempotent_while_the_window_stays_on_top() {
        let mut state = SessionState::default();
        let surfaces = MemorySurfaceStacking::default();
        surfaces.place("notepad", 3);

        assert!(raise_to_front(&mut state, &surfaces, "notepad", None));
        let top = state.top_index;

        assert!(!raise_to_front(&mut state, &surfaces, "notepad", None));
        assert_eq!(state.top_index, top);
    }

    #[test]
    fn raising_without_a_rendered_surface_is_a_noop() {
        let mut state = SessionState::default();
        let surfaces = MemorySurfaceStacking::default();

        assert!(!raise_to_front(&mut state, &surfaces, "notepad", None));
        assert_eq!(state.top_index, BASE_STACK_INDEX);
    }
}
