//! Derived read views over the session registry.
//!
//! Views are computed from current state on every call; nothing is cached,
//! so repeated reads within one interaction always agree. Every returned
//! record carries its registry key for follow-up commands.

use crate::{catalog, model::{ApplicationRecord, SessionState}};

impl SessionState {
    /// Entries rendered as desktop icons, in registry order.
    pub fn visible_apps(&self) -> Vec<ApplicationRecord> {
        self.applications
            .iter()
            .filter(|app| app.descriptor.desktop_position.is_some())
            .copied()
            .collect()
    }

    /// Entries with an instantiated window, in registry order.
    pub fn open_apps(&self) -> Vec<ApplicationRecord> {
        self.applications
            .iter()
            .filter(|app| app.window.open)
            .copied()
            .collect()
    }

    /// Start-menu shortcuts, in the curated menu order.
    pub fn menu_apps(&self) -> Vec<ApplicationRecord> {
        catalog::START_MENU_KEYS
            .iter()
            .filter_map(|key| self.application(key))
            .copied()
            .collect()
    }

    /// Folder-like entries, in registry order.
    pub fn files(&self) -> Vec<ApplicationRecord> {
        self.applications
            .iter()
            .filter(|app| app.descriptor.is_folder())
            .copied()
            .collect()
    }

    /// The currently chosen folder, when one is chosen.
    pub fn chosen_file(&self) -> Option<ApplicationRecord> {
        self.chosen_key.and_then(|key| self.application(key)).copied()
    }

    /// Folder entries other than the chosen one.
    pub fn unchosen_files(&self) -> Vec<ApplicationRecord> {
        self.files()
            .into_iter()
            .filter(|app| Some(app.key()) != self.chosen_key)
            .collect()
    }

    /// Children of the chosen folder, in declared order; empty when nothing
    /// is chosen.
    pub fn chosen_file_children(&self) -> Vec<ApplicationRecord> {
        let Some(chosen) = self.chosen_file() else {
            return Vec::new();
        };
        chosen
            .descriptor
            .children
            .iter()
            .filter_map(|key| self.application(key))
            .copied()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{catalog, model::SessionState, navigation};

    fn keys(records: &[crate::model::ApplicationRecord]) -> Vec<&'static str> {
        records.iter().map(|app| app.key()).collect()
    }

    #[test]
    fn visible_apps_are_the_desktop_positioned_entries() {
        let state = SessionState::default();
        let visible = state.visible_apps();

        assert!(visible.iter().all(|app| app.descriptor.desktop_position.is_some()));
        // Folder children carry no coordinates and stay off the desktop.
        assert!(!keys(&visible).contains(&"eyes"));
        assert!(keys(&visible).contains(&"computer"));
    }

    #[test]
    fn menu_apps_follow_the_curated_order() {
        let state = SessionState::default();
        assert_eq!(keys(&state.menu_apps()), catalog::START_MENU_KEYS.to_vec());
    }

    #[test]
    fn chosen_file_children_follow_declared_order() {
        let mut state = SessionState::default();
        navigation::enter(&mut state, "music");

        assert_eq!(
            keys(&state.chosen_file_children()),
            vec!["eyes", "moon", "road", "leaves"]
        );
    }

    #[test]
    fn chosen_file_children_are_empty_without_a_choice() {
        let state = SessionState::default();
        assert!(state.chosen_file_children().is_empty());
    }

    #[test]
    fn unchosen_files_exclude_only_the_chosen_folder() {
        let mut state = SessionState::default();
        navigation::enter(&mut state, "music");

        let unchosen = keys(&state.unchosen_files());
        assert!(!unchosen.contains(&"music"));
        assert_eq!(unchosen.len(), state.files().len() - 1);
    }
}
