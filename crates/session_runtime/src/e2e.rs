//! Browser-only E2E scene configuration shared by the boot sequence and the
//! deterministic UI validation workflow.
//!
//! A scene is a named session state the harness can request through the
//! query string; the boot sequence replays the scene's actions against a
//! fresh session so screenshots and assertions see the same state on every
//! run.

use serde::{Deserialize, Serialize};

use crate::reducer::SessionAction;

/// Canonical browser E2E scenes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BrowserE2eScene {
    /// Idle desktop with no windows open.
    DesktopDefault,
    /// Explorer window open on the root folder.
    ExplorerOpen,
    /// Message channel raised with the default restricted-content text.
    MessageOpen,
    /// Start menu expanded.
    StartMenuOpen,
}

impl BrowserE2eScene {
    /// Stable query-string scene id.
    pub const fn id(self) -> &'static str {
        match self {
            Self::DesktopDefault => "desktop-default",
            Self::ExplorerOpen => "explorer-open",
            Self::MessageOpen => "message-open",
            Self::StartMenuOpen => "start-menu-open",
        }
    }

    #[cfg(any(test, target_arch = "wasm32"))]
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "desktop-default" => Some(Self::DesktopDefault),
            "explorer-open" => Some(Self::ExplorerOpen),
            "message-open" => Some(Self::MessageOpen),
            "start-menu-open" => Some(Self::StartMenuOpen),
            _ => None,
        }
    }
}

/// Parsed browser E2E query-string configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowserE2eConfig {
    /// Requested canonical scene.
    pub scene: BrowserE2eScene,
    /// Optional device-classification override.
    pub mobile: Option<bool>,
}

/// Actions the boot sequence replays to reach `scene`.
pub fn scene_boot_actions(scene: BrowserE2eScene) -> Vec<SessionAction> {
    match scene {
        BrowserE2eScene::DesktopDefault => Vec::new(),
        BrowserE2eScene::ExplorerOpen => vec![SessionAction::Open {
            key: "computer".to_string(),
        }],
        BrowserE2eScene::MessageOpen => vec![SessionAction::OpenMessage {
            text: None,
            kind: None,
        }],
        BrowserE2eScene::StartMenuOpen => vec![SessionAction::ToggleStartMenu],
    }
}

#[cfg(any(test, target_arch = "wasm32"))]
fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

#[cfg(any(test, target_arch = "wasm32"))]
/// Parses browser E2E configuration from a query string.
pub fn parse_browser_e2e_from_query(query: &str) -> Option<BrowserE2eConfig> {
    let mut scene = None;
    let mut mobile = None;

    for pair in query
        .trim_start_matches('?')
        .split('&')
        .filter(|part| !part.is_empty())
    {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        match key {
            "e2e-scene" => {
                scene = BrowserE2eScene::parse(value);
            }
            "e2e-mobile" => {
                mobile = parse_bool(value);
            }
            _ => {}
        }
    }

    scene.map(|scene| BrowserE2eConfig { scene, mobile })
}

/// Returns the active browser E2E configuration when the current URL
/// requests one.
pub fn current_browser_e2e_config() -> Option<BrowserE2eConfig> {
    #[cfg(target_arch = "wasm32")]
    {
        let window = web_sys::window()?;
        let search = window.location().search().ok()?;
        parse_browser_e2e_from_query(&search)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{model::SessionState, reducer::{reduce_session, SessionPorts}};

    #[test]
    fn parses_scene_and_device_override() {
        let parsed = parse_browser_e2e_from_query("?e2e-scene=explorer-open&e2e-mobile=true")
            .expect("config");
        assert_eq!(parsed.scene, BrowserE2eScene::ExplorerOpen);
        assert_eq!(parsed.mobile, Some(true));
    }

    #[test]
    fn ignores_unknown_scenes_and_invalid_overrides() {
        assert_eq!(parse_browser_e2e_from_query("?e2e-scene=flying-toasters"), None);

        let parsed = parse_browser_e2e_from_query("?e2e-scene=desktop-default&e2e-mobile=maybe")
            .expect("config");
        assert_eq!(parsed.mobile, None);
    }

    #[test]
    fn explorer_scene_replay_opens_and_chooses_the_root_folder() {
        let mut state = SessionState::default();
        let ports = SessionPorts::default();

        for action in scene_boot_actions(BrowserE2eScene::ExplorerOpen) {
            reduce_session(&mut state, &ports, action).expect("scene action");
        }

        let computer = state.application("computer").expect("registered").window;
        assert!(computer.open);
        assert_eq!(state.chosen_key, Some("computer"));
    }
}
