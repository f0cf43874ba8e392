//! Session actions, side-effect intents, and transition logic for the
//! desktop session store.

use std::rc::Rc;

use platform_host::{
    Clock, DeviceClassifier, NoopDeviceClassifier, NoopSurfaceStacking, SurfaceStacking,
    SystemClock,
};
use thiserror::Error;

use crate::{
    catalog,
    model::{
        AppKind, ApplicationRecord, MessageKind, SessionState, WindowState,
        DEFAULT_WINDOW_POSITION, DOUBLE_CLICK_WINDOW_MS,
    },
    navigation, stacking,
};

/// Message shown when restricted content is opened.
pub const RESTRICTED_CONTENT_MESSAGE: &str =
    "You are not authorized to access this content. Please contact admin for more information.";

/// Message shown when a second application is opened on a mobile client.
pub const SINGLE_APP_MOBILE_MESSAGE: &str = "You are not authorized to use more than 1 \
     application at once on a mobile device. Please use a laptop for full access";

/// Sound effect played whenever the message channel opens.
pub const ALERT_SOUND_ID: &str = "error";

#[derive(Debug, Clone, PartialEq)]
/// Commands accepted by [`reduce_session`] to mutate [`SessionState`].
pub enum SessionAction {
    /// Single click on an application icon; opens on a double click.
    Click {
        /// Application clicked.
        key: String,
    },
    /// Open an application, dispatching on its descriptor kind.
    Open {
        /// Application to open.
        key: String,
    },
    /// Close an application, resetting its window state to defaults.
    Close {
        /// Application to close.
        key: String,
    },
    /// Toggle an application's minimized flag.
    Minimize {
        /// Application to minimize or restore.
        key: String,
    },
    /// Taskbar behavior: bring forward if behind, hide if already in front.
    SmartMinimize {
        /// Application associated with the taskbar entry.
        key: String,
    },
    /// Toggle between the default/maximized layout and a custom layout.
    Resize {
        /// Application to relayout.
        key: String,
    },
    /// Raise an application's rendered surface to the top of the stack.
    RaiseToFront {
        /// Application to raise.
        key: String,
    },
    /// Step the folder navigation history backward.
    GoBack,
    /// Step the folder navigation history forward.
    GoNext,
    /// Show a message in the single-slot channel.
    OpenMessage {
        /// Message text; defaults to the restricted-content message.
        text: Option<String>,
        /// Severity tag; defaults to [`MessageKind::Error`].
        kind: Option<MessageKind>,
    },
    /// Dismiss the current message.
    CloseMessage,
    /// Toggle the start menu open/closed.
    ToggleStartMenu,
    /// Clear transient UI state: icon highlights and the start menu.
    ResetUi,
}

#[derive(Debug, Clone, PartialEq)]
/// Side-effect intents emitted by [`reduce_session`] for the host runtime
/// to execute outside the transition.
pub enum RuntimeEffect {
    /// Open a URL in a new browsing context.
    OpenExternalUrl(String),
    /// Play a named UI sound, fire-and-forget.
    PlaySound(&'static str),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for invalid commands.
pub enum SessionError {
    /// The command referenced a key outside the fixed registry.
    #[error("application `{key}` is not registered")]
    ApplicationNotFound {
        /// The unknown key.
        key: String,
    },
}

#[derive(Clone)]
/// Host capabilities consulted synchronously during a transition.
pub struct SessionPorts {
    /// Mobile/desktop classification of the current client.
    pub device: Rc<dyn DeviceClassifier>,
    /// Stacking control over the presentation layer's rendered surfaces.
    pub surfaces: Rc<dyn SurfaceStacking>,
    /// Clock for interaction timestamps.
    pub clock: Rc<dyn Clock>,
}

impl Default for SessionPorts {
    fn default() -> Self {
        Self {
            device: Rc::new(NoopDeviceClassifier),
            surfaces: Rc::new(NoopSurfaceStacking),
            clock: Rc::new(SystemClock),
        }
    }
}

/// Applies a [`SessionAction`] to the session state and collects resulting
/// side effects.
///
/// Every transition runs synchronously to completion; the returned effects
/// are fire-and-forget and never feed back into the transition that emitted
/// them.
///
/// # Errors
///
/// Returns [`SessionError::ApplicationNotFound`] when an action references
/// a key outside the registry, leaving state untouched.
pub fn reduce_session(
    state: &mut SessionState,
    ports: &SessionPorts,
    action: SessionAction,
) -> Result<Vec<RuntimeEffect>, SessionError> {
    let mut effects = Vec::new();
    match action {
        SessionAction::Click { key } => {
            let window = find_app(state, &key)?.window;
            let was_clicked = window.clicked;
            let last_clicked = window.last_clicked_ms;
            reset_ui(state);

            let now = ports.clock.now_ms();
            if let Some(last) = last_clicked {
                if now.saturating_sub(last) < DOUBLE_CLICK_WINDOW_MS {
                    open_application(state, ports, &key, true, &mut effects)?;
                }
            }

            let app = find_app_mut(state, &key)?;
            app.window.last_clicked_ms = Some(now);
            app.window.clicked = !was_clicked;
        }
        SessionAction::Open { key } => {
            open_application(state, ports, &key, false, &mut effects)?;
        }
        SessionAction::Close { key } => {
            find_app_mut(state, &key)?.window = WindowState::default();
        }
        SessionAction::Minimize { key } => {
            let window = &mut find_app_mut(state, &key)?.window;
            window.minimized = !window.minimized;
        }
        SessionAction::SmartMinimize { key } => {
            let minimized = find_app(state, &key)?.window.minimized;
            if minimized {
                unminimize(state, ports, &key)?;
            } else if !stacking::raise_to_front(state, ports.surfaces.as_ref(), &key, None) {
                find_app_mut(state, &key)?.window.minimized = true;
            }
        }
        SessionAction::Resize { key } => {
            let window = &mut find_app_mut(state, &key)?.window;
            // Leaving the custom layout snaps to the fixed default
            // coordinate; entering it clears the override so the
            // presentation layer computes its own placement.
            window.position = if !window.resized {
                Some(DEFAULT_WINDOW_POSITION)
            } else {
                None
            };
            window.resized = !window.resized;
        }
        SessionAction::RaiseToFront { key } => {
            find_app(state, &key)?;
            stacking::raise_to_front(state, ports.surfaces.as_ref(), &key, None);
        }
        SessionAction::GoBack => navigation::go_back(state),
        SessionAction::GoNext => navigation::go_next(state),
        SessionAction::OpenMessage { text, kind } => {
            let text = text.unwrap_or_else(|| RESTRICTED_CONTENT_MESSAGE.to_string());
            open_message(state, &mut effects, text, kind.unwrap_or(MessageKind::Error));
        }
        SessionAction::CloseMessage => {
            state.message = None;
        }
        SessionAction::ToggleStartMenu => {
            state.menu_open = !state.menu_open;
        }
        SessionAction::ResetUi => reset_ui(state),
    }

    Ok(effects)
}

/// Clears every icon highlight and closes the start menu. The message
/// channel is deliberately left alone; only an explicit close clears it.
fn reset_ui(state: &mut SessionState) {
    for app in &mut state.applications {
        app.window.clicked = false;
    }
    state.menu_open = false;
}

fn open_message(
    state: &mut SessionState,
    effects: &mut Vec<RuntimeEffect>,
    text: String,
    kind: MessageKind,
) {
    state.message = Some(text);
    state.message_kind = kind;
    effects.push(RuntimeEffect::PlaySound(ALERT_SOUND_ID));
}

fn open_application(
    state: &mut SessionState,
    ports: &SessionPorts,
    key: &str,
    already_reset: bool,
    effects: &mut Vec<RuntimeEffect>,
) -> Result<(), SessionError> {
    if !already_reset {
        reset_ui(state);
    }

    let descriptor = find_app(state, key)?.descriptor;
    match descriptor.kind {
        AppKind::External => {
            if let Some(url) = descriptor.external_link {
                effects.push(RuntimeEffect::OpenExternalUrl(url.to_string()));
            }
        }
        AppKind::Restricted => open_message(
            state,
            effects,
            RESTRICTED_CONTENT_MESSAGE.to_string(),
            MessageKind::Error,
        ),
        AppKind::Folder => open_folder(state, ports, key, effects)?,
        _ => open_default(state, ports, key, effects)?,
    }
    Ok(())
}

fn open_folder(
    state: &mut SessionState,
    ports: &SessionPorts,
    key: &str,
    effects: &mut Vec<RuntimeEffect>,
) -> Result<(), SessionError> {
    let app = find_app(state, key)?;
    let folder_key = app.key();
    if !app.window.open {
        if gate_permits_open(state, ports, key, effects)? {
            find_app_mut(state, key)?.window.open = true;
            navigation::enter(state, folder_key);
        }
    } else {
        // Re-point the navigation slots at this folder and bring the
        // already-open window forward.
        navigation::enter(state, folder_key);
        unminimize(state, ports, key)?;
    }
    Ok(())
}

fn open_default(
    state: &mut SessionState,
    ports: &SessionPorts,
    key: &str,
    effects: &mut Vec<RuntimeEffect>,
) -> Result<(), SessionError> {
    if !find_app(state, key)?.window.open {
        if gate_permits_open(state, ports, key, effects)? {
            find_app_mut(state, key)?.window.open = true;
        }
    } else {
        unminimize(state, ports, key)?;
    }
    Ok(())
}

fn unminimize(
    state: &mut SessionState,
    ports: &SessionPorts,
    key: &str,
) -> Result<(), SessionError> {
    find_app_mut(state, key)?.window.minimized = false;
    stacking::raise_to_front(state, ports.surfaces.as_ref(), key, None);
    Ok(())
}

/// Mobile gate consulted before any open transition. Unminimizing an
/// already-open application intentionally skips this check.
fn gate_permits_open(
    state: &mut SessionState,
    ports: &SessionPorts,
    key: &str,
    effects: &mut Vec<RuntimeEffect>,
) -> Result<bool, SessionError> {
    if !ports.device.is_mobile() {
        return Ok(true);
    }

    if state.applications.iter().any(|app| app.window.open) {
        open_message(
            state,
            effects,
            SINGLE_APP_MOBILE_MESSAGE.to_string(),
            MessageKind::Error,
        );
        return Ok(false);
    }

    if catalog::MOBILE_BLOCKED_APPS.contains(&key) {
        let label = find_app(state, key)?.descriptor.label;
        open_message(
            state,
            effects,
            format!(
                "You are not allowed to open {label} application on a mobile device. \
                 Please use a laptop for access"
            ),
            MessageKind::Error,
        );
        return Ok(false);
    }

    Ok(true)
}

fn find_app<'a>(
    state: &'a SessionState,
    key: &str,
) -> Result<&'a ApplicationRecord, SessionError> {
    state
        .applications
        .iter()
        .find(|app| app.key() == key)
        .ok_or_else(|| SessionError::ApplicationNotFound {
            key: key.to_string(),
        })
}

fn find_app_mut<'a>(
    state: &'a mut SessionState,
    key: &str,
) -> Result<&'a mut ApplicationRecord, SessionError> {
    state
        .applications
        .iter_mut()
        .find(|app| app.key() == key)
        .ok_or_else(|| SessionError::ApplicationNotFound {
            key: key.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use platform_host::{FixedDeviceClassifier, ManualClock, MemorySurfaceStacking};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::BASE_STACK_INDEX;

    fn desktop_ports() -> (SessionPorts, Rc<ManualClock>, MemorySurfaceStacking) {
        let clock = Rc::new(ManualClock::starting_at(1_000));
        let surfaces = MemorySurfaceStacking::default();
        let ports = SessionPorts {
            device: Rc::new(FixedDeviceClassifier::new(false)),
            surfaces: Rc::new(surfaces.clone()),
            clock: clock.clone(),
        };
        (ports, clock, surfaces)
    }

    fn mobile_ports() -> SessionPorts {
        SessionPorts {
            device: Rc::new(FixedDeviceClassifier::new(true)),
            ..SessionPorts::default()
        }
    }

    fn dispatch(
        state: &mut SessionState,
        ports: &SessionPorts,
        action: SessionAction,
    ) -> Vec<RuntimeEffect> {
        reduce_session(state, ports, action).expect("valid action")
    }

    fn open(state: &mut SessionState, ports: &SessionPorts, key: &str) -> Vec<RuntimeEffect> {
        dispatch(state, ports, SessionAction::Open { key: key.to_string() })
    }

    fn window(state: &SessionState, key: &str) -> WindowState {
        state.application(key).expect("registered key").window
    }

    #[test]
    fn close_resets_window_state_to_the_full_default() {
        let (ports, _, _) = desktop_ports();
        let mut state = SessionState::default();

        open(&mut state, &ports, "notepad");
        dispatch(&mut state, &ports, SessionAction::Minimize { key: "notepad".into() });
        dispatch(&mut state, &ports, SessionAction::Resize { key: "notepad".into() });
        dispatch(&mut state, &ports, SessionAction::Click { key: "notepad".into() });

        dispatch(&mut state, &ports, SessionAction::Close { key: "notepad".into() });
        assert_eq!(window(&state, "notepad"), WindowState::default());
    }

    #[test]
    fn double_click_within_the_window_opens_the_application() {
        let (ports, clock, _) = desktop_ports();
        let mut state = SessionState::default();

        dispatch(&mut state, &ports, SessionAction::Click { key: "notepad".into() });
        assert!(!window(&state, "notepad").open);

        clock.advance(200);
        dispatch(&mut state, &ports, SessionAction::Click { key: "notepad".into() });
        assert!(window(&state, "notepad").open);
    }

    #[test]
    fn slow_second_click_does_not_open_the_application() {
        let (ports, clock, _) = desktop_ports();
        let mut state = SessionState::default();

        dispatch(&mut state, &ports, SessionAction::Click { key: "notepad".into() });
        clock.advance(DOUBLE_CLICK_WINDOW_MS);
        dispatch(&mut state, &ports, SessionAction::Click { key: "notepad".into() });

        assert!(!window(&state, "notepad").open);
    }

    #[test]
    fn at_most_one_icon_is_highlighted_after_any_click() {
        let (ports, clock, _) = desktop_ports();
        let mut state = SessionState::default();

        dispatch(&mut state, &ports, SessionAction::Click { key: "computer".into() });
        clock.advance(1_000);
        dispatch(&mut state, &ports, SessionAction::Click { key: "notepad".into() });

        let highlighted: Vec<_> = state
            .applications
            .iter()
            .filter(|app| app.window.clicked)
            .map(|app| app.key())
            .collect();
        assert_eq!(highlighted, vec!["notepad"]);
    }

    #[test]
    fn click_closes_the_start_menu() {
        let (ports, _, _) = desktop_ports();
        let mut state = SessionState::default();

        dispatch(&mut state, &ports, SessionAction::ToggleStartMenu);
        assert!(state.menu_open);

        dispatch(&mut state, &ports, SessionAction::Click { key: "computer".into() });
        assert!(!state.menu_open);
    }

    #[test]
    fn smart_minimize_raises_when_behind_and_hides_when_on_top() {
        let (ports, _, surfaces) = desktop_ports();
        let mut state = SessionState::default();

        open(&mut state, &ports, "notepad");
        surfaces.place("notepad", 3);

        // Behind the top: the window comes forward and stays visible.
        dispatch(&mut state, &ports, SessionAction::SmartMinimize { key: "notepad".into() });
        assert!(!window(&state, "notepad").minimized);
        assert_eq!(state.top_index, BASE_STACK_INDEX + 1);
        assert_eq!(surfaces.stack_index("notepad"), Some(state.top_index));

        // Already on top: the same command hides it instead.
        dispatch(&mut state, &ports, SessionAction::SmartMinimize { key: "notepad".into() });
        assert!(window(&state, "notepad").minimized);

        // Minimized: it restores and comes forward again.
        dispatch(&mut state, &ports, SessionAction::SmartMinimize { key: "notepad".into() });
        assert!(!window(&state, "notepad").minimized);
    }

    #[test]
    fn reopening_an_open_application_unminimizes_and_raises_it() {
        let (ports, _, surfaces) = desktop_ports();
        let mut state = SessionState::default();

        open(&mut state, &ports, "notepad");
        dispatch(&mut state, &ports, SessionAction::Minimize { key: "notepad".into() });
        surfaces.place("notepad", 3);

        open(&mut state, &ports, "notepad");
        let notepad = window(&state, "notepad");
        assert!(notepad.open);
        assert!(!notepad.minimized);
        assert_eq!(surfaces.stack_index("notepad"), Some(state.top_index));
    }

    #[test]
    fn resize_toggles_between_default_and_custom_layout() {
        let (ports, _, _) = desktop_ports();
        let mut state = SessionState::default();
        open(&mut state, &ports, "notepad");

        // Default layout -> custom: the override clears so the presentation
        // layer picks the placement.
        dispatch(&mut state, &ports, SessionAction::Resize { key: "notepad".into() });
        let notepad = window(&state, "notepad");
        assert!(!notepad.resized);
        assert_eq!(notepad.position, None);

        // Custom -> default layout: snaps to the canonical coordinate.
        dispatch(&mut state, &ports, SessionAction::Resize { key: "notepad".into() });
        let notepad = window(&state, "notepad");
        assert!(notepad.resized);
        assert_eq!(notepad.position, Some(DEFAULT_WINDOW_POSITION));
    }

    #[test]
    fn opening_a_folder_chooses_it_and_exposes_its_children() {
        let (ports, _, _) = desktop_ports();
        let mut state = SessionState::default();

        open(&mut state, &ports, "music");

        assert!(window(&state, "music").open);
        assert_eq!(state.chosen_key, Some("music"));
        let children: Vec<_> = state
            .chosen_file_children()
            .iter()
            .map(|app| app.key())
            .collect();
        assert_eq!(children, vec!["eyes", "moon", "road", "leaves"]);
    }

    #[test]
    fn opening_an_open_folder_repoints_navigation_and_restores_it() {
        let (ports, _, _) = desktop_ports();
        let mut state = SessionState::default();

        open(&mut state, &ports, "computer");
        open(&mut state, &ports, "music");
        assert_eq!(state.back_key, Some("computer"));

        dispatch(&mut state, &ports, SessionAction::Minimize { key: "computer".into() });
        open(&mut state, &ports, "computer");

        assert_eq!(state.chosen_key, Some("computer"));
        assert_eq!(state.back_key, Some("music"));
        assert_eq!(state.next_key, None);
        assert!(!window(&state, "computer").minimized);
    }

    #[test]
    fn navigation_round_trip_through_back_and_next() {
        let (ports, _, _) = desktop_ports();
        let mut state = SessionState::default();

        open(&mut state, &ports, "computer");
        open(&mut state, &ports, "music");

        dispatch(&mut state, &ports, SessionAction::GoBack);
        assert_eq!(state.chosen_key, Some("computer"));
        assert_eq!(state.back_key, None);
        assert_eq!(state.next_key, Some("music"));

        dispatch(&mut state, &ports, SessionAction::GoNext);
        assert_eq!(state.chosen_key, Some("music"));
        assert_eq!(state.back_key, Some("computer"));
        assert_eq!(state.next_key, None);
    }

    #[test]
    fn opening_an_external_link_emits_an_effect_without_state_change() {
        let (ports, _, _) = desktop_ports();
        let mut state = SessionState::default();
        let before = state.clone();

        let effects = open(&mut state, &ports, "eyes");

        assert_eq!(
            effects,
            vec![RuntimeEffect::OpenExternalUrl(
                "https://www.youtube.com/watch?v=LcJm1pOswfM".to_string()
            )]
        );
        assert_eq!(state, before);
    }

    #[test]
    fn opening_restricted_content_raises_the_access_message() {
        let (ports, _, _) = desktop_ports();
        let mut state = SessionState::default();

        let effects = open(&mut state, &ports, "vault");

        assert!(!window(&state, "vault").open);
        assert_eq!(state.message.as_deref(), Some(RESTRICTED_CONTENT_MESSAGE));
        assert_eq!(state.message_kind, MessageKind::Error);
        assert_eq!(effects, vec![RuntimeEffect::PlaySound(ALERT_SOUND_ID)]);
    }

    #[test]
    fn mobile_clients_open_at_most_one_application() {
        let ports = mobile_ports();
        let mut state = SessionState::default();

        open(&mut state, &ports, "notepad");
        assert!(window(&state, "notepad").open);

        let effects = open(&mut state, &ports, "mine");
        assert!(!window(&state, "mine").open);
        assert_eq!(state.message.as_deref(), Some(SINGLE_APP_MOBILE_MESSAGE));
        assert_eq!(effects, vec![RuntimeEffect::PlaySound(ALERT_SOUND_ID)]);
    }

    #[test]
    fn mobile_clients_cannot_open_blocked_applications() {
        let ports = mobile_ports();
        let mut state = SessionState::default();

        open(&mut state, &ports, "spider");

        assert!(!window(&state, "spider").open);
        let message = state.message.expect("denial message");
        assert!(message.contains("Spider"), "unexpected message: {message}");
    }

    #[test]
    fn desktop_clients_open_applications_without_gating() {
        let (ports, _, _) = desktop_ports();
        let mut state = SessionState::default();

        open(&mut state, &ports, "notepad");
        open(&mut state, &ports, "mine");

        assert!(window(&state, "notepad").open);
        assert!(window(&state, "mine").open);
        assert_eq!(state.message, None);
    }

    #[test]
    fn unknown_keys_fail_fast_without_touching_state() {
        let (ports, _, _) = desktop_ports();
        let mut state = SessionState::default();
        let before = state.clone();

        let err = reduce_session(&mut state, &ports, SessionAction::Open { key: "nope".into() })
            .expect_err("unknown key");

        assert_eq!(err, SessionError::ApplicationNotFound { key: "nope".into() });
        assert_eq!(state, before);
    }

    #[test]
    fn ui_reset_never_clears_the_message_channel() {
        let (ports, _, _) = desktop_ports();
        let mut state = SessionState::default();

        dispatch(
            &mut state,
            &ports,
            SessionAction::OpenMessage { text: Some("offline".into()), kind: Some(MessageKind::Warning) },
        );
        dispatch(&mut state, &ports, SessionAction::ResetUi);
        assert_eq!(state.message.as_deref(), Some("offline"));
        assert_eq!(state.message_kind, MessageKind::Warning);

        dispatch(&mut state, &ports, SessionAction::CloseMessage);
        assert_eq!(state.message, None);
        // The kind tag keeps the last severity until the next message.
        assert_eq!(state.message_kind, MessageKind::Warning);
    }

    #[test]
    fn open_message_defaults_to_the_restricted_error() {
        let (ports, _, _) = desktop_ports();
        let mut state = SessionState::default();

        dispatch(&mut state, &ports, SessionAction::OpenMessage { text: None, kind: None });

        assert_eq!(state.message.as_deref(), Some(RESTRICTED_CONTENT_MESSAGE));
        assert_eq!(state.message_kind, MessageKind::Error);
    }
}
