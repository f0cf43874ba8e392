//! Core data model for the desktop session store.

use serde::Serialize;

use crate::catalog;

/// Stacking order assigned to the session's first raised window; earlier
/// values are reserved for the desktop chrome (wallpaper, icons, taskbar).
pub const BASE_STACK_INDEX: i32 = 7;

/// Two clicks on the same key within this window count as a double click.
pub const DOUBLE_CLICK_WINDOW_MS: u64 = 400;

/// Window position applied when a custom layout is discarded.
pub const DEFAULT_WINDOW_POSITION: WindowPosition = WindowPosition { x: 0, y: 0 };

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
/// Behavior discriminant for a registered application.
///
/// `Folder`, `External`, and `Restricted` drive dedicated open transitions;
/// every other kind is presentation detail and shares the default window
/// lifecycle.
pub enum AppKind {
    /// Folder-like view over other applications (has children).
    Folder,
    /// Link opened in a new browsing context; never owns a window.
    External,
    /// Opening is denied with the access-restricted message.
    Restricted,
    /// Embedded external page rendered inside a window.
    Widget,
    /// Static picture window.
    Image,
    /// Plain text editor window.
    Notepad,
    /// Fake malware gag window.
    Virus,
    /// Instant-messenger window.
    Messenger,
    /// Minesweeper game window.
    Minesweeper,
    /// Browser chrome window.
    Browser,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// Desktop icon coordinates; presence marks the entry desktop-visible.
pub struct IconPosition {
    /// Horizontal offset in desktop grid pixels.
    pub x: i32,
    /// Vertical offset in desktop grid pixels.
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// Explicit window position override.
pub struct WindowPosition {
    /// Horizontal offset in viewport pixels.
    pub x: i32,
    /// Vertical offset in viewport pixels.
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
/// Preferred fixed window dimensions for windows that opt out of the
/// default responsive layout.
pub struct WindowSize {
    /// Width in pixels.
    pub w: f64,
    /// Height in pixels.
    pub h: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
/// Static, read-only configuration for one virtual application.
pub struct AppDescriptor {
    /// Unique registry key.
    pub key: &'static str,
    /// Behavior discriminant.
    pub kind: AppKind,
    /// Display label shown under icons and in title bars.
    pub label: &'static str,
    /// Icon asset name, when the entry has one.
    pub icon: Option<&'static str>,
    /// URL opened externally for [`AppKind::External`] entries.
    pub external_link: Option<&'static str>,
    /// URL embedded inside the window for [`AppKind::Widget`] entries.
    pub embed_url: Option<&'static str>,
    /// Desktop icon coordinates; `None` keeps the entry off the desktop.
    pub desktop_position: Option<IconPosition>,
    /// Ordered toolbar menu labels.
    pub toolbar_menus: &'static [&'static str],
    /// Ordered child keys; non-empty marks the entry a container.
    pub children: &'static [&'static str],
    /// Fixed window dimensions, when the window is not resizable.
    pub preferred_size: Option<WindowSize>,
}

impl AppDescriptor {
    /// Baseline descriptor with every optional field empty.
    pub const fn new(key: &'static str, label: &'static str, kind: AppKind) -> Self {
        Self {
            key,
            kind,
            label,
            icon: None,
            external_link: None,
            embed_url: None,
            desktop_position: None,
            toolbar_menus: &[],
            children: &[],
            preferred_size: None,
        }
    }

    /// Whether this entry is a folder-like container.
    pub fn is_folder(&self) -> bool {
        matches!(self.kind, AppKind::Folder)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// Mutable per-application window state; reset, never destroyed.
pub struct WindowState {
    /// Window currently instantiated.
    pub open: bool,
    /// Window hidden but not closed.
    pub minimized: bool,
    /// `true` = default/maximized layout, `false` = explicit custom layout.
    pub resized: bool,
    /// Explicit position override; `None` means default placement.
    pub position: Option<WindowPosition>,
    /// Single-click desktop icon highlight.
    pub clicked: bool,
    /// Timestamp of the last click on this key, for double-click detection.
    pub last_clicked_ms: Option<u64>,
}

impl Default for WindowState {
    fn default() -> Self {
        Self {
            open: false,
            minimized: false,
            resized: true,
            position: None,
            clicked: false,
            last_clicked_ms: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
/// One registry entry: static descriptor plus live window state.
pub struct ApplicationRecord {
    /// Static configuration.
    pub descriptor: AppDescriptor,
    /// Mutable window state.
    pub window: WindowState,
}

impl ApplicationRecord {
    /// Registry key of this entry.
    pub fn key(&self) -> &'static str {
        self.descriptor.key
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
/// Severity tag carried by the message channel.
pub enum MessageKind {
    /// Access denials and invalid operations.
    Error,
    /// Degraded-experience notices.
    Warning,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
/// The desktop session store state: application registry, focus bookkeeping,
/// folder navigation slots, and the single-slot message channel.
pub struct SessionState {
    /// Registry entries in catalog insertion order.
    pub applications: Vec<ApplicationRecord>,
    /// Highest stacking order handed out this session; never decreases.
    pub top_index: i32,
    /// Start menu visibility.
    pub menu_open: bool,
    /// Currently chosen container key.
    pub chosen_key: Option<&'static str>,
    /// Single-slot backward history.
    pub back_key: Option<&'static str>,
    /// Single-slot forward history.
    pub next_key: Option<&'static str>,
    /// Message channel text; `None` when dismissed.
    pub message: Option<String>,
    /// Severity of the most recent message.
    pub message_kind: MessageKind,
}

impl SessionState {
    /// Builds a session over `catalog`, one default-state record per
    /// descriptor. Keys must be unique; the set is fixed for the session's
    /// lifetime.
    pub fn new(catalog: &'static [AppDescriptor]) -> Self {
        debug_assert!(
            catalog
                .iter()
                .enumerate()
                .all(|(i, a)| catalog[..i].iter().all(|b| b.key != a.key)),
            "catalog keys must be unique"
        );
        Self {
            applications: catalog
                .iter()
                .map(|descriptor| ApplicationRecord {
                    descriptor: *descriptor,
                    window: WindowState::default(),
                })
                .collect(),
            top_index: BASE_STACK_INDEX,
            menu_open: false,
            chosen_key: None,
            back_key: None,
            next_key: None,
            message: None,
            message_kind: MessageKind::Error,
        }
    }

    /// Looks up a registry entry by key.
    pub fn application(&self, key: &str) -> Option<&ApplicationRecord> {
        self.applications.iter().find(|app| app.key() == key)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(catalog::DEFAULT_CATALOG)
    }
}
