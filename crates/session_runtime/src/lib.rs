//! Desktop session store for a browser desktop simulation.
//!
//! One process-wide state container tracks which virtual applications
//! exist, which are open, minimized, resized, and focused, how the
//! folder-like subset is navigated with a two-slot back/next history, and
//! the single-slot advisory message channel. The presentation layer issues
//! [`SessionAction`] commands and re-reads the derived views; rendering
//! itself lives outside this crate.

pub mod catalog;
pub mod e2e;
pub mod effect_executor;
pub mod host;
pub mod model;
pub mod navigation;
pub mod reducer;
pub mod runtime_context;
pub mod stacking;
pub mod views;

pub use host::{SessionHostContext, MOBILE_RESTRICTED_BOOT_MESSAGE, STARTUP_SOUND_ID};
pub use model::*;
pub use reducer::{
    reduce_session, RuntimeEffect, SessionAction, SessionError, SessionPorts, ALERT_SOUND_ID,
    RESTRICTED_CONTENT_MESSAGE, SINGLE_APP_MOBILE_MESSAGE,
};
pub use runtime_context::{use_session_runtime, SessionProvider, SessionRuntimeContext};
pub use stacking::raise_to_front;
