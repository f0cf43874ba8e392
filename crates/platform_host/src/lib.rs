//! Typed host-port contracts consumed by the desktop session store.
//!
//! This crate is the boundary between the session state machine and whatever
//! environment hosts it. It declares the capability traits the store calls
//! (device classification, rendered-surface stacking, audio playback,
//! external navigation, clock access) together with no-op adapters for
//! unsupported targets and in-memory doubles shared by downstream tests.
//! Concrete browser adapters live in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod audio;
pub mod device;
pub mod external_url;
pub mod surfaces;
pub mod time;

pub use audio::{AudioFuture, AudioService, NoopAudioService};
pub use device::{DeviceClassifier, FixedDeviceClassifier, NoopDeviceClassifier};
pub use external_url::{ExternalUrlFuture, ExternalUrlService, NoopExternalUrlService};
pub use surfaces::{MemorySurfaceStacking, NoopSurfaceStacking, SurfaceStacking};
pub use time::{unix_time_ms_now, Clock, ManualClock, SystemClock};
