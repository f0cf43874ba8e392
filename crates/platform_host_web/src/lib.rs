//! Browser adapters for the `platform_host` port contracts.
//!
//! Every adapter routes through a target-selected `imp` module so the crate
//! compiles on native targets (where each capability degrades to a no-op)
//! while wasm builds talk to the real browser APIs.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod audio;
pub mod device;
pub mod external_url;
pub mod surfaces;

pub use audio::WebAudioService;
pub use device::NavigatorDeviceClassifier;
pub use external_url::WebExternalUrlService;
pub use surfaces::{DomSurfaceStacking, SURFACE_CLASS};

/// Builds the browser device classifier.
pub fn device_classifier() -> NavigatorDeviceClassifier {
    NavigatorDeviceClassifier
}

/// Builds the DOM-backed surface stacking adapter.
pub fn surface_stacking() -> DomSurfaceStacking {
    DomSurfaceStacking
}

/// Builds the browser audio playback adapter.
pub fn audio_service() -> WebAudioService {
    WebAudioService
}

/// Builds the browser external-navigation adapter.
pub fn external_url_service() -> WebExternalUrlService {
    WebExternalUrlService
}
