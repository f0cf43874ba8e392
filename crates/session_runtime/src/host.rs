//! Host-side runtime helpers for executing session effects and wiring the
//! boot sequence.
//!
//! The host context bundles the port implementations behind a typed
//! boundary so the reducer stays decoupled from any rendering technology;
//! browser adapters are the default and tests swap in the in-memory
//! doubles.

use std::rc::Rc;

use leptos::{logging, spawn_local, Callable, Callback};
use platform_host::{
    AudioService, Clock, DeviceClassifier, ExternalUrlService, FixedDeviceClassifier,
    SurfaceStacking, SystemClock,
};
use platform_host_web::{audio_service, device_classifier, external_url_service, surface_stacking};

use crate::{
    e2e,
    model::MessageKind,
    reducer::{RuntimeEffect, SessionAction, SessionPorts},
};

/// Sound played once when the session boots.
pub const STARTUP_SOUND_ID: &str = "startup";

/// Notice shown on mobile clients at boot.
pub const MOBILE_RESTRICTED_BOOT_MESSAGE: &str = "Your access is restricted on a mobile device. \
     You are not allowed to use laptop icons and can only open one application at a time through \
     the menu. Navigate to laptop for full access";

#[derive(Clone)]
/// Host service bundle for session runtime side effects.
pub struct SessionHostContext {
    device: Rc<dyn DeviceClassifier>,
    surfaces: Rc<dyn SurfaceStacking>,
    audio: Rc<dyn AudioService>,
    external_urls: Rc<dyn ExternalUrlService>,
    clock: Rc<dyn Clock>,
}

impl Default for SessionHostContext {
    fn default() -> Self {
        // An E2E scene may pin the device classification so deterministic
        // runs do not depend on the harness user agent.
        let device: Rc<dyn DeviceClassifier> =
            match e2e::current_browser_e2e_config().and_then(|config| config.mobile) {
                Some(mobile) => Rc::new(FixedDeviceClassifier::new(mobile)),
                None => Rc::new(device_classifier()),
            };
        Self {
            device,
            surfaces: Rc::new(surface_stacking()),
            audio: Rc::new(audio_service()),
            external_urls: Rc::new(external_url_service()),
            clock: Rc::new(SystemClock),
        }
    }
}

impl SessionHostContext {
    /// Builds a context over explicit port implementations.
    pub fn new(
        device: Rc<dyn DeviceClassifier>,
        surfaces: Rc<dyn SurfaceStacking>,
        audio: Rc<dyn AudioService>,
        external_urls: Rc<dyn ExternalUrlService>,
        clock: Rc<dyn Clock>,
    ) -> Self {
        Self {
            device,
            surfaces,
            audio,
            external_urls,
            clock,
        }
    }

    /// Returns the synchronous port bundle consulted during transitions.
    pub fn session_ports(&self) -> SessionPorts {
        SessionPorts {
            device: self.device.clone(),
            surfaces: self.surfaces.clone(),
            clock: self.clock.clone(),
        }
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    ///
    /// Execution is fire-and-forget: failures are logged and never fail the
    /// transition that emitted the effect.
    pub fn run_runtime_effect(&self, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::OpenExternalUrl(url) => {
                let service = self.external_urls.clone();
                spawn_local(async move {
                    if let Err(err) = service.open_url(&url).await {
                        logging::warn!("opening external url failed: {err}");
                    }
                });
            }
            RuntimeEffect::PlaySound(sound_id) => {
                let service = self.audio.clone();
                spawn_local(async move {
                    if let Err(err) = service.play(sound_id).await {
                        logging::warn!("sound `{sound_id}` playback failed: {err}");
                    }
                });
            }
        }
    }

    /// Runs the boot sequence: the startup chime, the mobile
    /// restricted-access notice, and any E2E scene requested by the URL.
    pub fn install_boot_sequence(&self, dispatch: Callback<SessionAction>) {
        self.run_runtime_effect(RuntimeEffect::PlaySound(STARTUP_SOUND_ID));

        if self.device.is_mobile() {
            dispatch.call(SessionAction::OpenMessage {
                text: Some(MOBILE_RESTRICTED_BOOT_MESSAGE.to_string()),
                kind: Some(MessageKind::Warning),
            });
        }

        if let Some(config) = e2e::current_browser_e2e_config() {
            for action in e2e::scene_boot_actions(config.scene) {
                dispatch.call(action);
            }
        }
    }
}
