//! Audio-playback host contracts.

use std::{future::Future, pin::Pin};

/// Object-safe boxed future used by [`AudioService`].
pub type AudioFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service for fire-and-forget UI sound playback.
///
/// Callers never await playback as part of a state transition; failures are
/// reported for logging only and must not fail the triggering command.
pub trait AudioService {
    /// Plays the sound registered under `sound_id`.
    fn play<'a>(&'a self, sound_id: &'a str) -> AudioFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op audio service for unsupported targets.
pub struct NoopAudioService;

impl AudioService for NoopAudioService {
    fn play<'a>(&'a self, _sound_id: &'a str) -> AudioFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}
