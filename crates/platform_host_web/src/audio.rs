//! Browser audio playback adapter.

use platform_host::{AudioFuture, AudioService};

#[derive(Debug, Clone, Copy, Default)]
/// Audio adapter backed by `HtmlAudioElement`.
pub struct WebAudioService;

impl AudioService for WebAudioService {
    fn play<'a>(&'a self, sound_id: &'a str) -> AudioFuture<'a, Result<(), String>> {
        Box::pin(async move {
            let src = sound_asset_path(sound_id);
            imp::play(&src).await
        })
    }
}

fn sound_asset_path(sound_id: &str) -> String {
    format!("/sounds/{sound_id}.mp3")
}

#[cfg(target_arch = "wasm32")]
mod wasm {
    use wasm_bindgen_futures::JsFuture;
    use web_sys::HtmlAudioElement;

    pub(super) async fn play(src: &str) -> Result<(), String> {
        let element = HtmlAudioElement::new_with_src(src)
            .map_err(|err| format!("audio element for `{src}` failed: {err:?}"))?;
        let playback = element
            .play()
            .map_err(|err| format!("playback of `{src}` rejected: {err:?}"))?;
        JsFuture::from(playback)
            .await
            .map_err(|err| format!("playback of `{src}` failed: {err:?}"))?;
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm {
    pub(super) async fn play(_src: &str) -> Result<(), String> {
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
use wasm as imp;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;

#[cfg(test)]
mod tests {
    use super::sound_asset_path;

    #[test]
    fn sound_ids_resolve_to_bundled_assets() {
        assert_eq!(sound_asset_path("error"), "/sounds/error.mp3");
        assert_eq!(sound_asset_path("startup"), "/sounds/startup.mp3");
    }
}
