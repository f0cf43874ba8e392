//! Browser external-navigation adapter.

use platform_host::{ExternalUrlFuture, ExternalUrlService};

#[derive(Debug, Clone, Copy, Default)]
/// External-navigation adapter opening URLs in a new browsing context.
pub struct WebExternalUrlService;

impl ExternalUrlService for WebExternalUrlService {
    fn open_url<'a>(&'a self, url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>> {
        Box::pin(async move { imp::open_url(url) })
    }
}

#[cfg(target_arch = "wasm32")]
mod wasm {
    pub(super) fn open_url(url: &str) -> Result<(), String> {
        let window = web_sys::window().ok_or_else(|| "no browser window".to_string())?;
        window
            .open_with_url_and_target(url, "_blank")
            .map_err(|err| format!("opening `{url}` failed: {err:?}"))?;
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm {
    pub(super) fn open_url(_url: &str) -> Result<(), String> {
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
use wasm as imp;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
