//! User-agent device classification adapter.

use platform_host::DeviceClassifier;

#[derive(Debug, Clone, Copy, Default)]
/// Classifier reading the browser navigator's user-agent string.
pub struct NavigatorDeviceClassifier;

impl DeviceClassifier for NavigatorDeviceClassifier {
    fn is_mobile(&self) -> bool {
        imp::user_agent()
            .map(|agent| user_agent_is_mobile(&agent))
            .unwrap_or(false)
    }
}

const MOBILE_UA_MARKERS: &[&str] = &[
    "Android",
    "BlackBerry",
    "iPad",
    "iPhone",
    "iPod",
    "Mobile",
    "Opera Mini",
    "webOS",
];

fn user_agent_is_mobile(user_agent: &str) -> bool {
    MOBILE_UA_MARKERS
        .iter()
        .any(|marker| user_agent.contains(marker))
}

#[cfg(target_arch = "wasm32")]
mod wasm {
    pub(super) fn user_agent() -> Option<String> {
        web_sys::window()?.navigator().user_agent().ok()
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm {
    pub(super) fn user_agent() -> Option<String> {
        None
    }
}

#[cfg(target_arch = "wasm32")]
use wasm as imp;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;

#[cfg(test)]
mod tests {
    use super::user_agent_is_mobile;

    #[test]
    fn phone_agents_classify_as_mobile() {
        let agent = "Mozilla/5.0 (iPhone; CPU iPhone OS 16_0 like Mac OS X) \
                     AppleWebKit/605.1.15 (KHTML, like Gecko) Mobile/15E148";
        assert!(user_agent_is_mobile(agent));
    }

    #[test]
    fn desktop_agents_classify_as_desktop() {
        let agent = "Mozilla/5.0 (X11; Linux x86_64; rv:109.0) Gecko/20100101 Firefox/115.0";
        assert!(!user_agent_is_mobile(agent));
    }
}
