//! DOM-backed surface stacking adapter.
//!
//! The presentation layer tags every draggable window surface with
//! [`SURFACE_CLASS`] plus the application key as a second class name. The
//! adapter locates the first matching surface and reads or writes its inline
//! `z-index` style, which is the stacking order the compositor honors.

use platform_host::SurfaceStacking;

/// Class name shared by every rendered window surface.
pub const SURFACE_CLASS: &str = "session-window";

#[derive(Debug, Clone, Copy, Default)]
/// Surface stacking adapter over the live DOM.
pub struct DomSurfaceStacking;

impl SurfaceStacking for DomSurfaceStacking {
    fn stack_index(&self, key: &str) -> Option<i32> {
        imp::stack_index(key)
    }

    fn set_stack_index(&self, key: &str, index: i32) {
        imp::set_stack_index(key, index);
    }
}

#[cfg(target_arch = "wasm32")]
mod wasm {
    use wasm_bindgen::JsCast;
    use web_sys::HtmlElement;

    use super::SURFACE_CLASS;

    fn find_surface(key: &str) -> Option<HtmlElement> {
        let document = web_sys::window()?.document()?;
        let surfaces = document.get_elements_by_class_name(SURFACE_CLASS);
        for index in 0..surfaces.length() {
            let Some(element) = surfaces.item(index) else {
                continue;
            };
            if element.class_list().contains(key) {
                return element.dyn_into::<HtmlElement>().ok();
            }
        }
        None
    }

    pub(super) fn stack_index(key: &str) -> Option<i32> {
        let surface = find_surface(key)?;
        let raw = surface.style().get_property_value("z-index").ok()?;
        // Surfaces rendered without an explicit z-index sit at the bottom.
        Some(raw.trim().parse().unwrap_or(0))
    }

    pub(super) fn set_stack_index(key: &str, index: i32) {
        if let Some(surface) = find_surface(key) {
            let _ = surface.style().set_property("z-index", &index.to_string());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm {
    pub(super) fn stack_index(_key: &str) -> Option<i32> {
        None
    }

    pub(super) fn set_stack_index(_key: &str, _index: i32) {}
}

#[cfg(target_arch = "wasm32")]
use wasm as imp;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
