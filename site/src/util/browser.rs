//! Window and document glue for page chrome.
//!
//! Measurements and side effects the state models need from the browser:
//! scroll offset, viewport size, section geometry, body scroll lock, smooth
//! scrolling and blocking alerts. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Every helper is best-effort. SSR and test builds get neutral values
//! (zero offsets, no sections) and no-op side effects so server rendering
//! stays deterministic.

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;

use crate::state::ui::SectionBounds;

/// Current vertical page offset.
pub fn page_y() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Viewport height in CSS pixels.
pub fn viewport_height() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.inner_height().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Geometry of every `section[id]` and the `footer[id]` on the page, in
/// document order.
pub fn section_bounds() -> Vec<SectionBounds> {
    #[cfg(feature = "hydrate")]
    {
        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return Vec::new();
        };
        let Ok(nodes) = doc.query_selector_all("section[id], footer[id]") else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
            .map(|el| SectionBounds {
                id: el.id(),
                top: f64::from(el.offset_top()),
                height: f64::from(el.offset_height()),
            })
            .collect()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Vec::new()
    }
}

/// Viewport-relative `(top, height)` of the element with `id`.
pub fn element_rect(id: &str) -> Option<(f64, f64)> {
    #[cfg(feature = "hydrate")]
    {
        let el = web_sys::window()?.document()?.get_element_by_id(id)?;
        let rect = el.get_bounding_client_rect();
        Some((rect.top(), rect.height()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        None
    }
}

/// Block or restore body scrolling.
pub fn set_scroll_lock(locked: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let _ = body
                .style()
                .set_property("overflow", if locked { "hidden" } else { "auto" });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = locked;
    }
}

/// Smooth-scroll the window to page offset `top`.
pub fn smooth_scroll_to(top: f64) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let opts = web_sys::ScrollToOptions::new();
            opts.set_top(top);
            opts.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&opts);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = top;
    }
}

/// Blocking user-facing message.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}
