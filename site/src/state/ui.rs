//! Page chrome state (preloader, header, mobile menu, active nav link).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the reservation models so the
//! header and navigation can evolve independently. Browser measurements
//! (scroll offset, section bounds) are passed in; nothing here touches the DOM.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Milliseconds the preloader stays up after the page has loaded.
pub const PRELOADER_DELAY_MS: u32 = 1500;

/// Scroll offset beyond which the header switches to its compact style.
pub const HEADER_SCROLLED_PX: f64 = 50.0;

/// Sections count as active this far before their top edge.
pub const ACTIVE_SECTION_LEAD_PX: f64 = 100.0;

/// Height of the fixed header; anchor targets land just below it.
pub const ANCHOR_HEADER_OFFSET_PX: f64 = 80.0;

/// Page geometry of one navigable region (`section[id]` or `footer[id]`).
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    /// Offset from the top of the document.
    pub top: f64,
    pub height: f64,
}

/// UI chrome state shared through context.
#[derive(Clone, Debug, PartialEq)]
pub struct UiState {
    pub preloader_visible: bool,
    pub header_scrolled: bool,
    pub menu_open: bool,
    pub active_section: Option<String>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            preloader_visible: true,
            header_scrolled: false,
            menu_open: false,
            active_section: None,
        }
    }
}

impl UiState {
    pub fn finish_loading(&mut self) {
        self.preloader_visible = false;
    }

    /// Hamburger button.
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Any nav link click closes the mobile menu.
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Recompute scroll-dependent chrome for page offset `scroll_y`.
    pub fn on_scroll(&mut self, scroll_y: f64, sections: &[SectionBounds]) {
        self.header_scrolled = scroll_y > HEADER_SCROLLED_PX;
        self.active_section = active_section(scroll_y, sections).map(str::to_owned);
    }

    #[must_use]
    pub fn is_active(&self, section_id: &str) -> bool {
        self.active_section.as_deref() == Some(section_id)
    }

    /// Body scrolling is blocked while any overlay covers the page.
    #[must_use]
    pub fn scroll_locked(&self, lightbox_open: bool) -> bool {
        self.preloader_visible || self.menu_open || lightbox_open
    }
}

/// First section whose band `(top - 100, top - 100 + height]` contains `scroll_y`.
#[must_use]
pub fn active_section(scroll_y: f64, sections: &[SectionBounds]) -> Option<&str> {
    sections
        .iter()
        .find(|s| {
            let top = s.top - ACTIVE_SECTION_LEAD_PX;
            scroll_y > top && scroll_y <= top + s.height
        })
        .map(|s| s.id.as_str())
}

/// Target id of an in-page link, e.g. `"#menu"` -> `"menu"`.
///
/// A bare `"#"` and non-fragment links return `None` and keep the browser's
/// default behavior.
#[must_use]
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Page offset to scroll to so the target clears the fixed header.
///
/// `element_top` is the target's viewport-relative top, `page_y` the
/// current scroll offset.
#[must_use]
pub fn anchor_scroll_top(element_top: f64, page_y: f64) -> f64 {
    element_top + page_y - ANCHOR_HEADER_OFFSET_PX
}
