//! Scroll-triggered reveal bookkeeping.
//!
//! Elements start hidden and are revealed the first time at least
//! `REVEAL_THRESHOLD` of their height is inside the viewport. Reveals are
//! one-shot: scrolling back never hides an element again.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use std::collections::HashSet;

/// Visible fraction that triggers a reveal.
pub const REVEAL_THRESHOLD: f64 = 0.1;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RevealState {
    revealed: HashSet<String>,
}

impl RevealState {
    /// Record a measurement. Returns `true` when this call revealed `id`.
    pub fn observe(&mut self, id: &str, visible_ratio: f64) -> bool {
        if visible_ratio < REVEAL_THRESHOLD || self.revealed.contains(id) {
            return false;
        }
        self.revealed.insert(id.to_owned())
    }

    #[must_use]
    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.contains(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }
}

/// Fraction of an element's height inside `[0, viewport_height]`.
///
/// `top` is the element's viewport-relative top edge. Zero-height elements
/// count as fully visible when their edge is on screen.
#[must_use]
pub fn visible_ratio(top: f64, height: f64, viewport_height: f64) -> f64 {
    if height <= 0.0 {
        return if (0.0..=viewport_height).contains(&top) { 1.0 } else { 0.0 };
    }
    let bottom = top + height;
    let overlap = bottom.min(viewport_height) - top.max(0.0);
    (overlap / height).clamp(0.0, 1.0)
}
