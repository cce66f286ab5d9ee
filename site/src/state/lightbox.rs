//! Gallery lightbox overlay state.

#[cfg(test)]
#[path = "lightbox_test.rs"]
mod lightbox_test;

/// Milliseconds the fade-out runs before the overlay is removed.
pub const CLOSE_DELAY_MS: u32 = 300;

/// Thumbnail width parameter -> full-size width parameter.
const SIZE_UPGRADES: [(&str, &str); 2] = [("w=600", "w=1200"), ("w=800", "w=1600")];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LightboxState {
    #[default]
    Closed,
    Open { src: String, alt: String },
    /// Fading out; removed after `CLOSE_DELAY_MS`.
    Closing { src: String, alt: String },
}

impl LightboxState {
    /// Open the overlay for a gallery thumbnail.
    pub fn open(&mut self, thumbnail_src: &str, alt: &str) {
        *self = LightboxState::Open {
            src: enlarge_src(thumbnail_src),
            alt: alt.to_owned(),
        };
    }

    /// Overlay click or Escape. Returns `true` if a removal timer should start.
    pub fn begin_close(&mut self) -> bool {
        let LightboxState::Open { src, alt } = self else {
            return false;
        };
        *self = LightboxState::Closing {
            src: std::mem::take(src),
            alt: std::mem::take(alt),
        };
        true
    }

    /// Removal timer fired.
    pub fn finish_close(&mut self) {
        if matches!(self, LightboxState::Closing { .. }) {
            *self = LightboxState::Closed;
        }
    }

    /// The overlay is in the DOM (open or fading out).
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        !matches!(self, LightboxState::Closed)
    }

    /// Fully shown, not fading.
    #[must_use]
    pub fn is_shown(&self) -> bool {
        matches!(self, LightboxState::Open { .. })
    }

    #[must_use]
    pub fn src(&self) -> Option<&str> {
        match self {
            LightboxState::Open { src, .. } | LightboxState::Closing { src, .. } => Some(src),
            LightboxState::Closed => None,
        }
    }

    #[must_use]
    pub fn alt(&self) -> &str {
        match self {
            LightboxState::Open { alt, .. } | LightboxState::Closing { alt, .. } => alt,
            LightboxState::Closed => "",
        }
    }
}

/// Swap the thumbnail width query for the high-resolution one.
#[must_use]
pub fn enlarge_src(src: &str) -> String {
    SIZE_UPGRADES
        .iter()
        .fold(src.to_owned(), |acc, (from, to)| acc.replacen(from, to, 1))
}
