//! Footer newsletter sign-up.

#[cfg(test)]
#[path = "newsletter_test.rs"]
mod newsletter_test;

/// Milliseconds the thank-you label stays on the button.
pub const THANKS_DURATION_MS: u32 = 2000;

pub const BUTTON_LABEL: &str = "Abonnieren";
pub const THANKS_LABEL: &str = "Danke!";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewsletterState {
    pub email: String,
    pub thanked: bool,
}

impl NewsletterState {
    /// Form submit. Returns `true` if the reset timer should be started.
    ///
    /// Empty input is ignored, matching the browser's own `required` check.
    pub fn submit(&mut self) -> bool {
        if self.email.trim().is_empty() || self.thanked {
            return false;
        }
        self.thanked = true;
        true
    }

    /// Reset timer fired: restore the button and clear the form.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn button_label(&self) -> &'static str {
        if self.thanked { THANKS_LABEL } else { BUTTON_LABEL }
    }
}
