//! Display-only confirmation codes: `MD-<base36 millis>-<4 base36 chars>`.
//!
//! TRADE-OFFS
//! ==========
//! Nothing is booked, so codes carry no server-side uniqueness. The
//! generator is monotonic within one process instead: if the clock has not
//! moved since the previous code, the timestamp part is bumped by one, so a
//! burst of codes never repeats even when the random suffix does.
//! The suffix comes from `rand::rng()`, backed by `crypto.getRandomValues`
//! in the browser.

#[cfg(test)]
#[path = "confirmation_test.rs"]
mod confirmation_test;

use std::cell::RefCell;

use rand::Rng;

pub const PREFIX: &str = "MD";

/// Length of the random suffix.
pub const SUFFIX_LEN: usize = 4;

const BASE36: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Stateful code source; remembers the last timestamp it used.
#[derive(Clone, Debug, Default)]
pub struct CodeGenerator {
    last_millis: Option<u64>,
}

impl CodeGenerator {
    /// Build a code for wall-clock `now_millis` ending in `suffix`.
    pub fn next(&mut self, now_millis: u64, suffix: &str) -> String {
        let millis = match self.last_millis {
            Some(last) if now_millis <= last => last + 1,
            _ => now_millis,
        };
        self.last_millis = Some(millis);
        format_code(millis, suffix)
    }
}

thread_local! {
    static GENERATOR: RefCell<CodeGenerator> = RefCell::new(CodeGenerator::default());
}

/// Generate a code from the current clock and fresh randomness.
#[must_use]
pub fn generate() -> String {
    let now = u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or(0);
    let suffix = random_suffix();
    GENERATOR.with(|g| g.borrow_mut().next(now, &suffix))
}

/// `SUFFIX_LEN` random base-36 characters.
#[must_use]
pub fn random_suffix() -> String {
    let mut rng = rand::rng();
    (0..SUFFIX_LEN)
        .map(|_| {
            let idx = rng.random_range(0..BASE36.len());
            BASE36[idx] as char
        })
        .collect()
}

/// `MD-<millis base36>-<suffix>`.
#[must_use]
pub fn format_code(millis: u64, suffix: &str) -> String {
    format!("{PREFIX}-{}-{suffix}", to_base36(millis))
}

/// Uppercase base-36 rendering of `n`.
#[must_use]
pub fn to_base36(mut n: u64) -> String {
    if n == 0 {
        return "0".to_owned();
    }
    let mut digits = Vec::new();
    while n > 0 {
        digits.push(BASE36[(n % 36) as usize]);
        n /= 36;
    }
    digits.reverse();
    String::from_utf8(digits).unwrap_or_default()
}

/// Whether `code` has the `MD-<base36>-<4 base36>` shape.
#[must_use]
pub fn is_well_formed(code: &str) -> bool {
    let mut parts = code.split('-');
    let (Some(prefix), Some(stamp), Some(suffix), None) = (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return false;
    };
    let is_base36 = |s: &str| !s.is_empty() && s.bytes().all(|b| BASE36.contains(&b));
    prefix == PREFIX && is_base36(stamp) && is_base36(suffix) && suffix.len() == SUFFIX_LEN
}
