//! Fire-and-forget deferred callbacks.
//!
//! Timers are never cancelled. Callers that can be superseded (auto-advance,
//! lightbox removal) make the callback idempotent in their state model
//! instead.

/// Run `f` once after `delay_ms`. Outside the browser this drops `f` unrun.
pub fn after<F>(delay_ms: u32, f: F)
where
    F: FnOnce() + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::callback::Timeout::new(delay_ms, f).forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (delay_ms, f);
    }
}
