//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (reservation flow, form, page chrome, gallery)
//! so each component depends on a small focused model. Every model is plain
//! data plus transition methods; components hold them in `RwSignal`s.

pub mod calendar;
pub mod lightbox;
pub mod newsletter;
pub mod policy;
pub mod reservation;
pub mod reservation_form;
pub mod reveal;
pub mod ui;
