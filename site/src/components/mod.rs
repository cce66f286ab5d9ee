//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the site chrome and interactive sections while
//! reading/writing shared page state from Leptos context providers.

pub mod gallery;
pub mod preloader;
pub mod reservation_widget;
pub mod reveal;
pub mod site_footer;
pub mod site_header;
