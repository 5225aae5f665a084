//! Interactive terminal UI for browsing quotes.
//!
//! [`App`] wraps a [`QuoteBrowser`](crate::browser::QuoteBrowser) with the
//! labels and theme used to draw it. The event loop in [`run`] is
//! single-threaded: every key press is handled to completion before the next
//! frame is drawn.

mod actions;
mod config;
mod render;
mod runtime;
mod state;

pub use config::{HintLabels, UiConfig};
pub use runtime::run;
pub use state::{App, SessionEnd};
