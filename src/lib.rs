//! Core crate for the `citat` terminal quote browser.
//!
//! The library is split along the flow of a session: [`quotes`] produces the
//! default collection, [`store`] persists state between runs, [`browser`]
//! holds the list and cursor together with the rules for restoring and saving
//! them, and [`ui`] draws it all with ratatui.

pub mod app_dirs;
pub mod browser;
pub mod logging;
pub mod quotes;
pub mod store;
pub mod theme;
pub mod ui;

pub use browser::{BrowserState, DisplayState, QuoteBrowser, display_state};
pub use quotes::DefaultSource;
pub use store::{JsonFileStore, KeyValueStore, MemoryStore, StoreError};
pub use theme::Theme;
pub use ui::{App, SessionEnd, UiConfig, run};
