//! Configuration loading and resolution.
//!
//! `load` is the entry point: it layers config files, environment variables
//! and CLI flags, then returns a [`ResolvedConfig`] ready to drive the app.

mod loader;
mod raw;
mod resolved;
mod sources;

pub use loader::load;
pub(crate) use raw::DEFAULT_LOG_LEVEL;
pub use resolved::ResolvedConfig;
