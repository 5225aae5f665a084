//! Loading the default quote collection.
//!
//! Quotes live in a plain text file with one quote per line. Lines may carry a
//! `"<number>. "` prefix, which is stripped on load.

mod source;

pub use source::{BUNDLED_QUOTES, DefaultSource, parse_quotes, strip_number_prefix};
