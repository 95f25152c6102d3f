//! Best-effort spell text lookup for Heldenblatt.
//!
//! Fetches a third-party spell page, strips it to plain text, and starts
//! the text at the spell name. The network sits behind [`PageFetcher`] so
//! the rest of the workspace never depends on it.

pub mod config;
pub mod error;
pub mod fetch;
pub mod lookup;
pub mod strip;

pub use config::LookupConfig;
pub use error::{LookupError, LookupResult};
pub use fetch::{HttpFetcher, PageFetcher};
pub use lookup::{SpellLookup, SpellText, spell_url};
pub use strip::MarkupStripper;
