//! Spell lookup: fetch, strip, and locate.

use crate::config::LookupConfig;
use crate::error::{LookupError, LookupResult};
use crate::fetch::{HttpFetcher, PageFetcher};
use crate::strip::{MarkupStripper, locate};

/// Plain-text spell description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpellText {
    /// The spell name as searched (trimmed).
    pub name: String,
    /// The page that was fetched.
    pub url: String,
    /// Stripped text, starting at the spell name when it was found.
    pub text: String,
    /// Whether the spell name occurs in the page. When false the whole
    /// stripped page is returned and callers should warn.
    pub name_found: bool,
}

/// URL of the spell page for `name`: spaces become hyphens.
pub fn spell_url(base_url: &str, name: &str) -> String {
    format!("{base_url}{}", name.trim().replace(' ', "-"))
}

/// Looks spells up through a [`PageFetcher`].
#[derive(Debug, Clone)]
pub struct SpellLookup<F> {
    fetcher: F,
    base_url: String,
    stripper: MarkupStripper,
}

impl SpellLookup<HttpFetcher> {
    /// Lookup over HTTP with the given configuration.
    pub fn http(config: &LookupConfig) -> LookupResult<Self> {
        Self::new(HttpFetcher::new(config)?, &config.base_url)
    }
}

impl<F: PageFetcher> SpellLookup<F> {
    /// Lookup through a custom fetcher.
    pub fn new(fetcher: F, base_url: &str) -> LookupResult<Self> {
        Ok(Self {
            fetcher,
            base_url: base_url.to_string(),
            stripper: MarkupStripper::new()?,
        })
    }

    /// Fetch and strip the page for a spell.
    pub fn lookup(&self, name: &str) -> LookupResult<SpellText> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LookupError::EmptyName);
        }

        let url = spell_url(&self.base_url, name);
        let html = self.fetcher.fetch(&url).inspect_err(|e| {
            tracing::warn!(%url, error = %e, "spell lookup failed");
        })?;
        let stripped = self.stripper.strip(&html);

        let (text, name_found) = match locate(&stripped, name) {
            Some(rest) => (rest.to_string(), true),
            None => {
                tracing::warn!(spell = name, "spell name not found in page");
                (stripped, false)
            }
        };

        Ok(SpellText {
            name: name.to_string(),
            url,
            text,
            name_found,
        })
    }
}
