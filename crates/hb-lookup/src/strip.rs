//! Reduce a fetched HTML page to plain text.

use regex::Regex;

use crate::error::LookupResult;

/// Strips scripts, analytics snippets, and tags from HTML.
#[derive(Debug, Clone)]
pub struct MarkupStripper {
    script: Regex,
    data_layer: Regex,
    gtag: Regex,
    tag: Regex,
    blank_lines: Regex,
}

impl MarkupStripper {
    /// Compile the stripping patterns.
    pub fn new() -> LookupResult<Self> {
        Ok(Self {
            script: Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>")?,
            data_layer: Regex::new(r"window\.dataLayer\s*=\s*\[\];")?,
            gtag: Regex::new(r"(?s)gtag\(.*?\);")?,
            tag: Regex::new(r"(?s)<[^>]*>")?,
            blank_lines: Regex::new(r"\n{3,}")?,
        })
    }

    /// Plain text of an HTML page.
    pub fn strip(&self, html: &str) -> String {
        let text = self.script.replace_all(html, "");
        let text = self.data_layer.replace_all(&text, "");
        let text = self.gtag.replace_all(&text, "");
        let text = self.tag.replace_all(&text, "");
        let text = decode_entities(&text);

        let trimmed: Vec<&str> = text.lines().map(str::trim_end).collect();
        let joined = trimmed.join("\n");
        self.blank_lines
            .replace_all(joined.trim(), "\n\n")
            .into_owned()
    }
}

/// Decode the handful of entities spell pages actually use.
fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&rsquo;", "'")
        .replace("&amp;", "&")
}

/// The text from the first case-insensitive occurrence of `name` onward.
///
/// Returns `None` when the name does not occur.
pub fn locate<'a>(text: &'a str, name: &str) -> Option<&'a str> {
    let pattern = Regex::new(&format!("(?i){}", regex::escape(name))).ok()?;
    pattern.find(text).map(|m| &text[m.start()..])
}
