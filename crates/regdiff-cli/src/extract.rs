//! Document text extraction.
//!
//! The engine works on extracted text only. Extraction is a separate step so
//! richer formats can be plugged in without touching the engine; this crate
//! ships a plain-text extractor.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context};
use tracing::debug;

/// Turns a document on disk into text.
pub trait TextExtractor {
    fn extract_text(&self, path: &Path) -> anyhow::Result<String>;
}

/// Reads UTF-8 text files, refusing anything over a size budget.
#[derive(Clone, Debug)]
pub struct PlainTextExtractor {
    max_bytes: u64,
}

impl PlainTextExtractor {
    pub fn new(max_bytes: u64) -> Self {
        Self { max_bytes }
    }
}

impl TextExtractor for PlainTextExtractor {
    fn extract_text(&self, path: &Path) -> anyhow::Result<String> {
        let file = File::open(path).with_context(|| format!("failed to read {}", path.display()))?;

        // One byte past the budget is enough to tell an oversized file apart.
        let mut bytes = Vec::new();
        file.take(self.max_bytes.saturating_add(1))
            .read_to_end(&mut bytes)
            .with_context(|| format!("failed to read {}", path.display()))?;
        if bytes.len() as u64 > self.max_bytes {
            bail!(
                "{} is over the {} byte limit",
                path.display(),
                self.max_bytes
            );
        }

        let len = bytes.len();
        let text = String::from_utf8(bytes)
            .with_context(|| format!("{} is not UTF-8 text", path.display()))?;
        debug!(path = %path.display(), bytes = len, "extracted text");
        Ok(text)
    }
}
