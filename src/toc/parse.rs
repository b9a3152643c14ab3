use super::{TocEntry, TocError};
use anyhow::Result;
use regex::Regex;
use tracing::trace;

/// Decides whether a physical line of page text is a TOC entry
pub trait LineClassifier {
    fn is_entry(&self, line: &str) -> bool;
}

impl<F> LineClassifier for F
where
    F: Fn(&str) -> bool,
{
    fn is_entry(&self, line: &str) -> bool {
        self(line)
    }
}

/// Accepts lines that end in arabic digits or lowercase roman numerals.
///
/// This is a heuristic: running headers that happen to end in a number
/// slip through, and entries whose page number was dropped by text
/// extraction are lost.
#[derive(Debug, Clone)]
pub struct TrailingPageNumber {
    pattern: Regex,
}

impl TrailingPageNumber {
    pub fn new() -> Result<Self> {
        Ok(TrailingPageNumber {
            pattern: Regex::new(r"(?:[ivx]+|[0-9]+)$")?,
        })
    }
}

impl LineClassifier for TrailingPageNumber {
    fn is_entry(&self, line: &str) -> bool {
        self.pattern.is_match(line.trim())
    }
}

/// Splits accepted lines into label, title and page token
pub struct TocParser<C = TrailingPageNumber> {
    classifier: C,
    page_token: Regex,
    label: Regex,
}

impl TocParser<TrailingPageNumber> {
    pub fn new() -> Result<Self> {
        Self::with_classifier(TrailingPageNumber::new()?)
    }
}

impl<C: LineClassifier> TocParser<C> {
    pub fn with_classifier(classifier: C) -> Result<Self> {
        Ok(TocParser {
            classifier,
            page_token: Regex::new(r"[0-9xiv]+$")?,
            label: Regex::new(r"^([0-9]+(?:\.?[0-9]+)?) ")?,
        })
    }

    pub fn classify(&self, line: &str) -> bool {
        self.classifier.is_entry(line)
    }

    /// Parse a single line already accepted by the classifier.
    ///
    /// The page token is matched against the line as given, so an accepted
    /// line with trailing whitespace has no token and is rejected.
    pub fn parse_line(&self, line: &str) -> Result<TocEntry, TocError> {
        let page_token = self
            .page_token
            .find(line)
            .map(|m| m.as_str().to_string())
            .ok_or_else(|| TocError::MissingPageToken {
                line: line.to_string(),
            })?;

        let trimmed = line.trim();
        let label = self
            .label
            .captures(trimmed)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();

        let rest = line.trim_start();
        let rest = rest.strip_prefix(label.as_str()).unwrap_or(rest).trim();
        let title = rest
            .strip_suffix(page_token.as_str())
            .unwrap_or(rest)
            .trim()
            .to_string();

        Ok(TocEntry {
            label,
            title,
            page_token,
        })
    }

    /// Classify every line and parse the accepted ones, in order
    pub fn parse_lines<I, S>(&self, lines: I) -> Result<Vec<TocEntry>, TocError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries = Vec::new();
        for line in lines {
            let line = line.as_ref();
            if !self.classify(line) {
                trace!(line, "not a TOC entry");
                continue;
            }
            entries.push(self.parse_line(line)?);
        }
        Ok(entries)
    }
}
