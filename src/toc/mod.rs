//! Parsing of printed table-of-contents lines and compilation into
//! `pdfpages` bookmark records.

mod parse;
mod records;

pub use parse::TocParser;
pub use records::compile;

use thiserror::Error;

/// One line of a printed table of contents, split into its fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    /// Chapter or section numeral such as `3` or `3.1`; empty for
    /// unnumbered entries like "Preface"
    pub label: String,
    pub title: String,
    /// Trailing page number as printed, digits or roman numerals
    pub page_token: String,
}

impl TocEntry {
    /// Front matter numbered i, ii, iii, ... cannot be linked into the
    /// arabic page sequence
    pub fn is_roman(&self) -> bool {
        self.page_token.chars().any(|c| matches!(c, 'x' | 'i' | 'v'))
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TocError {
    #[error("No page number found at end of TOC line: {line:?}")]
    MissingPageToken { line: String },

    #[error("Invalid page number {token:?} for entry {title:?}")]
    InvalidPageNumber { token: String, title: String },

    #[error("Page number {token} overflows when offset by {end_of_toc}")]
    PageOverflow { token: String, end_of_toc: u32 },
}
