use super::{TocEntry, TocError};
use crate::page_range::TocRange;
use std::fmt;
use tracing::info;

/// Bookmark nesting level understood by `pdfpages`' `addtotoc`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Depth {
    Chapter,
    Section,
}

impl Depth {
    /// Any dotted label is a section; deeper numbering is not distinguished
    pub fn from_label(label: &str) -> Self {
        if label.contains('.') {
            Depth::Section
        } else {
            Depth::Chapter
        }
    }

    pub fn level(self) -> u8 {
        match self {
            Depth::Chapter => 0,
            Depth::Section => 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Depth::Chapter => "chapter",
            Depth::Section => "section",
        }
    }
}

/// One `addtotoc` entry: `<page>,<type>,<level>,{<title>},<label>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRecord {
    /// Physical page in the source PDF
    pub page: u32,
    pub depth: Depth,
    pub title: String,
    /// Page number as printed in the TOC
    pub original_page: String,
}

impl OutputRecord {
    pub fn from_entry(entry: &TocEntry, range: &TocRange) -> Result<Self, TocError> {
        let printed: u32 = entry
            .page_token
            .parse()
            .map_err(|_| TocError::InvalidPageNumber {
                token: entry.page_token.clone(),
                title: entry.title.clone(),
            })?;

        // Printed page numbers count from the first page after the TOC.
        let end_of_toc = range.end_of_toc();
        let page = end_of_toc
            .checked_add(printed)
            .ok_or_else(|| TocError::PageOverflow {
                token: entry.page_token.clone(),
                end_of_toc,
            })?;
        info!(end_of_toc, input_page = printed, output_page = page, "computed page");

        Ok(OutputRecord {
            page,
            depth: Depth::from_label(&entry.label),
            title: entry.title.clone(),
            original_page: entry.page_token.clone(),
        })
    }
}

impl fmt::Display for OutputRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\t{},{},{},{{{} pg.{}}},a",
            self.page,
            self.depth.name(),
            self.depth.level(),
            self.title,
            self.original_page
        )
    }
}

/// Compile parsed entries into the `addtotoc` record block.
///
/// Entries paginated with roman numerals are reported and left out. Records
/// are newline separated and every record but the last ends with a comma.
pub fn compile(entries: &[TocEntry], range: &TocRange) -> Result<String, TocError> {
    let mut records = Vec::with_capacity(entries.len());
    for entry in entries {
        if entry.is_roman() {
            println!("skipping:{}...roman numeral indexing", entry.title);
            continue;
        }
        records.push(OutputRecord::from_entry(entry, range)?.to_string());
    }

    Ok(records.join(",\n"))
}
