use anyhow::{anyhow, Result};
use std::ops::Range;

/// The pages of a document holding its printed table of contents.
///
/// `start` and `stop` are 1-based and counted in the book's own numbering;
/// `offset` is the number of uncounted leading pages (covers, blanks) that
/// precede page 1 in the physical file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TocRange {
    pub start: u32,
    pub stop: u32,
    pub offset: u32,
}

impl TocRange {
    pub fn new(start: u32, stop: u32, offset: u32) -> Result<Self> {
        if start == 0 || stop == 0 {
            return Err(anyhow!("Page numbers must be >= 1"));
        }

        if start > stop {
            return Err(anyhow!(
                "TOC start page {} is after stop page {}",
                start,
                stop
            ));
        }

        stop.checked_add(offset)
            .and_then(|end| end.checked_add(1))
            .ok_or_else(|| anyhow!("Page offset {} is too large", offset))?;

        Ok(TocRange {
            start,
            stop,
            offset,
        })
    }

    /// First physical page (1-based) of the TOC
    pub fn start_of_toc(&self) -> u32 {
        self.start + self.offset
    }

    /// Last physical page (1-based) of the TOC
    pub fn end_of_toc(&self) -> u32 {
        self.stop + self.offset
    }

    /// First physical page (1-based) after the TOC
    pub fn start_of_book(&self) -> u32 {
        self.end_of_toc() + 1
    }

    /// Zero-based page indices covered by the TOC
    pub fn page_indices(&self) -> Range<usize> {
        (self.start_of_toc() - 1) as usize..self.end_of_toc() as usize
    }

    /// Check that every TOC page exists in a document of `total_pages` pages
    pub fn check_within(&self, total_pages: u32) -> Result<()> {
        if self.end_of_toc() > total_pages {
            return Err(anyhow!(
                "TOC page {} exceeds total pages {}",
                self.end_of_toc(),
                total_pages
            ));
        }
        Ok(())
    }
}
