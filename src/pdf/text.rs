use super::PdfDocument;
use crate::page_range::TocRange;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::{debug, trace};

#[derive(Debug, Clone)]
pub struct PageText {
    /// 1-based physical page number
    pub page: u32,
    pub text: String,
}

/// Extract the text of every page covered by the TOC range
pub fn extract_toc_pages<P: AsRef<Path>>(path: P, range: &TocRange) -> Result<Vec<PageText>> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read PDF: {}", path.display()))?;

    let pdf = PdfDocument::load_mem(&bytes, &path.display().to_string())?;
    range
        .check_within(pdf.page_count())
        .with_context(|| format!("Invalid TOC range for {}", pdf.path))?;

    let pages = pdf_extract::extract_text_from_mem_by_pages(&bytes)
        .with_context(|| format!("Failed to extract text from PDF: {}", pdf.path))?;

    let indices = range.page_indices();
    let mut results = Vec::with_capacity(indices.len());
    for index in indices {
        let text = pages
            .get(index)
            .with_context(|| format!("No text extracted for page {}", index + 1))?;
        debug!(page = index + 1, chars = text.len(), "extracted page text");
        results.push(PageText {
            page: index as u32 + 1,
            text: text.clone(),
        });
    }

    Ok(results)
}

/// Split page texts into a flat, ordered list of physical lines
pub fn split_lines(pages: &[PageText]) -> Vec<String> {
    let mut lines = Vec::new();
    for page in pages {
        let before = lines.len();
        lines.extend(page.text.lines().map(str::to_string));
        trace!(page = page.page, lines = lines.len() - before, "split page");
    }
    lines
}
