use anyhow::{Context, Result};
use lopdf::Document;

pub struct PdfDocument {
    pub doc: Document,
    pub path: String,
}

impl PdfDocument {
    /// Parse an in-memory PDF; `path` is only used for error messages
    pub fn load_mem(bytes: &[u8], path: &str) -> Result<Self> {
        let doc =
            Document::load_mem(bytes).with_context(|| format!("Failed to open PDF: {}", path))?;
        Ok(PdfDocument {
            doc,
            path: path.to_string(),
        })
    }

    pub fn page_count(&self) -> u32 {
        self.doc.get_pages().len() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_pdf() {
        let err = PdfDocument::load_mem(b"plain text, not a pdf", "fake.pdf")
            .err()
            .unwrap();
        assert!(err.to_string().contains("fake.pdf"));
    }

    #[test]
    fn test_page_count() {
        let bytes = crate::pdf::fixtures::text_pdf(&[&["one"], &["two"], &["three"]]);
        let pdf = PdfDocument::load_mem(&bytes, "three.pdf").unwrap();
        assert_eq!(pdf.page_count(), 3);
    }
}
