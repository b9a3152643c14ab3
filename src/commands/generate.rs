use crate::config::RenderConfig;
use crate::latex::render_document;
use crate::pdf::text::{extract_toc_pages, split_lines};
use crate::toc::{compile, TocParser};
use anyhow::{Context, Result};
use tracing::debug;

pub fn run(config: &RenderConfig) -> Result<()> {
    let pages = extract_toc_pages(&config.input, &config.range)?;
    let lines = split_lines(&pages);
    debug!(pages = pages.len(), lines = lines.len(), "extracted TOC text");

    let tex = generate_source(lines.as_slice(), config)?;

    // Only touch the output once everything above has succeeded
    let output = std::path::absolute(&config.output).unwrap_or_else(|_| config.output.clone());
    println!("writing to {}", output.display());
    std::fs::write(&config.output, tex)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    Ok(())
}

/// Turn the raw lines of the TOC pages into the complete LaTeX source
pub fn generate_source<S: AsRef<str>>(lines: &[S], config: &RenderConfig) -> Result<String> {
    let parser = TocParser::new()?;
    let entries = parser.parse_lines(lines)?;
    debug!(entries = entries.len(), "parsed TOC entries");

    let records = compile(&entries, &config.range)?;
    Ok(render_document(&records, &config.range, &config.input))
}
