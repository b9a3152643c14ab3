use crate::cli::Cli;
use crate::page_range::TocRange;
use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

/// Validated settings for one run
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Absolute path of the source PDF
    pub input: PathBuf,
    pub output: PathBuf,
    pub range: TocRange,
}

impl RenderConfig {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        Self::new(&cli.input, &cli.output, cli.start, cli.stop, cli.offset)
    }

    pub fn new<P: AsRef<Path>, Q: AsRef<Path>>(
        input: P,
        output: Q,
        start: u32,
        stop: u32,
        offset: u32,
    ) -> Result<Self> {
        let input = input.as_ref();

        if !input.exists() {
            bail!("Input file does not exist: {}", input.display());
        }

        let is_pdf = input
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
        if !is_pdf {
            bail!(
                "Expected a pdf, received {}",
                input
                    .extension()
                    .map(|ext| format!(".{}", ext.to_string_lossy()))
                    .unwrap_or_else(|| "a file without extension".to_string())
            );
        }

        let input = std::fs::canonicalize(input)
            .with_context(|| format!("Failed to resolve path: {}", input.display()))?;

        Ok(RenderConfig {
            input,
            output: output.as_ref().to_path_buf(),
            range: TocRange::new(start, stop, offset)?,
        })
    }
}
