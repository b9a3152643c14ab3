use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mktoc")]
#[command(about = "Generate a LaTeX wrapper with a clickable table of contents for a PDF")]
#[command(version)]
pub struct Cli {
    /// Input PDF
    #[arg(short = 'i', value_name = "PDF")]
    pub input: PathBuf,

    /// Output .tex file
    #[arg(short = 'o', value_name = "TEX", default_value = "main.tex")]
    pub output: PathBuf,

    /// First page of the printed table of contents
    #[arg(long)]
    pub start: u32,

    /// Last page of the printed table of contents (inclusive)
    #[arg(long)]
    pub stop: u32,

    /// Number of uncounted pages at the beginning, e.g. covers.
    /// Useful when the page sequence is cover1,cover2,1,2,...
    #[arg(long, default_value_t = 0)]
    pub offset: u32,

    /// Log level for diagnostic traces (error, warn, info, debug, trace)
    #[arg(long, env = "LOG_LEVEL", default_value = "error")]
    pub log_level: String,
}
