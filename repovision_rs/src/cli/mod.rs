//! Command-line interface for `repovision`.
//!
//! # Module Structure
//!
//! - [`Cli`] / [`Command`] - clap definitions (source of truth for flags)
//! - [`commands`] - handlers, one per subcommand

pub mod commands;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "repovision")]
#[command(about = "Render repository analysis results into reports and PDF documents")]
#[command(version)]
pub struct Cli {
    /// Config file (default: .repovision/config.toml in the current directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compile every diagram and write the HTML report
    Render(RenderArgs),
    /// Render a single diagram view
    Diagram(DiagramArgs),
    /// Export the report as a paginated PDF
    Export(ExportArgs),
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Analysis result JSON
    pub input: PathBuf,

    /// Output HTML file
    #[arg(short, long, default_value = "report.html")]
    pub output: PathBuf,
}

#[derive(Args, Debug)]
pub struct DiagramArgs {
    /// Analysis result JSON
    pub input: PathBuf,

    /// View to render: architecture, component or flow
    #[arg(long, default_value = "architecture", value_parser = parse_view)]
    pub view: repovision_report::types::ViewKey,

    /// Write the SVG here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Analysis result JSON
    pub input: PathBuf,

    /// PNG snapshot of the rendered report to capture
    #[arg(long)]
    pub capture: Option<PathBuf>,

    /// Id of the surface to capture (default from config)
    #[arg(long)]
    pub surface: Option<String>,

    /// Directory for the PDF
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Skip the capture path
    #[arg(long, conflicts_with = "capture")]
    pub structured: bool,
}

fn parse_view(raw: &str) -> Result<repovision_report::types::ViewKey, String> {
    repovision_report::types::ViewKey::parse(raw)
        .ok_or_else(|| format!("unknown view '{raw}' (expected architecture, component or flow)"))
}
