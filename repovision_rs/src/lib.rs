//! # repovision
//!
//! Turns a repository analysis result into an interactive HTML report and a
//! downloadable, paginated PDF.
//!
//! ## Features
//!
//! - **Diagram rendering** - Mermaid descriptions compiled to SVG, one view at
//!   a time; a description that fails to compile is shown as raw source
//! - **Tab switching** - late results from a previously selected view are
//!   discarded, never displayed
//! - **Capture export** - a rasterized report tiled across A4 pages
//! - **Structured export** - a text document built from the result alone,
//!   used whenever capture fails
//!
//! ## Quick Start (Library Usage)
//!
//! ```rust,no_run
//! use repovision::export::Exporter;
//! use repovision_report::types::AnalysisResult;
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let result = AnalysisResult::from_json(&std::fs::read_to_string("analysis.json")?)?;
//! let artifact = Exporter::default().export(&result, None, None).await?;
//! artifact.save(std::path::Path::new("."))?;
//! # Ok(())
//! # }
//! ```
//!
//! ## CLI Usage
//!
//! ```bash
//! repovision render analysis.json -o report.html
//! repovision diagram analysis.json --view flow
//! repovision export analysis.json --capture report.png --out-dir out/
//! ```

pub mod cli;
pub mod config;
pub mod diagram;
pub mod error;
pub mod export;

pub use config::RepovisionConfig;
pub use error::{CaptureError, ConfigError, DiagramCompileError, DocumentError};
