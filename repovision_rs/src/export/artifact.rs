//! The downloadable document produced by an export.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::error::DocumentError;

/// Which strategy produced the artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportStrategy {
    Capture,
    Structured,
}

impl fmt::Display for ExportStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ExportStrategy::Capture => "capture",
            ExportStrategy::Structured => "structured",
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DocumentArtifact {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub strategy: ExportStrategy,
    pub page_count: usize,
}

impl DocumentArtifact {
    /// Write the artifact into `dir` under its file name.
    pub fn save(&self, dir: &Path) -> Result<PathBuf, DocumentError> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(&self.file_name);
        std::fs::write(&path, &self.bytes)?;
        info!(
            path = %path.display(),
            strategy = %self.strategy,
            pages = self.page_count,
            "document written"
        );
        Ok(path)
    }
}

/// `<repo_name>-analysis.pdf`, with the name sanitized for file systems.
///
/// Keeps ASCII alphanumerics, `-`, `_` and `.`; everything else becomes `_`.
/// Leading dots are dropped so the file is never hidden. A name with nothing
/// usable left falls back to `default_base`.
pub fn artifact_file_name(repo_name: &str, default_base: &str) -> String {
    let sanitized: String = repo_name
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let sanitized = sanitized.trim_start_matches('.');

    let base = if sanitized.is_empty() || sanitized.chars().all(|c| c == '_') {
        default_base
    } else {
        sanitized
    };
    format!("{base}-analysis.pdf")
}
