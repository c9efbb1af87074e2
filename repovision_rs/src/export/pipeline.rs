//! Export job: capture first, structured document on any capture failure.

use repovision_report::types::AnalysisResult;
use tracing::{info, warn};

use super::artifact::{DocumentArtifact, ExportStrategy, artifact_file_name};
use super::capture::CaptureExporter;
use super::structured::StructuredExporter;
use super::surface::Viewport;
use crate::config::RepovisionConfig;
use crate::error::{CaptureError, DocumentError};

pub struct Exporter {
    capture: CaptureExporter,
    structured: StructuredExporter,
    default_base_name: String,
}

impl Default for Exporter {
    fn default() -> Self {
        Self::from_config(&RepovisionConfig::default())
    }
}

impl Exporter {
    pub fn new(
        capture: CaptureExporter,
        structured: StructuredExporter,
        default_base_name: impl Into<String>,
    ) -> Self {
        Self {
            capture,
            structured,
            default_base_name: default_base_name.into(),
        }
    }

    pub fn from_config(config: &RepovisionConfig) -> Self {
        Self::new(
            CaptureExporter::new(
                config.capture_options(),
                config.page_geometry(),
                config.page.pagination,
            ),
            StructuredExporter::new(config.layout_metrics(), config.page_geometry()),
            config.export.default_base_name.clone(),
        )
    }

    /// File name every strategy uses for `result`.
    pub fn file_name(&self, result: &AnalysisResult) -> String {
        artifact_file_name(&result.repo_name, &self.default_base_name)
    }

    /// Run one export.
    ///
    /// With a viewport the capture path is tried first; any [`CaptureError`]
    /// is logged and replaced by the structured document under the same file
    /// name. Without a viewport the structured path runs directly. Nothing is
    /// written to disk here.
    pub async fn export(
        &self,
        result: &AnalysisResult,
        viewport: Option<&Viewport>,
        surface_id: Option<&str>,
    ) -> Result<DocumentArtifact, DocumentError> {
        if let Some(viewport) = viewport {
            match self.try_capture(result, viewport, surface_id).await {
                Ok(artifact) => return Ok(artifact),
                Err(e) => warn!(error = %e, "capture export failed, using structured document"),
            }
        }
        self.export_structured(result)
    }

    /// Structured document only.
    pub fn export_structured(
        &self,
        result: &AnalysisResult,
    ) -> Result<DocumentArtifact, DocumentError> {
        let document = self.structured.export(result)?;
        let artifact = DocumentArtifact {
            file_name: self.file_name(result),
            bytes: document.bytes,
            strategy: ExportStrategy::Structured,
            page_count: document.page_count,
        };
        info!(
            file = %artifact.file_name,
            pages = artifact.page_count,
            "structured export complete"
        );
        Ok(artifact)
    }

    async fn try_capture(
        &self,
        result: &AnalysisResult,
        viewport: &Viewport,
        surface_id: Option<&str>,
    ) -> Result<DocumentArtifact, CaptureError> {
        let surface = viewport.acquire(surface_id)?;
        let document = self.capture.export(surface).await?;
        let artifact = DocumentArtifact {
            file_name: self.file_name(result),
            bytes: document.bytes,
            strategy: ExportStrategy::Capture,
            page_count: document.page_count,
        };
        info!(
            file = %artifact.file_name,
            surface = surface.id(),
            pages = artifact.page_count,
            "capture export complete"
        );
        Ok(artifact)
    }
}
