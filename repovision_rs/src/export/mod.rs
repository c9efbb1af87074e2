//! Document export: capture-based PDF with a structured-data fallback.

pub mod artifact;
pub mod capture;
pub mod pagination;
mod pdf;
pub mod pipeline;
pub mod structured;
pub mod surface;
pub mod text;

pub use artifact::{DocumentArtifact, ExportStrategy, artifact_file_name};
pub use capture::{CaptureExporter, CapturedDocument};
pub use pagination::{PageGeometry, Pagination, PaginationMode, paginate};
pub use pipeline::Exporter;
pub use structured::{LayoutMetrics, ReportSection, StructuredExporter, report_sections};
pub use surface::{CaptureOptions, ImageSurface, RenderSurface, Viewport};
