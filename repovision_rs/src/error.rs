//! Error taxonomy for the rendering and export pipeline.
//!
//! None of these errors is fatal: each has a defined degraded outcome
//! (raw-text fallback for diagrams, structured export for captures).

use thiserror::Error;

/// A diagram description could not be compiled into a graphic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiagramCompileError {
    /// The description is malformed or uses an unsupported diagram type.
    #[error("parse error: {0}")]
    Parse(String),
    /// The layout/render backend panicked on this input.
    #[error("renderer panicked: {0}")]
    Panicked(String),
    /// Compilation finished but produced no graphic.
    #[error("renderer produced an empty graphic")]
    EmptyOutput,
}

/// The capture path could not produce a document.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CaptureError {
    /// No surface is available to capture.
    #[error("surface '{0}' is not available for capture")]
    SurfaceUnavailable(String),
    /// The surface rasterized to zero width or height.
    #[error("surface rasterized to an empty image ({width}x{height})")]
    EmptySurface {
        /// Raster width in pixels
        width: u32,
        /// Raster height in pixels
        height: u32,
    },
    /// Page or image geometry is unusable (zero, negative or non-finite).
    #[error("invalid page geometry: {0}")]
    InvalidGeometry(String),
    /// Encoding the raster or the document failed.
    #[error("encoding failed: {0}")]
    Encoding(String),
}

/// Configuration file could not be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading the file failed.
    #[error("failed to read {path}: {source}")]
    Read {
        /// Path that was read
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid TOML for this schema.
    #[error("failed to parse {path}: {source}")]
    Parse {
        /// Path that was parsed
        path: String,
        /// Underlying TOML error
        #[source]
        source: toml::de::Error,
    },
    /// A value is outside its allowed range.
    #[error("invalid value for {field}: {reason}")]
    Invalid {
        /// Dotted field name, e.g. `capture.scale`
        field: &'static str,
        /// Why the value was rejected
        reason: String,
    },
}

/// The document itself could not be serialized or written.
///
/// Only reachable when the PDF backend rejects an in-memory document or the
/// destination cannot be written; both export strategies share it.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Building or serializing the PDF failed.
    #[error("failed to encode document: {0}")]
    Encode(#[from] lopdf::Error),
    /// Writing the artifact failed.
    #[error("failed to write document: {0}")]
    Io(#[from] std::io::Error),
}

impl From<DocumentError> for CaptureError {
    fn from(err: DocumentError) -> Self {
        CaptureError::Encoding(err.to_string())
    }
}
