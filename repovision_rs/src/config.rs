//! Configuration file support for repovision.
//!
//! Loads optional `.repovision/config.toml` from a project root. Every
//! section and field is optional; missing values fall back to the defaults
//! below, which reproduce the reference capture (1.5x scale at 1280 logical
//! units, A4 portrait) and the structured document layout.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ConfigError;
use crate::export::pagination::{PageGeometry, PaginationMode};
use crate::export::structured::LayoutMetrics;
use crate::export::surface::CaptureOptions;

/// Upper bound for `capture.scale`.
pub const MAX_CAPTURE_SCALE: f64 = 8.0;

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepovisionConfig {
    pub capture: CaptureConfig,
    pub page: PageConfig,
    pub structured: StructuredConfig,
    pub export: ExportConfig,
}

/// Capture path settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    /// Resolution scale factor applied when rasterizing, at most [`MAX_CAPTURE_SCALE`].
    pub scale: f64,
    /// Reference capture width in logical units.
    pub window_width: u32,
    /// Background colour composited under transparent pixels (`#rrggbb`).
    pub background: String,
    /// Id of the surface to capture; the whole viewport is used when absent.
    pub surface_id: String,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            scale: 1.5,
            window_width: 1280,
            background: "#050816".to_string(),
            surface_id: repovision_report::components::RESULTS_SURFACE_ID.to_string(),
        }
    }
}

/// Document page settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub width_mm: f64,
    pub height_mm: f64,
    pub pagination: PaginationMode,
}

impl Default for PageConfig {
    fn default() -> Self {
        let a4 = PageGeometry::A4_PORTRAIT;
        Self {
            width_mm: a4.width_mm,
            height_mm: a4.height_mm,
            pagination: PaginationMode::default(),
        }
    }
}

/// Structured document layout (all values in millimetres unless noted)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StructuredConfig {
    pub margin_left_mm: f64,
    pub top_mm: f64,
    pub wrap_width_mm: f64,
    pub page_break_mm: f64,
    /// Line advance as a multiple of the font size in points.
    pub line_factor: f64,
    pub paragraph_gap_mm: f64,
    pub section_gap_mm: f64,
}

impl Default for StructuredConfig {
    fn default() -> Self {
        let metrics = LayoutMetrics::default();
        Self {
            margin_left_mm: metrics.margin_left_mm,
            top_mm: metrics.top_mm,
            wrap_width_mm: metrics.wrap_width_mm,
            page_break_mm: metrics.page_break_mm,
            line_factor: metrics.line_factor,
            paragraph_gap_mm: metrics.paragraph_gap_mm,
            section_gap_mm: metrics.section_gap_mm,
        }
    }
}

/// Artifact naming
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Base name used when the repository name is missing.
    pub default_base_name: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            default_base_name: "repovision".to_string(),
        }
    }
}

impl RepovisionConfig {
    /// Load config from `.repovision/config.toml` in the given root directory.
    /// Returns default config if file doesn't exist or is invalid.
    pub fn load(root: &Path) -> Self {
        let config_path = root.join(".repovision").join("config.toml");
        Self::load_from_path(&config_path)
    }

    /// Load config from a specific path, falling back to defaults.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match Self::try_load_from_path(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("{e}; using defaults");
                Self::default()
            }
        }
    }

    /// Load and validate config from a path the user asked for explicitly.
    pub fn try_load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the exporters cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let scale = self.capture.scale;
        if !(scale.is_finite() && scale > 0.0 && scale <= MAX_CAPTURE_SCALE) {
            return Err(ConfigError::Invalid {
                field: "capture.scale",
                reason: format!("must be in (0, {MAX_CAPTURE_SCALE}], got {scale}"),
            });
        }
        if self.capture.window_width == 0 {
            return Err(ConfigError::Invalid {
                field: "capture.window_width",
                reason: "must be at least 1".into(),
            });
        }
        if parse_hex_color(&self.capture.background).is_none() {
            return Err(ConfigError::Invalid {
                field: "capture.background",
                reason: format!("expected #rrggbb, got {:?}", self.capture.background),
            });
        }
        if let Err(e) = self.page_geometry().validate() {
            return Err(ConfigError::Invalid {
                field: "page",
                reason: e.to_string(),
            });
        }
        if self.structured.page_break_mm <= self.structured.top_mm {
            return Err(ConfigError::Invalid {
                field: "structured.page_break_mm",
                reason: "must be greater than structured.top_mm".into(),
            });
        }
        if self.structured.wrap_width_mm <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "structured.wrap_width_mm",
                reason: "must be positive".into(),
            });
        }
        Ok(())
    }

    /// Capture options derived from `[capture]`.
    pub fn capture_options(&self) -> CaptureOptions {
        CaptureOptions {
            scale: self.capture.scale,
            window_width: self.capture.window_width,
            background: parse_hex_color(&self.capture.background)
                .unwrap_or(CaptureOptions::default().background),
        }
    }

    /// Page geometry derived from `[page]`.
    pub fn page_geometry(&self) -> PageGeometry {
        PageGeometry {
            width_mm: self.page.width_mm,
            height_mm: self.page.height_mm,
        }
    }

    /// Structured layout metrics derived from `[structured]`.
    pub fn layout_metrics(&self) -> LayoutMetrics {
        LayoutMetrics {
            margin_left_mm: self.structured.margin_left_mm,
            top_mm: self.structured.top_mm,
            wrap_width_mm: self.structured.wrap_width_mm,
            page_break_mm: self.structured.page_break_mm,
            line_factor: self.structured.line_factor,
            paragraph_gap_mm: self.structured.paragraph_gap_mm,
            section_gap_mm: self.structured.section_gap_mm,
        }
    }
}

/// Parse `#rrggbb` (leading `#` optional) into RGB bytes.
pub fn parse_hex_color(raw: &str) -> Option<[u8; 3]> {
    let hex = raw.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |idx: usize| u8::from_str_radix(&hex[idx..idx + 2], 16).ok();
    Some([channel(0)?, channel(2)?, channel(4)?])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = RepovisionConfig::default();
        assert_eq!(config.capture.scale, 1.5);
        assert_eq!(config.capture.window_width, 1280);
        assert_eq!(config.page.width_mm, 210.0);
        assert_eq!(config.page.height_mm, 297.0);
        assert_eq!(config.page.pagination, PaginationMode::Exact);
        assert_eq!(config.export.default_base_name, "repovision");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().expect("temp dir");
        let config = RepovisionConfig::load(temp.path());
        assert_eq!(config, RepovisionConfig::default());
    }

    #[test]
    fn test_load_partial_config() {
        let temp = TempDir::new().expect("temp dir");
        let dir = temp.path().join(".repovision");
        std::fs::create_dir_all(&dir).expect("create .repovision");

        let mut file = std::fs::File::create(dir.join("config.toml")).expect("create config");
        writeln!(
            file,
            r##"
[capture]
scale = 2.0
background = "#ffffff"

[page]
pagination = "literal"

[export]
default_base_name = "report"
"##
        )
        .expect("write config");

        let config = RepovisionConfig::load(temp.path());
        assert_eq!(config.capture.scale, 2.0);
        assert_eq!(config.capture.window_width, 1280);
        assert_eq!(config.capture_options().background, [255, 255, 255]);
        assert_eq!(config.page.pagination, PaginationMode::Literal);
        assert_eq!(config.page.height_mm, 297.0);
        assert_eq!(config.export.default_base_name, "report");
    }

    #[test]
    fn test_invalid_config_falls_back_to_default() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[capture]\nscale = -1.0\n").expect("write config");

        assert_eq!(RepovisionConfig::load_from_path(&path), RepovisionConfig::default());
        assert!(matches!(
            RepovisionConfig::try_load_from_path(&path),
            Err(ConfigError::Invalid { field: "capture.scale", .. })
        ));
    }

    #[test]
    fn test_scale_has_upper_bound() {
        let mut config = RepovisionConfig::default();
        config.capture.scale = MAX_CAPTURE_SCALE;
        assert!(config.validate().is_ok());

        for scale in [MAX_CAPTURE_SCALE + 0.5, 1e12, f64::INFINITY] {
            config.capture.scale = scale;
            assert!(matches!(
                config.validate(),
                Err(ConfigError::Invalid { field: "capture.scale", .. })
            ));
        }
    }

    #[test]
    fn test_malformed_toml_is_a_parse_error() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[capture\nscale = ").expect("write config");

        assert!(matches!(
            RepovisionConfig::try_load_from_path(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#050816"), Some([5, 8, 22]));
        assert_eq!(parse_hex_color("58a6ff"), Some([0x58, 0xa6, 0xff]));
        assert_eq!(parse_hex_color("#fff"), None);
        assert_eq!(parse_hex_color("#zzzzzz"), None);
    }
}
