//! Report data types for structuring analysis results.
//!
//! These types mirror the JSON response of the analysis backend. They're designed to be:
//!
//! - **Serializable** - The backend response deserializes directly via serde
//! - **Total** - Every field has a default, so a partial response still renders
//! - **Explicit about absence** - Diagram descriptions are `Option<String>`
//!
//! # Example
//!
//! ```rust
//! use repovision_report::types::{AnalysisResult, DiagramSet, ViewKey};
//!
//! let result = AnalysisResult {
//!     repo_name: "fastapi".into(),
//!     complexity_score: 72,
//!     mermaid_diagrams: DiagramSet {
//!         architecture: Some("graph TD\n    A[Client] --> B[API]".into()),
//!         ..Default::default()
//!     },
//!     ..Default::default()
//! };
//!
//! assert!(result.mermaid_diagrams.get(ViewKey::Architecture).is_some());
//! assert!(result.mermaid_diagrams.get(ViewKey::Flow).is_none());
//! ```

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of one diagram view.
///
/// The set is closed; [`ViewKey::ALL`] lists the views in tab order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewKey {
    /// High-level architecture diagram
    Architecture,
    /// Component relationship diagram
    Component,
    /// Request/data flow diagram
    Flow,
}

impl ViewKey {
    /// All views in tab order.
    pub const ALL: [ViewKey; 3] = [ViewKey::Architecture, ViewKey::Component, ViewKey::Flow];

    /// Stable lowercase key, used in JSON and element ids.
    pub fn as_str(self) -> &'static str {
        match self {
            ViewKey::Architecture => "architecture",
            ViewKey::Component => "component",
            ViewKey::Flow => "flow",
        }
    }

    /// Human readable tab label.
    pub fn label(self) -> &'static str {
        match self {
            ViewKey::Architecture => "Architecture",
            ViewKey::Component => "Component",
            ViewKey::Flow => "Flow",
        }
    }

    /// Parse a lowercase key (as accepted on the command line).
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "architecture" | "arch" => Some(ViewKey::Architecture),
            "component" | "components" => Some(ViewKey::Component),
            "flow" => Some(ViewKey::Flow),
            _ => None,
        }
    }
}

impl fmt::Display for ViewKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Textual diagram descriptions, one optional entry per [`ViewKey`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagramSet {
    /// Architecture view description
    #[serde(default)]
    pub architecture: Option<String>,
    /// Component view description
    #[serde(default)]
    pub component: Option<String>,
    /// Flow view description
    #[serde(default)]
    pub flow: Option<String>,
}

impl DiagramSet {
    /// Description for `key`. Empty or whitespace-only descriptions count as absent.
    pub fn get(&self, key: ViewKey) -> Option<&str> {
        let raw = match key {
            ViewKey::Architecture => self.architecture.as_deref(),
            ViewKey::Component => self.component.as_deref(),
            ViewKey::Flow => self.flow.as_deref(),
        };
        raw.filter(|code| !code.trim().is_empty())
    }
}

/// Structured result of a repository analysis, as produced by the backend.
///
/// All fields default, so consumers never have to special-case a missing
/// key in the response.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisResult {
    /// Repository name (e.g. `"fastapi"`)
    pub repo_name: String,
    /// Repository URL as submitted
    pub repo_url: String,
    /// Narrative summary
    pub summary: String,
    /// Detected feature strings
    pub features: Vec<String>,
    /// Detected languages
    pub languages: Vec<String>,
    /// Detected frameworks
    pub frameworks: Vec<String>,
    /// Detected databases
    pub databases: Vec<String>,
    /// Architecture type label (e.g. "Monolith", "Microservices")
    pub architecture_type: String,
    /// Free-text explanation of the architecture
    pub architecture_explanation: String,
    /// Diagram descriptions per view
    pub mermaid_diagrams: DiagramSet,
    /// Newline-delimited, annotated folder tree
    pub folder_tree: String,
    /// Ecosystem name -> dependency list
    pub dependencies: BTreeMap<String, Vec<String>>,
    /// Improvement suggestions (rendered numbered)
    pub improvements_suggestion: Vec<String>,
    /// Security risk strings (rendered bulleted)
    pub security_risks: Vec<String>,
    /// Complexity score, 0-100
    pub complexity_score: u32,
    /// Complexity label (e.g. "Moderate")
    pub complexity_label: String,
    /// Code quality score, 0-100
    pub code_quality_score: u32,
    /// Number of analyzed files
    pub file_count: u64,
    /// Total number of lines
    pub total_lines: u64,
    /// Dominant language
    pub primary_language: String,
}

impl AnalysisResult {
    /// Parse a backend JSON response.
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }

    /// Complexity score clamped to 0-100.
    pub fn complexity(&self) -> u8 {
        self.complexity_score.min(100) as u8
    }

    /// Code quality score clamped to 0-100.
    pub fn code_quality(&self) -> u8 {
        self.code_quality_score.min(100) as u8
    }

    /// Folder tree split into ordered, classified entries.
    pub fn folder_entries(&self) -> Vec<FolderEntry> {
        FolderEntry::parse_tree(&self.folder_tree)
    }
}

/// Kind of a folder-tree entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    /// Directory line
    Directory,
    /// File line
    File,
    /// Anything else (headers, ellipsis markers)
    Other,
}

/// One line of the annotated folder tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderEntry {
    /// The line as delivered, including tree connectors
    pub line: String,
    /// Classification used for styling
    pub kind: EntryKind,
}

impl FolderEntry {
    const DIR_MARKER: char = '\u{1F4C1}';
    const FILE_MARKER: char = '\u{1F4C4}';

    /// Split a newline-delimited tree, keeping order.
    ///
    /// An empty tree yields no entries.
    pub fn parse_tree(tree: &str) -> Vec<FolderEntry> {
        if tree.is_empty() {
            return Vec::new();
        }
        tree.lines()
            .map(|line| {
                let trimmed = line.trim_end();
                let kind = if trimmed.contains(Self::DIR_MARKER) || trimmed.ends_with('/') {
                    EntryKind::Directory
                } else if trimmed.contains(Self::FILE_MARKER) {
                    EntryKind::File
                } else {
                    EntryKind::Other
                };
                FolderEntry {
                    line: line.to_string(),
                    kind,
                }
            })
            .collect()
    }
}

/// What the report shows for one diagram view.
///
/// This is the display projection of the renderer's state machine: the
/// report crate never compiles diagrams itself.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagramView {
    /// No description was supplied; neutral, not an error
    Unavailable,
    /// Compilation has not finished yet
    Rendering,
    /// Compiled graphic
    Rendered {
        /// Element id unique to this render attempt
        element_id: String,
        /// Inline SVG markup
        svg: String,
    },
    /// Compilation failed; the raw description is shown instead
    Fallback {
        /// The original description, verbatim
        source: String,
        /// Short human readable warning
        warning: String,
    },
}

/// One diagram tab as handed to the report renderer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagramPanel {
    /// Which view this panel belongs to
    pub key: ViewKey,
    /// Display state
    pub view: DiagramView,
    /// Raw description for the "view source" disclosure, if any
    pub source: Option<String>,
}

impl DiagramPanel {
    /// Panel for a view that has not been rendered.
    pub fn pending(key: ViewKey, source: Option<&str>) -> Self {
        Self {
            key,
            view: match source {
                Some(_) => DiagramView::Rendering,
                None => DiagramView::Unavailable,
            },
            source: source.map(str::to_string),
        }
    }
}
