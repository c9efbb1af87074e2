//! Leptos UI components for rendering HTML reports.
//!
//! Each component is a Leptos `#[component]` function; they are composed by
//! [`ReportDocument`] and can be reused for custom layouts.
//!
//! # Component Hierarchy
//!
//! ```text
//! ReportDocument
//! ├── ScoreSection
//! │   └── ScoreGauge (complexity, quality)
//! ├── SummaryCard
//! ├── TechStackCards
//! ├── DiagramsPanel
//! │   ├── TabBar
//! │   └── TabContent (per view) + source disclosure
//! ├── FolderTree
//! └── ImprovementsSection
//! ```

mod diagrams;
mod document;
mod icons;
mod improvements;
mod scores;
mod summary;
mod tabs;
mod tech_stack;
mod tree;

pub use diagrams::{DiagramsPanel, NO_DIAGRAM_TEXT, NO_SOURCE_TEXT};
pub use document::{ReportDocument, RESULTS_SURFACE_ID};
pub use icons::*;
pub use improvements::ImprovementsSection;
pub use scores::{ScoreGauge, ScoreSection, complexity_color, format_thousands, quality_color};
pub use summary::SummaryCard;
pub use tabs::{TabBar, TabContent};
pub use tech_stack::TechStackCards;
pub use tree::FolderTree;
