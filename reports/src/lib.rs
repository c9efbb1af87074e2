//! # repovision-report
//!
//! Leptos SSR renderer for RepoVision repository analysis reports.
//!
//! The crate turns an [`AnalysisResult`](types::AnalysisResult) plus the
//! display state of each diagram view into a single static HTML document.
//! It never compiles diagrams itself: callers hand in one
//! [`DiagramPanel`](types::DiagramPanel) per view, already rendered (or
//! degraded) by the diagram subsystem.
//!
//! ## Quick Start
//!
//! ```rust
//! use repovision_report::{render_report, types::{AnalysisResult, DiagramPanel, ViewKey}};
//!
//! let result = AnalysisResult {
//!     repo_name: "my-project".into(),
//!     file_count: 42,
//!     ..Default::default()
//! };
//! let panels: Vec<DiagramPanel> = ViewKey::ALL
//!     .into_iter()
//!     .map(|key| DiagramPanel::pending(key, result.mermaid_diagrams.get(key)))
//!     .collect();
//!
//! let html = render_report(&result, &panels);
//! assert!(html.contains("my-project"));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Data structures for report content
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS constants
//!
//! No reactive runtime or hydration is needed - pure static HTML generation.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod styles;
pub mod types;

use components::ReportDocument;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use types::{AnalysisResult, DiagramPanel, ViewKey};

/// Render a complete HTML report.
///
/// `panels` carries one entry per diagram view; views without a panel are
/// shown as unavailable. The architecture tab is selected on load.
///
/// # Returns
///
/// A complete HTML document as a `String`, including `<!DOCTYPE html>`.
pub fn render_report(result: &AnalysisResult, panels: &[DiagramPanel]) -> String {
    let panels = complete_panels(panels);
    let doc = view! {
        <ReportDocument result=result.clone() panels=panels active=ViewKey::Architecture />
    };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// One panel per view in tab order; missing views become `Unavailable`.
fn complete_panels(panels: &[DiagramPanel]) -> Vec<DiagramPanel> {
    ViewKey::ALL
        .into_iter()
        .map(|key| {
            panels
                .iter()
                .rev()
                .find(|panel| panel.key == key)
                .cloned()
                .unwrap_or_else(|| DiagramPanel::pending(key, None))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use components::{NO_DIAGRAM_TEXT, NO_SOURCE_TEXT, RESULTS_SURFACE_ID};
    use types::DiagramView;

    fn sample() -> AnalysisResult {
        AnalysisResult {
            repo_name: "test-repo".into(),
            repo_url: "https://github.com/acme/test-repo".into(),
            summary: "A small service.".into(),
            architecture_type: "Monolith".into(),
            complexity_score: 85,
            complexity_label: "High".into(),
            code_quality_score: 40,
            file_count: 42,
            total_lines: 12345,
            features: vec!["Auth".into(), "Billing".into()],
            ..Default::default()
        }
    }

    #[test]
    fn renders_empty_report() {
        let html = render_report(&AnalysisResult::default(), &[]);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("RepoVision"));
        assert!(html.contains(RESULTS_SURFACE_ID));
    }

    #[test]
    fn renders_result_fields() {
        let html = render_report(&sample(), &[]);

        assert!(html.contains("test-repo"));
        assert!(html.contains("12,345"));
        assert!(html.contains("Complexity \u{00B7} High"));
        assert!(html.contains("Billing"));
        assert!(html.contains("No security risks identified"));
    }

    #[test]
    fn missing_panels_render_as_unavailable() {
        let html = render_report(&sample(), &[]);

        assert_eq!(html.matches(NO_DIAGRAM_TEXT).count(), 3);
        assert_eq!(html.matches(NO_SOURCE_TEXT).count(), 3);
    }

    #[test]
    fn rendered_panel_embeds_svg_under_unique_id() {
        let panels = vec![DiagramPanel {
            key: ViewKey::Architecture,
            view: DiagramView::Rendered {
                element_id: "mermaid-architecture-7".into(),
                svg: "<svg data-test=\"graphic\"></svg>".into(),
            },
            source: Some("graph TD\n A-->B".into()),
        }];
        let html = render_report(&sample(), &panels);

        assert!(html.contains("id=\"mermaid-architecture-7\""));
        assert!(html.contains("data-test=\"graphic\""));
        assert_eq!(html.matches(NO_DIAGRAM_TEXT).count(), 2);
    }

    #[test]
    fn fallback_panel_shows_raw_source_and_warning() {
        let panels = vec![DiagramPanel {
            key: ViewKey::Flow,
            view: DiagramView::Fallback {
                source: "flowchart ??? broken".into(),
                warning: "Could not render diagram. Showing raw code instead.".into(),
            },
            source: Some("flowchart ??? broken".into()),
        }];
        let html = render_report(&sample(), &panels);

        assert!(html.contains("Could not render diagram. Showing raw code instead."));
        // Once in the fallback body, once in the source disclosure
        assert_eq!(html.matches("flowchart ??? broken").count(), 2);
    }

    /// The opening tag of the element carrying `attr`, whatever the attribute order.
    fn opening_tag<'a>(html: &'a str, attr: &str) -> &'a str {
        let at = html.find(attr).expect("attribute present");
        let start = html[..at].rfind('<').expect("tag start");
        let end = at + html[at..].find('>').expect("tag end");
        &html[start..=end]
    }

    #[test]
    fn architecture_tab_is_active_on_load() {
        let html = render_report(&sample(), &[]);

        let architecture = opening_tag(&html, "data-tab-panel=\"diagrams-architecture\"");
        assert!(architecture.contains("class=\"tab-content active\""), "{architecture}");
        let flow = opening_tag(&html, "data-tab-panel=\"diagrams-flow\"");
        assert!(flow.contains("class=\"tab-content\""), "{flow}");
    }
}
