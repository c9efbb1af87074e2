//! Diagram panel - one tab per view, each showing its render state
//!
//! The compiled SVG is injected as inner HTML. A failed compilation shows
//! the raw description instead, and every tab carries a disclosure with the
//! source text regardless of the render outcome.

use super::{Icon, TabBar, TabContent, ICON_GRAPH, ICON_TERMINAL, ICON_WARNING_CIRCLE};
use crate::types::{DiagramPanel, DiagramView, ViewKey};
use leptos::prelude::*;

/// Text shown when a view has no description.
pub const NO_DIAGRAM_TEXT: &str = "No diagram available for this view";

/// Text shown in the source disclosure when a view has no description.
pub const NO_SOURCE_TEXT: &str = "No code available";

/// Tabbed container for the architecture, component and flow diagrams
#[component]
pub fn DiagramsPanel(panels: Vec<DiagramPanel>, active: ViewKey) -> impl IntoView {
    let scope = "diagrams".to_string();

    view! {
        <section class="card" id="diagrams">
            <h3 class="section-title">
                <Icon path=ICON_GRAPH />
                "Architecture Diagrams"
            </h3>
            <TabBar scope=scope.clone() active=active />
            <div class="diagram-stage">
                {panels.into_iter().map(|panel| {
                    let key = panel.key;
                    view! {
                        <TabContent scope=scope.clone() view_key=key active={key == active}>
                            <DiagramBody state=panel.view />
                            <SourceDisclosure source=panel.source />
                        </TabContent>
                    }
                }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
fn DiagramBody(state: DiagramView) -> impl IntoView {
    match state {
        DiagramView::Unavailable => view! {
            <div class="diagram-empty">{NO_DIAGRAM_TEXT}</div>
        }
        .into_any(),
        DiagramView::Rendering => view! {
            <div class="diagram-pending">
                <span class="spinner"></span>
                "Rendering diagram..."
            </div>
        }
        .into_any(),
        DiagramView::Rendered { element_id, svg } => view! {
            <div class="mermaid-container">
                <div id=element_id class="diagram-graphic" inner_html=svg></div>
            </div>
        }
        .into_any(),
        DiagramView::Fallback { source, warning } => view! {
            <div class="diagram-fallback">
                <p class="diagram-warning">
                    <Icon path=ICON_WARNING_CIRCLE size="14" color="#e3b341" />
                    {warning}
                </p>
                <pre class="diagram-source">{source}</pre>
            </div>
        }
        .into_any(),
    }
}

#[component]
fn SourceDisclosure(source: Option<String>) -> impl IntoView {
    view! {
        <details class="source-toggle">
            <summary>
                <Icon path=ICON_TERMINAL size="14" />
                "View Mermaid source code"
            </summary>
            <pre class="diagram-source">{source.unwrap_or_else(|| NO_SOURCE_TEXT.to_string())}</pre>
        </details>
    }
}
