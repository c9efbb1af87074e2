//! Single-shot diagram rendering with failure isolation.
//!
//! A render attempt is identified by a [`RenderTicket`] (view + generation).
//! The renderer never returns an error: a failed compilation becomes
//! [`DiagramRenderState::Failed`], which the report shows as the raw
//! description plus a short warning.

use std::sync::Arc;

use repovision_report::types::{DiagramView, ViewKey};
use tracing::{debug, warn};

use super::compiler::{DiagramCompiler, Graphic};

/// Warning shown above the raw description when compilation fails.
pub const FALLBACK_WARNING: &str = "Could not render diagram. Showing raw code instead.";

/// Render state of the active diagram view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagramRenderState {
    /// Nothing in flight. Also the neutral state for an absent description.
    Idle,
    /// A compile for the current ticket is in flight.
    Rendering,
    /// The current ticket compiled successfully.
    Rendered(Graphic),
    /// The current ticket failed to compile; no partial graphic is kept.
    Failed(String),
}

impl DiagramRenderState {
    /// Project the state onto what the report displays.
    ///
    /// `source` is the description that was handed to the renderer; it is
    /// echoed verbatim in the fallback view.
    pub fn display(&self, source: Option<&str>) -> DiagramView {
        match (self, source) {
            (_, None) => DiagramView::Unavailable,
            (DiagramRenderState::Idle, Some(_)) | (DiagramRenderState::Rendering, Some(_)) => {
                DiagramView::Rendering
            }
            (DiagramRenderState::Rendered(graphic), Some(_)) => DiagramView::Rendered {
                element_id: graphic.element_id.clone(),
                svg: graphic.svg.clone(),
            },
            (DiagramRenderState::Failed(_), Some(source)) => DiagramView::Fallback {
                source: source.to_string(),
                warning: FALLBACK_WARNING.to_string(),
            },
        }
    }
}

/// Identity of one render attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderTicket {
    pub view: ViewKey,
    pub generation: u64,
}

impl RenderTicket {
    /// Output element id, unique per attempt (`mermaid-<view>-<generation>`).
    pub fn element_id(&self) -> String {
        format!("mermaid-{}-{}", self.view.as_str(), self.generation)
    }
}

/// Result of a render attempt, tagged with the ticket it was started for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOutcome {
    pub ticket: RenderTicket,
    pub state: DiagramRenderState,
}

/// Compiles descriptions through a shared [`DiagramCompiler`].
#[derive(Clone)]
pub struct DiagramRenderer {
    compiler: Arc<dyn DiagramCompiler>,
}

impl DiagramRenderer {
    pub fn new(compiler: Arc<dyn DiagramCompiler>) -> Self {
        Self { compiler }
    }

    /// Render `description` for `ticket`.
    ///
    /// Absent or blank descriptions resolve to `Idle` without touching the
    /// compiler. Compilation is a single suspension point and cannot be
    /// cancelled; callers discard outcomes whose ticket is stale.
    pub async fn render(&self, description: Option<&str>, ticket: RenderTicket) -> RenderOutcome {
        let Some(source) = description.filter(|code| !code.trim().is_empty()) else {
            return RenderOutcome {
                ticket,
                state: DiagramRenderState::Idle,
            };
        };

        tokio::task::yield_now().await;

        let state = match self.compiler.compile(source, &ticket.element_id()) {
            Ok(graphic) => {
                debug!(
                    view = %ticket.view,
                    generation = ticket.generation,
                    bytes = graphic.svg.len(),
                    "diagram rendered"
                );
                DiagramRenderState::Rendered(graphic)
            }
            Err(e) => {
                warn!(
                    view = %ticket.view,
                    generation = ticket.generation,
                    error = %e,
                    "diagram render failed, falling back to raw source"
                );
                DiagramRenderState::Failed(e.to_string())
            }
        };

        RenderOutcome { ticket, state }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::error::DiagramCompileError;

    /// Accepts descriptions starting with `graph`, rejects everything else.
    pub(crate) struct FakeCompiler;

    impl DiagramCompiler for FakeCompiler {
        fn compile(&self, source: &str, element_id: &str) -> Result<Graphic, DiagramCompileError> {
            if source.trim_start().starts_with("graph") {
                Ok(Graphic {
                    element_id: element_id.to_string(),
                    svg: format!("<svg id=\"{element_id}\"><text>{}</text></svg>", source.len()),
                })
            } else {
                Err(DiagramCompileError::Parse(format!("unknown diagram type in {element_id}")))
            }
        }
    }

    pub(crate) fn fake_renderer() -> DiagramRenderer {
        DiagramRenderer::new(Arc::new(FakeCompiler))
    }

    fn ticket(view: ViewKey, generation: u64) -> RenderTicket {
        RenderTicket { view, generation }
    }

    #[tokio::test]
    async fn absent_description_is_idle_not_failed() {
        let renderer = fake_renderer();
        for view in ViewKey::ALL {
            let outcome = renderer.render(None, ticket(view, 1)).await;
            assert_eq!(outcome.state, DiagramRenderState::Idle);
            assert_eq!(outcome.state.display(None), DiagramView::Unavailable);

            let blank = renderer.render(Some("  \n"), ticket(view, 2)).await;
            assert_eq!(blank.state, DiagramRenderState::Idle);
        }
    }

    #[tokio::test]
    async fn valid_description_renders_under_ticket_id() {
        let outcome = fake_renderer()
            .render(Some("graph TD\n A-->B"), ticket(ViewKey::Component, 4))
            .await;

        match outcome.state {
            DiagramRenderState::Rendered(graphic) => {
                assert_eq!(graphic.element_id, "mermaid-component-4");
                assert!(graphic.svg.starts_with("<svg"));
            }
            other => panic!("expected Rendered, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_description_falls_back_to_exact_source() {
        let source = "sequenceDiagram\n  User->>App: ???\n  %% unterminated";
        let outcome = fake_renderer().render(Some(source), ticket(ViewKey::Flow, 1)).await;

        assert!(matches!(outcome.state, DiagramRenderState::Failed(_)));
        assert_eq!(
            outcome.state.display(Some(source)),
            DiagramView::Fallback {
                source: source.to_string(),
                warning: FALLBACK_WARNING.to_string(),
            }
        );
    }

    #[test]
    fn element_ids_are_unique_per_attempt() {
        let a = ticket(ViewKey::Architecture, 1).element_id();
        let b = ticket(ViewKey::Architecture, 2).element_id();
        assert_ne!(a, b);
        assert_eq!(a, "mermaid-architecture-1");
    }
}
