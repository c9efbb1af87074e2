//! Diagram tab controller.
//!
//! Holds the fixed set of views, tracks the active one, and owns the render
//! state for it. Each selection starts a fresh render attempt under a new
//! ticket; outcomes arrive over a channel and are applied only while their
//! ticket is still current, so a late result from an earlier tab can never
//! overwrite the panel.

use futures::FutureExt;
use repovision_report::components::NO_SOURCE_TEXT;
use repovision_report::types::{DiagramPanel, DiagramSet, ViewKey};
use std::panic::AssertUnwindSafe;
use tokio::sync::mpsc;
use tracing::debug;

use super::renderer::{DiagramRenderState, DiagramRenderer, RenderOutcome, RenderTicket};

pub struct DiagramTabs {
    diagrams: DiagramSet,
    renderer: DiagramRenderer,
    active: ViewKey,
    generation: u64,
    state: DiagramRenderState,
    outcomes_tx: mpsc::UnboundedSender<RenderOutcome>,
    outcomes_rx: mpsc::UnboundedReceiver<RenderOutcome>,
}

impl DiagramTabs {
    /// Controller with `Architecture` active and nothing rendering yet.
    pub fn new(diagrams: DiagramSet, renderer: DiagramRenderer) -> Self {
        let (outcomes_tx, outcomes_rx) = mpsc::unbounded_channel();
        Self {
            diagrams,
            renderer,
            active: ViewKey::Architecture,
            generation: 0,
            state: DiagramRenderState::Idle,
            outcomes_tx,
            outcomes_rx,
        }
    }

    /// Controller that immediately starts rendering the initial tab.
    ///
    /// Must be called inside a tokio runtime.
    pub fn open(diagrams: DiagramSet, renderer: DiagramRenderer) -> Self {
        let mut tabs = Self::new(diagrams, renderer);
        tabs.select_tab(ViewKey::Architecture);
        tabs
    }

    pub fn active(&self) -> ViewKey {
        self.active
    }

    pub fn state(&self) -> &DiagramRenderState {
        &self.state
    }

    pub fn ticket(&self) -> RenderTicket {
        RenderTicket {
            view: self.active,
            generation: self.generation,
        }
    }

    /// Make `key` active and hand its description to the renderer.
    ///
    /// The previous state is discarded before anything else happens, so the
    /// panel goes through `Idle` and never shows the old graphic. Must be
    /// called inside a tokio runtime when the view has a description.
    pub fn select_tab(&mut self, key: ViewKey) -> RenderTicket {
        self.state = DiagramRenderState::Idle;
        self.active = key;
        self.generation += 1;
        let ticket = self.ticket();

        let Some(source) = self.diagrams.get(key).map(str::to_owned) else {
            debug!(view = %key, "no diagram description for view");
            return ticket;
        };

        self.state = DiagramRenderState::Rendering;
        let renderer = self.renderer.clone();
        let tx = self.outcomes_tx.clone();
        tokio::spawn(async move {
            let outcome = AssertUnwindSafe(renderer.render(Some(&source), ticket))
                .catch_unwind()
                .await
                .unwrap_or_else(|_| RenderOutcome {
                    ticket,
                    state: DiagramRenderState::Failed("render task panicked".to_string()),
                });
            // Receiver gone means the controller was dropped; nothing to update
            let _ = tx.send(outcome);
        });

        ticket
    }

    /// Apply an outcome if it belongs to the current ticket.
    ///
    /// Returns `true` when the outcome replaced the current state.
    pub fn apply(&mut self, outcome: RenderOutcome) -> bool {
        let current = self.ticket();
        if outcome.ticket != current {
            debug!(
                view = %outcome.ticket.view,
                generation = outcome.ticket.generation,
                current_generation = current.generation,
                "dropping stale diagram outcome"
            );
            return false;
        }
        self.state = outcome.state;
        true
    }

    /// Wait for the next outcome from any render task, stale or not.
    pub async fn next_outcome(&mut self) -> Option<RenderOutcome> {
        self.outcomes_rx.recv().await
    }

    /// Apply every outcome that has already arrived without waiting.
    pub fn drain_ready(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(outcome) = self.outcomes_rx.try_recv() {
            if self.apply(outcome) {
                applied += 1;
            }
        }
        applied
    }

    /// Wait until the current ticket's outcome has been applied.
    pub async fn settle(&mut self) -> &DiagramRenderState {
        while self.state == DiagramRenderState::Rendering {
            match self.outcomes_rx.recv().await {
                Some(outcome) => {
                    self.apply(outcome);
                }
                None => break,
            }
        }
        &self.state
    }

    /// Raw description for `key`, if any.
    pub fn source(&self, key: ViewKey) -> Option<&str> {
        self.diagrams.get(key)
    }

    /// Raw description of the active view, or the placeholder text.
    pub fn active_source(&self) -> &str {
        self.source(self.active).unwrap_or(NO_SOURCE_TEXT)
    }

    /// Display panel for the active view.
    pub fn panel(&self) -> DiagramPanel {
        let source = self.source(self.active);
        DiagramPanel {
            key: self.active,
            view: self.state.display(source),
            source: source.map(str::to_owned),
        }
    }
}

/// Render every view once, in tab order.
///
/// Used for the static report, where all panels are embedded and switched
/// client-side.
pub async fn render_all(diagrams: DiagramSet, renderer: DiagramRenderer) -> Vec<DiagramPanel> {
    let mut tabs = DiagramTabs::new(diagrams, renderer);
    let mut panels = Vec::with_capacity(ViewKey::ALL.len());
    for key in ViewKey::ALL {
        tabs.select_tab(key);
        tabs.settle().await;
        panels.push(tabs.panel());
    }
    panels
}
