//! Diagram subsystem: compile descriptions, isolate failures, switch views.

pub mod compiler;
pub mod renderer;
pub mod tabs;

pub use compiler::{DiagramCompiler, Graphic, MermaidCompiler};
pub use renderer::{
    DiagramRenderState, DiagramRenderer, FALLBACK_WARNING, RenderOutcome, RenderTicket,
};
pub use tabs::{DiagramTabs, render_all};
