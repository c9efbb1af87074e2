//! Diagram compilers: textual description in, SVG graphic out.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use mermaid_rs_renderer::{
    config::LayoutConfig,
    ir::{DiagramKind, Graph},
    layout::compute_layout,
    parser::parse_mermaid,
    render::render_svg,
    theme::Theme,
};

use crate::error::DiagramCompileError;

/// A compiled diagram, addressed by the element id of its render attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graphic {
    pub element_id: String,
    pub svg: String,
}

/// Turns a diagram description into a graphic.
///
/// Implementations must be pure with respect to their input: the same
/// description always compiles (or fails) the same way.
pub trait DiagramCompiler: Send + Sync {
    fn compile(&self, source: &str, element_id: &str) -> Result<Graphic, DiagramCompileError>;
}

/// Mermaid compiler backed by `mermaid-rs-renderer`, themed for the dark report.
pub struct MermaidCompiler {
    theme: Theme,
    layout: LayoutConfig,
}

impl Default for MermaidCompiler {
    fn default() -> Self {
        Self {
            theme: report_theme(),
            layout: LayoutConfig::default(),
        }
    }
}

impl MermaidCompiler {
    pub fn new(theme: Theme, layout: LayoutConfig) -> Self {
        Self { theme, layout }
    }
}

impl DiagramCompiler for MermaidCompiler {
    fn compile(&self, source: &str, element_id: &str) -> Result<Graphic, DiagramCompileError> {
        // The parser accepts almost anything, so reject malformed text before layout
        check_source(source)?;

        // The layout engine can panic on pathological input; treat that as a compile error
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            let parsed =
                parse_mermaid(source).map_err(|e| DiagramCompileError::Parse(e.to_string()))?;
            check_graph(&parsed.graph)?;
            let layout = compute_layout(&parsed.graph, &self.theme, &self.layout);
            Ok::<String, DiagramCompileError>(render_svg(&layout, &self.theme, &self.layout))
        }));

        let svg = match outcome {
            Ok(result) => result?,
            Err(payload) => return Err(DiagramCompileError::Panicked(panic_message(&*payload))),
        };

        if !svg.contains("<svg") {
            return Err(DiagramCompileError::EmptyOutput);
        }

        Ok(Graphic {
            element_id: element_id.to_string(),
            svg,
        })
    }
}

/// First words of the diagram types Mermaid understands.
const DIAGRAM_HEADERS: &[&str] = &[
    "graph",
    "flowchart",
    "flowchart-elk",
    "sequenceDiagram",
    "classDiagram",
    "classDiagram-v2",
    "stateDiagram",
    "stateDiagram-v2",
    "erDiagram",
    "pie",
    "mindmap",
    "journey",
    "timeline",
    "gantt",
    "requirementDiagram",
    "gitGraph",
    "C4Context",
    "C4Container",
    "C4Component",
    "C4Dynamic",
    "C4Deployment",
    "sankey",
    "sankey-beta",
    "quadrantChart",
    "zenuml",
    "block",
    "block-beta",
    "packet",
    "packet-beta",
    "kanban",
    "architecture",
    "architecture-beta",
    "radar",
    "radar-beta",
    "treemap",
    "treemap-beta",
    "xychart",
    "xychart-beta",
];

const FLOW_DIRECTIONS: &[&str] = &["TD", "TB", "BT", "RL", "LR"];

/// Sequence diagram blocks closed by `end`.
const SEQUENCE_BLOCKS: &[&str] = &["loop", "alt", "opt", "par", "critical", "break", "rect", "box"];

fn parse_error(message: impl Into<String>) -> DiagramCompileError {
    DiagramCompileError::Parse(message.into())
}

/// Lines that carry content, with `%%` comments and directives dropped.
fn content_lines(source: &str) -> impl Iterator<Item = (usize, &str)> {
    source
        .lines()
        .enumerate()
        .map(|(idx, line)| {
            let code = line.split("%%").next().unwrap_or_default();
            (idx + 1, code.trim())
        })
        .filter(|(_, line)| !line.is_empty())
}

/// Structural checks the lenient Mermaid parser skips.
fn check_source(source: &str) -> Result<(), DiagramCompileError> {
    let mut lines = content_lines(source);
    let Some((_, header)) = lines.next() else {
        return Err(parse_error("diagram description is empty"));
    };

    // `graph TD; A-->B` keeps statements on the header line
    let header = header.split(';').next().unwrap_or_default().trim();
    let (keyword, direction) = header
        .split_once(char::is_whitespace)
        .map_or((header, ""), |(keyword, rest)| (keyword, rest.trim()));
    if !DIAGRAM_HEADERS.contains(&keyword) {
        return Err(parse_error(format!("unknown diagram type `{keyword}`")));
    }
    if matches!(keyword, "graph" | "flowchart" | "flowchart-elk")
        && !direction.is_empty()
        && !FLOW_DIRECTIONS.contains(&direction)
    {
        return Err(parse_error(format!("invalid {keyword} direction `{direction}`")));
    }

    let mut open_blocks: Vec<&str> = Vec::new();
    for (line_no, line) in lines {
        if ends_with_dangling_edge(line) {
            return Err(parse_error(format!("line {line_no}: edge has no target")));
        }
        if keyword != "sequenceDiagram" {
            continue;
        }
        let first = line.split_whitespace().next().unwrap_or_default();
        if SEQUENCE_BLOCKS.contains(&first) {
            open_blocks.push(first);
        } else if first == "end" && open_blocks.pop().is_none() {
            return Err(parse_error(format!("line {line_no}: `end` without an open block")));
        }
    }

    match open_blocks.last() {
        Some(block) => Err(parse_error(format!("unterminated `{block}` block"))),
        None => Ok(()),
    }
}

/// `A -->`, `A ==>`, `A ---`: an arrow with nothing after it.
fn ends_with_dangling_edge(line: &str) -> bool {
    let tail: String = line
        .chars()
        .rev()
        .take_while(|c| matches!(c, '-' | '=' | '.' | '>'))
        .collect();
    let has_shaft = tail.contains('-') || tail.contains('=');
    tail.len() >= 2 && has_shaft && (tail.contains('>') || tail.len() >= 3)
}

/// A parsed graph must contain something to draw.
fn check_graph(graph: &Graph) -> Result<(), DiagramCompileError> {
    let empty = match graph.kind {
        DiagramKind::Sequence => graph.sequence_participants.is_empty() && graph.nodes.is_empty(),
        DiagramKind::Pie => graph.pie_slices.is_empty(),
        DiagramKind::Gantt => graph.gantt_tasks.is_empty(),
        DiagramKind::Flowchart
        | DiagramKind::Class
        | DiagramKind::State
        | DiagramKind::Er
        | DiagramKind::Requirement => graph.nodes.is_empty(),
        // Remaining kinds keep their content in dedicated structures
        _ => false,
    };
    if empty {
        Err(parse_error("diagram has no nodes"))
    } else {
        Ok(())
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Dark palette matching the report stylesheet.
fn report_theme() -> Theme {
    Theme {
        background: "#0d1117".to_string(),
        primary_color: "#1f6feb".to_string(),
        primary_text_color: "#e6edf3".to_string(),
        primary_border_color: "#388bfd".to_string(),
        line_color: "#58a6ff".to_string(),
        secondary_color: "#161b22".to_string(),
        tertiary_color: "#0d1117".to_string(),
        edge_label_background: "#161b22".to_string(),
        cluster_background: "#0d1117".to_string(),
        cluster_border: "#388bfd".to_string(),
        font_family: "JetBrains Mono, monospace".to_string(),
        text_color: "#e6edf3".to_string(),
        ..Theme::modern()
    }
}
