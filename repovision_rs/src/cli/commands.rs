//! Subcommand handlers.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use repovision_report::components::NO_DIAGRAM_TEXT;
use repovision_report::render_report;
use repovision_report::types::{AnalysisResult, DiagramView};
use tracing::{debug, info};

use super::{Cli, Command, DiagramArgs, ExportArgs, RenderArgs};
use crate::config::RepovisionConfig;
use crate::diagram::{DiagramRenderer, DiagramTabs, MermaidCompiler, render_all};
use crate::export::{Exporter, ImageSurface, Viewport};

/// Surface id given to a full-page snapshot passed with `--capture`.
const SNAPSHOT_SURFACE_ID: &str = "viewport";

pub async fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    match cli.command {
        Command::Render(args) => run_render(&args).await,
        Command::Diagram(args) => run_diagram(&args).await,
        Command::Export(args) => run_export(&args, &config).await,
    }
}

fn load_config(path: Option<&Path>) -> Result<RepovisionConfig> {
    match path {
        Some(path) => RepovisionConfig::try_load_from_path(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => {
            let root = std::env::current_dir().context("Failed to resolve current directory")?;
            Ok(RepovisionConfig::load(&root))
        }
    }
}

fn read_analysis(path: &Path) -> Result<AnalysisResult> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    AnalysisResult::from_json(&raw)
        .with_context(|| format!("Failed to parse analysis result {}", path.display()))
}

fn mermaid_renderer() -> DiagramRenderer {
    DiagramRenderer::new(Arc::new(MermaidCompiler::default()))
}

async fn run_render(args: &RenderArgs) -> Result<()> {
    let result = read_analysis(&args.input)?;
    let panels = render_all(result.mermaid_diagrams.clone(), mermaid_renderer()).await;
    let html = render_report(&result, &panels);

    if let Some(parent) = args.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(&args.output, &html)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    info!(bytes = html.len(), "report rendered");
    println!("Report written to {}", args.output.display());
    Ok(())
}

async fn run_diagram(args: &DiagramArgs) -> Result<()> {
    let result = read_analysis(&args.input)?;
    let mut tabs = DiagramTabs::new(result.mermaid_diagrams, mermaid_renderer());
    tabs.select_tab(args.view);
    tabs.settle().await;

    match tabs.panel().view {
        DiagramView::Unavailable => println!("{NO_DIAGRAM_TEXT}"),
        DiagramView::Rendered { svg, .. } => match &args.output {
            Some(path) => {
                std::fs::write(path, &svg)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                println!("Diagram written to {}", path.display());
            }
            None => println!("{svg}"),
        },
        DiagramView::Fallback { source, warning } => {
            println!("{warning}");
            println!();
            println!("{source}");
        }
        DiagramView::Rendering => bail!("render for {} did not complete", args.view),
    }
    Ok(())
}

async fn run_export(args: &ExportArgs, config: &RepovisionConfig) -> Result<()> {
    let result = read_analysis(&args.input)?;
    let exporter = Exporter::from_config(config);

    let viewport = match (&args.capture, args.structured) {
        (Some(path), false) => Some(snapshot_viewport(path)),
        _ => None,
    };
    let surface_id = args
        .surface
        .clone()
        .unwrap_or_else(|| config.capture.surface_id.clone());

    let artifact = exporter
        .export(&result, viewport.as_ref(), Some(&surface_id))
        .await
        .context("Failed to build document")?;
    let path = artifact
        .save(&args.out_dir)
        .with_context(|| format!("Failed to write document to {}", args.out_dir.display()))?;

    println!(
        "{} ({} export, {} page{})",
        path.display(),
        artifact.strategy,
        artifact.page_count,
        if artifact.page_count == 1 { "" } else { "s" }
    );
    Ok(())
}

/// Wrap a PNG snapshot as the whole visible surface.
///
/// An unreadable snapshot yields an empty viewport, which the exporter
/// treats as an unavailable surface and answers with the structured document.
fn snapshot_viewport(path: &Path) -> Viewport {
    match ImageSurface::open(SNAPSHOT_SURFACE_ID, path) {
        Ok(surface) => Viewport::new(surface),
        Err(e) => {
            debug!(error = %e, "snapshot not loadable");
            Viewport::empty()
        }
    }
}
