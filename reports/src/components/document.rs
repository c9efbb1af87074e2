//! Root document component - the complete HTML page
//!
//! Section order follows the on-screen report: header, scores, summary,
//! tech stack, diagrams, folder tree, improvements.

use super::{
    DiagramsPanel, FolderTree, ImprovementsSection, ScoreSection, SummaryCard, TechStackCards,
};
use crate::styles::{CSP, REPORT_CSS};
use crate::types::{AnalysisResult, DiagramPanel, ViewKey};
use leptos::prelude::*;

/// Id of the element the capture exporter snapshots.
pub const RESULTS_SURFACE_ID: &str = "results-content";

/// The complete HTML document for the report
#[component]
pub fn ReportDocument(
    result: AnalysisResult,
    panels: Vec<DiagramPanel>,
    /// Diagram tab selected on load
    #[prop(default = ViewKey::Architecture)]
    active: ViewKey,
) -> impl IntoView {
    let title = if result.repo_name.is_empty() {
        "RepoVision Report".to_string()
    } else {
        format!("{} - RepoVision Report", result.repo_name)
    };
    let entries = result.folder_entries();

    view! {
        <html>
            <head>
                <meta charset="UTF-8" />
                <meta http-equiv="Content-Security-Policy" content=CSP />
                <title>{title}</title>
                <style>{REPORT_CSS}</style>
            </head>
            <body>
                <main class="app-main">
                    <header class="app-header">
                        <h1 class="gradient-text">"RepoVision"</h1>
                        <p class="muted">"GitHub Repository Explainer AI"</p>
                    </header>

                    <div id=RESULTS_SURFACE_ID class="results">
                        <section class="card repo-header">
                            <div class="repo-title">
                                <h2>{result.repo_name.clone()}</h2>
                                <span class="tech-badge">{result.architecture_type.clone()}</span>
                            </div>
                            <a class="repo-url" href=result.repo_url.clone() target="_blank" rel="noopener noreferrer">
                                {result.repo_url.clone()}
                            </a>
                        </section>

                        <ScoreSection result=result.clone() />
                        <SummaryCard result=result.clone() />
                        <TechStackCards result=result.clone() />
                        <DiagramsPanel panels=panels active=active />
                        <FolderTree entries=entries raw=result.folder_tree.clone() />
                        <ImprovementsSection
                            suggestions=result.improvements_suggestion.clone()
                            risks=result.security_risks.clone()
                        />
                    </div>
                </main>
                <script>{APP_SCRIPT}</script>
            </body>
        </html>
    }
}

/// Tab switching, copy buttons and the folder tree toggle
const APP_SCRIPT: &str = r#"
(() => {
  document.querySelectorAll('.copy-btn[data-copy]').forEach(btn => {
      btn.addEventListener('click', () => {
          navigator.clipboard.writeText(btn.dataset.copy).then(() => {
              const orig = btn.textContent;
              btn.textContent = 'Copied!';
              setTimeout(() => btn.textContent = orig, 2000);
          });
      });
  });

  document.querySelectorAll('.tab-bar[data-tab-scope]').forEach(bar => {
      const scope = bar.dataset.tabScope;
      bar.querySelectorAll('.tab-btn[data-tab]').forEach(btn => {
          btn.addEventListener('click', () => {
              const target = btn.dataset.tab;
              bar.querySelectorAll('.tab-btn').forEach(b => b.classList.toggle('active', b === btn));
              document.querySelectorAll(`[data-tab-panel^="${scope}-"]`).forEach(panel => {
                  panel.classList.toggle('active', panel.dataset.tabPanel === target);
              });
          });
      });
  });

  document.querySelectorAll('.collapse-btn[data-collapse]').forEach(btn => {
      btn.addEventListener('click', () => {
          const body = document.getElementById(btn.dataset.collapse);
          if (!body) return;
          const hidden = body.style.display === 'none';
          body.style.display = hidden ? '' : 'none';
          btn.textContent = hidden ? 'Collapse' : 'Expand';
      });
  });
})();
"#;
