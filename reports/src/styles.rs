//! CSS styles for the HTML report.
//!
//! To extend or override styles:
//!
//! ```rust
//! use repovision_report::styles::REPORT_CSS;
//!
//! let my_css = ".custom-class { color: red; }";
//! let combined = format!("{}\n{}", REPORT_CSS, my_css);
//! ```

/// Complete CSS for the report - dark "cyber" theme.
///
/// The background colour matches the capture exporter's default
/// background so snapshots have no visible seams.
pub const REPORT_CSS: &str = r#"
:root {
    --cyber-bg: #050816;
    --cyber-card: #0d1117;
    --cyber-surface: #161b22;
    --cyber-border: #21262d;
    --cyber-accent: #58a6ff;
    --cyber-green: #3fb950;
    --cyber-yellow: #e3b341;
    --cyber-red: #f78166;
    --text-bright: #e6edf3;
    --text-dim: #8b949e;
    --font-mono: 'JetBrains Mono', ui-monospace, monospace;
}

* { box-sizing: border-box; }

body {
    margin: 0;
    background: var(--cyber-bg);
    color: var(--text-bright);
    font-family: system-ui, -apple-system, sans-serif;
    line-height: 1.5;
}

.app-main { max-width: 1280px; margin: 0 auto; padding: 32px 16px; }
.app-header { text-align: center; margin-bottom: 32px; }
.app-header h1 { font-size: 56px; font-weight: 900; margin: 0; }
.gradient-text {
    background: linear-gradient(90deg, #58a6ff, #bc8cff, #39d0d8);
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}
.muted { color: var(--text-dim); font-size: 13px; }
.results { display: flex; flex-direction: column; gap: 24px; }

.card {
    background: var(--cyber-card);
    border: 1px solid var(--cyber-border);
    border-radius: 12px;
    padding: 24px;
}
.card-header { display: flex; justify-content: space-between; align-items: center; }
.card-actions { display: flex; gap: 8px; }
.section-title { display: flex; align-items: center; gap: 8px; margin: 0 0 16px; font-size: 18px; }

.repo-title { display: flex; align-items: center; gap: 12px; }
.repo-title h2 { margin: 0; }
.repo-url { color: var(--cyber-accent); font-family: var(--font-mono); font-size: 13px; }

.tech-badge {
    display: inline-block;
    padding: 2px 10px;
    border-radius: 999px;
    border: 1px solid rgba(88, 166, 255, 0.3);
    background: rgba(88, 166, 255, 0.1);
    color: var(--cyber-accent);
    font-size: 12px;
    font-family: var(--font-mono);
}
.badge-row { display: flex; flex-wrap: wrap; gap: 6px; }

.score-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 16px; align-items: center; }
.score-gauge { display: flex; flex-direction: column; align-items: center; gap: 8px; }
.gauge-label { color: var(--text-dim); font-size: 13px; }
.score-stats { display: flex; flex-direction: column; gap: 8px; }
.summary-stat { display: flex; justify-content: space-between; gap: 12px; }
.stat-value { font-family: var(--font-mono); }
.stat-label { color: var(--text-dim); font-size: 13px; }

.summary-text { color: #c9d1d9; }
.architecture-box { background: var(--cyber-surface); border-radius: 8px; padding: 12px 16px; }
.feature-list li::marker { color: var(--cyber-accent); }

.tech-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 16px; }
.tech-card h4 { margin: 0 0 8px; color: var(--text-dim); font-size: 13px; text-transform: uppercase; }
.language-bar { display: flex; height: 8px; border-radius: 4px; overflow: hidden; margin-bottom: 8px; }
.dependency-list dt { color: var(--cyber-accent); font-size: 12px; }
.dependency-list dd { margin: 0 0 8px; font-family: var(--font-mono); font-size: 12px; color: var(--text-dim); }

.tab-bar { display: flex; gap: 8px; margin-bottom: 24px; padding-bottom: 16px; border-bottom: 1px solid var(--cyber-border); }
.tab-btn {
    padding: 8px 16px;
    border-radius: 8px;
    border: 1px solid transparent;
    background: none;
    color: var(--text-dim);
    cursor: pointer;
    font-size: 14px;
}
.tab-btn.active {
    background: rgba(88, 166, 255, 0.2);
    color: var(--cyber-accent);
    border-color: rgba(88, 166, 255, 0.3);
}
.tab-content { display: none; }
.tab-content.active { display: block; }

.diagram-stage { background: var(--cyber-surface); border-radius: 12px; padding: 16px; min-height: 200px; }
.diagram-graphic { display: flex; justify-content: center; }
.diagram-graphic svg { max-width: 100%; height: auto; }
.diagram-empty, .diagram-pending {
    display: flex; align-items: center; justify-content: center;
    padding: 48px 0; color: var(--text-dim); font-size: 14px;
}
.diagram-warning { display: flex; align-items: center; gap: 6px; color: var(--cyber-yellow); font-size: 12px; margin: 0 0 8px; }
.diagram-source {
    font-family: var(--font-mono);
    font-size: 12px;
    color: var(--text-dim);
    background: var(--cyber-card);
    padding: 12px;
    border-radius: 8px;
    white-space: pre-wrap;
    overflow-x: auto;
}
.source-toggle { margin-top: 16px; }
.source-toggle summary { display: flex; align-items: center; gap: 6px; color: var(--text-dim); font-size: 12px; cursor: pointer; }
.spinner {
    width: 16px; height: 16px; margin-right: 8px;
    border: 2px solid var(--cyber-border);
    border-top-color: var(--cyber-accent);
    border-radius: 50%;
    animation: spin 0.8s linear infinite;
}
@keyframes spin { to { transform: rotate(360deg); } }

.folder-tree {
    background: var(--cyber-surface);
    border-radius: 12px;
    padding: 16px;
    max-height: 384px;
    overflow: auto;
    font-family: var(--font-mono);
    font-size: 13px;
    white-space: pre;
}
.tree-line { line-height: 1.6; color: #c9d1d9; }
.tree-dir { color: var(--cyber-accent); }
.tree-file { color: var(--text-dim); }

.copy-btn, .collapse-btn {
    display: inline-flex; align-items: center; gap: 6px;
    padding: 6px 12px;
    font-size: 12px;
    color: var(--text-dim);
    background: var(--cyber-surface);
    border: 1px solid var(--cyber-border);
    border-radius: 8px;
    cursor: pointer;
}

.improvements-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 24px; }
.suggestion-list li, .risk-list li { margin-bottom: 8px; color: #c9d1d9; }
.risk { color: var(--cyber-red); }
.risk.low { color: var(--cyber-green); }

@media (max-width: 900px) {
    .score-grid, .tech-grid, .improvements-grid { grid-template-columns: 1fr; }
}
"#;

/// Content Security Policy for the standalone report.
///
/// Inline SVG from the diagram renderer needs no extra sources.
pub const CSP: &str = "default-src 'self'; img-src 'self' data: blob:; style-src 'self' 'unsafe-inline'; script-src 'self' 'unsafe-inline'; connect-src 'none'; font-src 'self' data:;";
