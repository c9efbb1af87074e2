//! Basic report generation example.
//!
//! Run with: `cargo run --example basic_report`

use repovision_report::render_report;
use repovision_report::types::{AnalysisResult, DiagramPanel, ViewKey};

fn main() {
    let result = AnalysisResult {
        repo_name: "my-project".into(),
        repo_url: "https://github.com/acme/my-project".into(),
        summary: "A tiny example repository.".into(),
        languages: vec!["Rust".into()],
        complexity_score: 35,
        complexity_label: "Low".into(),
        code_quality_score: 82,
        file_count: 42,
        total_lines: 3_120,
        ..Default::default()
    };

    // No diagram compiler here - every panel shows its pending/unavailable state
    let panels: Vec<DiagramPanel> = ViewKey::ALL
        .into_iter()
        .map(|key| DiagramPanel::pending(key, result.mermaid_diagrams.get(key)))
        .collect();

    let html = render_report(&result, &panels);

    let output_path = "basic_report.html";
    std::fs::write(output_path, &html).expect("Failed to write report");

    println!("Report written to: {}", output_path);
    println!("HTML size: {} bytes", html.len());
}
