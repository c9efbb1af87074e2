//! Score section - circular SVG gauges for complexity and code quality

use super::{Icon, ICON_SQUARES_FOUR};
use crate::types::AnalysisResult;
use leptos::prelude::*;

/// Gauge colour for the complexity score (higher is worse).
pub fn complexity_color(score: u8) -> &'static str {
    match score {
        80.. => "#f78166",
        60..=79 => "#e3b341",
        40..=59 => "#58a6ff",
        _ => "#3fb950",
    }
}

/// Gauge colour for the code quality score (higher is better).
pub fn quality_color(score: u8) -> &'static str {
    match score {
        80.. => "#3fb950",
        60..=79 => "#58a6ff",
        40..=59 => "#e3b341",
        _ => "#f78166",
    }
}

/// Format a count with thousands separators (`12345` -> `"12,345"`).
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Circular gauge displaying a 0-100 score
#[component]
pub fn ScoreGauge(score: u8, label: String, color: &'static str) -> impl IntoView {
    let score = score.min(100);

    // Circle parameters: center (40,40), radius 35
    let radius = 35.0_f64;
    let circumference = 2.0 * std::f64::consts::PI * radius;
    let dash_offset = circumference - (score as f64 / 100.0) * circumference;

    view! {
        <div class="score-gauge">
            <svg viewBox="0 0 80 80" width="80" height="80" class="gauge-svg">
                <circle
                    cx="40"
                    cy="40"
                    r={radius.to_string()}
                    fill="none"
                    stroke="#21262d"
                    stroke-width="6"
                />
                <circle
                    cx="40"
                    cy="40"
                    r={radius.to_string()}
                    fill="none"
                    stroke={color}
                    stroke-width="6"
                    stroke-linecap="round"
                    stroke-dasharray={circumference.to_string()}
                    stroke-dashoffset={dash_offset.to_string()}
                    transform="rotate(-90 40 40)"
                />
                <text
                    x="40"
                    y="40"
                    text-anchor="middle"
                    dominant-baseline="middle"
                    fill={color}
                    font-size="20"
                    font-weight="700"
                >
                    {score.to_string()}
                </text>
            </svg>
            <div class="gauge-label">{label}</div>
        </div>
    }
}

/// Repository scores and size statistics
#[component]
pub fn ScoreSection(result: AnalysisResult) -> impl IntoView {
    let complexity = result.complexity();
    let quality = result.code_quality();
    let complexity_label = if result.complexity_label.is_empty() {
        "Complexity".to_string()
    } else {
        format!("Complexity \u{00B7} {}", result.complexity_label)
    };

    view! {
        <section class="card" id="scores">
            <h3 class="section-title">
                <Icon path=ICON_SQUARES_FOUR />
                "Repository Scores"
            </h3>
            <div class="score-grid">
                <ScoreGauge score=complexity label=complexity_label color=complexity_color(complexity) />
                <ScoreGauge score=quality label="Code Quality".to_string() color=quality_color(quality) />
                <div class="score-stats">
                    <div class="summary-stat">
                        <span class="stat-value">{format_thousands(result.file_count)}</span>
                        <span class="stat-label">"Files"</span>
                    </div>
                    <div class="summary-stat">
                        <span class="stat-value">{format_thousands(result.total_lines)}</span>
                        <span class="stat-label">"Lines of code"</span>
                    </div>
                    <div class="summary-stat">
                        <span class="stat-value">{result.primary_language.clone()}</span>
                        <span class="stat-label">"Primary language"</span>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_separator() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1_000), "1,000");
        assert_eq!(format_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn colors_follow_score_bands() {
        assert_eq!(complexity_color(85), "#f78166");
        assert_eq!(complexity_color(10), "#3fb950");
        assert_eq!(quality_color(85), "#3fb950");
        assert_eq!(quality_color(40), "#e3b341");
    }
}
