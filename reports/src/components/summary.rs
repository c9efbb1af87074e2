//! Summary card - narrative summary, architecture and detected features

use super::{Icon, ICON_ROBOT};
use crate::types::AnalysisResult;
use leptos::prelude::*;

/// Narrative summary with architecture explanation and feature list
#[component]
#[allow(clippy::unit_arg, clippy::unused_unit)]
pub fn SummaryCard(result: AnalysisResult) -> impl IntoView {
    let has_architecture = !result.architecture_explanation.is_empty();
    let has_features = !result.features.is_empty();

    view! {
        <section class="card" id="summary">
            <h3 class="section-title">
                <Icon path=ICON_ROBOT />
                "AI Summary"
            </h3>
            <p class="summary-text">{result.summary.clone()}</p>

            {has_architecture.then(|| view! {
                <div class="architecture-box">
                    <span class="tech-badge">{result.architecture_type.clone()}</span>
                    <p>{result.architecture_explanation.clone()}</p>
                </div>
            })}

            {has_features.then(|| view! {
                <h4>"Key Features"</h4>
                <ul class="feature-list">
                    {result.features.iter().map(|feature| view! {
                        <li>{feature.clone()}</li>
                    }).collect::<Vec<_>>()}
                </ul>
            })}
        </section>
    }
}
