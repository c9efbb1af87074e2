//! Improvement suggestions and security risks

use super::{Icon, ICON_LIGHTNING, ICON_WARNING_CIRCLE};
use leptos::prelude::*;

/// Marker phrases the backend uses for an all-clear risk entry.
const LOW_RISK_MARKERS: &[&str] = &["no major", "no significant"];

fn is_low_risk(risk: &str) -> bool {
    let lower = risk.to_lowercase();
    LOW_RISK_MARKERS.iter().any(|marker| lower.contains(marker))
}

/// Numbered suggestions next to the security risk list
#[component]
pub fn ImprovementsSection(suggestions: Vec<String>, risks: Vec<String>) -> impl IntoView {
    view! {
        <section class="card improvements-grid" id="improvements">
            <div>
                <h3 class="section-title">
                    <Icon path=ICON_LIGHTNING />
                    "Improvement Suggestions"
                </h3>
                {if suggestions.is_empty() {
                    view! { <p class="muted">"No suggestions available"</p> }.into_any()
                } else {
                    view! {
                        <ol class="suggestion-list">
                            {suggestions.into_iter().map(|item| view! { <li>{item}</li> }).collect::<Vec<_>>()}
                        </ol>
                    }.into_any()
                }}
            </div>
            <div>
                <h3 class="section-title">
                    <Icon path=ICON_WARNING_CIRCLE />
                    "Security Risks"
                </h3>
                {if risks.is_empty() {
                    view! { <p class="muted">"No security risks identified"</p> }.into_any()
                } else {
                    view! {
                        <ul class="risk-list">
                            {risks.into_iter().map(|risk| {
                                let class = if is_low_risk(&risk) { "risk low" } else { "risk" };
                                view! { <li class=class>{risk}</li> }
                            }).collect::<Vec<_>>()}
                        </ul>
                    }.into_any()
                }}
            </div>
        </section>
    }
}
