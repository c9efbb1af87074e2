//! Tech stack cards - languages, frameworks, dependencies, databases

use crate::types::AnalysisResult;
use leptos::prelude::*;

fn language_color(lang: &str) -> &'static str {
    match lang {
        "Python" => "#3572A5",
        "JavaScript" => "#f1e05a",
        "TypeScript" => "#3178c6",
        "Rust" => "#dea584",
        "Go" => "#00ADD8",
        "Java" => "#b07219",
        "Ruby" => "#701516",
        "C++" => "#f34b7d",
        "C" => "#555555",
        "C#" => "#178600",
        "PHP" => "#4F5D95",
        "Kotlin" => "#A97BFF",
        "Swift" => "#F05138",
        "HTML" => "#e34c26",
        "CSS" => "#563d7c",
        _ => "#58a6ff",
    }
}

#[component]
fn BadgeList(items: Vec<String>, empty: &'static str) -> impl IntoView {
    if items.is_empty() {
        return view! { <p class="muted">{empty}</p> }.into_any();
    }
    view! {
        <div class="badge-row">
            {items.into_iter().map(|item| view! {
                <span class="tech-badge">{item}</span>
            }).collect::<Vec<_>>()}
        </div>
    }
    .into_any()
}

/// Cards summarising the detected technology stack
#[component]
pub fn TechStackCards(result: AnalysisResult) -> impl IntoView {
    // Equal-width segments, one per language, like the backend's ordering
    let segment = if result.languages.is_empty() {
        0.0
    } else {
        100.0 / result.languages.len() as f64
    };

    view! {
        <section class="card tech-grid" id="tech-stack">
            <div class="tech-card">
                <h4>"Languages"</h4>
                <div class="language-bar">
                    {result.languages.iter().map(|lang| view! {
                        <span
                            class="language-segment"
                            title=lang.clone()
                            style=format!("width:{:.2}%;background:{}", segment, language_color(lang))
                        ></span>
                    }).collect::<Vec<_>>()}
                </div>
                <BadgeList items=result.languages.clone() empty="None detected" />
            </div>

            <div class="tech-card">
                <h4>"Frameworks"</h4>
                <BadgeList items=result.frameworks.clone() empty="None detected" />
                {(!result.dependencies.is_empty()).then(|| view! {
                    <h4>"Dependencies"</h4>
                    <dl class="dependency-list">
                        {result.dependencies.iter().map(|(ecosystem, deps)| view! {
                            <dt>{ecosystem.clone()}</dt>
                            <dd>{deps.join(", ")}</dd>
                        }).collect::<Vec<_>>()}
                    </dl>
                })}
            </div>

            <div class="tech-card">
                <h4>"Databases"</h4>
                <BadgeList items=result.databases.clone() empty="None detected" />
            </div>
        </section>
    }
}
