//! Tab navigation components

use crate::types::ViewKey;
use leptos::prelude::*;

/// Tab bar with one button per diagram view
#[component]
pub fn TabBar(scope: String, active: ViewKey) -> impl IntoView {
    view! {
        <div class="tab-bar" data-tab-scope=scope.clone()>
            {ViewKey::ALL.into_iter().map(|key| {
                let class = if key == active { "tab-btn active" } else { "tab-btn" };
                view! {
                    <button class=class data-tab=format!("{}-{}", scope, key.as_str())>
                        {key.label()}
                    </button>
                }
            }).collect::<Vec<_>>()}
        </div>
    }
}

/// Tab content panel
#[component]
pub fn TabContent(
    scope: String,
    view_key: ViewKey,
    active: bool,
    children: Children,
) -> impl IntoView {
    let class = if active { "tab-content active" } else { "tab-content" };
    let panel_id = format!("{}-{}", scope, view_key.as_str());

    view! {
        <div class=class data-tab-panel=panel_id>
            {children()}
        </div>
    }
}
