//! Folder structure card

use super::{Icon, ICON_COPY, ICON_FOLDER};
use crate::types::{EntryKind, FolderEntry};
use leptos::prelude::*;

/// Annotated folder tree, one line per entry
#[component]
pub fn FolderTree(entries: Vec<FolderEntry>, raw: String) -> impl IntoView {
    let count = entries.len();

    view! {
        <section class="card" id="folder-tree">
            <div class="card-header">
                <h3 class="section-title">
                    <Icon path=ICON_FOLDER />
                    "Folder Structure"
                    <span class="muted">{format!("({} entries)", count)}</span>
                </h3>
                <div class="card-actions">
                    <button class="copy-btn" data-copy=raw>
                        <Icon path=ICON_COPY size="14" />
                        "Copy"
                    </button>
                    <button class="collapse-btn" data-collapse="folder-tree-body">"Collapse"</button>
                </div>
            </div>
            <div class="folder-tree" id="folder-tree-body">
                {entries.into_iter().map(|entry| {
                    let class = match entry.kind {
                        EntryKind::Directory => "tree-line tree-dir",
                        EntryKind::File => "tree-line tree-file",
                        EntryKind::Other => "tree-line",
                    };
                    view! { <div class=class>{entry.line}</div> }
                }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}
