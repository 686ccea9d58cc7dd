use dioxus::prelude::*;

use crate::application::EditorSession;

pub mod presentation;

use presentation::components::{CharacterPicker, FlameTable};
use presentation::state::EditorStore;

/// Stylesheet for the editor; injected into the page head on desktop and
/// rendered inline in the browser.
pub const EDITOR_CSS: &str = r#"
body { font-family: sans-serif; margin: 0.5rem; }
.toolbar { display: flex; flex-direction: row; gap: 0.25rem; }
.toolbar button { border: 0; border-radius: 0.25rem; padding: 0.25rem 0.5rem; cursor: pointer; }
.toolbar .add { background: #5e81ac; color: #eceff4; }
.toolbar .delete { background: #bf616a; color: #eceff4; }
input.name { margin: 0.25rem 0; padding: 0 0.5rem; }
table.flames { border-collapse: collapse; }
table.flames th, table.flames td { padding: 0 0.5rem; text-align: left; }
table.flames tbody tr:nth-child(odd) { background: #eceff4; }
table.flames input { width: 100%; border: 0; background: transparent; }
table.flames .score { text-align: right; }
"#;

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    // Provided by the composition root (see `crates/player/src/runner.rs`).
    let session = use_context::<EditorSession>();

    // Must be created inside an active Dioxus runtime.
    use_context_provider(move || EditorStore::new(session));

    rsx! {
        if cfg!(target_arch = "wasm32") {
            style { "{EDITOR_CSS}" }
        }

        div {
            class: "editor",
            CharacterPicker {}
            FlameTable {}
        }
    }
}
