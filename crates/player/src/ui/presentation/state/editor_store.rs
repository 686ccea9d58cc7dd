//! Editor store
//!
//! Wraps the [`EditorSession`] in a Signal so every dispatch re-renders the
//! components that read it.

use dioxus::prelude::*;
use flamescore_domain::{EditorAction, EditorState};

use crate::application::EditorSession;

/// Handle to the editor session, shared through Dioxus context
#[derive(Clone, Copy)]
pub struct EditorStore {
    session: Signal<EditorSession>,
}

impl EditorStore {
    /// Create the store; must be called inside an active Dioxus runtime
    pub fn new(session: EditorSession) -> Self {
        Self {
            session: Signal::new(session),
        }
    }

    /// Current state, subscribing the calling component to changes
    pub fn snapshot(&self) -> EditorState {
        self.session.read().state().clone()
    }

    pub fn dispatch(&mut self, action: EditorAction) {
        self.session.write().dispatch(action);
    }

    /// Switch only if `index` names an existing character
    pub fn switch_character(&mut self, index: usize) {
        self.session.write().switch_character(index);
    }
}

/// Hook to access the EditorStore from Dioxus context
pub fn use_editor_store() -> EditorStore {
    use_context::<EditorStore>()
}
