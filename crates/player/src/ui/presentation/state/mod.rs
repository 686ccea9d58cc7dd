//! State management for the presentation layer

mod editor_store;

pub use editor_store::{use_editor_store, EditorStore};
