//! Presentation layer - Dioxus UI components and editor state wiring

pub mod components;
pub mod labels;
pub mod state;
