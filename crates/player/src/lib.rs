//! Flamescore player crate.
//!
//! This crate contains the editor UI, the editor session, and the platform
//! storage adapters. Multi-platform support is provided via compile-time
//! `cfg` selection.

pub mod application;
pub mod infrastructure;
pub mod ports;
pub mod runner;
pub mod ui;

// Root-level alias so components can write `crate::presentation::...`.
pub use ui::presentation;

// Re-export commonly used entrypoints
pub use application::EditorSession;
pub use ui::app;
