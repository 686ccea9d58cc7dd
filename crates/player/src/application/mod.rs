//! Application layer - the editor session and its persistence bridge

pub mod editor_session;
pub mod persistence;

pub use editor_session::EditorSession;
pub use persistence::{load_state, save_state, PersistenceError};
