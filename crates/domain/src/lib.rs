//! Flamescore domain.
//!
//! The character model, its string-valued input buffer, the editor reducer,
//! and per-slot score calculation. Nothing here performs I/O.

pub mod editor;
pub mod entities;
pub mod error;
pub mod value_objects;

pub use editor::{reduce, EditorAction, EditorState, InputValues};
pub use entities::{Character, EquipmentSet, FlameSet, MultiplierSet};
pub use error::DomainError;
pub use value_objects::{
    format_number, parse_leaf, parse_number, EquipmentSlot, SkipUpdate, SlotTable, StatusKind,
    StatusTable,
};
