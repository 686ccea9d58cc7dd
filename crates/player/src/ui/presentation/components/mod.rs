//! Editor components

mod buffer_input;
mod character_picker;
mod flame_table;

pub use buffer_input::BufferInput;
pub use character_picker::CharacterPicker;
pub use flame_table::FlameTable;
