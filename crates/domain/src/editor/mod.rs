//! Editor core - state, actions, the reducer, and the input buffer.

mod action;
mod input_values;
mod reducer;
mod state;

pub use action::EditorAction;
pub use input_values::{
    EquipmentInputValues, FlameInputValues, InputValues, MultiplierInputValues,
};
pub use reducer::reduce;
pub use state::EditorState;
