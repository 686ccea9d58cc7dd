//! Flame table - the multiplier row, one row of flames per slot, and each
//! slot's score.
//!
//! Inputs show the buffer text, not the numeric model, so half-typed values
//! stay on screen. Text typed through an IME reaches the reducer
//! once the composition ends. Scores always come from the numeric model.

use dioxus::prelude::*;
use flamescore_domain::{format_number, EditorAction, EquipmentSlot, StatusKind};

use super::BufferInput;
use crate::presentation::labels::{
    slot_label, status_label, MULTIPLIER_ROW, SCORE_COLUMN, SLOT_COLUMN,
};
use crate::presentation::state::use_editor_store;

#[component]
pub fn FlameTable() -> Element {
    let mut store = use_editor_store();
    let state = store.snapshot();
    let character = state.current();
    let buffer = state.input_values();

    rsx! {
        table {
            class: "flames",

            thead {
                tr {
                    th { "{SLOT_COLUMN}" }
                    for status in StatusKind::ALL {
                        th { key: "{status}", {status_label(status)} }
                    }
                    th { "{SCORE_COLUMN}" }
                }
            }

            tbody {
                tr {
                    class: "multipliers",
                    th { "{MULTIPLIER_ROW}" }
                    for status in StatusKind::ALL {
                        td {
                            key: "{status}",
                            BufferInput {
                                compact: true,
                                value: buffer.multiplier(status).to_string(),
                                on_commit: move |value: String| {
                                    store.dispatch(EditorAction::SetMultiplier { status, value })
                                },
                            }
                        }
                    }
                    td {}
                }

                for slot in EquipmentSlot::ALL {
                    tr {
                        key: "{slot}",
                        th { {slot_label(slot)} }
                        for status in StatusKind::ALL {
                            td {
                                key: "{status}",
                                BufferInput {
                                    compact: true,
                                    value: buffer.flame(slot, status).to_string(),
                                    on_commit: move |value: String| {
                                        store.dispatch(EditorAction::SetFlame { slot, status, value })
                                    },
                                }
                            }
                        }
                        td { class: "score", {format_number(character.score(slot))} }
                    }
                }
            }
        }
    }
}
