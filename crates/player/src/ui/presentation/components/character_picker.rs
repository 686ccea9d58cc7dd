//! Character picker - roster selection, add/delete, and the name field

use dioxus::prelude::*;
use flamescore_domain::EditorAction;

use super::BufferInput;
use crate::presentation::labels::{
    character_label, ADD_BUTTON, DELETE_BUTTON, NAME_PLACEHOLDER,
};
use crate::presentation::state::use_editor_store;

#[component]
pub fn CharacterPicker() -> Element {
    let mut store = use_editor_store();
    let state = store.snapshot();
    let selected = state.index();
    let name = state.current().name().to_string();

    rsx! {
        div {
            class: "toolbar",

            select {
                onchange: move |e: FormEvent| {
                    let raw = e.value();
                    match raw.parse::<usize>() {
                        Ok(index) => store.switch_character(index),
                        Err(err) => tracing::warn!("Ignoring character selection {:?}: {}", raw, err),
                    }
                },
                for (index, character) in state.characters().iter().enumerate() {
                    option {
                        key: "{index}",
                        value: "{index}",
                        selected: index == selected,
                        {character_label(index, character.name())}
                    }
                }
            }

            button {
                class: "add",
                onclick: move |_| store.dispatch(EditorAction::AddCharacter),
                "{ADD_BUTTON}"
            }
            button {
                class: "delete",
                onclick: move |_| store.dispatch(EditorAction::DeleteCharacter),
                "{DELETE_BUTTON}"
            }
        }

        div {
            BufferInput {
                class: "name",
                placeholder: NAME_PLACEHOLDER.to_string(),
                value: name,
                on_commit: move |value: String| store.dispatch(EditorAction::SetName { value }),
            }
        }
    }
}
