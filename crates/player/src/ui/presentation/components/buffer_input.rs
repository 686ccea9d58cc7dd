//! Text input that holds back IME composition
//!
//! While an input method is composing (kana to kanji, for instance), the
//! browser fires `input` for every intermediate string. Those are buffered
//! here and only the composed text is passed on when composition ends.

use dioxus::prelude::*;

/// Tracks whether an IME composition is in progress
#[derive(Debug, Default)]
struct CompositionGate {
    composing: bool,
    pending: Option<String>,
}

impl CompositionGate {
    fn start(&mut self) {
        self.composing = true;
    }

    /// The value to commit now, if any
    fn input(&mut self, value: String) -> Option<String> {
        if self.composing {
            self.pending = Some(value);
            None
        } else {
            Some(value)
        }
    }

    /// Close the composition, releasing the last value it produced
    fn end(&mut self) -> Option<String> {
        self.composing = false;
        self.pending.take()
    }
}

/// Props for the BufferInput component
#[derive(Props, Clone, PartialEq)]
pub struct BufferInputProps {
    /// Text shown in the field
    pub value: String,
    /// Called with the field text on every committed edit
    pub on_commit: EventHandler<String>,
    #[props(default)]
    pub class: String,
    #[props(default)]
    pub placeholder: String,
    /// Shrink to the table cell instead of the default width
    #[props(default = false)]
    pub compact: bool,
}

#[component]
pub fn BufferInput(props: BufferInputProps) -> Element {
    let mut gate = use_signal(CompositionGate::default);
    let on_commit = props.on_commit;
    let size = if props.compact { "1" } else { "20" };

    rsx! {
        input {
            class: "{props.class}",
            r#type: "text",
            size: size,
            placeholder: "{props.placeholder}",
            value: "{props.value}",
            oncompositionstart: move |_| gate.write().start(),
            oncompositionend: move |_| {
                let committed = gate.write().end();
                if let Some(text) = committed {
                    on_commit.call(text);
                }
            },
            oninput: move |e: FormEvent| {
                let committed = gate.write().input(e.value());
                if let Some(text) = committed {
                    on_commit.call(text);
                }
            },
        }
    }
}
