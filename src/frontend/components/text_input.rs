//! Plain text input bound to a signal.

use dioxus::{events::KeyboardEvent, prelude::*};

#[derive(Props, Clone, PartialEq)]
pub struct TextInputProps {
    pub value: Signal<String>,
    pub placeholder: String,
    #[props(default = 64)]
    pub max_length: u32,
    pub onkeypress: EventHandler<KeyboardEvent>,
}

#[component]
pub fn TextInput(props: TextInputProps) -> Element {
    let TextInputProps {
        mut value,
        placeholder,
        max_length,
        onkeypress,
    } = props;

    rsx! {
        input {
            class: "text-input",
            r#type: "text",
            value: "{value()}",
            maxlength: "{max_length}",
            oninput: move |e| value.set(e.value()),
            onkeypress: move |e| onkeypress.call(e),
            placeholder: "{placeholder}",
            autofocus: true,
        }
    }
}
