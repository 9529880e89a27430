//! Login page with the username form.

use crate::frontend::components::TextInput;
use crate::frontend::services::context::AuthState;

use dioxus::{events::KeyboardEvent, prelude::*};
use dioxus_router::use_navigator;
use std::time::Duration;
use tokio::time::sleep;

#[component]
pub fn LoginPage() -> Element {
    let nav = use_navigator();
    let auth = use_context::<AuthState>();
    let username = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut hide_ui = use_signal(|| false);

    let is_valid = move || AuthState::is_valid_username(&username.read());

    let mut submit = {
        let auth = auth.clone();
        move || {
            match auth.login(&username.read()) {
                Ok(()) => {
                    error.set(None);
                    hide_ui.set(true);
                    // Let the fade-out play before handing control
                    // back to the gate.
                    spawn(async move {
                        sleep(Duration::from_millis(700)).await;
                        nav.replace("/");
                    });
                }
                Err(e) => error.set(Some(e)),
            }
        }
    };

    let on_keypress = {
        let mut submit = submit.clone();
        move |e: KeyboardEvent| {
            if e.key() == Key::Enter && is_valid() {
                submit();
            }
        }
    };

    rsx! {
        main {
            class: if hide_ui() { "login fade-out" } else { "login fade-in" },
            div {
                class: "login-content",
                h1 { class: "welcome-text", "Welcome to Paperdock" }
                p { class: "login-hint", "Sign in to open your document dashboard." }
                div {
                    class: "login-form",
                    TextInput {
                        value: username,
                        placeholder: "Username",
                        max_length: 16,
                        onkeypress: on_keypress,
                    }
                    button {
                        class: "login-button",
                        disabled: !is_valid(),
                        onclick: move |_| submit(),
                        "Sign in"
                    }
                }
                if let Some(message) = error() {
                    p { class: "error-message", "{message}" }
                } else {
                    div { class: "error-message-placeholder" }
                }
            }
        }
    }
}
