//! Layout shell wrapping the authenticated pages.

use crate::frontend::app::Route;
use crate::frontend::services::context::AuthState;

use dioxus::prelude::*;
use dioxus_router::{components::Outlet, navigator};

#[component]
pub fn Shell() -> Element {
    let nav = navigator();
    let auth = use_context::<AuthState>();
    let mut show_ui = use_signal(|| false);

    use_effect(move || {
        spawn(async move {
            tokio::time::sleep(std::time::Duration::from_millis(100)).await;
            show_ui.set(true);
        });
    });

    // Direct entry without a session goes back through the login page.
    if !auth.is_authenticated() {
        nav.replace("/login");
        return rsx! { div {} };
    }

    rsx! {
        div {
            class: if show_ui() { "shell fade-in" } else { "shell" },
            header {
                class: "topbar",
                span { class: "brand", "Paperdock" }
            }
            main {
                class: "shell-content",
                Outlet::<Route> {}
            }
        }
    }
}
