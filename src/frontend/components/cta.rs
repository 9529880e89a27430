//! Marketing call-to-action section shown under the document grid.

use dioxus::prelude::*;

const UPGRADE_URL: &str = "https://paperdock.example.com/pro";

#[component]
pub fn Cta() -> Element {
    rsx! {
        section {
            class: "cta",
            h2 { class: "cta-title", "Keep every document one click away" }
            p {
                class: "cta-text",
                "Paperdock Pro adds shared workspaces, offline copies and priority support."
            }
            button {
                class: "cta-button",
                onclick: move |_| {
                    if let Err(e) = webbrowser::open(UPGRADE_URL) {
                        tracing::warn!("failed to open {UPGRADE_URL}: {e}");
                    }
                },
                "Learn more"
            }
        }
    }
}
