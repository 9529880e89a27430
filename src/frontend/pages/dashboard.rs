//! Document dashboard: link cards plus the marketing section.

use crate::frontend::components::{Cta, DocCard};
use crate::frontend::services::context::AuthState;
use crate::frontend::services::documents::{self, DocumentLink};

use dioxus::prelude::*;
use dioxus_router::use_navigator;

#[component]
pub fn DashboardPage() -> Element {
    let nav = use_navigator();
    let auth = use_context::<AuthState>();

    let documents: Vec<DocumentLink> = use_hook(|| match documents::builtin() {
        Ok(documents) => documents,
        Err(e) => {
            tracing::error!("failed to load document catalog: {e:#}");
            Vec::new()
        }
    });

    let on_logout = {
        let auth = auth.clone();
        move |_| {
            auth.logout();
            nav.replace("/");
        }
    };

    rsx! {
        div {
            class: "dashboard",
            div {
                class: "dashboard-header",
                h1 { class: "dashboard-title", "Welcome back, {auth.get_username()}" }
                button {
                    class: "logout-button",
                    onclick: on_logout,
                    "Log out"
                }
            }
            if documents.is_empty() {
                p { class: "empty-state", "No documents available." }
            } else {
                div {
                    class: "doc-grid",
                    for document in documents {
                        DocCard { document }
                    }
                }
            }
            Cta {}
        }
    }
}
