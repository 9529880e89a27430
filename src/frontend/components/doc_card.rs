//! Document-link card for the dashboard grid.

use crate::frontend::services::documents::DocumentLink;

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct DocCardProps {
    pub document: DocumentLink,
}

#[component]
pub fn DocCard(props: DocCardProps) -> Element {
    let document = props.document;
    let open_link = {
        let href = document.href.clone();
        move |_| {
            if let Err(e) = webbrowser::open(&href) {
                tracing::warn!("failed to open {href}: {e}");
            }
        }
    };

    rsx! {
        div {
            class: "doc-card",
            onclick: open_link,
            h3 { class: "doc-card-title", "{document.title}" }
            p { class: "doc-card-description", "{document.description}" }
            if let Some(tag) = &document.tag {
                span { class: "doc-card-tag", "{tag}" }
            }
        }
    }
}
