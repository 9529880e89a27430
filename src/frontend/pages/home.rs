//! Home page: hosts the session gate and renders nothing itself.

use crate::frontend::services::context::AuthState;
use crate::frontend::services::navigation::RouterNavigator;
use crate::session::SessionGate;

use dioxus::prelude::*;
use dioxus_router::use_navigator;
use std::rc::Rc;

#[component]
pub fn HomePage() -> Element {
    let nav = use_navigator();
    let auth = use_context::<AuthState>();

    // The gate lives in the hook so it is mounted once and dropped
    // with the component; unmounting tears the subscription down.
    use_hook(move || {
        let gate = SessionGate::mount(&auth.store, Rc::new(RouterNavigator::new(nav)));
        if let Err(e) = &gate {
            tracing::error!("redirect from home failed: {e}");
        }
        Rc::new(gate.ok())
    });

    rsx! { div {} }
}
