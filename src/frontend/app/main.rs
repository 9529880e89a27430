//! Application routing system.

use crate::frontend::components::Shell;
use crate::frontend::pages::dashboard::DashboardPage;
use crate::frontend::pages::home::HomePage;
use crate::frontend::pages::login::LoginPage;
use crate::frontend::services::context::AuthState;

use dioxus::prelude::*;
use dioxus_router::{Routable, Router};

const STYLES: &str = include_str!("../../../assets/styles/main.css");

/// Root component: provides the auth context and mounts the router.
#[component]
pub fn App() -> Element {
    let auth = use_hook(AuthState::new);
    provide_context(auth);

    rsx! {
        style { dangerous_inner_html: STYLES }
        Router::<Route> {}
    }
}

#[component]
pub fn Home() -> Element {
    rsx! { HomePage {} }
}

#[component]
pub fn Login() -> Element {
    rsx! { LoginPage {} }
}

#[component]
pub fn Dashboard() -> Element {
    rsx! { DashboardPage {} }
}

/// Main routing enum for the application.
#[derive(Clone, Routable, Debug, PartialEq, Eq)]
pub enum Route {
    /// Session gate: redirects to the dashboard or the login page.
    #[route("/")]
    Home {},
    /// Login page.
    #[route("/login")]
    Login {},
    /// Document dashboard wrapped in the layout shell.
    #[layout(Shell)]
    #[route("/dashboard")]
    Dashboard {},
}
