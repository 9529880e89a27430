mod frontend;
mod session;

use crate::frontend::app::App;
use dioxus::LaunchBuilder;
use dioxus_desktop::{Config, LogicalSize, WindowBuilder};
use tracing_subscriber::EnvFilter;

fn main() {
    // Logging setup
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("info"))
        .init();

    let size = LogicalSize::new(1120.0, 760.0);

    let config = Config::default()
        .with_window(
            WindowBuilder::new()
                .with_title("Paperdock")
                .with_inner_size(size)
                .with_min_inner_size(size)
                .with_resizable(true),
        )
        .with_menu(None);

    LaunchBuilder::new().with_cfg(config).launch(App);
}
