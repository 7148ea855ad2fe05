mod app;
mod domain;
mod infra;
mod platform;
#[cfg(test)]
mod tests;
mod ui;
mod usecase;

use app::App;
use platform::desktop::{default_webview_data_dir, WINDOW_TITLE};

fn main() {
    if let Err(err) = dioxus::logger::init(tracing::Level::INFO) {
        eprintln!("logger already initialised: {err}");
    }

    let mut desktop = dioxus::desktop::Config::new()
        .with_window(dioxus::desktop::WindowBuilder::new().with_title(WINDOW_TITLE));
    match default_webview_data_dir() {
        Ok(dir) => desktop = desktop.with_data_directory(dir),
        Err(err) => tracing::warn!("using default WebView data directory: {err:#}"),
    }

    dioxus::LaunchBuilder::desktop().with_cfg(desktop).launch(App);
}
