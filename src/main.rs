#![deny(unsafe_code)]

mod config;
mod constants;
mod overlay;
mod presentation;

use std::path::{Path, PathBuf};

use clap::Parser;
use gtk4::Application;
use gtk4::glib;
use gtk4::prelude::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use overlay::OverlayWindow;

#[derive(Parser)]
#[command(name = "waybadge")]
#[command(version)]
#[command(about = "Text overlay pinned to the bottom-right screen corner", long_about = None)]
struct Cli {
    /// Path to the JSON config (defaults to config.json next to the executable)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Path to the CSS stylesheet (defaults to style.css next to the executable)
    #[arg(long)]
    css: Option<PathBuf>,
}

fn main() -> glib::ExitCode {
    // Diagnostics go to stderr so a supervising service manager captures them.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config_path = cli
        .config
        .unwrap_or_else(|| sibling_path(constants::paths::CONFIG_FILENAME));
    let css_path = cli
        .css
        .unwrap_or_else(|| sibling_path(constants::paths::STYLE_FILENAME));

    let config = config::load(&config_path);
    info!(
        text = %config.text,
        margin_right = config.margin_right,
        margin_bottom = config.margin_bottom,
        "overlay config ready"
    );

    let application = Application::builder()
        .application_id(constants::app::ID)
        .build();

    // Single error boundary: any construction failure logs and quits,
    // never a panic, never a half-built window left presented.
    application.connect_activate(move |application| {
        match OverlayWindow::build(application, &config, &css_path) {
            Ok(window) => window.present(),
            Err(err) => {
                error!("startup failed: {err:#}");
                application.quit();
            }
        }
    });

    // clap already consumed the CLI; keep GTK away from it.
    application.run_with_args::<&str>(&[])
}

/// Resolve `file_name` next to the running executable, falling back to
/// the current directory when the executable path is unknown.
fn sibling_path(file_name: &str) -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(file_name)
}
