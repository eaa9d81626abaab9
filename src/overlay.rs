//! The overlay surface itself.
//!
//! One decoration-less window registered with the compositor's
//! layer-shell, pinned to the bottom-right corner, hosting a single
//! CSS-targetable label. Construction is strictly ordered: the surface
//! must exist before layer-shell directives apply, and style providers
//! need a live display.

use std::path::Path;

use anyhow::{Result, bail};
use gtk4::gdk::Display;
use gtk4::prelude::*;
use gtk4::{
    Align, Application, ApplicationWindow, Box as GtkBox, CssProvider, Label, Orientation,
};
use gtk4_layer_shell::{Edge, KeyboardMode, Layer, LayerShell};
use tracing::{debug, info};

use crate::config::OverlayConfig;
use crate::constants::{app, style};
use crate::presentation::{BadgeLayer, Placement, display_text};

/// The single toplevel surface. Owns the toolkit window handle.
pub struct OverlayWindow {
    window: ApplicationWindow,
}

impl OverlayWindow {
    /// Build the placed, styled, text-bearing surface. Errors are
    /// environment precondition failures (no layer-shell, no display)
    /// or construction faults; the caller decides shutdown.
    pub fn build(
        application: &Application,
        config: &OverlayConfig,
        css_path: &Path,
    ) -> Result<Self> {
        let window = ApplicationWindow::builder()
            .application(application)
            .title(app::TITLE)
            .decorated(false)
            .resizable(false)
            .focusable(false)
            .build();

        apply_layer_shell(&window, &Placement::from_config(config))?;
        apply_stylesheet(css_path)?;
        window.set_child(Some(&build_content(config)));

        Ok(Self { window })
    }

    pub fn present(&self) {
        self.window.present();
    }
}

fn apply_layer_shell(window: &ApplicationWindow, placement: &Placement) -> Result<()> {
    if !gtk4_layer_shell::is_supported() {
        bail!("layer-shell is not supported in this environment");
    }

    window.init_layer_shell();
    window.set_layer(shell_layer(placement.layer));

    // Pin to the bottom-right corner regardless of output size.
    window.set_anchor(Edge::Bottom, true);
    window.set_anchor(Edge::Right, true);
    window.set_anchor(Edge::Top, false);
    window.set_anchor(Edge::Left, false);

    window.set_margin(Edge::Right, placement.margin_right);
    window.set_margin(Edge::Bottom, placement.margin_bottom);

    // The badge never receives keyboard focus or input.
    window.set_keyboard_mode(KeyboardMode::None);

    debug!(
        margin_right = placement.margin_right,
        margin_bottom = placement.margin_bottom,
        "layer-shell placement applied"
    );
    Ok(())
}

fn shell_layer(layer: BadgeLayer) -> Layer {
    match layer {
        BadgeLayer::Overlay => Layer::Overlay,
        BadgeLayer::Top => Layer::Top,
    }
}

/// Register a display-wide provider at application priority. A missing
/// stylesheet is tolerated (the provider stays empty); a missing
/// display is not.
fn apply_stylesheet(css_path: &Path) -> Result<()> {
    let provider = CssProvider::new();
    if css_path.exists() {
        provider.load_from_path(css_path);
        info!(path = %css_path.display(), "loaded stylesheet");
    }

    let Some(display) = Display::default() else {
        bail!("no display available");
    };

    gtk4::style_context_add_provider_for_display(
        &display,
        &provider,
        gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
    );
    Ok(())
}

fn build_content(config: &OverlayConfig) -> GtkBox {
    let container = GtkBox::new(Orientation::Vertical, 0);
    container.add_css_class(style::CONTAINER_CLASS);

    let label = Label::new(Some(display_text(config)));
    label.add_css_class(style::LABEL_CLASS);
    label.set_wrap(true);
    label.set_xalign(1.0);
    label.set_halign(Align::End);
    label.set_valign(Align::End);

    container.append(&label);
    container
}
