//! Mapping from the loaded config to window placement and content.
//!
//! Kept free of toolkit types so the translation is testable without a
//! compositor; `overlay` applies the result to the real surface.

use crate::config::OverlayConfig;
use crate::constants::defaults;

/// Compositing layer the badge requests from the compositor.
///
/// `Overlay` stacks above fullscreen surfaces; `Top` is the fallback
/// for layer-shell builds that do not offer the overlay layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeLayer {
    Overlay,
    Top,
}

/// Protocol-level placement derived from the config: bottom-right
/// anchoring with per-edge pixel margins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub layer: BadgeLayer,
    pub margin_right: i32,
    pub margin_bottom: i32,
}

impl Placement {
    pub fn from_config(config: &OverlayConfig) -> Self {
        Self {
            layer: preferred_layer(),
            margin_right: config.margin_right,
            margin_bottom: config.margin_bottom,
        }
    }
}

/// The GTK4 layer-shell binding exposes the overlay layer on every
/// protocol version it supports; flip this if a build ever lacks it.
const OVERLAY_LAYER_AVAILABLE: bool = true;

/// Overlay when the extension offers it, Top as the fallback.
fn preferred_layer() -> BadgeLayer {
    if OVERLAY_LAYER_AVAILABLE {
        BadgeLayer::Overlay
    } else {
        BadgeLayer::Top
    }
}

/// Effective label text: the trimmed config text, or the placeholder
/// when trimming leaves nothing.
pub fn display_text(config: &OverlayConfig) -> &str {
    let trimmed = config.text.trim();
    if trimmed.is_empty() {
        defaults::TEXT
    } else {
        trimmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(text: &str, margin_right: i32, margin_bottom: i32) -> OverlayConfig {
        OverlayConfig {
            text: text.to_string(),
            margin_right,
            margin_bottom,
        }
    }

    #[test]
    fn margins_pass_through_unchanged() {
        let placement = Placement::from_config(&config("hi", 10, 5));

        assert_eq!(placement.margin_right, 10);
        assert_eq!(placement.margin_bottom, 5);
    }

    #[test]
    fn layer_preference_is_overlay() {
        let placement = Placement::from_config(&OverlayConfig::default());

        assert_eq!(placement.layer, BadgeLayer::Overlay);
    }

    #[test]
    fn whitespace_only_text_shows_placeholder() {
        assert_eq!(display_text(&config("   ", 24, 24)), defaults::TEXT);
        assert_eq!(display_text(&config("", 24, 24)), defaults::TEXT);
    }

    #[test]
    fn padded_text_is_trimmed() {
        assert_eq!(display_text(&config("  status ok \n", 24, 24)), "status ok");
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(display_text(&config("3 builds queued", 24, 24)), "3 builds queued");
    }
}
