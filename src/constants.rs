//! Application-wide constants
//!
//! Single source of truth for default values and identifiers used
//! throughout the overlay.

/// GTK application identity
pub mod app {
    /// GApplication id (must be a valid D-Bus name)
    pub const ID: &str = "org.waybadge.Waybadge";

    /// Window title; layer surfaces carry no title bar, but
    /// compositors show this in window lists
    pub const TITLE: &str = "waybadge";
}

/// Default configuration values used when a config field is missing
pub mod defaults {
    /// Placeholder label text
    pub const TEXT: &str = "Overlay is running";

    /// Margin from the right screen edge in pixels
    pub const MARGIN_RIGHT: i32 = 24;

    /// Margin from the bottom screen edge in pixels
    pub const MARGIN_BOTTOM: i32 = 24;
}

/// Input files resolved next to the executable unless overridden
pub mod paths {
    /// Configuration filename
    pub const CONFIG_FILENAME: &str = "config.json";

    /// Stylesheet filename
    pub const STYLE_FILENAME: &str = "style.css";
}

/// CSS class names exposed for external stylesheet targeting
pub mod style {
    /// Class carried by the outer vertical box
    pub const CONTAINER_CLASS: &str = "overlay-container";

    /// Class carried by the text label
    pub const LABEL_CLASS: &str = "overlay-label";
}
