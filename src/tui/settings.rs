//! Centralized, hardcoded UI settings for the console interface.
//!
//! This is the single place to tweak the application name fragments,
//! divider glyph, and the truecolor palette used by the page sections.

use crate::tui::renderer::Rgb;

// ---------------------------------------------------------------------------
// Application name
// ---------------------------------------------------------------------------

/// First fragment of the two-tone title.
pub const APP_NAME_PRIMARY: &str = "Proximi";
/// Second fragment of the two-tone title.
pub const APP_NAME_ACCENT: &str = "Lock";
/// Combined display-name length, relied on by the centering math.
pub const APP_NAME_LEN: usize = 11;

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

pub const DIVIDER_SYMBOL: char = '-';
pub const HEADER_SEPARATOR: &str = " -- ";
pub const PAGE_LABEL_PREFIX: &str = "View: ";
pub const INDENT_1: &str = "  ";

/// Width assumed when the backend cannot report one.
pub const FALLBACK_COLUMNS: u16 = 100;

// ---------------------------------------------------------------------------
// Colors
// ---------------------------------------------------------------------------

pub const COLOR_TITLE_PRIMARY: Rgb = Rgb::new(173, 216, 230);
pub const COLOR_TITLE_ACCENT: Rgb = Rgb::new(128, 128, 128);
pub const COLOR_TITLE_DIVIDER: Rgb = Rgb::new(173, 216, 230);

pub const COLOR_HEADER_DATE: Rgb = Rgb::new(233, 116, 81);
pub const COLOR_HEADER_SEPARATOR: Rgb = Rgb::new(128, 128, 128);
pub const COLOR_HEADER_TIME: Rgb = Rgb::new(0, 255, 255);
pub const COLOR_NAV_INDICATOR: Rgb = Rgb::new(90, 90, 255);
pub const COLOR_PAGE_LABEL: Rgb = Rgb::new(0, 255, 0);

pub const COLOR_BODY_TEXT: Rgb = Rgb::new(220, 220, 220);
pub const COLOR_COMMAND_NAME: Rgb = Rgb::new(255, 214, 102);
pub const COLOR_FOOTER_TEXT: Rgb = Rgb::new(128, 128, 128);

pub const COLOR_WARNING: Rgb = Rgb::new(255, 196, 0);
pub const COLOR_COUNTDOWN: Rgb = Rgb::new(173, 216, 230);
