//! Design tokens for the envswitch CLI.
//!
//! Design constraints:
//! - Only 5 semantic colors (`colors::*`)
//! - All status icons must be sourced from this module

use crossterm::style::Color;

pub mod colors {
    use super::Color;

    /// #22C55E
    pub const SUCCESS: Color = Color::Green;
    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #F59E0B
    pub const WARNING: Color = Color::Yellow;
    /// #06B6D4
    pub const INFO: Color = Color::Cyan;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const WARNING: &str = "⚠";
    pub const ARROW: &str = "↳";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const WARNING: &str = "[WARN]";
    pub const ARROW: &str = "[>]";
}

/// Status icon honoring the unicode capability.
pub fn success_icon(unicode: bool) -> &'static str {
    if unicode {
        icons::SUCCESS
    } else {
        icons_ascii::SUCCESS
    }
}

pub fn warning_icon(unicode: bool) -> &'static str {
    if unicode {
        icons::WARNING
    } else {
        icons_ascii::WARNING
    }
}

pub fn arrow_icon(unicode: bool) -> &'static str {
    if unicode {
        icons::ARROW
    } else {
        icons_ascii::ARROW
    }
}
