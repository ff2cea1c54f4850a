//! Human-facing stderr output helpers

use crossterm::style::Stylize;

use crate::loader::ConfigWarning;
use crate::ui::terminal::TerminalCapabilities;
use crate::ui::theme;

/// Print unknown-key warnings from the strict loader.
pub fn print_config_warnings(warnings: &[ConfigWarning], caps: &TerminalCapabilities) {
    for w in warnings {
        let icon = theme::warning_icon(caps.supports_unicode);
        let icon = if caps.supports_color {
            format!("{}", icon.with(theme::colors::WARNING))
        } else {
            icon.to_string()
        };

        if let Some(line) = w.line {
            eprintln!("{icon} Unknown config key '{}' in {}:{}", w.key, w.file.display(), line);
        } else {
            eprintln!("{icon} Unknown config key '{}' in {}", w.key, w.file.display());
        }

        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?", suggestion);
        }
    }
}
