//! Terminal UI: theme tokens, capability detection, diff rendering

pub mod diff;
pub mod output;
pub mod terminal;
pub mod theme;

pub use diff::render_unified_diff_with_line_numbers;
pub use output::print_config_warnings;
pub use terminal::{detect_capabilities, TerminalCapabilities};
