//! TTY detection and color support logic

use std::io::IsTerminal;

/// Determine if colors should be used based on environment and TTY status
pub fn should_use_colors() -> bool {
    // NO_COLOR set to any non-empty value disables colors (https://no-color.org/)
    if let Ok(val) = std::env::var("NO_COLOR") {
        if !val.is_empty() {
            return false;
        }
    }

    // Redirected output stays byte-clean
    std::io::stdout().is_terminal()
}
