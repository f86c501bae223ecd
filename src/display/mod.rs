//! Terminal display module
//!
//! Color styling behind an explicit Styler value computed once at startup,
//! so no module-global color flag exists anywhere in the program.

mod terminal;

pub use terminal::should_use_colors;

use colored::Colorize;

/// Applies ANSI colors when enabled, passes text through unchanged otherwise
#[derive(Debug, Clone, Copy)]
pub struct Styler {
    enabled: bool,
}

impl Styler {
    /// Build a styler from the startup color decision
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn yellow(&self, text: &str) -> String {
        if self.enabled {
            text.yellow().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn cyan(&self, text: &str) -> String {
        if self.enabled {
            text.cyan().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn green(&self, text: &str) -> String {
        if self.enabled {
            text.green().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn magenta(&self, text: &str) -> String {
        if self.enabled {
            text.magenta().to_string()
        } else {
            text.to_string()
        }
    }
}
