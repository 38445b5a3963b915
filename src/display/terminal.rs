//! Colour support detection

use std::io::IsTerminal;

/// Whether Markdown previews get terminal styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorChoice {
    Always,
    Never,
    /// Style only when stdout is a terminal
    Auto,
}

impl ColorChoice {
    /// Decide from NO_COLOR / CLICOLOR_FORCE / CLICOLOR, read through `var`
    pub fn from_env(var: impl Fn(&str) -> Option<String>) -> Self {
        // https://no-color.org/
        if var("NO_COLOR").is_some_and(|v| !v.is_empty()) {
            return ColorChoice::Never;
        }
        if var("CLICOLOR_FORCE").is_some_and(|v| v != "0") {
            return ColorChoice::Always;
        }
        if var("CLICOLOR").is_some_and(|v| v == "0") {
            return ColorChoice::Never;
        }
        ColorChoice::Auto
    }

    pub fn enabled(self) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => std::io::stdout().is_terminal(),
        }
    }
}

/// Determine if colors should be used for this process
pub fn should_use_colors() -> bool {
    ColorChoice::from_env(|name| std::env::var(name).ok()).enabled()
}
