//! Visual theme and styling.

use console::Style;

/// Gatelint's visual theme.
///
/// Styles are bound to their stream so color is dropped automatically when
/// stdout/stderr is not an interactive terminal.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Style for the final success line (green).
    pub success: Style,
    /// Style for error lines (red bold).
    pub error: Style,
    /// Style for section headers in dumps (bold).
    pub header: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for highlighted values (bold).
    pub highlight: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green().for_stdout(),
            error: Style::new().red().bold().for_stderr(),
            header: Style::new().bold().for_stdout(),
            dim: Style::new().dim().for_stdout(),
            highlight: Style::new().bold().for_stdout(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_styles_apply_without_panicking() {
        let theme = Theme::new();
        let _ = format!("{}", theme.success.apply_to("Syntax OK!"));
        let _ = format!("{}", theme.error.apply_to("ERROR"));
    }
}
