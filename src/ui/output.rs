//! Output mode and writer.

use crate::ui::theme::Theme;

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Announce every stage.
    #[default]
    Normal,
    /// Final status and errors only.
    Quiet,
}

/// Writer for pipeline output that respects the output mode.
///
/// Stage announcements and the success line go to stdout; error lines go to
/// stderr and are never suppressed.
#[derive(Debug, Default)]
pub struct Output {
    mode: OutputMode,
    theme: Theme,
}

impl Output {
    /// Create a new output writer.
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            theme: Theme::new(),
        }
    }

    /// Get the output mode.
    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Announce a pipeline stage.
    pub fn status(&self, msg: &str) {
        if self.mode == OutputMode::Normal {
            println!("{}", msg);
        }
    }

    /// Report full success.
    pub fn success(&self, msg: &str) {
        println!("{}", self.theme.success.apply_to(msg));
    }

    /// Report an error line.
    pub fn error(&self, msg: &str) {
        eprintln!("{}", self.theme.error.apply_to(msg));
    }
}
