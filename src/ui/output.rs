//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show everything.
    #[default]
    Normal,
    /// Show command results only, no headers or notices.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows headers and notices.
    pub fn shows_status(&self) -> bool {
        matches!(self, Self::Normal)
    }
}
