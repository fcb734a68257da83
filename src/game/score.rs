//! Score tracking
//!
//! Keeps the tally and its display string together, updated in the same
//! call, so the HUD can never show a stale value.

/// Collected-coin tally plus the pre-formatted HUD label.
/// The only way the value moves is `increment`, so it never goes down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Score {
    value: u32,
    label: String,
}

impl Score {
    pub fn new() -> Self {
        Self {
            value: 0,
            label: format_label(0),
        }
    }

    /// Count one collected coin and refresh the label
    pub fn increment(&mut self) {
        self.value += 1;
        self.label = format_label(self.value);
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// Text shown by the HUD, e.g. "Score: 3"
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Default for Score {
    fn default() -> Self {
        Self::new()
    }
}

fn format_label(value: u32) -> String {
    format!("Score: {}", value)
}
