//! Two-state toggle with a label per state.

/// A boolean flag paired with the label to show in each state.
///
/// Typically bound to a control such as "show password": the label describes
/// what pressing the control will do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toggle {
    /// Whether the toggle is on
    on: bool,
    /// Label shown while on
    on_label: String,
    /// Label shown while off
    off_label: String,
}

impl Default for Toggle {
    fn default() -> Self {
        Self::new("on", "off")
    }
}

impl Toggle {
    /// Create a toggle that starts off.
    pub fn new(on_label: impl Into<String>, off_label: impl Into<String>) -> Self {
        Self {
            on: false,
            on_label: on_label.into(),
            off_label: off_label.into(),
        }
    }

    /// Check if the toggle is on.
    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Set the state explicitly.
    pub fn set(&mut self, on: bool) {
        self.on = on;
    }

    /// Flip the state, returning the new one.
    pub fn toggle(&mut self) -> bool {
        self.on = !self.on;
        self.on
    }

    /// Label for the current state.
    pub fn label(&self) -> &str {
        if self.on {
            &self.on_label
        } else {
            &self.off_label
        }
    }

    /// Replace both labels, keeping the state.
    pub fn set_labels(&mut self, on_label: impl Into<String>, off_label: impl Into<String>) {
        self.on_label = on_label.into();
        self.off_label = off_label.into();
    }
}
