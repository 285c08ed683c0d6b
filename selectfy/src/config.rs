//! Controller and adapter configuration.

use serde::{Deserialize, Serialize};

use crate::error::SelectError;

/// Per-controller gesture configuration.
///
/// Fixed for the lifetime of a controller. Disabled gestures degrade
/// gracefully: a ctrl-click with `ctrl_select` off behaves like a plain click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectConfig {
    /// Enable the shift-click range gesture.
    pub shift_select: bool,

    /// Enable the ctrl-click toggle gesture.
    pub ctrl_select: bool,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            shift_select: true,
            ctrl_select: true,
        }
    }
}

impl SelectConfig {
    /// Create a config with every gesture enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the shift-click range gesture.
    pub fn shift_select(mut self, enabled: bool) -> Self {
        self.shift_select = enabled;
        self
    }

    /// Enable or disable the ctrl-click toggle gesture.
    pub fn ctrl_select(mut self, enabled: bool) -> Self {
        self.ctrl_select = enabled;
        self
    }

    /// Single selection only: plain clicks, no toggle, no range.
    pub fn single() -> Self {
        Self {
            shift_select: false,
            ctrl_select: false,
        }
    }
}

/// Names an item-source adapter uses to store and find marks.
///
/// The core never reads these; they tell an adapter which entries are
/// selectable and how the two marks are represented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Marks {
    /// Criterion an entry must match to become an item.
    pub selectable: String,

    /// Mark identifier for selected items.
    pub selected_class: String,

    /// Mark identifier for the highlighted item.
    pub highlight_class: String,
}

impl Default for Marks {
    fn default() -> Self {
        Self {
            selectable: "selectable".to_string(),
            selected_class: "selected".to_string(),
            highlight_class: "highlighted".to_string(),
        }
    }
}

impl Marks {
    /// Check that every name is usable and that the two marks differ.
    pub fn validate(&self) -> Result<(), SelectError> {
        for (field, value) in [
            ("selectable", &self.selectable),
            ("selected_class", &self.selected_class),
            ("highlight_class", &self.highlight_class),
        ] {
            if value.trim().is_empty() {
                return Err(SelectError::InvalidConfig(format!("{field} must not be empty")));
            }
        }
        if self.selected_class == self.highlight_class {
            return Err(SelectError::InvalidConfig(format!(
                "selected_class and highlight_class are both '{}'",
                self.selected_class
            )));
        }
        Ok(())
    }
}
