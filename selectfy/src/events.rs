//! Events produced by selection operations.

use serde::Serialize;

/// Fired after every selection-mutating operation.
///
/// Reflects the state after the mutation, not a diff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeEvent {
    /// Number of selected items.
    pub selected_count: usize,
    /// Selected indices, in container order.
    pub selected: Vec<usize>,
}

impl ChangeEvent {
    /// Build an event from the selected indices.
    pub fn new(selected: Vec<usize>) -> Self {
        Self {
            selected_count: selected.len(),
            selected,
        }
    }
}

/// Fired when the highlight cursor moves to a different item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HighlightMoveEvent {
    /// Previously highlighted item (None if nothing was highlighted).
    pub previous: Option<usize>,
    /// Newly highlighted item.
    pub current: usize,
}

/// Pending events to be dispatched after a gesture.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GestureEvents {
    pub selection_change: Option<ChangeEvent>,
    pub highlight_move: Option<HighlightMoveEvent>,
}

impl GestureEvents {
    /// Whether the gesture produced nothing to dispatch.
    pub fn is_empty(&self) -> bool {
        self.selection_change.is_none() && self.highlight_move.is_none()
    }
}
