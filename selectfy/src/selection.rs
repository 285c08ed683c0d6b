//! The selection state machine.
//!
//! [`SelectionController`] tracks a pivot (anchor for range selection) and a
//! highlight (focus cursor) over an [`ItemSource`], and turns click gestures
//! into selection changes:
//!
//! | modifiers    | effect                                                    |
//! |--------------|-----------------------------------------------------------|
//! | none         | select only the clicked item, pivot moves to it           |
//! | ctrl + shift | move the highlight only                                   |
//! | ctrl         | toggle the clicked item, pivot moves to it                |
//! | shift        | select exactly the range between pivot and clicked item   |

use log::{debug, trace};

use crate::config::SelectConfig;
use crate::error::SelectError;
use crate::events::{ChangeEvent, GestureEvents, HighlightMoveEvent};
use crate::source::ItemSource;

/// Modifier keys held during a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub shift: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Default::default()
        }
    }

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Default::default()
        }
    }

    pub fn ctrl_shift() -> Self {
        Self {
            ctrl: true,
            shift: true,
        }
    }

    /// Drop modifiers whose gesture is disabled in `config`.
    pub fn gated(self, config: &SelectConfig) -> Self {
        Self {
            ctrl: self.ctrl && config.ctrl_select,
            shift: self.shift && config.shift_select,
        }
    }
}

/// Selection state for one container.
///
/// Owns its item source so that the selected and highlighted marks can only
/// change through the operations below.
#[derive(Debug, Clone)]
pub struct SelectionController<S: ItemSource> {
    source: S,
    config: SelectConfig,
    /// Anchor for range selection.
    pivot: Option<usize>,
    /// Most recently interacted item.
    highlight: Option<usize>,
}

impl<S: ItemSource> SelectionController<S> {
    /// Bind a controller to `source`.
    ///
    /// Existing selected marks are kept. An existing highlighted mark becomes
    /// the highlight; the pivot starts unset.
    pub fn new(source: S, config: SelectConfig) -> Self {
        let highlight = source.highlighted_index();
        Self {
            source,
            config,
            pivot: None,
            highlight,
        }
    }

    /// The configuration this controller was created with.
    pub fn config(&self) -> &SelectConfig {
        &self.config
    }

    /// Read-only access to the item source, for rendering.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Number of items in the container.
    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    /// Anchor item for range selection.
    pub fn pivot(&self) -> Option<usize> {
        self.pivot
    }

    /// Highlighted item.
    pub fn highlight(&self) -> Option<usize> {
        self.highlight
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Selected indices, in container order.
    pub fn selected(&self) -> Vec<usize> {
        self.source.selected_indices()
    }

    /// Number of selected items.
    pub fn count(&self) -> usize {
        (0..self.source.len())
            .filter(|&i| self.source.is_selected(i))
            .count()
    }

    /// Check if an index is selected.
    pub fn is_selected(&self, index: usize) -> bool {
        self.source.is_selected(index)
    }

    // -------------------------------------------------------------------------
    // Bulk operations
    // -------------------------------------------------------------------------

    /// Select every item. Pivot and highlight are left untouched.
    pub fn select_all(&mut self) -> ChangeEvent {
        for index in 0..self.source.len() {
            self.source.set_selected(index, true);
        }
        debug!("select all: {} items", self.source.len());
        self.change_event()
    }

    /// Clear the selection. Pivot and highlight are left untouched.
    pub fn unselect_all(&mut self) -> ChangeEvent {
        for index in 0..self.source.len() {
            self.source.set_selected(index, false);
        }
        debug!("unselect all");
        self.change_event()
    }

    // -------------------------------------------------------------------------
    // Gestures
    // -------------------------------------------------------------------------

    /// Apply a click on `index` with the given modifiers.
    ///
    /// Modifiers for disabled gestures are ignored. Every branch except
    /// ctrl+shift reports a selection change; ctrl+shift only moves the
    /// highlight.
    pub fn handle_gesture(
        &mut self,
        index: usize,
        modifiers: Modifiers,
    ) -> Result<GestureEvents, SelectError> {
        let len = self.source.len();
        if index >= len {
            return Err(SelectError::ItemOutOfRange { index, len });
        }

        let Modifiers { ctrl, shift } = modifiers.gated(&self.config);
        trace!("gesture on {index}: ctrl={ctrl} shift={shift}");

        let mut events = GestureEvents::default();

        if ctrl && shift {
            events.highlight_move = self.apply_highlight(index);
            return Ok(events);
        }

        if ctrl {
            self.toggle(index);
        } else if shift {
            self.select_range(index);
        } else {
            self.select_only(index);
        }

        events.highlight_move = self.apply_highlight(index);
        events.selection_change = Some(self.change_event());
        Ok(events)
    }

    /// Plain click: exclusive selection.
    fn select_only(&mut self, index: usize) {
        for i in 0..self.source.len() {
            self.source.set_selected(i, i == index);
        }
        self.pivot = Some(index);
    }

    /// Ctrl click: flip one membership, keep the rest.
    fn toggle(&mut self, index: usize) {
        self.pivot = Some(index);
        let selected = !self.source.is_selected(index);
        self.source.set_selected(index, selected);

        if !selected && self.count() == 0 {
            debug!("selection emptied by toggle, clearing pivot");
            self.pivot = None;
        }
    }

    /// Shift click: replace the selection with the pivot..=index range.
    ///
    /// Without a pivot the range starts at the highlight, or the first item.
    /// The pivot itself is not moved.
    fn select_range(&mut self, index: usize) {
        let anchor = self.pivot.or(self.highlight).unwrap_or(0);
        let (from, to) = if anchor <= index {
            (anchor, index)
        } else {
            (index, anchor)
        };
        debug!("range select {from}..={to} (anchor {anchor})");

        for i in 0..self.source.len() {
            self.source.set_selected(i, (from..=to).contains(&i));
        }
    }

    /// Move the highlighted mark to `index`, clearing it everywhere else.
    fn apply_highlight(&mut self, index: usize) -> Option<HighlightMoveEvent> {
        let previous = self.highlight;
        for i in 0..self.source.len() {
            if i != index && self.source.is_highlighted(i) {
                self.source.set_highlighted(i, false);
            }
        }
        self.source.set_highlighted(index, true);
        self.highlight = Some(index);

        (previous != Some(index)).then_some(HighlightMoveEvent {
            previous,
            current: index,
        })
    }

    fn change_event(&self) -> ChangeEvent {
        ChangeEvent::new(self.source.selected_indices())
    }
}
