//! File-manager style multi-item selection.
//!
//! A [`SelectionController`] sits on top of an ordered [`ItemSource`] and
//! handles click gestures the way desktop file managers do: plain click
//! selects one item, ctrl-click toggles, shift-click selects a range from
//! the pivot, ctrl+shift-click only moves the highlight.
//!
//! ```
//! use selectfy::{MarkedItems, Modifiers, SelectConfig, SelectionController};
//!
//! let items = MarkedItems::new(vec!["a", "b", "c", "d", "e"]);
//! let mut selection = SelectionController::new(items, SelectConfig::default());
//!
//! selection.handle_gesture(2, Modifiers::new()).unwrap();
//! selection.handle_gesture(4, Modifiers::shift()).unwrap();
//! assert_eq!(selection.selected(), vec![2, 3, 4]);
//! assert_eq!(selection.pivot(), Some(2));
//! ```
//!
//! Adapters that own several containers keep controllers in a [`Registry`]
//! and route [`Command`]s to them by [`ContainerId`].

pub mod command;
pub mod config;
pub mod error;
pub mod events;
pub mod registry;
pub mod selection;
pub mod source;

pub use command::{Command, CommandOutput};
pub use config::{Marks, SelectConfig};
pub use error::SelectError;
pub use events::{ChangeEvent, GestureEvents, HighlightMoveEvent};
pub use registry::{ContainerId, Registry};
pub use selection::{Modifiers, SelectionController};
pub use source::{ItemSource, MarkedItems};
