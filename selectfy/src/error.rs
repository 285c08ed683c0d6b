//! Error types.

use thiserror::Error;

use crate::registry::ContainerId;

/// Errors raised by the selection core and its dispatch layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectError {
    /// A command was routed to a container that has no controller.
    #[error("container {0} has no selection controller")]
    NotInitialized(ContainerId),

    /// The command name is not part of the public command set.
    #[error("unknown selection command '{0}'")]
    UnknownCommand(String),

    /// A gesture targeted an item that is not in the container.
    #[error("item {index} out of range (container holds {len} items)")]
    ItemOutOfRange {
        /// The requested position index.
        index: usize,
        /// Number of items in the container.
        len: usize,
    },

    /// Adapter configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
