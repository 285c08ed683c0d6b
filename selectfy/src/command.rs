//! The closed set of public commands a host can invoke by name.

use std::fmt;
use std::str::FromStr;

use crate::error::SelectError;
use crate::events::ChangeEvent;
use crate::selection::SelectionController;
use crate::source::ItemSource;

/// A public selection operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    SelectAll,
    UnselectAll,
    GetSelected,
    GetCount,
}

impl Command {
    /// Every command, in declaration order.
    pub const ALL: [Command; 4] = [
        Command::SelectAll,
        Command::UnselectAll,
        Command::GetSelected,
        Command::GetCount,
    ];

    /// Canonical name used by hosts.
    pub fn name(&self) -> &'static str {
        match self {
            Command::SelectAll => "selectAll",
            Command::UnselectAll => "unselectAll",
            Command::GetSelected => "getSelected",
            Command::GetCount => "getCount",
        }
    }

    /// Whether the command only reads state.
    pub fn is_query(&self) -> bool {
        matches!(self, Command::GetSelected | Command::GetCount)
    }

    /// Run the command against a controller.
    pub fn apply<S: ItemSource>(&self, controller: &mut SelectionController<S>) -> CommandOutput {
        match self {
            Command::SelectAll => CommandOutput::Changed(controller.select_all()),
            Command::UnselectAll => CommandOutput::Changed(controller.unselect_all()),
            Command::GetSelected => CommandOutput::Selected(controller.selected()),
            Command::GetCount => CommandOutput::Count(controller.count()),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Command {
    type Err = SelectError;

    /// Accepts the canonical camelCase name or its snake_case spelling.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "selectAll" | "select_all" => Ok(Command::SelectAll),
            "unselectAll" | "unselect_all" => Ok(Command::UnselectAll),
            "getSelected" | "get_selected" => Ok(Command::GetSelected),
            "getCount" | "get_count" => Ok(Command::GetCount),
            other => Err(SelectError::UnknownCommand(other.to_string())),
        }
    }
}

/// Result of a dispatched command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// The selection changed; carries the change notification.
    Changed(ChangeEvent),
    /// Selected indices, in container order.
    Selected(Vec<usize>),
    /// Number of selected items.
    Count(usize),
}
