//! Container registry.
//!
//! Hosts that manage several containers keep one [`SelectionController`] per
//! container here and route named commands to it by [`ContainerId`].

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use log::debug;

use crate::command::{Command, CommandOutput};
use crate::config::SelectConfig;
use crate::error::SelectError;
use crate::selection::SelectionController;
use crate::source::ItemSource;

/// Unique identifier for a registered container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContainerId(usize);

impl ContainerId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for ContainerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__container_{}", self.0)
    }
}

/// Registry owning the controller of every initialised container.
pub struct Registry<S: ItemSource> {
    controllers: HashMap<ContainerId, SelectionController<S>>,
}

impl<S: ItemSource> Default for Registry<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ItemSource> Registry<S> {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            controllers: HashMap::new(),
        }
    }

    /// Bind a new controller to `source` and return its container ID.
    pub fn init(&mut self, source: S, config: SelectConfig) -> ContainerId {
        let id = ContainerId::new();
        debug!("init {id} with {} items ({config:?})", source.len());
        self.controllers
            .insert(id, SelectionController::new(source, config));
        id
    }

    /// Replace the controller of an existing container, resetting its state.
    pub fn reinit(
        &mut self,
        id: ContainerId,
        source: S,
        config: SelectConfig,
    ) -> Result<(), SelectError> {
        let slot = self
            .controllers
            .get_mut(&id)
            .ok_or(SelectError::NotInitialized(id))?;
        debug!("reinit {id} with {} items", source.len());
        *slot = SelectionController::new(source, config);
        Ok(())
    }

    /// Drop a container's controller, returning it.
    pub fn remove(&mut self, id: ContainerId) -> Option<SelectionController<S>> {
        self.controllers.remove(&id)
    }

    pub fn contains(&self, id: ContainerId) -> bool {
        self.controllers.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }

    /// Get a container's controller.
    pub fn get(&self, id: ContainerId) -> Result<&SelectionController<S>, SelectError> {
        self.controllers
            .get(&id)
            .ok_or(SelectError::NotInitialized(id))
    }

    /// Get a container's controller mutably.
    pub fn get_mut(&mut self, id: ContainerId) -> Result<&mut SelectionController<S>, SelectError> {
        self.controllers
            .get_mut(&id)
            .ok_or(SelectError::NotInitialized(id))
    }

    /// Run a command on a container.
    pub fn dispatch(&mut self, id: ContainerId, command: Command) -> Result<CommandOutput, SelectError> {
        let controller = self.get_mut(id)?;
        debug!("dispatch {command} to {id}");
        Ok(command.apply(controller))
    }

    /// Parse a command name and run it on a container.
    pub fn call(&mut self, id: ContainerId, name: &str) -> Result<CommandOutput, SelectError> {
        let command: Command = name.parse()?;
        self.dispatch(id, command)
    }
}
