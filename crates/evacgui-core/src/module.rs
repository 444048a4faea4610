//! Editor modules and their shared lifecycle.

use crate::controller::Controller;
use crate::error::Result;
use crate::process::ProcessChain;
use crate::toolbox::SharedToolBox;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Kinds of editing modules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModuleType {
    Population,
}

/// Identity of one module instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModuleId(Uuid);

impl ModuleId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ModuleId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A self-contained editing mode with a setup chain and a tool box.
pub trait Module {
    fn id(&self) -> ModuleId;

    fn module_type(&self) -> ModuleType;

    /// Display name (localized).
    fn title(&self) -> &str;

    /// Run the module's process chain, making it the active module.
    fn start(&mut self, controller: &mut Controller) -> Result<()>;

    /// The module's tool box, constructed on first access.
    fn shared_tool_box(&self) -> SharedToolBox;
}

/// State every module carries: identity, title and the process chain.
pub struct ModuleBase {
    id: ModuleId,
    module_type: ModuleType,
    title: String,
    pub processes: ProcessChain,
}

impl ModuleBase {
    pub fn new(title: impl Into<String>, module_type: ModuleType) -> Self {
        Self {
            id: ModuleId::new(),
            module_type,
            title: title.into(),
            processes: ProcessChain::new(),
        }
    }

    pub fn id(&self) -> ModuleId {
        self.id
    }

    pub fn module_type(&self) -> ModuleType {
        self.module_type
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Run the process chain against the controller.
    pub fn start(&mut self, controller: &mut Controller) -> Result<()> {
        log::info!("starting module '{}' ({:?})", self.title, self.module_type);
        match self.processes.run(controller) {
            Ok(()) => {
                log::info!("module '{}' is active", self.title);
                Ok(())
            }
            Err(e) => {
                log::error!("module '{}' failed to start: {}", self.title, e);
                Err(e)
            }
        }
    }
}
