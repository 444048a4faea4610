//! Processes: the ordered setup steps a module runs when it is started.
//!
//! A module builds its [`ProcessChain`] once, at construction time. Starting
//! the module runs every process in insertion order against the controller.
//! A failing process aborts the rest of the chain; whatever the finished
//! processes changed stays in place.

mod config;
mod layers;
mod listener;
mod map;
mod panel;
mod shape;
mod tool_box;

pub use config::InitEvacuationConfigProcess;
pub use layers::{DisableLayersProcess, EnableLayersProcess};
pub use listener::SetModuleListenerProcess;
pub use map::InitMapLayerProcess;
pub use panel::InitMainPanelProcess;
pub use shape::{InitEvacShapeProcess, InitShapeLayerProcess};
pub use tool_box::SetToolBoxProcess;

use crate::controller::Controller;
use crate::error::{ControllerError, Result};

/// A single setup step run against the controller.
pub trait Process {
    /// Short description used in logs and errors.
    fn name(&self) -> &str;

    fn start(&mut self, controller: &mut Controller) -> Result<()>;
}

/// A process backed by a closure, for one-off module-specific steps.
pub struct FnProcess<F> {
    name: String,
    f: F,
}

impl<F> FnProcess<F>
where
    F: FnMut(&mut Controller) -> Result<()>,
{
    pub fn new(name: impl Into<String>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }
}

impl<F> Process for FnProcess<F>
where
    F: FnMut(&mut Controller) -> Result<()>,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn start(&mut self, controller: &mut Controller) -> Result<()> {
        (self.f)(controller)
    }
}

/// Ordered list of processes.
#[derive(Default)]
pub struct ProcessChain {
    processes: Vec<Box<dyn Process>>,
}

impl ProcessChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a process to the end of the chain.
    pub fn push(&mut self, process: impl Process + 'static) {
        self.processes.push(Box::new(process));
    }

    pub fn len(&self) -> usize {
        self.processes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Process names in execution order.
    pub fn names(&self) -> Vec<&str> {
        self.processes.iter().map(|p| p.name()).collect()
    }

    /// Run all processes in order, stopping at the first failure.
    pub fn run(&mut self, controller: &mut Controller) -> Result<()> {
        let total = self.processes.len();
        for (step, process) in self.processes.iter_mut().enumerate() {
            log::debug!("process {}/{}: {}", step + 1, total, process.name());
            if let Err(e) = process.start(controller) {
                log::error!("process '{}' failed: {}", process.name(), e);
                return Err(ControllerError::ProcessFailed {
                    step: step + 1,
                    name: process.name().to_string(),
                    source: Box::new(e),
                });
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for ProcessChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
