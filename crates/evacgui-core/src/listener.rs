//! Event listeners of the active module.

use crate::controller::Controller;
use crate::error::Result;
use crate::input::{KeyEvent, PointerEvent};
use crate::module::{ModuleId, ModuleType};
use std::cell::RefCell;
use std::rc::Rc;

/// Receives user interaction while its module is the active one.
///
/// Handlers return `Ok(true)` when they consumed the event.
pub trait ModuleListener {
    fn on_pointer(&mut self, controller: &mut Controller, event: &PointerEvent) -> Result<bool>;

    fn on_key(&mut self, _controller: &mut Controller, _event: &KeyEvent) -> Result<bool> {
        Ok(false)
    }

    /// Drop any interaction in progress. Called whenever the listener is
    /// registered or deregistered.
    fn reset(&mut self) {}
}

pub type SharedListener = Rc<RefCell<dyn ModuleListener>>;

/// The module currently registered as listener target.
#[derive(Clone)]
pub struct ActiveModule {
    pub id: ModuleId,
    pub module_type: ModuleType,
    pub(crate) listener: SharedListener,
}

impl std::fmt::Debug for ActiveModule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActiveModule")
            .field("id", &self.id)
            .field("module_type", &self.module_type)
            .finish_non_exhaustive()
    }
}
