//! Installing a module's tool box.

use super::Process;
use crate::controller::Controller;
use crate::error::Result;
use crate::toolbox::{LazyToolBox, ToolBox};
use std::rc::Rc;

/// Installs the module's tool box into the controller's tool box slot.
///
/// The tool box is constructed on the first run if the module has not
/// built it yet. Installing refreshes it from the current controller state,
/// so a later run of this process picks up what earlier processes changed.
pub struct SetToolBoxProcess<T> {
    tool_box: Rc<LazyToolBox<T>>,
}

impl<T: ToolBox + 'static> SetToolBoxProcess<T> {
    pub fn new(tool_box: Rc<LazyToolBox<T>>) -> Self {
        Self { tool_box }
    }
}

impl<T: ToolBox + 'static> Process for SetToolBoxProcess<T> {
    fn name(&self) -> &str {
        "set tool box"
    }

    fn start(&mut self, controller: &mut Controller) -> Result<()> {
        controller.set_tool_box(self.tool_box.shared());
        Ok(())
    }
}
