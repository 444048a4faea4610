//! Registering the module's event listener.

use super::Process;
use crate::controller::Controller;
use crate::error::Result;
use crate::listener::SharedListener;
use crate::module::{ModuleId, ModuleType};

/// Makes the module the target of user interaction events,
/// replacing whichever module listened before.
pub struct SetModuleListenerProcess {
    module_id: ModuleId,
    module_type: ModuleType,
    listener: SharedListener,
}

impl SetModuleListenerProcess {
    pub fn new(module_id: ModuleId, module_type: ModuleType, listener: SharedListener) -> Self {
        Self {
            module_id,
            module_type,
            listener,
        }
    }
}

impl Process for SetModuleListenerProcess {
    fn name(&self) -> &str {
        "set module listener"
    }

    fn start(&mut self, controller: &mut Controller) -> Result<()> {
        controller.set_module_listener(self.module_id, self.module_type, self.listener.clone());
        Ok(())
    }
}
