//! Enabling and disabling all render layers.

use super::Process;
use crate::controller::Controller;
use crate::error::Result;

/// Disables every render layer so no half-configured state gets painted
/// while the following processes reconfigure them.
#[derive(Debug, Default)]
pub struct DisableLayersProcess;

impl Process for DisableLayersProcess {
    fn name(&self) -> &str {
        "disable layers"
    }

    fn start(&mut self, controller: &mut Controller) -> Result<()> {
        controller.disable_all_layers();
        Ok(())
    }
}

/// Enables every render layer. Runs last: it commits the module's state.
#[derive(Debug, Default)]
pub struct EnableLayersProcess;

impl Process for EnableLayersProcess {
    fn name(&self) -> &str {
        "enable layers"
    }

    fn start(&mut self, controller: &mut Controller) -> Result<()> {
        controller.enable_all_layers();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layer::LayerKind;

    #[test]
    fn test_disable_then_enable_restores_shown_layers() {
        let mut controller = Controller::default();
        controller.add_layer("a", LayerKind::Shape);
        let hidden = controller.add_layer("b", LayerKind::Shape);
        controller.set_layer_visible(hidden, false).unwrap();
        let before = controller.visualizer().shown_layers();

        DisableLayersProcess.start(&mut controller).unwrap();
        assert!(controller.visualizer().shown_layers().is_empty());

        EnableLayersProcess.start(&mut controller).unwrap();
        assert_eq!(controller.visualizer().shown_layers(), before);
    }
}
