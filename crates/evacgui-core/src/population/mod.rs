//! Population area selector: draw the areas whose inhabitants are evacuated.

mod listener;
mod tool_box;

pub use listener::PopEventListener;
pub use tool_box::{PopArea, PopToolBox};

use crate::controller::Controller;
use crate::error::{ControllerError, Result};
use crate::module::{Module, ModuleBase, ModuleId, ModuleType};
use crate::process::{
    DisableLayersProcess, EnableLayersProcess, FnProcess, InitEvacShapeProcess,
    InitEvacuationConfigProcess, InitMainPanelProcess, InitMapLayerProcess, InitShapeLayerProcess,
    SetModuleListenerProcess, SetToolBoxProcess,
};
use crate::shapes::{ShapeFactory, ShapeRole};
use crate::toolbox::{LazyToolBox, SharedToolBox};
use std::cell::RefCell;
use std::rc::Rc;

/// Outlines the controller's bounding box on the primary shape layer,
/// replacing an outline left by an earlier activation.
fn add_bounding_box(controller: &mut Controller) -> Result<()> {
    let layer = controller.primary_shape_render_layer()?.id();
    let bbox = controller.bounding_box().ok_or(ControllerError::NoBoundingBox)?;
    let replaced = controller.remove_shapes_where(layer, |s| s.role() == ShapeRole::NetBox);
    if replaced > 0 {
        log::debug!("replacing {} bounding box outline(s)", replaced);
    }
    controller.add_shape(ShapeFactory::net_box_shape(layer, bbox, true))?;
    Ok(())
}

/// Module for selecting population areas on the evacuation map.
pub struct PopAreaSelector {
    base: ModuleBase,
    tool_box: Rc<LazyToolBox<PopToolBox>>,
}

impl PopAreaSelector {
    /// Build the module and its setup chain. Nothing runs until [`Module::start`].
    pub fn new(controller: &Controller) -> Self {
        let locale = *controller.locale();
        let mut base = ModuleBase::new(locale.module_pop_area_selector(), ModuleType::Population);
        let tool_box = Rc::new(LazyToolBox::new(move || PopToolBox::new(&locale)));
        let listener = Rc::new(RefCell::new(PopEventListener::new(tool_box.clone())));
        let (id, module_type) = (base.id(), base.module_type());

        let chain = &mut base.processes;
        chain.push(DisableLayersProcess);
        chain.push(InitEvacuationConfigProcess);
        chain.push(SetToolBoxProcess::new(tool_box.clone()));
        chain.push(InitMainPanelProcess);
        chain.push(InitMapLayerProcess);
        chain.push(SetModuleListenerProcess::new(id, module_type, listener));
        chain.push(InitShapeLayerProcess);
        chain.push(InitEvacShapeProcess);
        chain.push(FnProcess::new("add bounding box", add_bounding_box));
        chain.push(SetToolBoxProcess::new(tool_box.clone()));
        chain.push(EnableLayersProcess);

        Self { base, tool_box }
    }

    /// The module's tool box, constructed on first access.
    pub fn tool_box(&self) -> Rc<RefCell<PopToolBox>> {
        self.tool_box.get()
    }

    /// Number of population areas, or -1 while the tool box does not exist.
    pub fn pop_area_count(&self) -> i32 {
        match self.tool_box.get_if_initialized() {
            Some(tb) => i32::try_from(tb.borrow().pop_area_count()).unwrap_or(i32::MAX),
            None => -1,
        }
    }
}

impl Module for PopAreaSelector {
    fn id(&self) -> ModuleId {
        self.base.id()
    }

    fn module_type(&self) -> ModuleType {
        self.base.module_type()
    }

    fn title(&self) -> &str {
        self.base.title()
    }

    fn start(&mut self, controller: &mut Controller) -> Result<()> {
        self.base.start(controller)
    }

    fn shared_tool_box(&self) -> SharedToolBox {
        self.tool_box.shared()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::{Language, Locale};
    use crate::toolbox::ToolBox;

    #[test]
    fn test_chain_order() {
        let controller = Controller::default();
        let module = PopAreaSelector::new(&controller);
        assert_eq!(
            module.base.processes.names(),
            vec![
                "disable layers",
                "init evacuation config",
                "set tool box",
                "init main panel",
                "init map layer",
                "set module listener",
                "init shape layer",
                "init evacuation area shape",
                "add bounding box",
                "set tool box",
                "enable layers",
            ]
        );
    }

    #[test]
    fn test_construction_runs_nothing() {
        let controller = Controller::default();
        let module = PopAreaSelector::new(&controller);
        assert_eq!(module.pop_area_count(), -1);
        assert!(controller.tool_box().is_err());
        assert!(controller.visualizer().is_empty());
    }

    #[test]
    fn test_title_follows_locale() {
        let mut controller = Controller::default();
        controller.set_locale(Locale::new(Language::German));
        let module = PopAreaSelector::new(&controller);
        assert_eq!(module.title(), Locale::new(Language::German).module_pop_area_selector());
        assert_eq!(module.tool_box().borrow().title(), module.title());
        assert_eq!(module.module_type(), ModuleType::Population);
    }

    #[test]
    fn test_start_installs_tool_box() {
        let mut controller = Controller::default();
        let mut module = PopAreaSelector::new(&controller);
        module.start(&mut controller).unwrap();

        assert_eq!(module.pop_area_count(), 0);
        assert!(Rc::ptr_eq(&module.tool_box(), &module.tool_box()));
        assert_eq!(module.tool_box().borrow().installs(), 2);
        assert_eq!(controller.active_module().map(|m| m.id), Some(module.id()));
        assert!(controller.visualizer().is_enabled());
    }

    #[test]
    fn test_bounding_box_requires_extent() {
        let mut controller = Controller::default();
        controller.add_primary_shape_layer("shapes");
        let err = add_bounding_box(&mut controller).unwrap_err();
        assert!(matches!(err, ControllerError::NoBoundingBox));
    }
}
