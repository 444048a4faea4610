//! The controller: state shared by every editor module.
//!
//! Exactly one module is active at a time. Activation goes through the
//! module's process chain, which disables all layers, reconfigures layers,
//! shapes, tool box and listener, and finally enables all layers again.
//! Enabling/disabling layers and (de)registering the module listener are the
//! only operations that change which module is active.

use crate::config::EvacuationConfig;
use crate::error::{ControllerError, Result};
use crate::image::ImageContainer;
use crate::input::{KeyEvent, PointerEvent};
use crate::layer::{LayerId, LayerKind, RenderLayer, Visualizer};
use crate::listener::{ActiveModule, SharedListener};
use crate::locale::Locale;
use crate::map::MapViewer;
use crate::module::{ModuleId, ModuleType};
use crate::panel::{ComponentHandle, MainPanel};
use crate::shapes::{Shape, ShapeId};
use crate::toolbox::SharedToolBox;
use kurbo::{Point, Rect};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Shared state of the editor.
pub struct Controller {
    args: Vec<String>,
    config_path: Option<PathBuf>,
    config: Option<EvacuationConfig>,
    locale: Locale,
    image_container: Option<ImageContainer>,
    standalone: bool,
    parent_component: Option<ComponentHandle>,
    main_panel: Option<MainPanel>,
    /// Whether the main panel takes keyboard focus itself.
    main_panel_focusable: bool,
    focus: Option<ComponentHandle>,
    visualizer: Visualizer,
    /// Shapes per render layer, in paint order.
    shapes: HashMap<LayerId, Vec<Shape>>,
    bounding_box: Option<Rect>,
    tool_box: Option<SharedToolBox>,
    active_module: Option<ActiveModule>,
    repaint_requests: u64,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(Vec::<String>::new())
    }
}

impl Controller {
    /// Create a controller from raw process arguments.
    ///
    /// The first argument that is not a flag names the evacuation
    /// configuration file.
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        let config_path = args
            .iter()
            .find(|a| !a.starts_with('-'))
            .map(PathBuf::from);

        Self {
            args,
            config_path,
            config: None,
            locale: Locale::default(),
            image_container: None,
            standalone: false,
            parent_component: None,
            main_panel: None,
            main_panel_focusable: false,
            focus: None,
            visualizer: Visualizer::new(),
            shapes: HashMap::new(),
            bounding_box: None,
            tool_box: None,
            active_module: None,
            repaint_requests: 0,
        }
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    // --- configuration ---

    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    pub fn config(&self) -> Option<&EvacuationConfig> {
        self.config.as_ref()
    }

    pub fn set_config(&mut self, config: EvacuationConfig) {
        self.config = Some(config);
    }

    pub fn bounding_box(&self) -> Option<Rect> {
        self.bounding_box
    }

    pub fn set_bounding_box(&mut self, bounding_box: Option<Rect>) {
        self.bounding_box = bounding_box;
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    // --- host UI ---

    pub fn image_container(&self) -> Option<&ImageContainer> {
        self.image_container.as_ref()
    }

    pub fn set_image_container(&mut self, image: ImageContainer) {
        self.image_container = Some(image);
    }

    pub fn is_standalone(&self) -> bool {
        self.standalone
    }

    pub fn set_standalone(&mut self, standalone: bool) {
        self.standalone = standalone;
    }

    pub fn parent_component(&self) -> Option<ComponentHandle> {
        self.parent_component
    }

    /// Component that receives repaint requests.
    pub fn set_parent_component(&mut self, handle: ComponentHandle) {
        self.parent_component = Some(handle);
    }

    pub fn main_panel(&self) -> Option<&MainPanel> {
        self.main_panel.as_ref()
    }

    /// Set the render surface. A `focusable` panel takes keyboard focus
    /// itself; otherwise focus requests go to the parent component.
    pub fn set_main_panel(&mut self, panel: MainPanel, focusable: bool) {
        self.main_panel = Some(panel);
        self.main_panel_focusable = focusable;
    }

    /// Move keyboard focus to the editor and return the focused component.
    pub fn request_focus(&mut self) -> Option<ComponentHandle> {
        let target = match &self.main_panel {
            Some(panel) if self.main_panel_focusable => Some(panel.handle),
            _ => self.parent_component,
        };
        self.focus = target;
        target
    }

    pub fn focus(&self) -> Option<ComponentHandle> {
        self.focus
    }

    /// Ask the parent component to repaint.
    pub fn repaint(&mut self) {
        if self.parent_component.is_some() {
            self.repaint_requests += 1;
        }
    }

    /// Number of repaints requested from the parent component so far.
    pub fn repaint_requests(&self) -> u64 {
        self.repaint_requests
    }

    // --- layers ---

    pub fn visualizer(&self) -> &Visualizer {
        &self.visualizer
    }

    pub fn add_layer(&mut self, name: impl Into<String>, kind: LayerKind) -> LayerId {
        self.visualizer.add_layer(name, kind)
    }

    pub fn add_map_layer(&mut self, viewer: MapViewer) -> LayerId {
        self.visualizer.add_map_layer(viewer)
    }

    pub fn add_primary_shape_layer(&mut self, name: impl Into<String>) -> LayerId {
        self.visualizer.add_primary_shape_layer(name)
    }

    /// The active map render layer, if a map has been set up.
    pub fn active_render_layer(&self) -> Option<&RenderLayer> {
        self.visualizer.active_map_layer()
    }

    pub fn active_render_layer_mut(&mut self) -> Option<&mut RenderLayer> {
        self.visualizer.active_map_layer_mut()
    }

    pub fn primary_shape_render_layer(&self) -> Result<&RenderLayer> {
        self.visualizer
            .primary_shape_layer()
            .ok_or(ControllerError::NoPrimaryShapeLayer)
    }

    /// Set a layer's user visibility preference.
    pub fn set_layer_visible(&mut self, id: LayerId, visible: bool) -> Result<()> {
        let layer = self
            .visualizer
            .layer_mut(id)
            .ok_or(ControllerError::UnknownLayer(id))?;
        layer.visible = visible;
        self.repaint();
        Ok(())
    }

    pub fn disable_all_layers(&mut self) {
        log::debug!("disabling all layers");
        self.visualizer.set_all_enabled(false);
    }

    pub fn enable_all_layers(&mut self) {
        log::debug!("enabling all layers");
        self.visualizer.set_all_enabled(true);
        self.repaint();
    }

    /// Convert a screen position to world coordinates through the map layer.
    /// Without a map layer screen and world coordinates coincide.
    pub fn screen_to_world(&self, screen_point: Point) -> Point {
        self.active_render_layer()
            .and_then(|l| l.map_viewer())
            .map(|v| v.screen_to_world(screen_point))
            .unwrap_or(screen_point)
    }

    // --- shapes ---

    /// Register a shape with its render layer.
    /// Fails, leaving the shapes untouched, if the layer does not exist.
    pub fn add_shape(&mut self, shape: Shape) -> Result<ShapeId> {
        let layer = shape.layer_id();
        match self.visualizer.layer(layer) {
            None => return Err(ControllerError::UnknownLayer(layer)),
            Some(l) if l.is_map() => {
                return Err(ControllerError::InvalidShape(format!(
                    "layer {layer} is a map layer"
                )));
            }
            Some(_) => {}
        }
        let id = shape.id();
        log::debug!("adding {:?} shape {} to layer {}", shape.role(), id, layer);
        self.shapes.entry(layer).or_default().push(shape);
        self.repaint();
        Ok(id)
    }

    pub fn remove_shape(&mut self, id: ShapeId) -> Option<Shape> {
        let removed = self.shapes.values_mut().find_map(|shapes| {
            let pos = shapes.iter().position(|s| s.id() == id)?;
            Some(shapes.remove(pos))
        });
        if removed.is_some() {
            self.repaint();
        }
        removed
    }

    /// Remove every shape on `layer` matching the predicate.
    /// Returns how many shapes were removed.
    pub fn remove_shapes_where(&mut self, layer: LayerId, pred: impl Fn(&Shape) -> bool) -> usize {
        let Some(shapes) = self.shapes.get_mut(&layer) else {
            return 0;
        };
        let before = shapes.len();
        shapes.retain(|s| !pred(s));
        let removed = before - shapes.len();
        if removed > 0 {
            self.repaint();
        }
        removed
    }

    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.values().flatten().find(|s| s.id() == id)
    }

    pub fn shapes_on_layer(&self, layer: LayerId) -> &[Shape] {
        self.shapes.get(&layer).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.values().map(Vec::len).sum()
    }

    /// Shapes on layers that are currently shown, in paint order.
    pub fn visible_shapes(&self) -> Vec<&Shape> {
        self.visualizer
            .layers()
            .filter(|l| l.is_shown())
            .flat_map(|l| self.shapes_on_layer(l.id()))
            .collect()
    }

    // --- tool box ---

    /// Install a tool box into the tool box slot, refreshing it first.
    pub fn set_tool_box(&mut self, tool_box: SharedToolBox) {
        tool_box.borrow_mut().refresh(self);
        log::debug!("installed tool box '{}'", tool_box.borrow().title());
        self.tool_box = Some(tool_box);
        self.repaint();
    }

    /// The installed tool box. Fails before any tool box was installed.
    pub fn tool_box(&self) -> Result<SharedToolBox> {
        self.tool_box.clone().ok_or(ControllerError::NoToolBoxInstalled)
    }

    // --- module listener ---

    /// Register the listener of the module being activated,
    /// dropping the previous module's listener.
    pub fn set_module_listener(
        &mut self,
        id: ModuleId,
        module_type: ModuleType,
        listener: SharedListener,
    ) {
        if let Some(previous) = self.active_module.take() {
            if previous.id != id {
                log::debug!("deregistering listener of module {}", previous.id);
            }
            previous.listener.borrow_mut().reset();
        }
        listener.borrow_mut().reset();
        self.active_module = Some(ActiveModule {
            id,
            module_type,
            listener,
        });
    }

    pub fn clear_module_listener(&mut self) {
        if let Some(previous) = self.active_module.take() {
            previous.listener.borrow_mut().reset();
        }
    }

    pub fn active_module(&self) -> Option<&ActiveModule> {
        self.active_module.as_ref()
    }

    /// Forward a pointer event to the active module.
    ///
    /// Returns `Ok(false)` if nothing handled it: no module is active, or
    /// the layers are disabled because a module is still being set up.
    pub fn dispatch_pointer(&mut self, event: PointerEvent) -> Result<bool> {
        let Some(listener) = self.event_target() else {
            return Ok(false);
        };
        let handled = listener.borrow_mut().on_pointer(self, &event)?;
        Ok(handled)
    }

    /// Forward a key event to the active module.
    pub fn dispatch_key(&mut self, event: KeyEvent) -> Result<bool> {
        let Some(listener) = self.event_target() else {
            return Ok(false);
        };
        let handled = listener.borrow_mut().on_key(self, &event)?;
        Ok(handled)
    }

    fn event_target(&self) -> Option<SharedListener> {
        if !self.visualizer.is_enabled() {
            return None;
        }
        self.active_module.as_ref().map(|m| m.listener.clone())
    }
}

impl std::fmt::Debug for Controller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Controller")
            .field("standalone", &self.standalone)
            .field("layers", &self.visualizer.len())
            .field("shapes", &self.shape_count())
            .field("bounding_box", &self.bounding_box)
            .field("active_module", &self.active_module)
            .finish_non_exhaustive()
    }
}
