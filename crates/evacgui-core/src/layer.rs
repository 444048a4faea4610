//! Render layers and the visualizer that owns them.

use crate::map::MapViewer;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a render layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LayerId(pub u32);

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What a render layer draws.
#[derive(Debug, Clone, PartialEq)]
pub enum LayerKind {
    /// Background map with its zoom state.
    Map(MapViewer),
    /// Shapes registered with the controller for this layer.
    Shape,
}

/// An addressable visual layer.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderLayer {
    id: LayerId,
    /// Human-readable name (for logging and layer lists).
    pub name: String,
    pub kind: LayerKind,
    /// Commit flag, toggled only by enabling/disabling all layers.
    enabled: bool,
    /// User visibility preference.
    pub visible: bool,
}

impl RenderLayer {
    pub fn id(&self) -> LayerId {
        self.id
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether the layer is shown on screen right now.
    pub fn is_shown(&self) -> bool {
        self.enabled && self.visible
    }

    pub fn is_map(&self) -> bool {
        matches!(self.kind, LayerKind::Map(_))
    }

    pub fn map_viewer(&self) -> Option<&MapViewer> {
        match &self.kind {
            LayerKind::Map(viewer) => Some(viewer),
            LayerKind::Shape => None,
        }
    }

    pub fn map_viewer_mut(&mut self) -> Option<&mut MapViewer> {
        match &mut self.kind {
            LayerKind::Map(viewer) => Some(viewer),
            LayerKind::Shape => None,
        }
    }
}

/// Owns the render layers in paint order (back to front).
#[derive(Debug, Clone)]
pub struct Visualizer {
    layers: Vec<RenderLayer>,
    active_map_layer: Option<LayerId>,
    primary_shape_layer: Option<LayerId>,
    /// Whether layers are currently committed (enabled).
    enabled: bool,
    next_id: u32,
}

impl Default for Visualizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Visualizer {
    pub fn new() -> Self {
        Self {
            layers: Vec::new(),
            active_map_layer: None,
            primary_shape_layer: None,
            enabled: true,
            next_id: 1,
        }
    }

    /// Add a layer on top of the existing ones.
    /// New layers follow the current enabled/disabled state.
    pub fn add_layer(&mut self, name: impl Into<String>, kind: LayerKind) -> LayerId {
        let id = LayerId(self.next_id);
        self.next_id += 1;
        self.layers.push(RenderLayer {
            id,
            name: name.into(),
            kind,
            enabled: self.enabled,
            visible: true,
        });
        id
    }

    /// Add the map layer and make it the active map layer.
    /// Map layers are painted below every other layer.
    pub fn add_map_layer(&mut self, viewer: MapViewer) -> LayerId {
        let id = self.add_layer("map", LayerKind::Map(viewer));
        if let Some(layer) = self.layers.pop() {
            self.layers.insert(0, layer);
        }
        self.active_map_layer = Some(id);
        id
    }

    /// Add a shape layer and make it the primary shape layer.
    pub fn add_primary_shape_layer(&mut self, name: impl Into<String>) -> LayerId {
        let id = self.add_layer(name, LayerKind::Shape);
        self.primary_shape_layer = Some(id);
        id
    }

    pub fn layer(&self, id: LayerId) -> Option<&RenderLayer> {
        self.layers.iter().find(|l| l.id == id)
    }

    pub fn layer_mut(&mut self, id: LayerId) -> Option<&mut RenderLayer> {
        self.layers.iter_mut().find(|l| l.id == id)
    }

    pub fn contains(&self, id: LayerId) -> bool {
        self.layer(id).is_some()
    }

    /// Layers in paint order.
    pub fn layers(&self) -> impl Iterator<Item = &RenderLayer> {
        self.layers.iter()
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn active_map_layer(&self) -> Option<&RenderLayer> {
        self.active_map_layer.and_then(|id| self.layer(id))
    }

    pub fn active_map_layer_mut(&mut self) -> Option<&mut RenderLayer> {
        let id = self.active_map_layer?;
        self.layer_mut(id)
    }

    pub fn primary_shape_layer(&self) -> Option<&RenderLayer> {
        self.primary_shape_layer.and_then(|id| self.layer(id))
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Set the commit flag on every layer.
    pub fn set_all_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        for layer in &mut self.layers {
            layer.enabled = enabled;
        }
    }

    /// IDs of layers currently shown, in paint order.
    pub fn shown_layers(&self) -> Vec<LayerId> {
        self.layers
            .iter()
            .filter(|l| l.is_shown())
            .map(|l| l.id)
            .collect()
    }
}
