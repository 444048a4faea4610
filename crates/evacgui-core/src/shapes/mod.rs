//! Shape descriptors registered with the controller.
//!
//! Shapes are pure data: each one names the render layer it belongs to and
//! the role it plays for the modules. Geometry is kept in world coordinates.

mod factory;
mod net_box;
mod polygon;

pub use factory::ShapeFactory;
pub use net_box::BoxShape;
pub use polygon::PolygonShape;

use crate::layer::LayerId;
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Unique identifier for shapes.
pub type ShapeId = uuid::Uuid;

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    /// Same color with a different alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }
}

/// Style properties for shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeStyle {
    pub stroke_color: SerializableColor,
    pub stroke_width: f64,
    /// Fill color (None = no fill).
    pub fill_color: Option<SerializableColor>,
    /// Draw the outline dashed.
    #[serde(default)]
    pub dashed: bool,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            stroke_color: SerializableColor::black(),
            stroke_width: 2.0,
            fill_color: None,
            dashed: false,
        }
    }
}

/// What a shape stands for in the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeRole {
    /// Outline of the scenario bounding box.
    NetBox,
    /// The area that has to be evacuated.
    EvacuationArea,
    /// A user-drawn area with a number of inhabitants.
    PopulationArea { population: u32 },
}

/// Common trait for all shapes.
pub trait ShapeTrait {
    /// Get the unique identifier.
    fn id(&self) -> ShapeId;

    /// Render layer this shape is drawn on.
    fn layer_id(&self) -> LayerId;

    fn role(&self) -> ShapeRole;

    /// Get the bounding box in world coordinates.
    fn bounds(&self) -> Rect;

    /// Check if a point (in world coordinates) hits this shape.
    fn hit_test(&self, point: Point, tolerance: f64) -> bool;
}

/// Enum wrapper for all shape types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Box(BoxShape),
    Polygon(PolygonShape),
}

impl Shape {
    pub fn id(&self) -> ShapeId {
        match self {
            Shape::Box(s) => s.id(),
            Shape::Polygon(s) => s.id(),
        }
    }

    pub fn layer_id(&self) -> LayerId {
        match self {
            Shape::Box(s) => s.layer_id(),
            Shape::Polygon(s) => s.layer_id(),
        }
    }

    pub fn role(&self) -> ShapeRole {
        match self {
            Shape::Box(s) => s.role(),
            Shape::Polygon(s) => s.role(),
        }
    }

    pub fn bounds(&self) -> Rect {
        match self {
            Shape::Box(s) => s.bounds(),
            Shape::Polygon(s) => s.bounds(),
        }
    }

    pub fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        match self {
            Shape::Box(s) => s.hit_test(point, tolerance),
            Shape::Polygon(s) => s.hit_test(point, tolerance),
        }
    }

    /// The box geometry, if this is a box shape.
    pub fn as_box(&self) -> Option<&BoxShape> {
        match self {
            Shape::Box(b) => Some(b),
            Shape::Polygon(_) => None,
        }
    }

    pub fn as_polygon(&self) -> Option<&PolygonShape> {
        match self {
            Shape::Polygon(p) => Some(p),
            Shape::Box(_) => None,
        }
    }
}

/// Distance from a point to a line segment (a to b).
pub fn point_to_segment_dist(point: Point, a: Point, b: Point) -> f64 {
    let seg = kurbo::Vec2::new(b.x - a.x, b.y - a.y);
    let pv = kurbo::Vec2::new(point.x - a.x, point.y - a.y);
    let len_sq = seg.hypot2();
    if len_sq < f64::EPSILON {
        return pv.hypot();
    }
    let t = (pv.dot(seg) / len_sq).clamp(0.0, 1.0);
    let proj = Point::new(a.x + t * seg.x, a.y + t * seg.y);
    ((point.x - proj.x).powi(2) + (point.y - proj.y).powi(2)).sqrt()
}
