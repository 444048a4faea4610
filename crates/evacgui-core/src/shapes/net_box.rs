//! Axis-aligned box shape.

use super::{ShapeId, ShapeRole, ShapeStyle, ShapeTrait};
use crate::layer::LayerId;
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An axis-aligned rectangle drawn on a shape layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxShape {
    pub(crate) id: ShapeId,
    pub(crate) layer_id: LayerId,
    pub role: ShapeRole,
    pub rect: Rect,
    pub style: ShapeStyle,
}

impl BoxShape {
    pub fn new(layer_id: LayerId, role: ShapeRole, rect: Rect) -> Self {
        Self {
            id: Uuid::new_v4(),
            layer_id,
            role,
            rect: rect.abs(),
            style: ShapeStyle::default(),
        }
    }
}

impl ShapeTrait for BoxShape {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn layer_id(&self) -> LayerId {
        self.layer_id
    }

    fn role(&self) -> ShapeRole {
        self.role
    }

    fn bounds(&self) -> Rect {
        self.rect
    }

    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        if self.style.fill_color.is_some() {
            // Filled: hit anywhere inside
            self.rect.inflate(tolerance, tolerance).contains(point)
        } else {
            // Outline only: hit on the border
            let reach = tolerance + self.style.stroke_width / 2.0;
            let outer = self.rect.inflate(reach, reach);
            let inner = self.rect.inflate(-reach, -reach);
            outer.contains(point) && !inner.contains(point)
        }
    }
}
