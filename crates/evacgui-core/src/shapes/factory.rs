//! Preset shapes used by the editor modules.

use super::{BoxShape, PolygonShape, SerializableColor, Shape, ShapeRole, ShapeStyle};
use crate::layer::LayerId;
use kurbo::{Point, Rect};

const NET_BOX_COLOR: SerializableColor = SerializableColor::new(70, 70, 70, 255);
const NET_BOX_LIGHT_COLOR: SerializableColor = SerializableColor::new(150, 150, 150, 160);
const EVAC_AREA_COLOR: SerializableColor = SerializableColor::new(200, 30, 30, 255);
const POP_AREA_COLOR: SerializableColor = SerializableColor::new(30, 90, 200, 255);

/// Builds styled shapes for the well-known shape roles.
pub struct ShapeFactory;

impl ShapeFactory {
    /// Dashed outline around the scenario bounding box.
    /// `light` draws it thinner and translucent so it stays in the background.
    pub fn net_box_shape(layer_id: LayerId, bounding_box: Rect, light: bool) -> Shape {
        let mut shape = BoxShape::new(layer_id, ShapeRole::NetBox, bounding_box);
        shape.style = ShapeStyle {
            stroke_color: if light { NET_BOX_LIGHT_COLOR } else { NET_BOX_COLOR },
            stroke_width: if light { 1.0 } else { 2.0 },
            fill_color: None,
            dashed: true,
        };
        Shape::Box(shape)
    }

    pub fn evacuation_area_shape(layer_id: LayerId, points: Vec<Point>) -> Shape {
        let mut shape = PolygonShape::new(layer_id, ShapeRole::EvacuationArea, points);
        shape.style = ShapeStyle {
            stroke_color: EVAC_AREA_COLOR,
            stroke_width: 3.0,
            fill_color: Some(EVAC_AREA_COLOR.with_alpha(40)),
            dashed: false,
        };
        Shape::Polygon(shape)
    }

    pub fn population_area_shape(layer_id: LayerId, points: Vec<Point>, population: u32) -> Shape {
        let mut shape =
            PolygonShape::new(layer_id, ShapeRole::PopulationArea { population }, points);
        shape.style = ShapeStyle {
            stroke_color: POP_AREA_COLOR,
            stroke_width: 2.0,
            fill_color: Some(POP_AREA_COLOR.with_alpha(70)),
            dashed: false,
        };
        Shape::Polygon(shape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_net_box_matches_bounding_box() {
        let bbox = Rect::new(1.0, 2.0, 3.0, 4.0);
        let shape = ShapeFactory::net_box_shape(LayerId(7), bbox, true);
        assert_eq!(shape.layer_id(), LayerId(7));
        assert_eq!(shape.role(), ShapeRole::NetBox);
        assert_eq!(shape.bounds(), bbox);
        let style = &shape.as_box().unwrap().style;
        assert!(style.dashed);
        assert_eq!(style.stroke_color, NET_BOX_LIGHT_COLOR);
    }

    #[test]
    fn test_population_area_carries_population() {
        let shape = ShapeFactory::population_area_shape(
            LayerId(1),
            vec![Point::ZERO, Point::new(1.0, 0.0), Point::new(0.0, 1.0)],
            250,
        );
        assert_eq!(shape.role(), ShapeRole::PopulationArea { population: 250 });
        assert!(shape.as_polygon().is_some());
    }
}
