//! Closed polygon shape.

use super::{ShapeId, ShapeRole, ShapeStyle, ShapeTrait, point_to_segment_dist};
use crate::layer::LayerId;
use kurbo::{BezPath, Point, Rect, Shape as KurboShape};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A closed polygon (the last vertex connects back to the first).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolygonShape {
    pub(crate) id: ShapeId,
    pub(crate) layer_id: LayerId,
    pub role: ShapeRole,
    /// Vertices in world coordinates.
    pub points: Vec<Point>,
    pub style: ShapeStyle,
}

impl PolygonShape {
    pub fn new(layer_id: LayerId, role: ShapeRole, points: Vec<Point>) -> Self {
        Self {
            id: Uuid::new_v4(),
            layer_id,
            role,
            points,
            style: ShapeStyle::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether the point lies inside the polygon (non-zero winding).
    pub fn contains(&self, point: Point) -> bool {
        self.points.len() >= 3 && self.outline().contains(point)
    }

    fn outline(&self) -> BezPath {
        let mut path = BezPath::new();
        let mut iter = self.points.iter();
        if let Some(first) = iter.next() {
            path.move_to(*first);
            for p in iter {
                path.line_to(*p);
            }
            path.close_path();
        }
        path
    }
}

impl ShapeTrait for PolygonShape {
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
        let Some(first) = self.points.first() else {
            return Rect::ZERO;
        };
        self.points
            .iter()
            .skip(1)
            .fold(Rect::from_points(*first, *first), |r, p| r.union_pt(*p))
    }

    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        if self.contains(point) {
            return true;
        }
        let reach = tolerance + self.style.stroke_width / 2.0;
        let n = self.points.len();
        (0..n).any(|i| {
            let a = self.points[i];
            let b = self.points[(i + 1) % n];
            point_to_segment_dist(point, a, b) <= reach
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> PolygonShape {
        PolygonShape::new(
            LayerId(1),
            ShapeRole::EvacuationArea,
            vec![
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
                Point::new(10.0, 10.0),
                Point::new(0.0, 10.0),
            ],
        )
    }

    #[test]
    fn test_bounds() {
        assert_eq!(square().bounds(), Rect::new(0.0, 0.0, 10.0, 10.0));
    }

    #[test]
    fn test_empty_bounds() {
        let empty = PolygonShape::new(LayerId(1), ShapeRole::EvacuationArea, Vec::new());
        assert_eq!(empty.bounds(), Rect::ZERO);
        assert!(!empty.hit_test(Point::ZERO, 1.0));
    }

    #[test]
    fn test_contains_and_hit_test() {
        let poly = square();
        assert!(poly.contains(Point::new(5.0, 5.0)));
        assert!(!poly.contains(Point::new(15.0, 5.0)));
        // Near the closing edge (0,10) -> (0,0)
        assert!(poly.hit_test(Point::new(-1.5, 5.0), 1.0));
        assert!(!poly.hit_test(Point::new(-5.0, 5.0), 1.0));
    }
}
