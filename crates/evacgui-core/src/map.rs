//! Map viewer state backing the map render layer.

use kurbo::{Affine, Point, Rect, Size, Vec2};
use serde::{Deserialize, Serialize};

/// Pan/zoom state of the map render layer.
///
/// Converts between screen coordinates (pixels inside the main panel) and
/// world coordinates (scenario network coordinates).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapViewer {
    /// Size of the viewport in screen pixels.
    pub viewport: Size,
    /// Current translation offset.
    pub offset: Vec2,
    /// Current zoom level (screen pixels per world unit).
    pub zoom: f64,
    /// Minimum allowed zoom level
    pub min_zoom: f64,
    /// Maximum allowed zoom level
    pub max_zoom: f64,
}

impl MapViewer {
    /// Create a viewer for a viewport of the given size.
    pub fn new(viewport: Size) -> Self {
        Self {
            viewport,
            offset: Vec2::ZERO,
            zoom: 1.0,
            min_zoom: 1e-4,
            max_zoom: 1e4,
        }
    }

    /// World to screen transform.
    pub fn transform(&self) -> Affine {
        Affine::translate(self.offset) * Affine::scale(self.zoom)
    }

    /// Screen to world transform.
    pub fn inverse_transform(&self) -> Affine {
        Affine::scale(1.0 / self.zoom) * Affine::translate(-self.offset)
    }

    pub fn screen_to_world(&self, screen_point: Point) -> Point {
        self.inverse_transform() * screen_point
    }

    pub fn world_to_screen(&self, world_point: Point) -> Point {
        self.transform() * world_point
    }

    /// World position currently shown at the viewport center.
    pub fn center(&self) -> Point {
        self.screen_to_world(self.viewport_center())
    }

    /// Move the view so that `world_point` sits at the viewport center.
    /// The zoom level is left untouched.
    pub fn center_on(&mut self, world_point: Point) {
        let viewport_center = self.viewport_center();
        self.offset = Vec2::new(
            viewport_center.x - world_point.x * self.zoom,
            viewport_center.y - world_point.y * self.zoom,
        );
    }

    /// Zoom the view, keeping the given screen point fixed.
    pub fn zoom_at(&mut self, screen_point: Point, factor: f64) {
        let new_zoom = (self.zoom * factor).clamp(self.min_zoom, self.max_zoom);
        if (new_zoom - self.zoom).abs() < f64::EPSILON {
            return;
        }

        let world_point = self.screen_to_world(screen_point);
        self.zoom = new_zoom;

        // Keep world_point under the cursor
        let new_screen = self.world_to_screen(world_point);
        self.offset += Vec2::new(screen_point.x - new_screen.x, screen_point.y - new_screen.y);
    }

    /// Zoom and center so that `bounds` fills the viewport minus `padding`.
    pub fn fit_to_bounds(&mut self, bounds: Rect, padding: f64) {
        if bounds.is_zero_area() {
            self.center_on(bounds.center());
            return;
        }

        let padded = Size::new(
            (self.viewport.width - padding * 2.0).max(1.0),
            (self.viewport.height - padding * 2.0).max(1.0),
        );
        let scale_x = padded.width / bounds.width();
        let scale_y = padded.height / bounds.height();
        self.zoom = scale_x.min(scale_y).clamp(self.min_zoom, self.max_zoom);
        self.center_on(bounds.center());
    }

    fn viewport_center(&self) -> Point {
        Point::new(self.viewport.width / 2.0, self.viewport.height / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_to_world_with_offset_and_zoom() {
        let mut viewer = MapViewer::new(Size::new(800.0, 600.0));
        viewer.offset = Vec2::new(50.0, 100.0);
        viewer.zoom = 2.0;
        let world = viewer.screen_to_world(Point::new(150.0, 300.0));
        assert!((world.x - 50.0).abs() < f64::EPSILON);
        assert!((world.y - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_center_on() {
        let mut viewer = MapViewer::new(Size::new(800.0, 600.0));
        viewer.zoom = 0.5;
        viewer.center_on(Point::new(1000.0, 2000.0));
        let center = viewer.center();
        assert!((center.x - 1000.0).abs() < 1e-9);
        assert!((center.y - 2000.0).abs() < 1e-9);
        assert!((viewer.zoom - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_fit_to_bounds() {
        let mut viewer = MapViewer::new(Size::new(400.0, 400.0));
        viewer.fit_to_bounds(Rect::new(0.0, 0.0, 1000.0, 500.0), 0.0);
        assert!((viewer.zoom - 0.4).abs() < 1e-9);
        let center = viewer.center();
        assert!((center.x - 500.0).abs() < 1e-9);
        assert!((center.y - 250.0).abs() < 1e-9);
    }

    #[test]
    fn test_zoom_clamp() {
        let mut viewer = MapViewer::new(Size::new(100.0, 100.0));
        viewer.zoom_at(Point::ZERO, 1e-9);
        assert!((viewer.zoom - viewer.min_zoom).abs() < f64::EPSILON);
    }
}
