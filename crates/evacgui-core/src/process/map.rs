//! Creating or recentering the map layer.

use super::Process;
use crate::controller::Controller;
use crate::error::Result;
use crate::map::MapViewer;
use crate::panel::DEFAULT_PANEL_SIZE;

/// Padding around the scenario extent when the map is first fitted.
const FIT_PADDING: f64 = 20.0;

/// Creates the map layer the first time; later runs only recenter it.
#[derive(Debug, Default)]
pub struct InitMapLayerProcess;

impl Process for InitMapLayerProcess {
    fn name(&self) -> &str {
        "init map layer"
    }

    fn start(&mut self, controller: &mut Controller) -> Result<()> {
        let center = controller
            .config()
            .and_then(|c| c.map_center())
            .or_else(|| controller.bounding_box().map(|r| r.center()));

        if let Some(layer) = controller.active_render_layer_mut() {
            if let (Some(viewer), Some(center)) = (layer.map_viewer_mut(), center) {
                log::debug!("recentering map on ({}, {})", center.x, center.y);
                viewer.center_on(center);
            }
            return Ok(());
        }

        let viewport = controller
            .main_panel()
            .map(|panel| panel.size)
            .unwrap_or(DEFAULT_PANEL_SIZE);
        let mut viewer = MapViewer::new(viewport);
        if let Some(bounds) = controller.bounding_box() {
            viewer.fit_to_bounds(bounds, FIT_PADDING);
        }
        if let Some(center) = center {
            viewer.center_on(center);
        }
        let id = controller.add_map_layer(viewer);
        log::info!("created map layer {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{Point, Rect, Size};

    #[test]
    fn test_creates_map_layer_once() {
        let mut controller = Controller::default();
        controller.set_bounding_box(Some(Rect::new(0.0, 0.0, 100.0, 100.0)));

        InitMapLayerProcess.start(&mut controller).unwrap();
        let first = controller.active_render_layer().unwrap().id();
        InitMapLayerProcess.start(&mut controller).unwrap();

        assert_eq!(controller.active_render_layer().unwrap().id(), first);
        assert_eq!(controller.visualizer().len(), 1);
    }

    #[test]
    fn test_recenters_existing_map() {
        let mut controller = Controller::default();
        controller.add_map_layer(MapViewer::new(Size::new(200.0, 200.0)));
        controller.set_bounding_box(Some(Rect::new(100.0, 100.0, 300.0, 500.0)));

        InitMapLayerProcess.start(&mut controller).unwrap();
        let viewer = controller.active_render_layer().unwrap().map_viewer().unwrap();
        let center = viewer.center();
        assert!((center.x - 200.0).abs() < 1e-9);
        assert!((center.y - 300.0).abs() < 1e-9);
        // recentering keeps the zoom
        assert!((viewer.zoom - 1.0).abs() < f64::EPSILON);
        assert_ne!(center, Point::ZERO);
    }
}
