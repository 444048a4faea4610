//! Shape layer setup and the evacuation area shape.

use super::Process;
use crate::controller::Controller;
use crate::error::{ControllerError, Result};
use crate::shapes::{ShapeFactory, ShapeRole};

/// Name of the primary shape layer.
pub const PRIMARY_SHAPE_LAYER: &str = "shapes";

/// Creates the primary shape layer unless one exists.
#[derive(Debug, Default)]
pub struct InitShapeLayerProcess;

impl Process for InitShapeLayerProcess {
    fn name(&self) -> &str {
        "init shape layer"
    }

    fn start(&mut self, controller: &mut Controller) -> Result<()> {
        if controller.primary_shape_render_layer().is_ok() {
            return Ok(());
        }
        let id = controller.add_primary_shape_layer(PRIMARY_SHAPE_LAYER);
        log::info!("created primary shape layer {}", id);
        Ok(())
    }
}

/// Puts the configured evacuation area on the primary shape layer.
/// Skipped when the layer already holds an evacuation area.
#[derive(Debug, Default)]
pub struct InitEvacShapeProcess;

impl Process for InitEvacShapeProcess {
    fn name(&self) -> &str {
        "init evacuation area shape"
    }

    fn start(&mut self, controller: &mut Controller) -> Result<()> {
        let layer = controller.primary_shape_render_layer()?.id();
        if controller
            .shapes_on_layer(layer)
            .iter()
            .any(|s| s.role() == ShapeRole::EvacuationArea)
        {
            log::debug!("evacuation area already loaded");
            return Ok(());
        }

        let config = controller
            .config()
            .ok_or_else(|| ControllerError::Config("evacuation config not loaded".to_string()))?;
        if config.evacuation_area.len() < 3 {
            log::info!("scenario '{}' defines no evacuation area", config.scenario_name);
            return Ok(());
        }

        let shape = ShapeFactory::evacuation_area_shape(layer, config.evacuation_area.clone());
        controller.add_shape(shape)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EvacuationConfig;
    use kurbo::Point;

    fn config_with_area() -> EvacuationConfig {
        EvacuationConfig {
            evacuation_area: vec![
                Point::new(0.0, 0.0),
                Point::new(50.0, 0.0),
                Point::new(50.0, 50.0),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_shape_layer_created_once() {
        let mut controller = Controller::default();
        InitShapeLayerProcess.start(&mut controller).unwrap();
        let first = controller.primary_shape_render_layer().unwrap().id();
        InitShapeLayerProcess.start(&mut controller).unwrap();
        assert_eq!(controller.primary_shape_render_layer().unwrap().id(), first);
        assert_eq!(controller.visualizer().len(), 1);
    }

    #[test]
    fn test_evac_shape_requires_shape_layer() {
        let mut controller = Controller::default();
        controller.set_config(config_with_area());
        let err = InitEvacShapeProcess.start(&mut controller).unwrap_err();
        assert!(matches!(err, ControllerError::NoPrimaryShapeLayer));
    }

    #[test]
    fn test_evac_shape_loaded_once() {
        let mut controller = Controller::default();
        controller.set_config(config_with_area());
        InitShapeLayerProcess.start(&mut controller).unwrap();

        InitEvacShapeProcess.start(&mut controller).unwrap();
        InitEvacShapeProcess.start(&mut controller).unwrap();

        let layer = controller.primary_shape_render_layer().unwrap().id();
        let shapes = controller.shapes_on_layer(layer);
        assert_eq!(shapes.len(), 1);
        assert_eq!(shapes[0].role(), ShapeRole::EvacuationArea);
    }

    #[test]
    fn test_no_area_configured() {
        let mut controller = Controller::default();
        controller.set_config(EvacuationConfig::default());
        InitShapeLayerProcess.start(&mut controller).unwrap();
        InitEvacShapeProcess.start(&mut controller).unwrap();
        assert_eq!(controller.shape_count(), 0);
    }
}
