//! Loading the evacuation scenario configuration.

use super::Process;
use crate::config::EvacuationConfig;
use crate::controller::Controller;
use crate::error::{ControllerError, Result};
use kurbo::Rect;

/// Loads the evacuation configuration and derives the bounding box.
///
/// A configuration already present is kept; only a missing bounding box is
/// derived from it. Otherwise the file comes from
/// the controller's configuration path; without one the defaults are used.
/// Fails if the scenario has no spatial extent.
#[derive(Debug, Default)]
pub struct InitEvacuationConfigProcess;

impl Process for InitEvacuationConfigProcess {
    fn name(&self) -> &str {
        "init evacuation config"
    }

    fn start(&mut self, controller: &mut Controller) -> Result<()> {
        if let Some(config) = controller.config() {
            log::debug!("evacuation config already loaded");
            if controller.bounding_box().is_none() {
                let bounding_box = require_extent(config)?;
                controller.set_bounding_box(Some(bounding_box));
            }
            return Ok(());
        }

        let config = match controller.config_path() {
            Some(path) => {
                log::info!("loading evacuation config from {}", path.display());
                EvacuationConfig::load(path)?
            }
            None => {
                log::info!("no evacuation config given, using defaults");
                EvacuationConfig::default()
            }
        };

        let bounding_box = require_extent(&config)?;
        controller.set_bounding_box(Some(bounding_box));
        controller.set_config(config);
        Ok(())
    }
}

/// The scenario's bounding box; a scenario without one cannot be edited.
fn require_extent(config: &EvacuationConfig) -> Result<Rect> {
    config.bounding_box().ok_or_else(|| {
        ControllerError::Config(format!(
            "scenario '{}' has no spatial extent",
            config.scenario_name
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_without_path() {
        let mut controller = Controller::default();
        InitEvacuationConfigProcess.start(&mut controller).unwrap();
        assert_eq!(controller.config().unwrap().scenario_name, "default");
        assert_eq!(controller.bounding_box(), Some(Rect::new(0.0, 0.0, 1000.0, 1000.0)));
    }

    #[test]
    fn test_loads_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            br#"{"scenario_name": "coast", "network_bounds": {"x0": 10.0, "y0": 20.0, "x1": 30.0, "y1": 40.0}}"#,
        )
        .unwrap();

        let mut controller = Controller::new([file.path().display().to_string()]);
        InitEvacuationConfigProcess.start(&mut controller).unwrap();
        assert_eq!(controller.config().unwrap().scenario_name, "coast");
        assert_eq!(controller.bounding_box(), Some(Rect::new(10.0, 20.0, 30.0, 40.0)));
    }

    #[test]
    fn test_existing_config_is_kept() {
        let mut controller = Controller::new(["/does/not/exist.json".to_string()]);
        controller.set_config(EvacuationConfig {
            scenario_name: "preset".to_string(),
            ..Default::default()
        });

        InitEvacuationConfigProcess.start(&mut controller).unwrap();
        assert_eq!(controller.config().unwrap().scenario_name, "preset");
        assert_eq!(controller.bounding_box(), Some(Rect::new(0.0, 0.0, 1000.0, 1000.0)));
    }

    #[test]
    fn test_missing_file_fails() {
        let mut controller = Controller::new(["/does/not/exist.json".to_string()]);
        let err = InitEvacuationConfigProcess.start(&mut controller).unwrap_err();
        assert!(matches!(err, ControllerError::Config(_)));
        assert!(controller.config().is_none());
    }

    #[test]
    fn test_minimal_file_gets_default_extent() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"scenario_name": "hamburg"}"#).unwrap();

        let mut controller = Controller::new([file.path().display().to_string()]);
        InitEvacuationConfigProcess.start(&mut controller).unwrap();
        assert_eq!(controller.bounding_box(), Some(Rect::new(0.0, 0.0, 1000.0, 1000.0)));
    }

    #[test]
    fn test_scenario_without_extent_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"scenario_name": "void", "network_bounds": null}"#)
            .unwrap();

        let mut controller = Controller::new([file.path().display().to_string()]);
        let err = InitEvacuationConfigProcess.start(&mut controller).unwrap_err();
        assert!(matches!(err, ControllerError::Config(ref msg) if msg.contains("no spatial extent")));
        assert!(controller.config().is_none());
        assert!(controller.bounding_box().is_none());
    }
}
