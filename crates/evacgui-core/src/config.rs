//! Evacuation scenario configuration.

use crate::error::{ControllerError, Result};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default number of inhabitants assigned to a newly drawn population area.
pub const DEFAULT_POPULATION: u32 = 100;

/// Network extent assumed when the scenario does not give one.
pub const DEFAULT_NETWORK_BOUNDS: Rect = Rect::new(0.0, 0.0, 1000.0, 1000.0);

fn default_population() -> u32 {
    DEFAULT_POPULATION
}

fn default_network_bounds() -> Option<Rect> {
    Some(DEFAULT_NETWORK_BOUNDS)
}

/// Scenario settings the modules are initialised from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvacuationConfig {
    pub scenario_name: String,
    /// Extent of the road network in world coordinates.
    #[serde(default = "default_network_bounds")]
    pub network_bounds: Option<Rect>,
    /// Vertices of the evacuation area polygon (may be empty).
    #[serde(default)]
    pub evacuation_area: Vec<Point>,
    /// Where the map should be centered; defaults to the bounding box center.
    #[serde(default)]
    pub map_center: Option<Point>,
    #[serde(default = "default_population")]
    pub default_population: u32,
}

impl Default for EvacuationConfig {
    fn default() -> Self {
        Self {
            scenario_name: "default".to_string(),
            network_bounds: default_network_bounds(),
            evacuation_area: Vec::new(),
            map_center: None,
            default_population: DEFAULT_POPULATION,
        }
    }
}

impl EvacuationConfig {
    /// Load a configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|e| {
            ControllerError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json(&json).map_err(|e| {
            ControllerError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Scenario extent: the network bounds, widened to include the
    /// evacuation area. None if neither is known.
    pub fn bounding_box(&self) -> Option<Rect> {
        let area = self
            .evacuation_area
            .iter()
            .fold(None::<Rect>, |acc, p| match acc {
                Some(r) => Some(r.union_pt(*p)),
                None => Some(Rect::from_points(*p, *p)),
            });
        match (self.network_bounds.map(|r| r.abs()), area) {
            (Some(net), Some(area)) => Some(net.union(area)),
            (net, area) => net.or(area),
        }
    }

    /// Map center: explicit setting or the bounding box center.
    pub fn map_center(&self) -> Option<Point> {
        self.map_center
            .or_else(|| self.bounding_box().map(|r| r.center()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_has_bounds() {
        let config = EvacuationConfig::default();
        assert_eq!(config.bounding_box(), Some(Rect::new(0.0, 0.0, 1000.0, 1000.0)));
        assert_eq!(config.map_center(), Some(Point::new(500.0, 500.0)));
    }

    #[test]
    fn test_bounding_box_includes_evacuation_area() {
        let config = EvacuationConfig {
            network_bounds: Some(Rect::new(0.0, 0.0, 10.0, 10.0)),
            evacuation_area: vec![Point::new(5.0, 5.0), Point::new(20.0, -5.0)],
            ..Default::default()
        };
        assert_eq!(config.bounding_box(), Some(Rect::new(0.0, -5.0, 20.0, 10.0)));
    }

    #[test]
    fn test_no_extent() {
        let config = EvacuationConfig {
            network_bounds: None,
            ..Default::default()
        };
        assert_eq!(config.bounding_box(), None);
        assert_eq!(config.map_center(), None);
    }

    #[test]
    fn test_minimal_json_uses_defaults() {
        let config = EvacuationConfig::from_json(r#"{"scenario_name": "hamburg"}"#).unwrap();
        assert_eq!(config.scenario_name, "hamburg");
        assert_eq!(config.default_population, DEFAULT_POPULATION);
        assert!(config.evacuation_area.is_empty());
        assert_eq!(config.network_bounds, Some(DEFAULT_NETWORK_BOUNDS));
        assert_eq!(config.bounding_box(), Some(DEFAULT_NETWORK_BOUNDS));
    }

    #[test]
    fn test_explicit_null_bounds_has_no_extent() {
        let config =
            EvacuationConfig::from_json(r#"{"scenario_name": "x", "network_bounds": null}"#).unwrap();
        assert!(config.network_bounds.is_none());
        assert!(config.bounding_box().is_none());
    }

    #[test]
    fn test_load_from_file() {
        let config = EvacuationConfig {
            scenario_name: "padang".to_string(),
            evacuation_area: vec![Point::new(1.0, 1.0), Point::new(2.0, 1.0), Point::new(2.0, 2.0)],
            ..Default::default()
        };
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(config.to_json().unwrap().as_bytes()).unwrap();

        let loaded = EvacuationConfig::load(file.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = EvacuationConfig::load(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, ControllerError::Config(_)));
    }

    #[test]
    fn test_load_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();
        let err = EvacuationConfig::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }
}
