//! Tool box of the population area selector.

use crate::config::DEFAULT_POPULATION;
use crate::controller::Controller;
use crate::locale::Locale;
use crate::shapes::{ShapeId, ShapeRole};
use crate::toolbox::ToolBox;
use kurbo::Rect;

/// A population area known to the tool box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopArea {
    pub shape_id: ShapeId,
    pub population: u32,
}

/// Lists the drawn population areas and the population for new ones.
#[derive(Debug, Clone)]
pub struct PopToolBox {
    title: String,
    areas: Vec<PopArea>,
    default_population: u32,
    /// Bounds of the evacuation area seen at the last installation.
    evacuation_area: Option<Rect>,
    installs: u32,
}

impl PopToolBox {
    pub fn new(locale: &Locale) -> Self {
        Self {
            title: locale.module_pop_area_selector().to_string(),
            areas: Vec::new(),
            default_population: DEFAULT_POPULATION,
            evacuation_area: None,
            installs: 0,
        }
    }

    pub fn pop_area_count(&self) -> usize {
        self.areas.len()
    }

    pub fn areas(&self) -> &[PopArea] {
        &self.areas
    }

    pub fn total_population(&self) -> u64 {
        self.areas.iter().map(|a| u64::from(a.population)).sum()
    }

    pub fn default_population(&self) -> u32 {
        self.default_population
    }

    pub fn evacuation_area(&self) -> Option<Rect> {
        self.evacuation_area
    }

    /// How often the tool box has been installed.
    pub fn installs(&self) -> u32 {
        self.installs
    }

    pub fn add_area(&mut self, shape_id: ShapeId, population: u32) {
        self.areas.push(PopArea {
            shape_id,
            population,
        });
    }

    pub fn remove_area(&mut self, shape_id: ShapeId) -> Option<PopArea> {
        let pos = self.areas.iter().position(|a| a.shape_id == shape_id)?;
        Some(self.areas.remove(pos))
    }
}

impl ToolBox for PopToolBox {
    fn title(&self) -> &str {
        &self.title
    }

    fn refresh(&mut self, controller: &Controller) {
        self.installs += 1;
        self.title = controller.locale().module_pop_area_selector().to_string();
        if let Some(config) = controller.config() {
            self.default_population = config.default_population;
        }

        let Ok(layer) = controller.primary_shape_render_layer() else {
            self.evacuation_area = None;
            return;
        };
        let shapes = controller.shapes_on_layer(layer.id());

        self.evacuation_area = shapes
            .iter()
            .find(|s| s.role() == ShapeRole::EvacuationArea)
            .map(|s| s.bounds());
        self.areas = shapes
            .iter()
            .filter_map(|s| match s.role() {
                ShapeRole::PopulationArea { population } => Some(PopArea {
                    shape_id: s.id(),
                    population,
                }),
                _ => None,
            })
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EvacuationConfig;
    use crate::locale::Language;
    use crate::shapes::ShapeFactory;
    use kurbo::Point;

    fn triangle() -> Vec<Point> {
        vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(0.0, 10.0)]
    }

    #[test]
    fn test_add_and_remove_areas() {
        let mut tool_box = PopToolBox::new(&Locale::default());
        let a = ShapeId::new_v4();
        let b = ShapeId::new_v4();
        tool_box.add_area(a, 10);
        tool_box.add_area(b, 32);
        assert_eq!(tool_box.pop_area_count(), 2);
        assert_eq!(tool_box.total_population(), 42);

        assert_eq!(tool_box.remove_area(a).map(|p| p.population), Some(10));
        assert!(tool_box.remove_area(a).is_none());
        assert_eq!(tool_box.pop_area_count(), 1);
    }

    #[test]
    fn test_refresh_without_shape_layer() {
        let mut tool_box = PopToolBox::new(&Locale::default());
        let mut controller = Controller::default();
        controller.set_locale(Locale::new(Language::German));
        tool_box.refresh(&controller);

        assert_eq!(tool_box.installs(), 1);
        assert_eq!(tool_box.pop_area_count(), 0);
        assert!(tool_box.evacuation_area().is_none());
        assert_eq!(tool_box.title(), Locale::new(Language::German).module_pop_area_selector());
    }

    #[test]
    fn test_refresh_reads_shapes_and_config() {
        let mut controller = Controller::default();
        controller.set_config(EvacuationConfig {
            default_population: 7,
            ..Default::default()
        });
        let layer = controller.add_primary_shape_layer("shapes");
        controller
            .add_shape(ShapeFactory::evacuation_area_shape(layer, triangle()))
            .unwrap();
        let area = controller
            .add_shape(ShapeFactory::population_area_shape(layer, triangle(), 55))
            .unwrap();

        let mut tool_box = PopToolBox::new(&Locale::default());
        tool_box.refresh(&controller);

        assert_eq!(tool_box.default_population(), 7);
        assert_eq!(tool_box.evacuation_area(), Some(kurbo::Rect::new(0.0, 0.0, 10.0, 10.0)));
        assert_eq!(
            tool_box.areas(),
            &[PopArea {
                shape_id: area,
                population: 55
            }]
        );
    }
}
