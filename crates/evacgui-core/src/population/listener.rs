//! Pointer handling of the population area selector.

use super::PopToolBox;
use crate::controller::Controller;
use crate::error::Result;
use crate::input::{KeyEvent, MouseButton, PointerEvent};
use crate::listener::ModuleListener;
use crate::shapes::{ShapeFactory, ShapeRole};
use crate::toolbox::LazyToolBox;
use kurbo::{Point, Vec2};
use std::rc::Rc;

/// Minimum pointer travel (screen pixels) before another vertex is recorded.
const MIN_VERTEX_SPACING: f64 = 4.0;

/// How close (screen pixels) a right click must come to an area outline.
const HIT_TOLERANCE: f64 = 4.0;

/// Zoom factor per scroll step.
const SCROLL_ZOOM_STEP: f64 = 1.1;

/// State of a drawing interaction.
#[derive(Debug, Clone, Default)]
enum DrawState {
    #[default]
    Idle,
    /// A polygon is being dragged out.
    Drawing {
        /// Vertices in world coordinates.
        points: Vec<Point>,
        /// Last recorded vertex in screen coordinates.
        last_screen: Point,
    },
}

/// Draws population areas with the left button and deletes them with the right.
pub struct PopEventListener {
    tool_box: Rc<LazyToolBox<PopToolBox>>,
    state: DrawState,
}

impl PopEventListener {
    pub fn new(tool_box: Rc<LazyToolBox<PopToolBox>>) -> Self {
        Self {
            tool_box,
            state: DrawState::Idle,
        }
    }

    /// Whether a polygon is currently being drawn.
    pub fn is_drawing(&self) -> bool {
        matches!(self.state, DrawState::Drawing { .. })
    }

    pub fn cancel(&mut self) {
        self.state = DrawState::Idle;
    }

    fn begin(&mut self, controller: &Controller, screen: Point) {
        self.state = DrawState::Drawing {
            points: vec![controller.screen_to_world(screen)],
            last_screen: screen,
        };
    }

    fn update(&mut self, controller: &Controller, screen: Point) {
        if let DrawState::Drawing {
            points,
            last_screen,
        } = &mut self.state
        {
            if screen.distance(*last_screen) >= MIN_VERTEX_SPACING {
                points.push(controller.screen_to_world(screen));
                *last_screen = screen;
            }
        }
    }

    /// Finish the polygon and register it as a population area.
    fn end(&mut self, controller: &mut Controller, screen: Point) -> Result<()> {
        self.update(controller, screen);
        let DrawState::Drawing { points, .. } = std::mem::take(&mut self.state) else {
            return Ok(());
        };
        if points.len() < 3 {
            log::debug!("discarding population area with {} vertices", points.len());
            return Ok(());
        }

        let layer = controller.primary_shape_render_layer()?.id();
        let tool_box = self.tool_box.get();
        let population = tool_box.borrow().default_population();
        let id = controller.add_shape(ShapeFactory::population_area_shape(layer, points, population))?;
        tool_box.borrow_mut().add_area(id, population);
        log::info!("added population area {} ({} inhabitants)", id, population);
        Ok(())
    }

    /// Remove the topmost population area under or next to the pointer.
    fn remove_at(&mut self, controller: &mut Controller, screen: Point) -> Result<bool> {
        let layer = controller.primary_shape_render_layer()?.id();
        let world = controller.screen_to_world(screen);
        let tolerance = world.distance(controller.screen_to_world(screen + Vec2::new(HIT_TOLERANCE, 0.0)));
        let hit = controller
            .shapes_on_layer(layer)
            .iter()
            .rev()
            .filter(|s| matches!(s.role(), ShapeRole::PopulationArea { .. }))
            .find(|s| s.hit_test(world, tolerance))
            .map(|s| s.id());

        let Some(id) = hit else {
            return Ok(false);
        };
        controller.remove_shape(id);
        self.tool_box.get().borrow_mut().remove_area(id);
        log::info!("removed population area {}", id);
        Ok(true)
    }
}

impl ModuleListener for PopEventListener {
    fn on_pointer(&mut self, controller: &mut Controller, event: &PointerEvent) -> Result<bool> {
        match *event {
            PointerEvent::Down {
                position,
                button: MouseButton::Left,
            } => {
                self.begin(controller, position);
                Ok(true)
            }
            PointerEvent::Move { position } if self.is_drawing() => {
                self.update(controller, position);
                Ok(true)
            }
            PointerEvent::Up {
                position,
                button: MouseButton::Left,
            } if self.is_drawing() => {
                self.end(controller, position)?;
                Ok(true)
            }
            PointerEvent::Down {
                position,
                button: MouseButton::Right,
            } => {
                self.cancel();
                self.remove_at(controller, position)
            }
            PointerEvent::Scroll { position, delta } => {
                let Some(viewer) = controller
                    .active_render_layer_mut()
                    .and_then(|l| l.map_viewer_mut())
                else {
                    return Ok(false);
                };
                let factor = if delta.y < 0.0 {
                    SCROLL_ZOOM_STEP
                } else {
                    1.0 / SCROLL_ZOOM_STEP
                };
                viewer.zoom_at(position, factor);
                controller.repaint();
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    fn on_key(&mut self, _controller: &mut Controller, event: &KeyEvent) -> Result<bool> {
        if event.is_press_of("Escape") && self.is_drawing() {
            self.cancel();
            return Ok(true);
        }
        Ok(false)
    }

    fn reset(&mut self) {
        self.cancel();
    }
}
