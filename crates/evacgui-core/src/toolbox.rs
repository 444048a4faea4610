//! Tool boxes: the per-module editing panel shown next to the map.

use crate::controller::Controller;
use std::cell::{OnceCell, RefCell};
use std::rc::Rc;

/// A module's tool panel.
pub trait ToolBox {
    fn title(&self) -> &str;

    /// Pull state from the controller. Called every time the tool box is
    /// installed into the controller's tool box slot.
    fn refresh(&mut self, controller: &Controller);
}

/// Tool box shared between its module, its listener and the controller.
pub type SharedToolBox = Rc<RefCell<dyn ToolBox>>;

/// A tool box that is constructed on first access and then cached.
pub struct LazyToolBox<T> {
    cell: OnceCell<Rc<RefCell<T>>>,
    init: Box<dyn Fn() -> T>,
}

impl<T: ToolBox + 'static> LazyToolBox<T> {
    pub fn new(init: impl Fn() -> T + 'static) -> Self {
        Self {
            cell: OnceCell::new(),
            init: Box::new(init),
        }
    }

    /// The tool box, constructing it on the first call.
    pub fn get(&self) -> Rc<RefCell<T>> {
        self.cell
            .get_or_init(|| {
                log::debug!("constructing tool box");
                Rc::new(RefCell::new((self.init)()))
            })
            .clone()
    }

    /// The tool box if it has already been constructed.
    pub fn get_if_initialized(&self) -> Option<Rc<RefCell<T>>> {
        self.cell.get().cloned()
    }

    /// Type-erased handle for the controller's tool box slot.
    pub fn shared(&self) -> SharedToolBox {
        self.get()
    }
}
