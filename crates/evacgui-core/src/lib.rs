//! evacgui Core Library
//!
//! Module lifecycle engine for the evacuation map editor: the controller that
//! modules share, the process chains they run on activation, render layers,
//! map shapes and the population area selector.

pub mod config;
pub mod controller;
pub mod error;
pub mod image;
pub mod input;
pub mod layer;
pub mod listener;
pub mod locale;
pub mod map;
pub mod module;
pub mod panel;
pub mod population;
pub mod process;
pub mod shapes;
pub mod toolbox;

pub use config::EvacuationConfig;
pub use controller::Controller;
pub use error::{ControllerError, Result};
pub use image::ImageContainer;
pub use input::{KeyEvent, MouseButton, PointerEvent};
pub use layer::{LayerId, LayerKind, RenderLayer, Visualizer};
pub use listener::{ModuleListener, SharedListener};
pub use locale::{Language, Locale};
pub use map::MapViewer;
pub use module::{Module, ModuleBase, ModuleId, ModuleType};
pub use panel::{ComponentHandle, MainPanel};
pub use population::{PopAreaSelector, PopToolBox};
pub use process::{FnProcess, Process, ProcessChain};
pub use shapes::{Shape, ShapeFactory, ShapeId, ShapeRole};
pub use toolbox::{LazyToolBox, SharedToolBox, ToolBox};
