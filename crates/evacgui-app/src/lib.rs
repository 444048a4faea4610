//! evacgui Application
//!
//! Standalone shell that hosts an editor module in a headless window.

mod app;

pub use app::{App, AppConfig, DefaultWindow};
