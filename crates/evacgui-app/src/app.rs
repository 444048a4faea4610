//! Standalone shell hosting one editor module.

use evacgui_core::{
    ComponentHandle, Controller, ImageContainer, Locale, MainPanel, Module, PopAreaSelector,
    Result,
};
use kurbo::Size;

/// Window and image settings of the standalone shell.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Border kept free around the map image.
    pub border: u32,
    /// Language tag such as `de_DE.UTF-8`; English when unset.
    pub language_tag: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Population Area Selector".to_string(),
            width: 1024,
            height: 768,
            border: 30,
            language_tag: None,
        }
    }
}

/// Headless top-level window hosting the module's main panel.
#[derive(Debug, Clone)]
pub struct DefaultWindow {
    handle: ComponentHandle,
    title: String,
    panel: MainPanel,
}

impl DefaultWindow {
    pub fn new(title: impl Into<String>, panel_size: Size) -> Self {
        Self {
            handle: ComponentHandle::next(),
            title: title.into(),
            panel: MainPanel::new(panel_size),
        }
    }

    pub fn handle(&self) -> ComponentHandle {
        self.handle
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn main_panel(&self) -> &MainPanel {
        &self.panel
    }
}

/// A started standalone session.
pub struct App {
    pub controller: Controller,
    pub module: PopAreaSelector,
    pub window: DefaultWindow,
}

impl App {
    /// Bootstrap the population area selector from raw process arguments.
    pub fn run<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_config(args, AppConfig::default())
    }

    pub fn with_config<I, S>(args: I, config: AppConfig) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut controller = Controller::new(args);
        if let Some(tag) = &config.language_tag {
            controller.set_locale(Locale::from_tag(tag));
        }
        let image = ImageContainer::new(config.width, config.height, config.border);
        let panel_size = image.panel_size();
        log::debug!(
            "image buffer {}x{} ({} pixels), border {}",
            image.width(),
            image.height(),
            image.pixels().len(),
            image.border()
        );
        controller.set_image_container(image);
        controller.set_standalone(true);

        let mut module = PopAreaSelector::new(&controller);
        let window = DefaultWindow::new(format!("{} - {}", config.title, module.title()), panel_size);
        controller.set_parent_component(window.handle());
        controller.set_main_panel(window.main_panel().clone(), true);

        module.start(&mut controller)?;
        controller.request_focus();

        Ok(Self {
            controller,
            module,
            window,
        })
    }

    /// One-line description of the session state for the log.
    pub fn summary(&self) -> String {
        let scenario = self
            .controller
            .config()
            .map(|c| c.scenario_name.as_str())
            .unwrap_or("none");
        format!(
            "'{}' ready: scenario '{}', {} layers, {} shapes, {} population areas ({} inhabitants)",
            self.window.title(),
            scenario,
            self.controller.visualizer().len(),
            self.controller.shape_count(),
            self.module.pop_area_count(),
            self.module.tool_box().borrow().total_population(),
        )
    }
}
