//! Making sure a main render panel exists.

use super::Process;
use crate::controller::Controller;
use crate::error::Result;
use crate::panel::{DEFAULT_PANEL_SIZE, MainPanel};

/// Creates the main render panel if the host did not provide one.
/// An existing panel is reused as is.
#[derive(Debug, Default)]
pub struct InitMainPanelProcess;

impl Process for InitMainPanelProcess {
    fn name(&self) -> &str {
        "init main panel"
    }

    fn start(&mut self, controller: &mut Controller) -> Result<()> {
        if controller.main_panel().is_some() {
            log::debug!("reusing main panel");
            return Ok(());
        }

        let size = controller
            .image_container()
            .map(|image| image.panel_size())
            .unwrap_or(DEFAULT_PANEL_SIZE);
        log::info!("creating main panel ({}x{})", size.width, size.height);
        controller.set_main_panel(MainPanel::new(size), true);
        Ok(())
    }
}
