//! Standalone population area selector.
//!
//! Usage: `pop-area-selector [config.json]`

use evacgui_app::{App, AppConfig};
use std::error::Error;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Starting population area selector");

    let config = AppConfig {
        language_tag: std::env::var("LANG").ok(),
        ..Default::default()
    };

    match App::with_config(std::env::args().skip(1), config) {
        Ok(app) => log::info!("{}", app.summary()),
        Err(e) => {
            log::error!("Failed to start: {}", e);
            let mut source = e.source();
            while let Some(cause) = source {
                log::error!("  caused by: {}", cause);
                source = cause.source();
            }
            std::process::exit(1);
        }
    }
}
