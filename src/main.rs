mod app;
mod charts;
mod config;
mod editor;
mod error;
mod logging;
mod model;
mod roster;
mod screens;
use std::path::Path;

use app::App;
use config::{Config, CONFIG_FILE};
use iced::Task;
use logging::init_logging;

fn main() -> iced::Result {
    // Logging is not up yet, so a bad config is reported right after.
    let (config, config_error) = match Config::load(Path::new(CONFIG_FILE)) {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };
    init_logging(config.verbosity);
    if let Some(err) = config_error {
        tracing::warn!(error = %err, "using default configuration");
    }

    iced::application("Student Records", App::update, App::view)
        .theme(|app: &App| app.theme.clone())
        .window_size(iced::Size::new(1400.0, 800.0))
        .run_with(move || (App::from_config(&config), Task::none()))
}
