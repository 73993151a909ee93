use signup_form::LogSubmitHandler;
use signup_tui::{Config, logging, runtime};

fn main() {
    let (config, config_error) = match Config::load_default() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    if let Err(e) = logging::init(config.log_level.into()) {
        eprintln!("Warning: {}, logging disabled", e);
    }
    if let Some(e) = config_error {
        eprintln!("Warning: {}, using defaults", e);
        log::warn!("{}, using defaults", e);
    }
    log::info!("Starting signup form");

    if let Err(e) = runtime::run(&config, &mut LogSubmitHandler) {
        log::error!("Terminal error: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
