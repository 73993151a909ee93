pub mod app;
pub mod config;
pub mod event;
pub mod logging;
pub mod paths;
pub mod runtime;
pub mod terminal;
pub mod view;

pub use app::{Control, Focus, SignupApp, Status};
pub use config::{Config, ConfigError, LogLevel};
pub use logging::LoggingError;
