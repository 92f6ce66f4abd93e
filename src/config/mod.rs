//! Sequence configuration: timings, lazy-load attributes, logging.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{
    Config, LoggingConfig, SequenceConfig, DATA_SRC, DATA_SRC_URL, DEFAULT_LOADER_DURATION_MS,
    DEFAULT_WELCOME_DURATION_MS,
};
