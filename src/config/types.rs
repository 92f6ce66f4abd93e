use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub sequence: SequenceConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Timings and lazy-load settings for the reveal sequence.
///
/// Fixed at construction; the controller never reconfigures itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceConfig {
    /// How long the loader stays up before the welcome overlay (default: 4000).
    #[serde(default = "default_loader_duration_ms")]
    pub loader_duration_ms: u64,
    /// How long the welcome overlay stays up before the hero (default: 3000).
    #[serde(default = "default_welcome_duration_ms")]
    pub welcome_duration_ms: u64,
    /// Attributes consulted, in order, for the deferred resource URL.
    #[serde(default = "default_deferred_source_attributes")]
    pub deferred_source_attributes: Vec<String>,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

pub const DEFAULT_LOADER_DURATION_MS: u64 = 4000;
pub const DEFAULT_WELCOME_DURATION_MS: u64 = 3000;

/// Primary deferred-source attribute.
pub const DATA_SRC: &str = "data-src";
/// Fallback deferred-source attribute.
pub const DATA_SRC_URL: &str = "data-src-url";

fn default_loader_duration_ms() -> u64 {
    DEFAULT_LOADER_DURATION_MS
}

fn default_welcome_duration_ms() -> u64 {
    DEFAULT_WELCOME_DURATION_MS
}

fn default_deferred_source_attributes() -> Vec<String> {
    vec![DATA_SRC.to_string(), DATA_SRC_URL.to_string()]
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl SequenceConfig {
    pub fn loader_duration(&self) -> Duration {
        Duration::from_millis(self.loader_duration_ms)
    }

    pub fn welcome_duration(&self) -> Duration {
        Duration::from_millis(self.welcome_duration_ms)
    }

    /// Same defaults with both timers set to the given durations.
    pub fn with_durations(loader_duration_ms: u64, welcome_duration_ms: u64) -> Self {
        Self {
            loader_duration_ms,
            welcome_duration_ms,
            ..Self::default()
        }
    }
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            loader_duration_ms: default_loader_duration_ms(),
            welcome_duration_ms: default_welcome_duration_ms(),
            deferred_source_attributes: default_deferred_source_attributes(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}
