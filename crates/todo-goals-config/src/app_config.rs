//! Application configuration
//!
//! Configuration loaded from .todo-goals.toml file.

use serde::{Deserialize, Serialize};

/// Application configuration loaded from .todo-goals.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Prompt printed before reading a command
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Marker rendered in front of completed todos
    #[serde(default = "default_done_marker")]
    pub done_marker: String,

    /// Marker rendered in front of open todos
    #[serde(default = "default_open_marker")]
    pub open_marker: String,

    /// Print a "N of M todos done" line after the lists
    #[serde(default = "default_show_summary")]
    pub show_summary: bool,

    /// Log level used when RUST_LOG is not set (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_prompt() -> String {
    "> ".to_string()
}

fn default_done_marker() -> String {
    "[x]".to_string()
}

fn default_open_marker() -> String {
    "[ ]".to_string()
}

fn default_show_summary() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            done_marker: default_done_marker(),
            open_marker: default_open_marker(),
            show_summary: default_show_summary(),
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match Self::parse(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    /// Parse config from TOML content
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
