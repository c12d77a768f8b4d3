use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Heading prepended to a transcript when combined with page Markdown
    #[serde(default = "default_caption_heading")]
    pub caption_heading: String,

    /// HTTP request timeout in seconds for remote caption tracks
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// File extension for written transcripts (without leading dot)
    #[serde(default = "default_output_extension")]
    pub output_extension: String,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_caption_heading() -> String {
    "Video caption:".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_output_extension() -> String {
    "txt".to_string()
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.request_timeout_secs == 0 {
            return Err(anyhow!("request_timeout_secs must be greater than zero"));
        }

        let extension = self.output_extension.trim_start_matches('.');
        if extension.is_empty() {
            return Err(anyhow!("output_extension must not be empty"));
        }
        if extension.contains(std::path::is_separator) {
            return Err(anyhow!(
                "output_extension must not contain path separators: {}",
                self.output_extension
            ));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            caption_heading: default_caption_heading(),
            request_timeout_secs: default_request_timeout_secs(),
            output_extension: default_output_extension(),
            log_level: LogLevel::default(),
        }
    }
}
