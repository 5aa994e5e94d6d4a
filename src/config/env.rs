use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_API_URL: &str = "https://cleardrop.wit-software.com/analyze";
pub const DEFAULT_IDLE_LABEL: &str = "Awaiting analysis";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub analysis: AnalysisConfig,
    pub panel: PanelConfig,
    pub directories: DirectoryConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    pub api_url: String,
    pub timeout: Duration,
    pub include_attachments: bool,
    pub attachment_max_bytes: u64,
}

#[derive(Debug, Clone)]
pub struct PanelConfig {
    pub idle_label: String,
}

#[derive(Debug, Clone)]
pub struct DirectoryConfig {
    pub logs_dir: String,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub file_name: String,
    pub console: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
    #[error("{0} must be an http(s) URL, got {1:?}")]
    InvalidUrl(&'static str, String),
}
