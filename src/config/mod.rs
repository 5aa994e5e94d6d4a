pub mod env;
mod loader;

pub use env::{AnalysisConfig, AppConfig, ConfigError, DirectoryConfig, LoggingConfig, PanelConfig};
pub use loader::{load_config, validate_api_url};
