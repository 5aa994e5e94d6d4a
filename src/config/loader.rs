use std::{env, str::FromStr, time::Duration};

use url::Url;

use super::env::{
    AnalysisConfig, AppConfig, ConfigError, DirectoryConfig, LoggingConfig, PanelConfig,
    DEFAULT_API_URL, DEFAULT_IDLE_LABEL,
};

pub fn load_config() -> Result<AppConfig, ConfigError> {
    AppConfig::from_env()
}

impl AppConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let api_url = env::var("ANALYSIS_API_URL")
            .map(|v| v.trim().to_string())
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let analysis = AnalysisConfig {
            api_url: validate_api_url("ANALYSIS_API_URL", api_url)?,
            timeout: Duration::from_millis(parse_or("ANALYSIS_TIMEOUT_MS", 30_000)?),
            include_attachments: parse_bool("INCLUDE_ATTACHMENTS", true)?,
            attachment_max_bytes: parse_or("ATTACHMENT_MAX_BYTES", 10 * 1024 * 1024)?,
        };

        let panel = PanelConfig {
            idle_label: env::var("IDLE_LABEL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_IDLE_LABEL.to_string()),
        };

        let directories = DirectoryConfig {
            logs_dir: env::var("LOGS_DIR").unwrap_or_else(|_| "logs".to_string()),
        };

        let logging = LoggingConfig {
            level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            file_name: env::var("LOG_FILE")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| "cleardrop.log".to_string()),
            console: parse_bool("LOG_CONSOLE", true)?,
        };

        Ok(Self {
            analysis,
            panel,
            directories,
            logging,
        })
    }
}

/// An empty URL is allowed here; the analysis flow reports it to the user.
pub fn validate_api_url(key: &'static str, value: String) -> Result<String, ConfigError> {
    if value.is_empty() {
        return Ok(value);
    }
    match Url::parse(&value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(value),
        _ => Err(ConfigError::InvalidUrl(key, value)),
    }
}

fn parse_or<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { key, value }),
        Err(_) => Ok(default),
    }
}

fn parse_bool(key: &'static str, default: bool) -> Result<bool, ConfigError> {
    match env::var(key) {
        Ok(value) => match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::Invalid { key, value }),
        },
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_must_be_http() {
        assert!(validate_api_url("K", "https://a.test/analyze".into()).is_ok());
        assert!(validate_api_url("K", String::new()).is_ok());
        assert!(matches!(
            validate_api_url("K", "ftp://a.test".into()),
            Err(ConfigError::InvalidUrl("K", _))
        ));
        assert!(validate_api_url("K", "not a url".into()).is_err());
    }
}
