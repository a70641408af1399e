use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use backoffice_core::{PollSettings, RedirectSettings, DEFAULT_POLL_INTERVAL};
use backoffice_engine::StatusSettings;
use backoffice_logging::backoffice_info;
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_CONFIG_PATH: &str = "backoffice.ron";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
    #[error("invalid page url {url:?}: {message}")]
    PageUrl { url: String, message: String },
    #[error("poller.{field} must be greater than zero")]
    ZeroDuration { field: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub poller: PollerConfig,
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PollerConfig {
    pub endpoint: String,
    /// URL of the page showing the long loader; its origin prefixes redirects.
    pub page_url: String,
    pub redirect: Option<String>,
    pub redirect_get: Option<String>,
    pub settings_url: String,
    pub module: String,
    pub interval_ms: u64,
    pub timeout_ms: u64,
    pub debug: bool,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost/backend/ajax.php".to_string(),
            page_url: "http://localhost/private/en/analytics/index".to_string(),
            redirect: None,
            redirect_get: None,
            settings_url: "http://localhost/private/en/analytics/settings".to_string(),
            module: "analytics".to_string(),
            interval_ms: DEFAULT_POLL_INTERVAL.as_millis() as u64,
            timeout_ms: 5000,
            debug: false,
        }
    }
}

impl PollerConfig {
    pub fn poll_settings(&self) -> Result<PollSettings, ConfigError> {
        if self.interval_ms == 0 {
            return Err(ConfigError::ZeroDuration {
                field: "interval_ms",
            });
        }
        if self.timeout_ms == 0 {
            return Err(ConfigError::ZeroDuration {
                field: "timeout_ms",
            });
        }
        let redirect = RedirectSettings::from_page_url(
            &self.page_url,
            self.redirect.clone(),
            self.redirect_get.clone(),
            self.settings_url.clone(),
        )
        .map_err(|err| ConfigError::PageUrl {
            url: self.page_url.clone(),
            message: err.to_string(),
        })?;
        Ok(PollSettings {
            interval: Duration::from_millis(self.interval_ms),
            redirect,
            debug: self.debug,
        })
    }

    pub fn status_settings(&self) -> StatusSettings {
        StatusSettings {
            endpoint: self.endpoint.clone(),
            request_timeout: Duration::from_millis(self.timeout_ms),
            extra_query: vec![("fork[module]".to_string(), self.module.clone())],
            ..StatusSettings::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub modules_root: PathBuf,
    pub store: PathBuf,
    pub labels: Option<PathBuf>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            modules_root: PathBuf::from("backend/modules"),
            store: PathBuf::from("modules.ron"),
            labels: None,
        }
    }
}

/// Loads the config file; a missing file means defaults.
pub fn load(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            backoffice_info!("No config at {:?}; using defaults", path);
            return Ok(AppConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    ron::from_str(&content).map_err(|err| ConfigError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let config = load(&temp.path().join("absent.ron")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.poller.interval_ms, 5000);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("backoffice.ron");
        fs::write(
            &path,
            r#"(poller: (page_url: "https://cms.example.com:8443/private/en/analytics", debug: true))"#,
        )
        .unwrap();

        let config = load(&path).unwrap();
        assert!(config.poller.debug);
        assert_eq!(config.catalog, CatalogConfig::default());

        let settings = config.poller.poll_settings().unwrap();
        assert_eq!(settings.redirect.origin, "https://cms.example.com:8443");
        assert_eq!(settings.interval, Duration::from_millis(5000));
    }

    #[test]
    fn bad_page_url_is_reported() {
        let config = PollerConfig {
            page_url: "not a url".to_string(),
            ..PollerConfig::default()
        };
        assert!(matches!(
            config.poll_settings(),
            Err(ConfigError::PageUrl { .. })
        ));
    }

    #[test]
    fn zero_interval_or_timeout_is_rejected() {
        let config = PollerConfig {
            interval_ms: 0,
            ..PollerConfig::default()
        };
        assert!(matches!(
            config.poll_settings(),
            Err(ConfigError::ZeroDuration {
                field: "interval_ms"
            })
        ));

        let config = PollerConfig {
            timeout_ms: 0,
            ..PollerConfig::default()
        };
        assert!(matches!(
            config.poll_settings(),
            Err(ConfigError::ZeroDuration {
                field: "timeout_ms"
            })
        ));
    }

    #[test]
    fn garbage_is_a_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("backoffice.ron");
        fs::write(&path, "(poller: [").unwrap();
        assert!(matches!(load(&path), Err(ConfigError::Parse { .. })));
    }
}
