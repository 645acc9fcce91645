use std::env;
use std::path::PathBuf;
use std::time::Duration;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde_derive::Deserialize;

#[derive(Deserialize, Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub request_timeout_secs: u64,
    pub open_library_url: String,
    pub anilist_url: String,
    pub readarr_base_url: Option<String>,
    pub readarr_api_key: Option<String>,
    pub kapowarr_base_url: Option<String>,
    pub kapowarr_api_key: Option<String>,
}

/// Location and credentials of one self-hosted acquisition service.
/// Either half may be missing; callers decide what that means.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceEndpoint {
    pub base_url: Option<String>,
    pub api_key: Option<String>,
}

impl ServiceEndpoint {
    pub fn new(base_url: Option<&str>, api_key: Option<&str>) -> Self {
        Self {
            base_url: non_blank(base_url).map(|url| url.trim_end_matches('/').to_string()),
            api_key: non_blank(api_key).map(str::to_string),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.base_url.is_some() && self.api_key.is_some()
    }
}

impl AppConfig {
    pub fn new() -> Result<Self, ConfigError> {
        let config_file = AppConfig::get_config_directory().join("config.yml");

        let mut builder = Config::builder();
        if config_file.exists() {
            builder = builder.add_source(File::from(config_file))
        }
        builder = builder.add_source(Environment::default());

        AppConfig::from_builder(builder)
    }

    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder
            .set_default("port", "3001")?
            .set_default("request_timeout_secs", "15")?
            .set_default("open_library_url", "https://openlibrary.org")?
            .set_default("anilist_url", "https://graphql.anilist.co")?
            .build()?
            .try_deserialize()
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn readarr(&self) -> ServiceEndpoint {
        ServiceEndpoint::new(self.readarr_base_url.as_deref(), self.readarr_api_key.as_deref())
    }

    pub fn kapowarr(&self) -> ServiceEndpoint {
        ServiceEndpoint::new(self.kapowarr_base_url.as_deref(), self.kapowarr_api_key.as_deref())
    }

    fn get_config_directory() -> PathBuf {
        env::var("MEDIA_FINDER_CONF_DIR")
            .map(PathBuf::from)
            .or_else(|_| env::current_dir())
            .unwrap_or_else(|_| PathBuf::from("."))
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use config::FileFormat;

    use super::*;

    #[test]
    fn defaults_apply_without_any_source() {
        let config = AppConfig::from_builder(Config::builder()).unwrap();

        assert_eq!(config.port, 3001);
        assert_eq!(config.request_timeout(), Duration::from_secs(15));
        assert_eq!(config.open_library_url, "https://openlibrary.org");
        assert_eq!(config.anilist_url, "https://graphql.anilist.co");
        assert_eq!(config.readarr(), ServiceEndpoint::default());
        assert!(!config.kapowarr().is_complete());
    }

    #[test]
    fn file_values_override_defaults() {
        let yaml = "port: 4000\nreadarr_base_url: http://readarr.local:8787/\nreadarr_api_key: secret\n";
        let builder = Config::builder().add_source(File::from_str(yaml, FileFormat::Yaml));
        let config = AppConfig::from_builder(builder).unwrap();

        assert_eq!(config.port, 4000);
        let readarr = config.readarr();
        assert_eq!(readarr.base_url.as_deref(), Some("http://readarr.local:8787"));
        assert_eq!(readarr.api_key.as_deref(), Some("secret"));
        assert!(readarr.is_complete());
    }

    #[test]
    fn blank_credentials_count_as_missing() {
        let endpoint = ServiceEndpoint::new(Some("http://kapowarr:5656"), Some("   "));

        assert_eq!(endpoint.api_key, None);
        assert!(!endpoint.is_complete());
    }

    #[test]
    fn invalid_port_is_rejected() {
        let builder = Config::builder()
            .add_source(File::from_str("port: not-a-port", FileFormat::Yaml));

        assert!(AppConfig::from_builder(builder).is_err());
    }
}
