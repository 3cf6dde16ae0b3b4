use config::{Config, ConfigError};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    hue: HueConfig,
}

impl AppConfig {
    /// Loads `config.toml`, overlays `config_local.toml` when present and finally the environment, e.g. `HUE__URL`.
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::default().separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn hue(&self) -> &HueConfig {
        &self.hue
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct HueConfig {
    url: String,
    application_key: String,
    #[serde(default = "default_parallel_requests")]
    parallel_requests: usize,
    #[serde(default = "default_request_timeout", with = "humantime_serde")]
    request_timeout: Duration,
}

fn default_parallel_requests() -> usize {
    5
}

fn default_request_timeout() -> Duration {
    Duration::from_secs(5)
}

impl HueConfig {
    pub fn new(url: impl Into<String>, application_key: impl Into<String>) -> Self {
        HueConfig {
            url: url.into(),
            application_key: application_key.into(),
            parallel_requests: default_parallel_requests(),
            request_timeout: default_request_timeout(),
        }
    }

    pub fn with_parallel_requests(mut self, parallel_requests: usize) -> Self {
        self.parallel_requests = parallel_requests;
        self
    }

    pub fn with_request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn application_key(&self) -> &str {
        &self.application_key
    }

    pub fn parallel_requests(&self) -> usize {
        self.parallel_requests
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// The v1 API root, `http://<host>/api/<application-key>/`.
    pub fn api_base(&self) -> String {
        format!("{}/api/{}/", self.url.trim_end_matches('/'), self.application_key)
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                hue: HueConfig::new("http://hue.url", "key"),
            },
        }
    }

    pub fn hue_url(mut self, url: String) -> Self {
        self.config.hue.url = url;
        self
    }

    pub fn parallel_requests(mut self, parallel_requests: usize) -> Self {
        self.config.hue.parallel_requests = parallel_requests;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
