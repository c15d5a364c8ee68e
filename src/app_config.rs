use chrono::FixedOffset;
use config::Config;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    core: Core,
    providers: Providers,
    display: Display,
}

impl AppConfig {
    pub fn load() -> Self {
        Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::default())
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    pub fn core(&self) -> &Core {
        &self.core
    }

    pub fn providers(&self) -> &Providers {
        &self.providers
    }

    pub fn display(&self) -> &Display {
        &self.display
    }
}

#[derive(Debug, Deserialize)]
pub struct Core {
    request_timeout_ms: u64,
}

impl Core {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

#[derive(Debug, Deserialize)]
pub struct Providers {
    ip_url: String,
    geolocation_url: String,
    flyover_url: String,
}

impl Providers {
    pub fn ip_url(&self) -> &str {
        &self.ip_url
    }

    pub fn geolocation_url(&self) -> &str {
        &self.geolocation_url
    }

    pub fn flyover_url(&self) -> &str {
        &self.flyover_url
    }
}

#[derive(Debug, Deserialize)]
pub struct Display {
    #[serde(default)]
    utc_offset: Option<String>,
}

impl Display {
    /// The fixed UTC offset rise times are rendered in, or `None` for the
    /// system local timezone.
    pub fn utc_offset(&self) -> Option<FixedOffset> {
        self.utc_offset
            .as_ref()
            .map(|offset| offset.parse().unwrap_or_else(|_| panic!("invalid UTC offset '{}'", offset)))
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
                core: Core { request_timeout_ms: 5_000 },
                providers: Providers {
                    ip_url: "https://ip.url".to_string(),
                    geolocation_url: "http://geolocation.url".to_string(),
                    flyover_url: "https://flyover.url".to_string(),
                },
                display: Display {
                    utc_offset: Some("+00:00".to_string()),
                },
            },
        }
    }

    pub fn ip_url(mut self, url: String) -> Self {
        self.config.providers.ip_url = url;
        self
    }

    pub fn geolocation_url(mut self, url: String) -> Self {
        self.config.providers.geolocation_url = url;
        self
    }

    pub fn flyover_url(mut self, url: String) -> Self {
        self.config.providers.flyover_url = url;
        self
    }

    pub fn utc_offset(mut self, offset: Option<String>) -> Self {
        self.config.display.utc_offset = offset;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
