use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub relay: RelayConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_contact_email")]
    pub contact_email: String,
    #[serde(default = "default_contact_phone")]
    pub contact_phone: String,
    #[serde(default = "default_contact_address")]
    pub contact_address: String,
    #[serde(default = "default_business_hours")]
    pub business_hours: Vec<String>,
    /// Path prefix when served behind a reverse proxy, e.g. "/contact-us".
    /// Empty string serves from the root.
    #[serde(default)]
    pub base_path: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            contact_email: default_contact_email(),
            contact_phone: default_contact_phone(),
            contact_address: default_contact_address(),
            business_hours: default_business_hours(),
            base_path: String::new(),
        }
    }
}

fn default_title() -> String {
    "Contact Us".to_string()
}

fn default_contact_email() -> String {
    "hello@reachout.example".to_string()
}

fn default_contact_phone() -> String {
    "+1 555 010 1234".to_string()
}

fn default_contact_address() -> String {
    "500 Market Street, Springfield".to_string()
}

fn default_business_hours() -> Vec<String> {
    vec![
        "Monday - Friday: 9am - 5pm".to_string(),
        "Saturday: 10am - 2pm".to_string(),
        "Sunday: Closed".to_string(),
    ]
}

#[derive(Debug, Deserialize, Clone)]
pub struct RelayConfig {
    #[serde(default = "default_relay_endpoint")]
    pub endpoint: String,
    /// Sent to the relay as the `_next` field. Relays that redirect after
    /// accepting a submission use it as the redirect target.
    #[serde(default = "default_next_url")]
    pub next_url: String,
    #[serde(default)]
    pub captcha: bool,
    #[serde(default = "default_relay_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            endpoint: default_relay_endpoint(),
            next_url: default_next_url(),
            captcha: false,
            timeout_secs: default_relay_timeout_secs(),
        }
    }
}

impl RelayConfig {
    /// Build the relay client settings from this section.
    pub fn client_config(&self) -> reachout_contact::RelayConfig {
        reachout_contact::RelayConfig {
            endpoint: self.endpoint.clone(),
            next_url: self.next_url.clone(),
            captcha: self.captcha,
            timeout: std::time::Duration::from_secs(self.timeout_secs),
        }
    }
}

fn default_relay_endpoint() -> String {
    "https://formsubmit.co/hello@reachout.example".to_string()
}

fn default_next_url() -> String {
    "http://localhost:3000/".to_string()
}

fn default_relay_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// "pretty" or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (REACHOUT__RELAY__ENDPOINT, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        // Set defaults
        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?;

        // Load config file if path provided or CONFIG_PATH env var set
        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Try to load config file (optional - ignore if not found)
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        // Override with environment variables (REACHOUT__RELAY__ENDPOINT, etc.)
        builder = builder.add_source(Self::environment());

        builder.build()?.try_deserialize()
    }

    /// Environment variable source: `REACHOUT__` prefix, `__` between section
    /// and key, values parsed into their typed form. `site.business_hours` is
    /// the one list-valued key and splits on commas; commas in every other
    /// value are left alone.
    fn environment() -> Environment {
        Environment::with_prefix("REACHOUT")
            .separator("__")
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("site.business_hours")
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        match url::Url::parse(&self.relay.endpoint) {
            Ok(endpoint) if endpoint.scheme() == "http" || endpoint.scheme() == "https" => {}
            Ok(endpoint) => {
                return Err(format!(
                    "Relay endpoint must use http or https, got {}",
                    endpoint.scheme()
                ));
            }
            Err(e) => {
                return Err(format!("Relay endpoint is not a valid URL: {}", e));
            }
        }
        match url::Url::parse(&self.relay.next_url) {
            Ok(next) if next.scheme() == "http" || next.scheme() == "https" => {}
            Ok(_) => {
                return Err("Relay next_url must use http or https".to_string());
            }
            Err(e) => {
                return Err(format!("Relay next_url is not a valid URL: {}", e));
            }
        }
        if self.relay.timeout_secs < 1 {
            return Err("Relay timeout_secs must be at least 1".to_string());
        }
        if !self.site.base_path.is_empty()
            && (!self.site.base_path.starts_with('/') || self.site.base_path.ends_with('/'))
        {
            return Err("Site base_path must start with '/' and must not end with '/'".to_string());
        }
        if self.logging.format != "pretty" && self.logging.format != "json" {
            return Err(format!(
                "Logging format must be \"pretty\" or \"json\", got \"{}\"",
                self.logging.format
            ));
        }
        Ok(())
    }
}
