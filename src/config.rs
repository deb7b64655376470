use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for the Japanese transcript fetcher
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Captions provider settings
    pub youtube: YouTubeConfig,

    /// HTTP wrapper settings
    pub server: ServerConfig,

    /// Log filter settings
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct YouTubeConfig {
    /// Upper bound in seconds for one catalog or track request
    pub timeout_seconds: u64,

    /// Keep inline formatting tags in caption text
    pub preserve_formatting: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,

    /// Whole-request timeout imposed by the HTTP wrapper
    pub request_timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive, overridden by RUST_LOG
    pub filter: String,
}

impl Default for YouTubeConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
            preserve_formatting: false,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            request_timeout_seconds: 60,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "ja_transcript=info,warn".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            youtube: YouTubeConfig::default(),
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from the first readable config file, falling back to
    /// defaults plus environment overrides
    pub fn load() -> Result<Self> {
        let config_paths = [
            "ja-transcript.toml",
            "config/ja-transcript.toml",
            "/etc/ja-transcript/config.toml",
        ];

        for path in &config_paths {
            if let Ok(config_str) = std::fs::read_to_string(path) {
                match toml::from_str(&config_str) {
                    Ok(config) => {
                        tracing::info!("📄 Loaded configuration from: {}", path);
                        return Ok(config);
                    }
                    Err(e) => {
                        tracing::warn!("Failed to parse config file {}: {}", path, e);
                    }
                }
            }
        }

        Self::from_env()
    }

    /// Load configuration from one explicit file
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let config_str = std::fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config {}: {}", path.display(), e))?;
        let config: Config = toml::from_str(&config_str)?;
        Ok(config)
    }

    /// Defaults with environment variable overrides
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(host) = std::env::var("JA_TRANSCRIPT_HOST") {
            config.server.host = host;
        }

        if let Ok(port) = std::env::var("JA_TRANSCRIPT_PORT") {
            config.server.port = port
                .parse()
                .map_err(|_| anyhow!("JA_TRANSCRIPT_PORT is not a valid port: {}", port))?;
        }

        if let Ok(timeout) = std::env::var("JA_TRANSCRIPT_TIMEOUT") {
            config.youtube.timeout_seconds = timeout.parse().unwrap_or(30);
        }

        if let Ok(filter) = std::env::var("JA_TRANSCRIPT_LOG") {
            config.logging.filter = filter;
        }

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.youtube.timeout_seconds == 0 {
            return Err(anyhow!("youtube.timeout_seconds must be greater than 0"));
        }

        if self.server.request_timeout_seconds == 0 {
            return Err(anyhow!("server.request_timeout_seconds must be greater than 0"));
        }

        if self.server.port == 0 {
            return Err(anyhow!("server.port must be greater than 0"));
        }

        Ok(())
    }

    /// Address the HTTP wrapper binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// Configuration builder for programmatic config creation
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    pub fn with_preserve_formatting(mut self, preserve: bool) -> Self {
        self.config.youtube.preserve_formatting = preserve;
        self
    }

    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.config.youtube.timeout_seconds = timeout_seconds;
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.config.server.port = port;
        self
    }

    pub fn with_request_timeout(mut self, timeout_seconds: u64) -> Self {
        self.config.server.request_timeout_seconds = timeout_seconds;
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.config.logging.filter = filter.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
