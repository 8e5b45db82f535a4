// Configuration module
// Loads settings from config.toml plus environment overrides, with defaults

use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::atomic::AtomicBool;

use crate::storage::Storage;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
    pub http: HttpConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    pub data_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub access_log: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive_timeout: u64,
    pub read_timeout: u64,
    pub write_timeout: u64,
    pub max_connections: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    pub server_name: String,
    pub enable_cors: bool,
}

impl Config {
    /// Load configuration from `config.toml` (optional) and `SERVER_*`
    /// environment variables.
    ///
    /// A bare `PORT` variable overrides `server.port` so that hosting
    /// platforms which inject an assigned port work out of the box.
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("SERVER").separator("__"))
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("storage.data_dir", "data")?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_default("http.server_name", "Greetfile/0.1")?
            .set_default("http.enable_cors", false)?
            .build()?;

        let mut cfg: Self = settings.try_deserialize()?;

        if let Ok(port) = std::env::var("PORT") {
            match port.parse::<u16>() {
                Ok(p) => cfg.server.port = p,
                Err(_) => {
                    return Err(config::ConfigError::Message(format!(
                        "invalid PORT value: '{port}'"
                    )))
                }
            }
        }

        Ok(cfg)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

/// Shared application state
///
/// Holds the loaded configuration, the storage backing the append log,
/// and cached config values for lock-free access on the hot path.
pub struct AppState {
    pub config: Config,
    pub storage: Storage,
    pub cached_access_log: AtomicBool,
}

impl AppState {
    /// Create the state, bootstrapping the storage directory if absent.
    pub fn new(config: Config) -> std::io::Result<Self> {
        let storage = Storage::open(&config.storage.data_dir)?;
        let cached_access_log = AtomicBool::new(config.logging.access_log);

        Ok(Self {
            config,
            storage,
            cached_access_log,
        })
    }
}
