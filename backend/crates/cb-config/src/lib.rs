mod auth_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod server_config;
mod validation_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use validation_config::ValidationConfig;

const CONFIG_DIR_ENV: &str = "CB_CONFIG_DIR";
const DEFAULT_CONFIG_DIR_NAME: &str = ".cookbook";
const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;
const DEFAULT_MAX_CONNECTIONS: usize = 1000;
const MIN_MAX_CONNECTIONS: usize = 1;
const MAX_MAX_CONNECTIONS: usize = 100_000;

const DEFAULT_DATABASE_FILENAME: &str = "cookbook.db";
const DEFAULT_DATABASE_POOL_SIZE: u32 = 10;

const MIN_JWT_SECRET_LENGTH: usize = 32;
const MAX_TOKEN_TTL_HOURS: i64 = 24 * 365;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";

#[cfg(test)]
mod tests;
