use crate::{
    AuthConfig, CONFIG_DIR_ENV, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR_NAME, DatabaseConfig, LoggingConfig, ServerConfig, ValidationConfig,
};

use cb_core::ValidationRules;

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
    pub validation: ValidationConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. CB_CONFIG_DIR env var, else ./.cookbook/
    /// 2. Auto-create the config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply CB_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: CB_CONFIG_DIR env var > ./.cookbook/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR_NAME))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()?;
        self.validation.validate()?;
        Ok(())
    }

    /// Absolute path to the database file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    /// Absolute path to the log file, when file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match self.logging.file {
            Some(ref filename) => Ok(Some(
                Self::config_dir()?.join(&self.logging.dir).join(filename),
            )),
            None => Ok(None),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Input rules shared by the stores and controllers.
    pub fn validation_rules(&self) -> ValidationRules {
        ValidationRules {
            min_password_length: self.auth.min_password_length,
            max_title_length: self.validation.max_title_length,
            max_ingredients: self.validation.max_ingredients,
            max_ingredient_length: self.validation.max_ingredient_length,
            max_steps_length: self.validation.max_steps_length,
            max_image_length: self.validation.max_image_length,
        }
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: {}:{} (max {} concurrent requests)",
            self.server.host, self.server.port, self.server.max_connections
        );
        info!(
            "  database: {} (pool {})",
            self.database.path, self.database.max_connections
        );
        info!(
            "  auth: HS256, secret {}, ttl={}h, min_password={}",
            if self.auth.jwt_secret.is_some() {
                "configured"
            } else {
                "ephemeral"
            },
            self.auth.token_ttl_hours,
            self.auth.min_password_length
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
        info!(
            "  validation: title={}, ingredients={}x{}, steps={}, image={}",
            self.validation.max_title_length,
            self.validation.max_ingredients,
            self.validation.max_ingredient_length,
            self.validation.max_steps_length,
            self.validation.max_image_length
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("CB_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("CB_SERVER_PORT", &mut self.server.port);
        Self::apply_env_parse(
            "CB_SERVER_MAX_CONNECTIONS",
            &mut self.server.max_connections,
        );

        // Database
        Self::apply_env_string("CB_DATABASE_PATH", &mut self.database.path);
        Self::apply_env_parse(
            "CB_DATABASE_MAX_CONNECTIONS",
            &mut self.database.max_connections,
        );

        // Auth
        Self::apply_env_option_string("CB_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_parse("CB_AUTH_TOKEN_TTL_HOURS", &mut self.auth.token_ttl_hours);
        Self::apply_env_parse(
            "CB_AUTH_MIN_PASSWORD_LENGTH",
            &mut self.auth.min_password_length,
        );

        // Logging
        Self::apply_env_parse("CB_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("CB_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("CB_LOG_FILE", &mut self.logging.file);

        // Validation
        Self::apply_env_parse(
            "CB_VALIDATION_MAX_TITLE_LENGTH",
            &mut self.validation.max_title_length,
        );
        Self::apply_env_parse(
            "CB_VALIDATION_MAX_INGREDIENTS",
            &mut self.validation.max_ingredients,
        );
        Self::apply_env_parse(
            "CB_VALIDATION_MAX_INGREDIENT_LENGTH",
            &mut self.validation.max_ingredient_length,
        );
        Self::apply_env_parse(
            "CB_VALIDATION_MAX_STEPS_LENGTH",
            &mut self.validation.max_steps_length,
        );
        Self::apply_env_parse(
            "CB_VALIDATION_MAX_IMAGE_LENGTH",
            &mut self.validation.max_image_length,
        );
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
