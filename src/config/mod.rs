//! Database connection configuration.
//! Credentials live in a YAML file under the home directory (or a path given
//! with `--config`), with `HEALTHVIZ_DB_*` environment variables taking
//! precedence over both the file and the built-in defaults. The resolved
//! struct is passed explicitly into the connection provider; nothing reads
//! connection parameters from global state.

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_user")]
    pub user: String,
    #[serde(default)]
    pub password: String,
    #[serde(default = "default_database")]
    pub database: String,
}

fn default_host() -> String {
    "localhost".to_string()
}
fn default_port() -> u16 {
    3306
}
fn default_user() -> String {
    "root".to_string()
}
fn default_database() -> String {
    "deaths".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            user: default_user(),
            password: String::new(),
            database: default_database(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".healthviz")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("healthviz.conf")
    }

    /// Load configuration from file (or defaults if the file is missing),
    /// then apply environment overrides.
    pub fn load(path_override: Option<&Path>) -> AppResult<Self> {
        let path = match path_override {
            Some(p) => p.to_path_buf(),
            None => Self::config_file(),
        };

        let mut cfg = if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_yaml::from_str(&content).map_err(|_| AppError::ConfigLoad)?
        } else {
            Config::default()
        };

        cfg.apply_env_overrides()?;
        Ok(cfg)
    }

    /// Environment variables win over the file and the defaults.
    pub fn apply_env_overrides(&mut self) -> AppResult<()> {
        if let Ok(v) = env::var("HEALTHVIZ_DB_HOST") {
            self.host = v;
        }
        if let Ok(v) = env::var("HEALTHVIZ_DB_PORT") {
            self.port = v
                .parse()
                .map_err(|_| AppError::Config(format!("invalid HEALTHVIZ_DB_PORT: {v}")))?;
        }
        if let Ok(v) = env::var("HEALTHVIZ_DB_USER") {
            self.user = v;
        }
        if let Ok(v) = env::var("HEALTHVIZ_DB_PASSWORD") {
            self.password = v;
        }
        if let Ok(v) = env::var("HEALTHVIZ_DB_NAME") {
            self.database = v;
        }
        Ok(())
    }

    /// Write a default configuration file (if missing) and return its path.
    pub fn init_all(path_override: Option<&str>) -> AppResult<PathBuf> {
        let path = path_override
            .map(PathBuf::from)
            .unwrap_or_else(Self::config_file);

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        if !path.exists() {
            let yaml = serde_yaml::to_string(&Config::default()).map_err(|_| AppError::ConfigSave)?;
            fs::write(&path, yaml)?;
        }

        Ok(path)
    }

    /// Report suspicious or missing fields without failing.
    pub fn check(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if self.host.is_empty() {
            warnings.push("host is empty".to_string());
        }
        if self.user.is_empty() {
            warnings.push("user is empty".to_string());
        }
        if self.database.is_empty() {
            warnings.push("database name is empty".to_string());
        }
        if self.password.is_empty() {
            warnings.push("password is empty (fine for passwordless local servers)".to_string());
        }
        warnings
    }
}
