use crate::errors::{AppResult, ProjectClockError};
use crate::models::TimeParams;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::PathBuf;
use tracing::debug;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "PCLOCK_CONFIG";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    /// Conversion factors used when a timesheet has no `timeParams`
    #[serde(default)]
    pub time_params: TimeParams,
    /// Editor command, takes precedence over $VISUAL / $EDITOR
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor: Option<String>,
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        match dirs::home_dir() {
            Some(home) => home.join(".pclock"),
            None => PathBuf::from(".pclock"),
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        match env::var_os(CONFIG_ENV) {
            Some(p) if !p.is_empty() => PathBuf::from(p),
            _ => Self::config_dir().join("pclock.conf"),
        }
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&content).map_err(|e| {
            ProjectClockError::Config(format!("{}: {}", path.display(), e))
        })?;
        cfg.check()?;
        debug!(path = %path.display(), "config loaded");
        Ok(cfg)
    }

    /// Write the default configuration, refusing to replace an existing file.
    pub fn init() -> AppResult<PathBuf> {
        let path = Self::config_file();
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(&Self::default())?;
        let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Err(ProjectClockError::Config(format!(
                    "config file already exists: {}",
                    path.display()
                ))
                .into());
            }
            Err(e) => return Err(e.into()),
        };
        file.write_all(yaml.as_bytes())?;
        Ok(path)
    }

    fn check(&self) -> Result<(), ProjectClockError> {
        let p = &self.time_params;
        let factors = [("day", p.day), ("week", p.week), ("month", p.month), ("year", p.year)];
        for (name, value) in factors {
            if !(value.is_finite() && value > 0.0) {
                return Err(ProjectClockError::Config(format!(
                    "time_params.{name} must be a positive number"
                )));
            }
        }
        Ok(())
    }
}
