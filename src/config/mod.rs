//! Configuration management module.
//!
//! This module handles loading, saving, and validating application
//! configuration, including the form endpoint, the transition delay, and
//! theme and logging preferences.

mod error;

pub use error::ConfigError;

use crate::error::AppResult;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
    time::Duration,
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/agency-tui";

/// Oversees management of configuration file.
///
#[derive(Clone, Debug)]
pub struct Config {
    pub form_endpoint: String,
    pub form_name: String,
    pub transition_ms: u64,
    pub theme_name: String,
    pub log_level: String,
    file_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default = "default_form_endpoint")]
    pub form_endpoint: String,
    #[serde(default = "default_form_name")]
    pub form_name: String,
    #[serde(default = "default_transition_ms")]
    pub transition_ms: u64,
    #[serde(default = "default_theme_name")]
    pub theme_name: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_form_endpoint() -> String {
    "http://localhost:8888/".to_string()
}

fn default_form_name() -> String {
    "contact".to_string()
}

fn default_transition_ms() -> u64 {
    300
}

fn default_theme_name() -> String {
    "amber-night".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Return a new instance holding the default values.
    ///
    pub fn new() -> Config {
        Config {
            form_endpoint: default_form_endpoint(),
            form_name: default_form_name(),
            transition_ms: default_transition_ms(),
            theme_name: default_theme_name(),
            log_level: default_log_level(),
            file_path: None,
        }
    }

    /// Try to load an existing configuration from the disk using the custom
    /// path if provided. If no file exists yet, the defaults are written to
    /// the default file path or the custom path if provided.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> AppResult<()> {
        // Use default path unless custom path provided
        let dir_path = match custom_path {
            Some(path) => Path::new(&path).to_path_buf(),
            None => Config::default_path()?,
        };

        if !dir_path.exists() {
            fs::create_dir_all(&dir_path).map_err(|e| ConfigError::CreateDirectoryFailed {
                path: dir_path.clone(),
                source: e,
            })?;
        }

        let file_path = dir_path.join(Path::new(FILE_NAME));
        self.file_path = Some(file_path.clone());

        if file_path.exists() {
            let contents = fs::read_to_string(&file_path).map_err(|e| ConfigError::LoadFailed {
                path: file_path.clone(),
                message: format!("IO error: {}", e),
            })?;
            let data: FileSpec = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;
            validate_non_empty("form_endpoint", &data.form_endpoint)?;
            validate_non_empty("form_name", &data.form_name)?;
            self.form_endpoint = data.form_endpoint;
            self.form_name = data.form_name;
            self.transition_ms = data.transition_ms;
            self.theme_name = data.theme_name;
            self.log_level = data.log_level;
        } else {
            self.save()?;
        }

        Ok(())
    }

    /// Save the current configuration to disk.
    ///
    pub fn save(&self) -> AppResult<()> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;
        let data = FileSpec {
            form_endpoint: self.form_endpoint.clone(),
            form_name: self.form_name.clone(),
            transition_ms: self.transition_ms,
            theme_name: self.theme_name.clone(),
            log_level: self.log_level.clone(),
        };
        let content = serde_yaml::to_string(&data)
            .map_err(|e| ConfigError::SerializationFailed(e.to_string()))?;

        if let Some(parent) = file_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| ConfigError::CreateDirectoryFailed {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let mut file = fs::File::create(file_path).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        write!(file, "{}", content).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        file.flush().map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        Ok(())
    }

    /// Override the form endpoint for this run without touching the file.
    ///
    pub fn set_form_endpoint(&mut self, endpoint: &str) -> AppResult<()> {
        validate_non_empty("form_endpoint", endpoint)?;
        self.form_endpoint = endpoint.trim().to_string();
        Ok(())
    }

    /// Delay between hiding the current page and showing the next one.
    ///
    pub fn transition_delay(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }

    /// Parsed log level, falling back to info for unknown names.
    ///
    pub fn log_level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }

    /// Returns the path buffer for the default path to the configuration file
    /// or an error if the home directory could not be found.
    ///
    fn default_path() -> AppResult<PathBuf> {
        match dirs::home_dir() {
            Some(home) => Ok(home.join(Path::new(DEFAULT_DIRECTORY_PATH))),
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }
}

fn validate_non_empty(field: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            field,
            message: "must not be empty".to_string(),
        });
    }
    Ok(())
}
