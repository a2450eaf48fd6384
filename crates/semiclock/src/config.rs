use directories::ProjectDirs;
use semiclock_core::{ActivationMode, GaugeOptions, Overflow, RectangleOptions, TickColors};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const ENV_PREFIX: &str = "SEMICLOCK";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RectangleConfig {
    pub width: f64,
    pub height: f64,
    pub count: usize,
    pub colors: TickColors,
}

impl Default for RectangleConfig {
    fn default() -> Self {
        Self {
            width: 4.0,
            height: 8.0,
            count: 27,
            colors: TickColors::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub canvas_width: f64,
    pub percentage: f64,
    pub mode: ActivationMode,
    pub overflow: Option<Overflow>,
    pub rectangle: RectangleConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            canvas_width: 400.0,
            percentage: 0.0,
            mode: ActivationMode::default(),
            overflow: None,
            rectangle: RectangleConfig::default(),
        }
    }
}

impl Config {
    pub fn gauge_options(&self) -> GaugeOptions {
        GaugeOptions::new(
            self.canvas_width,
            RectangleOptions {
                width: self.rectangle.width,
                height: self.rectangle.height,
                count: self.rectangle.count,
                colors: self.rectangle.colors.clone(),
            },
        )
        .with_mode(self.mode)
        .with_overflow(self.overflow)
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
}

pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs = ProjectDirs::from("org", "semiclock", "semiclock")
        .ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

fn build(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    env: config::Environment,
) -> Result<Config, ConfigError> {
    let s = builder.add_source(env).build()?;
    Ok(s.try_deserialize()?)
}

/// Loads `path`, or the default location when `None`. A missing file is not an error.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => get_config_path()?,
    };
    log::debug!("Loading config from {}", path.display());

    build(
        config::Config::builder().add_source(config::File::from(path).required(false)),
        environment(),
    )
}

pub fn load_config_str(toml: &str) -> Result<Config, ConfigError> {
    build(
        config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml)),
        environment(),
    )
}

pub fn write_default_config() -> std::io::Result<PathBuf> {
    let path =
        get_config_path().map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e))?;
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(&path, DEFAULT_CONFIG)?;
    }
    Ok(path)
}

pub const DEFAULT_CONFIG: &str = include_str!("default_config.toml");
