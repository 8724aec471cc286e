use anyhow::{Context, Result};
use directories::ProjectDirs;
use gpagrip_core::UngradedPolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

use crate::cli::CliArgs;

pub const CONFIG_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Config {
    pub version: u32,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub credits: CreditConfig,
    #[serde(default)]
    pub aggregation: AggregationConfig,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct UiConfig {
    pub show_key_hints: bool,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct CreditConfig {
    /// Accept typed credit hours besides the fixed choices
    pub allow_custom: bool,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct AggregationConfig {
    pub ungraded: UngradedPolicy,
}

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Unsupported config version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            ui: UiConfig::default(),
            credits: CreditConfig::default(),
            aggregation: AggregationConfig::default(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { show_key_hints: true }
    }
}

pub fn get_default_config_path() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("", "", "gpagrip")
        .context("Failed to determine project directories")?;

    let config_dir = proj_dirs.config_dir();
    Ok(config_dir.join("gpagrip.toml"))
}

impl Config {
    pub fn load(config_path: Option<PathBuf>) -> Result<Self> {
        let path = match config_path {
            Some(p) => p,
            None => get_default_config_path()?,
        };

        if !path.exists() {
            let default_config = Config::default();
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .context("Failed to create config directory")?;
            }
            default_config.save(&path)?;
            return Ok(default_config);
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        if config.version != CONFIG_VERSION {
            return Err(ConfigError::UnsupportedVersion {
                found: config.version,
                expected: CONFIG_VERSION,
            })
            .with_context(|| format!("Invalid config file: {}", path.display()));
        }

        Ok(config)
    }

    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let contents = toml::to_string_pretty(self)
            .context("Failed to serialize config to TOML")?;

        fs::write(&path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        Ok(())
    }

    pub fn from_cli_and_file(cli_args: CliArgs, config_path: Option<PathBuf>) -> Result<Self> {
        let mut config = Self::load(config_path.or(cli_args.config))?;

        // CLI args override config file
        if cli_args.allow_custom_credits {
            config.credits.allow_custom = true;
        }
        if let Some(policy) = cli_args.ungraded {
            config.aggregation.ungraded = policy.into();
        }

        Ok(config)
    }
}
