// ABOUTME: Configuration management for cloud-init-gen
// ABOUTME: Loads optional YAML configuration and merges environment overrides

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

use crate::output::FileWriterConfig;
use crate::template::TemplateEngine;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Extra engine variables, overridden by command line values
    #[serde(default)]
    pub template_vars: HashMap<String, String>,

    #[serde(default)]
    pub create_output_dirs: bool,

    #[serde(default)]
    pub keep_trailing_newline: bool,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file path or default locations
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) if !p.exists() => {
                anyhow::bail!("Configuration file not found: {}", p.display())
            }
            Some(p) => Some(p),
            None => Self::find_config_file(),
        };

        let mut config = match config_path {
            Some(config_path) => {
                let contents = std::fs::read_to_string(&config_path).with_context(|| {
                    format!("Failed to read configuration file {}", config_path.display())
                })?;
                serde_yaml::from_str(&contents).with_context(|| {
                    format!("Invalid configuration file {}", config_path.display())
                })?
            }
            None => Config::default(),
        };

        config.merge_env()?;
        Ok(config)
    }

    /// Find configuration file in standard locations
    fn find_config_file() -> Option<PathBuf> {
        let possible_paths = [
            PathBuf::from("cloud-init-gen.yaml"),
            PathBuf::from("cloud-init-gen.yml"),
            PathBuf::from(".cloud-init-gen.yaml"),
            PathBuf::from(".cloud-init-gen.yml"),
        ];

        if let Some(path) = possible_paths.into_iter().find(|p| p.exists()) {
            return Some(path);
        }

        dirs::home_dir()
            .map(|home| home.join(".cloud-init-gen").join("config.yaml"))
            .filter(|p| p.exists())
    }

    /// Merge environment variables into configuration
    fn merge_env(&mut self) -> Result<()> {
        self.merge_from(|name| std::env::var(name).ok())
    }

    fn merge_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup("CLOUD_INIT_GEN_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("CLOUD_INIT_GEN_LOG_FORMAT") {
            self.logging.format = format;
        }
        if let Some(create_dirs) = lookup("CLOUD_INIT_GEN_CREATE_DIRS") {
            self.create_output_dirs = create_dirs
                .parse()
                .with_context(|| format!("Invalid CLOUD_INIT_GEN_CREATE_DIRS '{}'", create_dirs))?;
        }

        Ok(())
    }

    pub fn writer_config(&self) -> FileWriterConfig {
        FileWriterConfig {
            create_dirs: self.create_output_dirs,
        }
    }

    pub fn template_engine(&self) -> TemplateEngine {
        TemplateEngine::new().keep_trailing_newline(self.keep_trailing_newline)
    }
}
