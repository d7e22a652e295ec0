use std::path::{Path, PathBuf};
use std::{env, fs};

use dirs::home_dir;
use shellexpand::full;
use thiserror::Error;

use crate::config::types::{
    ConfigFile, ExtractConfig, LoggingConfig, ReplacementPolicy, ReplacementTextSetting,
    ResolvedConfig,
};

/// Host default used when `replacement_text = "same"`.
const HOST_DEFAULT_REPLACEMENT: ReplacementPolicy = ReplacementPolicy::Link;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found at {0}")]
    NotFound(String),

    #[error("failed to read config file {0}: {1}")]
    ReadError(String, #[source] std::io::Error),

    #[error("failed to parse TOML in {0}: {1}")]
    ParseError(String, #[source] toml::de::Error),

    #[error("home directory not available to expand '~'")]
    NoHome,
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load settings and resolve them into engine-ready values.
    ///
    /// An explicit `config_path` must exist; the default path is
    /// optional and falls back to built-in defaults when absent.
    pub fn load(config_path: Option<&Path>) -> Result<ResolvedConfig, ConfigError> {
        let cf = match config_path {
            Some(p) => {
                if !p.exists() {
                    return Err(ConfigError::NotFound(p.display().to_string()));
                }
                Self::read_file(p)?
            }
            None => {
                let path = default_config_path();
                if path.exists() {
                    Self::read_file(&path)?
                } else {
                    ConfigFile::default()
                }
            }
        };

        Self::resolve(cf)
    }

    fn read_file(path: &Path) -> Result<ConfigFile, ConfigError> {
        let s = fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.display().to_string(), e))?;
        toml::from_str(&s)
            .map_err(|e| ConfigError::ParseError(path.display().to_string(), e))
    }

    fn resolve(cf: ConfigFile) -> Result<ResolvedConfig, ConfigError> {
        let replacement = match cf.replacement_text {
            ReplacementTextSetting::Link => ReplacementPolicy::Link,
            ReplacementTextSetting::Embed => ReplacementPolicy::Embed,
            ReplacementTextSetting::None => ReplacementPolicy::None,
            ReplacementTextSetting::Same => HOST_DEFAULT_REPLACEMENT,
        };

        let logging = if let Some(ref file) = cf.logging.file {
            let expanded = expand_path(&file.to_string_lossy())?;
            LoggingConfig {
                level: cf.logging.level.clone(),
                file_level: cf.logging.file_level.clone(),
                file: Some(expanded),
            }
        } else {
            cf.logging.clone()
        };

        Ok(ResolvedConfig {
            extract: ExtractConfig {
                replacement,
                stay_on_source_file: cf.stay_on_source_file,
                keep_heading: cf.keep_heading,
                link_to_dest_heading: cf.link_to_dest_heading,
                use_heading_as_alias: cf.use_heading_as_alias,
            },
            logging,
        })
    }
}

pub fn default_config_path() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        return Path::new(&xdg).join("mdcarve").join("config.toml");
    }
    let home = home_dir().unwrap_or_else(|| PathBuf::from("~"));
    home.join(".config").join("mdcarve").join("config.toml")
}

fn expand_path(input: &str) -> Result<PathBuf, ConfigError> {
    let expanded = full(input).map_err(|_| ConfigError::NoHome)?;
    Ok(PathBuf::from(expanded.to_string()))
}
