//! Settings: TOML file format, defaults, and resolution into the
//! concrete configuration the engine consumes.

pub mod loader;
pub mod types;

pub use loader::{default_config_path, ConfigError, ConfigLoader};
pub use types::{
    ConfigFile, ExtractConfig, LoggingConfig, ReplacementPolicy, ReplacementTextSetting,
    ResolvedConfig,
};
