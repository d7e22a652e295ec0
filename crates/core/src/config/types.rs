use std::path::PathBuf;

use serde::Deserialize;

/// The `replacement_text` setting as stored on disk.
///
/// `Same` defers to the host default and is resolved by the loader;
/// the engine only ever sees [`ReplacementPolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplacementTextSetting {
    Link,
    Embed,
    None,
    #[default]
    Same,
}

/// What to leave in the source where the extracted text was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplacementPolicy {
    /// A wikilink to the destination.
    Link,
    /// An embed (transclusion) of the destination.
    Embed,
    /// Nothing; the span is deleted.
    None,
}

/// On-disk configuration. Every field has a default, so a missing file
/// or a partial file both work.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub replacement_text: ReplacementTextSetting,
    pub stay_on_source_file: bool,
    pub keep_heading: bool,
    pub link_to_dest_heading: bool,
    pub use_heading_as_alias: bool,
    pub logging: LoggingConfig,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            replacement_text: ReplacementTextSetting::Same,
            stay_on_source_file: true,
            keep_heading: true,
            link_to_dest_heading: true,
            use_heading_as_alias: false,
            logging: LoggingConfig::default(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Concrete settings the extraction engine runs with. Read-only to the
/// engine; built by the loader (or literally, in tests).
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    pub replacement: ReplacementPolicy,
    pub stay_on_source_file: bool,
    pub keep_heading: bool,
    pub link_to_dest_heading: bool,
    pub use_heading_as_alias: bool,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            replacement: ReplacementPolicy::Link,
            stay_on_source_file: true,
            keep_heading: true,
            link_to_dest_heading: true,
            use_heading_as_alias: false,
        }
    }
}

/// Fully resolved configuration for a run.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub extract: ExtractConfig,
    pub logging: LoggingConfig,
}
