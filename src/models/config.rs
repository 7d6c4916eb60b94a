//! Configuration model loaded from external sources.

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

#[derive(Clone, Debug, Default, Deserialize)]
/// Settings for the pretrained embedding checkpoint.
pub struct EmbeddingConfig {
    /// Directory where the downloaded checkpoint is cached. Defaults to
    /// the fastembed cache location when unset.
    pub cache_dir: Option<String>,
    #[serde(default)]
    pub show_download_progress: bool,
}

#[derive(Clone, Debug, Default, Deserialize)]
/// Basic configuration shared by the CLI host.
pub struct AppConfig {
    #[serde(default)]
    pub embedding: EmbeddingConfig,
}

impl AppConfig {
    /// Load from an optional `docsim.yaml` next to the working directory,
    /// overridden by `DOCSIM_`-prefixed environment variables
    /// (`DOCSIM_EMBEDDING__CACHE_DIR=...`).
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::new("docsim", FileFormat::Yaml).required(false))
            .add_source(Environment::with_prefix("DOCSIM").separator("__"))
            .build()?
            .try_deserialize()
    }
}
