use config::{Config, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub mod validator;

use crate::cli::Cli;

#[derive(Debug, Deserialize, Serialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub dataset: DatasetSettings,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

/// Where the selectable users come from
#[derive(Debug, Default, Deserialize, Serialize, Clone)]
pub struct DatasetSettings {
    /// JSON file with `[{name, image, email}]` records. Relative paths are
    /// resolved against the directory of the config file. The bundled
    /// dataset is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl Settings {
    pub fn new() -> Result<Self, anyhow::Error> {
        Self::from_root(".")
    }

    /// Create settings from CLI arguments (includes config file and CLI overrides)
    pub fn new_with_cli(cli: &Cli) -> Result<Self, anyhow::Error> {
        let root = cli
            .config
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        let mut settings = Self::load(cli.config.clone(), &root)?;

        // CLI > env vars > config file
        settings.apply_cli_overrides(cli);
        settings.validate()?;

        Ok(settings)
    }

    /// Load `<root>/chipselect.{toml,yaml,json}` if present, defaults otherwise.
    pub fn from_root(root: impl AsRef<Path>) -> Result<Self, anyhow::Error> {
        let root = root.as_ref();
        let settings = Self::load(root.join("chipselect"), root)?;
        settings.validate()?;
        Ok(settings)
    }

    fn load(config_path: PathBuf, root: &Path) -> Result<Self, anyhow::Error> {
        let s = Config::builder()
            .add_source(File::from(config_path).required(false))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .build()?;

        let mut settings: Settings = s.try_deserialize()?;
        if let Some(path) = settings.dataset.path.take() {
            settings.dataset.path = Some(if path.is_relative() { root.join(path) } else { path });
        }

        Ok(settings)
    }

    /// Apply CLI argument overrides to settings
    fn apply_cli_overrides(&mut self, cli: &Cli) {
        if let Some(host) = &cli.host {
            self.server.host = host.clone();
        }
        if let Some(port) = cli.port {
            self.server.port = port;
        }
        // CLI dataset paths stay relative to the working directory
        if let Some(dataset) = &cli.dataset {
            self.dataset.path = Some(dataset.clone());
        }
    }

    fn validate(&self) -> Result<(), anyhow::Error> {
        validator::ConfigValidator::validate(self).map_err(|errors| {
            let error_messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            anyhow::anyhow!(
                "Configuration validation failed:\n{}",
                error_messages.join("\n")
            )
        })
    }
}
