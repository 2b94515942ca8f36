use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::Result;
use crate::modules::tariffs::models::{TariffSettings, TariffSettingsPatch};

/// Where the administrator-maintained settings document lives
#[derive(Debug, Clone, Default)]
pub struct TariffConfig {
    /// JSON or YAML document; defaults apply when unset
    pub settings_path: Option<PathBuf>,
}

impl TariffConfig {
    pub fn from_env() -> Self {
        Self {
            settings_path: env::var("TARIFF_SETTINGS_PATH")
                .ok()
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
        }
    }

    /// Load the settings document, merged over the defaults
    pub fn load_settings(&self) -> Result<TariffSettings> {
        match self.settings_path {
            Some(ref path) => {
                let patch = read_settings_document(path)?;
                tracing::info!("Loaded tariff settings from {}", path.display());
                TariffSettings::from_patch(&patch)
            }
            None => Ok(TariffSettings::default()),
        }
    }
}

/// Parse a settings document, picking the format from the file extension
pub fn read_settings_document(path: &Path) -> Result<TariffSettingsPatch> {
    let contents = fs::read_to_string(path)?;
    parse_settings_document(&contents, path)
}

fn parse_settings_document(contents: &str, path: &Path) -> Result<TariffSettingsPatch> {
    let is_yaml = matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml") | Some("yml")
    );

    if is_yaml {
        Ok(serde_yaml::from_str(contents)?)
    } else {
        Ok(serde_json::from_str(contents)?)
    }
}
