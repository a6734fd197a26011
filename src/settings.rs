use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SplitcatError};
use crate::parser::Dialect;
use crate::view::{SortDirection, SortKey};

/// User defaults. Holds no transaction data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_sort")]
    pub default_sort: String,
    #[serde(default = "default_order")]
    pub default_order: String,
    #[serde(default = "default_export_file_name")]
    pub export_file_name: String,
    #[serde(default = "default_dialect")]
    pub dialect: String,
}

fn default_sort() -> String {
    SortKey::Date.as_str().to_string()
}

fn default_order() -> String {
    SortDirection::Desc.as_str().to_string()
}

fn default_export_file_name() -> String {
    "categorized_transactions.csv".to_string()
}

fn default_dialect() -> String {
    Dialect::Naive.as_str().to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_sort: default_sort(),
            default_order: default_order(),
            export_file_name: default_export_file_name(),
            dialect: default_dialect(),
        }
    }
}

impl Settings {
    pub fn sort_key(&self) -> Result<SortKey> {
        self.default_sort.parse()
    }

    pub fn sort_direction(&self) -> Result<SortDirection> {
        self.default_order.parse()
    }

    pub fn dialect(&self) -> Result<Dialect> {
        self.dialect.parse()
    }
}

fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("splitcat")
}

pub fn settings_path() -> PathBuf {
    config_dir().join("settings.json")
}

pub fn load_settings() -> Settings {
    load_settings_from(&settings_path())
}

/// Missing or unreadable files give the defaults.
pub fn load_settings_from(path: &Path) -> Settings {
    if !path.exists() {
        return Settings::default();
    }
    let content = std::fs::read_to_string(path).unwrap_or_default();
    serde_json::from_str(&content).unwrap_or_else(|e| {
        log::warn!("ignoring unreadable settings at {}: {e}", path.display());
        Settings::default()
    })
}

pub fn save_settings(settings: &Settings) -> Result<()> {
    save_settings_to(&settings_path(), settings)
}

pub fn save_settings_to(path: &Path, settings: &Settings) -> Result<()> {
    // Reject bad tokens before they reach disk.
    settings.sort_key()?;
    settings.sort_direction()?;
    settings.dialect()?;

    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| SplitcatError::Settings(e.to_string()))?;
    std::fs::write(path, format!("{json}\n"))?;
    log::debug!("saved settings to {}", path.display());
    Ok(())
}
