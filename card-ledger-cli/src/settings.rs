//! Shared application settings (catalog endpoint, API key).
//!
//! The settings file lives at `~/.config/card-ledger/settings.toml` so every
//! invocation resolves the catalog the same way. CLI flags always override
//! file values.

use std::io;
use std::path::PathBuf;

/// Canonical path to the settings file: `~/.config/card-ledger/settings.toml`.
pub(crate) fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("card-ledger").join("settings.toml")
}

/// Catalog connection settings from the `[catalog]` table.
#[derive(Debug, Default, Clone)]
pub(crate) struct CatalogSettings {
    pub base_url: Option<String>,
    pub api_key: Option<String>,
}

/// Read catalog settings from `settings.toml`, if present.
pub(crate) fn load_catalog_settings() -> CatalogSettings {
    let Some(doc) = read_settings() else {
        return CatalogSettings::default();
    };
    let catalog = doc.get("catalog");
    let get = |key: &str| {
        catalog
            .and_then(|t| t.get(key))
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())
            .map(String::from)
    };
    CatalogSettings {
        base_url: get("base_url"),
        api_key: get("api_key"),
    }
}

/// Save the catalog API key in `settings.toml`.
///
/// Uses a surgical `toml::Value` update so unrelated settings are preserved,
/// and an atomic temp-file rename so a crash never truncates the file.
pub(crate) fn save_api_key(key: &str) -> io::Result<()> {
    let settings = settings_path();
    let mut doc = read_settings().unwrap_or_else(|| toml::Value::Table(Default::default()));

    let table = doc
        .as_table_mut()
        .ok_or_else(|| io::Error::other("settings.toml root is not a table"))?;
    let catalog = table
        .entry("catalog")
        .or_insert_with(|| toml::Value::Table(Default::default()));
    let catalog_table = catalog
        .as_table_mut()
        .ok_or_else(|| io::Error::other("[catalog] is not a table"))?;
    catalog_table.insert("api_key".to_string(), toml::Value::String(key.to_string()));

    if let Some(parent) = settings.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let serialized = toml::to_string_pretty(&doc).map_err(io::Error::other)?;
    let tmp = settings.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized)?;
    std::fs::rename(&tmp, &settings)?;

    Ok(())
}

fn read_settings() -> Option<toml::Value> {
    let contents = std::fs::read_to_string(settings_path()).ok()?;
    contents.parse().ok()
}
