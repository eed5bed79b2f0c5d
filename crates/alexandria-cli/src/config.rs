use std::path::{Path, PathBuf};

use alexandria_core::models::catalog::SymptomCatalog;
use serde::{Deserialize, Serialize};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

/// Log filter used when neither `RUST_LOG` nor the config sets one. Kept
/// quiet so stdout carries only records and replies.
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlexandriaConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// JSON catalog replacing the reference symptom set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
    /// `EnvFilter` directive, e.g. `"alexandria_extract=debug"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
}

impl AlexandriaConfig {
    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("alexandria"))
}

pub fn config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// Load the user config, falling back to defaults when no file exists.
pub fn load_config() -> eyre::Result<AlexandriaConfig> {
    let path = config_path()?;
    if !path.exists() {
        return Ok(AlexandriaConfig::default());
    }
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> eyre::Result<AlexandriaConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;
    parse_config(&contents)
}

/// Parse config JSON, running migrations before deserializing.
pub fn parse_config(contents: &str) -> eyre::Result<AlexandriaConfig> {
    let json: serde_json::Value = serde_json::from_str(contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: AlexandriaConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update Alexandria."
        ));
    }

    // v0 → v1: pre-versioned configs carry the same fields; stamp the version.
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1");
    }

    Ok(json)
}

/// Write `config` to `path`, always stamped with the current version.
pub fn save_config_to(config: &AlexandriaConfig, path: &Path) -> eyre::Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }

    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;
    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;
    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}

/// Pick the catalog for this run.
///
/// An explicit path (flag or `ALEXANDRIA_CATALOG`) wins over the config's
/// `catalog_path`; with neither, the reference catalog is used.
pub fn resolve_catalog(
    explicit: Option<&Path>,
    config: &AlexandriaConfig,
) -> eyre::Result<SymptomCatalog> {
    let Some(path) = explicit.or(config.catalog_path.as_deref()) else {
        return Ok(SymptomCatalog::reference());
    };

    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read catalog at {}: {e}", path.display()))?;
    let catalog = SymptomCatalog::from_json(&contents)
        .map_err(|e| eyre::eyre!("invalid catalog at {}: {e}", path.display()))?;
    Ok(catalog)
}
