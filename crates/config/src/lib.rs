//! Catalog models and loaders for the launch sizing calculator.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Propellant catalog entry parsed from catalog files.
#[derive(Debug, Deserialize, Clone)]
pub struct PropellantConfig {
    pub name: String,
    pub kind: PropellantKindConfig,
    pub density_kg_m3: f64,
    pub reference_temperature_k: f64,
}

/// Propellant identity tag in catalog files. Propellants without a dedicated
/// mass-estimating relationship use `other`.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PropellantKindConfig {
    Lox,
    Lh2,
    Rp1,
    Other,
}

/// Engine catalog entry parsed from catalog files. Fuel and oxidizer are
/// referenced by propellant catalog name.
#[derive(Debug, Deserialize, Clone)]
pub struct EngineConfig {
    pub name: String,
    pub thrust_n: f64,
    pub isp_s: f64,
    pub fuel: String,
    pub oxidizer: String,
    pub mixture_ratio: f64,
    #[serde(default)]
    pub dry_mass_kg: Option<f64>,
}

/// Errors that can occur while loading catalog files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Load propellant catalog entries from a YAML file, a TOML file, or a
/// directory of TOML files.
pub fn load_propellants<P: AsRef<Path>>(path: P) -> Result<Vec<PropellantConfig>, ConfigError> {
    load_records(path)
}

/// Load engine catalog entries from a YAML file, a TOML file, or a directory
/// of TOML files.
pub fn load_engines<P: AsRef<Path>>(path: P) -> Result<Vec<EngineConfig>, ConfigError> {
    load_records(path)
}

fn load_records<T, P>(path: P) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.is_dir() {
        read_dir_records(path)
    } else if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().map(|ext| ext == "toml").unwrap_or(false))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}
