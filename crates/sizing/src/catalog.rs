//! Conversion from catalog configuration records to runtime types.

use launch_config::{EngineConfig, PropellantConfig, PropellantKindConfig};
use launch_core::propellants::PropellantKind;
use launch_propulsion::{Engine, EngineError, Propellant, PropellantError};
use thiserror::Error;

/// Errors surfaced when resolving catalog entries.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("engine '{0}' not found in catalog")]
    EngineNotFound(String),
    #[error("engine catalog is empty")]
    EmptyCatalog,
    #[error("propellant '{0}' referenced by an engine is not in the catalog")]
    PropellantNotFound(String),
    #[error(transparent)]
    Propellant(#[from] PropellantError),
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Convert a catalog propellant record into the runtime representation.
pub fn propellant_from_config(config: &PropellantConfig) -> Result<Propellant, CatalogError> {
    let kind = match config.kind {
        PropellantKindConfig::Lox => PropellantKind::Lox,
        PropellantKindConfig::Lh2 => PropellantKind::Lh2,
        PropellantKindConfig::Rp1 => PropellantKind::Rp1,
        PropellantKindConfig::Other => PropellantKind::Other,
    };
    Ok(Propellant::new(
        config.name.clone(),
        kind,
        config.density_kg_m3,
        config.reference_temperature_k,
    )?)
}

/// Convert a catalog engine record, resolving its propellants by name.
pub fn engine_from_config(
    config: &EngineConfig,
    propellants: &[Propellant],
) -> Result<Engine, CatalogError> {
    let fuel = find_propellant(propellants, &config.fuel)?;
    let oxidizer = find_propellant(propellants, &config.oxidizer)?;
    Ok(Engine::new(
        config.name.clone(),
        config.thrust_n,
        config.isp_s,
        fuel,
        oxidizer,
        config.mixture_ratio,
        config.dry_mass_kg,
    )?)
}

/// Select an engine from the catalog by optional name, defaulting to the
/// first entry.
pub fn select_engine(
    configs: &[EngineConfig],
    propellants: &[Propellant],
    requested: Option<&str>,
) -> Result<Engine, CatalogError> {
    if configs.is_empty() {
        return Err(CatalogError::EmptyCatalog);
    }

    let chosen = if let Some(name) = requested {
        let upper = name.to_uppercase();
        configs
            .iter()
            .find(|cfg| cfg.name.to_uppercase() == upper)
            .ok_or_else(|| CatalogError::EngineNotFound(name.to_string()))?
    } else {
        &configs[0]
    };

    engine_from_config(chosen, propellants)
}

fn find_propellant(propellants: &[Propellant], name: &str) -> Result<Propellant, CatalogError> {
    let upper = name.to_uppercase();
    propellants
        .iter()
        .find(|p| p.name.to_uppercase() == upper)
        .cloned()
        .ok_or_else(|| CatalogError::PropellantNotFound(name.to_string()))
}
