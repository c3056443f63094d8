//! Propellant and engine definitions shared across the sizing stack.

use launch_core::constants::G0;
use launch_core::propellants::PropellantKind;
use thiserror::Error;

/// A stored propellant and the density used for tank volume budgeting.
/// Immutable; created once at configuration time.
#[derive(Debug, Clone)]
pub struct Propellant {
    pub name: String,
    pub kind: PropellantKind,
    /// Bulk density (kg/m³) at the reference temperature.
    pub density_kg_m3: f64,
    /// Temperature (K) at which the density applies.
    pub reference_temperature_k: f64,
}

#[derive(Debug, Clone, Copy, Error)]
pub enum PropellantError {
    #[error("propellant density must be positive, got {0} kg/m³")]
    NonPositiveDensity(f64),
}

impl Propellant {
    pub fn new(
        name: impl Into<String>,
        kind: PropellantKind,
        density_kg_m3: f64,
        reference_temperature_k: f64,
    ) -> Result<Self, PropellantError> {
        if density_kg_m3 <= 0.0 {
            return Err(PropellantError::NonPositiveDensity(density_kg_m3));
        }
        Ok(Self {
            name: name.into(),
            kind,
            density_kg_m3,
            reference_temperature_k,
        })
    }
}

/// A liquid rocket engine definition. Immutable after construction.
#[derive(Debug, Clone)]
pub struct Engine {
    pub name: String,
    pub thrust_n: f64,
    pub isp_s: f64,
    pub fuel: Propellant,
    pub oxidizer: Propellant,
    /// Oxidizer-to-fuel mass ratio.
    pub mixture_ratio: f64,
    pub dry_mass_kg: f64,
}

#[derive(Debug, Clone, Copy, Error)]
pub enum EngineError {
    #[error("engine thrust must be positive, got {0} N")]
    NonPositiveThrust(f64),
    #[error("specific impulse must be positive, got {0} s")]
    NonPositiveIsp(f64),
    #[error("mixture ratio must be positive, got {0}")]
    NonPositiveMixtureRatio(f64),
    #[error("engine dry mass must be positive, got {0} kg")]
    NonPositiveDryMass(f64),
}

impl Engine {
    /// Build an engine definition. A missing dry mass falls back to the
    /// pump-fed engine relationship at the default nozzle expansion ratio.
    pub fn new(
        name: impl Into<String>,
        thrust_n: f64,
        isp_s: f64,
        fuel: Propellant,
        oxidizer: Propellant,
        mixture_ratio: f64,
        dry_mass_kg: Option<f64>,
    ) -> Result<Self, EngineError> {
        if thrust_n <= 0.0 {
            return Err(EngineError::NonPositiveThrust(thrust_n));
        }
        if isp_s <= 0.0 {
            return Err(EngineError::NonPositiveIsp(isp_s));
        }
        if mixture_ratio <= 0.0 {
            return Err(EngineError::NonPositiveMixtureRatio(mixture_ratio));
        }
        let dry_mass_kg = match dry_mass_kg {
            Some(mass) if mass <= 0.0 => return Err(EngineError::NonPositiveDryMass(mass)),
            Some(mass) => mass,
            None => launch_mers::engine_dry_mass_kg(thrust_n, launch_mers::DEFAULT_EXPANSION_RATIO),
        };

        Ok(Self {
            name: name.into(),
            thrust_n,
            isp_s,
            fuel,
            oxidizer,
            mixture_ratio,
            dry_mass_kg,
        })
    }

    /// Nominal propellant mass flow rate (kg/s) at rated thrust.
    pub fn mass_flow_kg_s(&self) -> f64 {
        self.thrust_n / (self.isp_s * G0)
    }
}
