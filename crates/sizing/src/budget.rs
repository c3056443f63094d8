//! Oxidizer/fuel budgeting and tank volume allocation for one stage.

use launch_propulsion::Engine;
use thiserror::Error;

/// Default fraction of each tank volume reserved for ullage.
pub const DEFAULT_ULLAGE_FRACTION: f64 = 0.05;
/// Default engine startup transient duration (s).
pub const DEFAULT_STARTUP_TIME_S: f64 = 1.0;

/// Propellant masses, tank volumes, and startup losses for one stage.
#[derive(Debug, Clone, Copy)]
pub struct PropellantBudget {
    pub oxidizer_mass_kg: f64,
    pub fuel_mass_kg: f64,
    /// Oxidizer tank volume (m³) including the startup allowance and ullage headroom.
    pub oxidizer_volume_m3: f64,
    /// Fuel tank volume (m³) including the startup allowance and ullage headroom.
    pub fuel_volume_m3: f64,
    /// Propellant consumed during engine startup, unavailable as usable delta-v.
    pub startup_losses_kg: f64,
}

#[derive(Debug, Clone, Copy, Error)]
pub enum BudgetError {
    #[error("ullage fraction must stay below 1.0, got {0}")]
    UllageFractionTooHigh(f64),
    #[error("propellant mass must be positive, got {0} kg")]
    NonPositivePropellantMass(f64),
}

/// Split a usable propellant load (kg) across oxidizer and fuel tanks.
///
/// Startup consumption is budgeted at twice the nominal mass flow over
/// `startup_time_s`, split by mixture ratio, and added to each tank's
/// contents before the ullage headroom is applied. A negative ullage fraction
/// is accepted and simply shrinks the volumes; fractions at or above one are
/// rejected.
pub fn propellant_budget(
    propellant_mass_kg: f64,
    engine: &Engine,
    ullage_fraction: f64,
    startup_time_s: f64,
) -> Result<PropellantBudget, BudgetError> {
    if ullage_fraction >= 1.0 {
        return Err(BudgetError::UllageFractionTooHigh(ullage_fraction));
    }
    if propellant_mass_kg <= 0.0 {
        return Err(BudgetError::NonPositivePropellantMass(propellant_mass_kg));
    }

    let mixture_ratio = engine.mixture_ratio;
    let startup_flow_kg = 2.0 * engine.mass_flow_kg_s() * startup_time_s;

    let oxidizer_startup_kg = startup_flow_kg * mixture_ratio / (mixture_ratio + 1.0);
    let oxidizer_mass_kg = mixture_ratio * propellant_mass_kg / (mixture_ratio + 1.0);
    let oxidizer_volume_m3 = ((oxidizer_mass_kg + oxidizer_startup_kg)
        / engine.oxidizer.density_kg_m3)
        / (1.0 - ullage_fraction);

    let fuel_startup_kg = startup_flow_kg / (mixture_ratio + 1.0);
    let fuel_mass_kg = propellant_mass_kg / (mixture_ratio + 1.0);
    let fuel_volume_m3 =
        ((fuel_mass_kg + fuel_startup_kg) / engine.fuel.density_kg_m3) / (1.0 - ullage_fraction);

    Ok(PropellantBudget {
        oxidizer_mass_kg,
        fuel_mass_kg,
        oxidizer_volume_m3,
        fuel_volume_m3,
        startup_losses_kg: oxidizer_startup_kg + fuel_startup_kg,
    })
}
