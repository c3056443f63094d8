//! Structural margin evaluation at a trial structural fraction.

use launch_core::constants::G0;
use launch_mers::TANK_UNIT_MASS_KG_PER_M3;
use launch_propulsion::Engine;
use thiserror::Error;

use crate::budget::{self, BudgetError};
use crate::fractions::{MassFractions, mass_fractions};

/// Thrust-to-weight multiplier applied when counting engines.
pub const THRUST_TO_WEIGHT_MARGIN: f64 = 1.2;
/// Structural margin (percentage points) the budget must clear for convergence.
pub const REQUIRED_STRUCTURAL_MARGIN_PERCENT: f64 = 15.0;
/// Cap on the halving steps used to recover a feasible structural fraction.
const REPAIR_MAX_HALVINGS: u32 = 64;

/// One margin evaluation, produced per root-finder iteration.
#[derive(Debug, Clone, Copy)]
pub struct MarginSample {
    /// Percentage by which the structural budget clears the actual structural
    /// mass, less the required margin. Zero at convergence.
    pub margin_percent: f64,
    pub total_mass_kg: f64,
    pub engine_count: u32,
    /// The evaluated structural fraction, after any feasibility repair.
    pub structural_fraction: f64,
}

#[derive(Debug, Error)]
pub enum MarginError {
    #[error(
        "no feasible structural fraction found below {trial} for {delta_v_m_s} m/s at isp {isp_s} s"
    )]
    Infeasible {
        trial: f64,
        delta_v_m_s: f64,
        isp_s: f64,
    },
    #[error(transparent)]
    Budget(#[from] BudgetError),
}

/// Evaluate the structural margin of a stage at a trial structural fraction.
///
/// An infeasible trial is repaired by halving toward zero, the open lower
/// bound of the feasible region, before evaluation; the repaired fraction is
/// reported in the sample. The repair is capped so degenerate inputs fail
/// instead of looping.
pub fn evaluate_margin(
    engine: &Engine,
    payload_mass_kg: f64,
    delta_v_m_s: f64,
    structural_fraction: f64,
) -> Result<MarginSample, MarginError> {
    let (fractions, repaired_fraction) =
        repair_fractions(engine.isp_s, delta_v_m_s, structural_fraction).ok_or(
            MarginError::Infeasible {
                trial: structural_fraction,
                delta_v_m_s,
                isp_s: engine.isp_s,
            },
        )?;

    let total_mass_kg = payload_mass_kg / fractions.payload;
    let structural_budget_kg = total_mass_kg * fractions.structural;
    let propellant_mass_kg = fractions.propellant * total_mass_kg;

    let engine_count =
        (THRUST_TO_WEIGHT_MARGIN * total_mass_kg * G0 / engine.thrust_n).ceil() as u32;

    let budget = budget::propellant_budget(
        propellant_mass_kg,
        engine,
        budget::DEFAULT_ULLAGE_FRACTION,
        budget::DEFAULT_STARTUP_TIME_S,
    )?;
    let tank_mass_kg =
        (budget.oxidizer_volume_m3 + budget.fuel_volume_m3) * TANK_UNIT_MASS_KG_PER_M3;
    let actual_structural_kg =
        tank_mass_kg + budget.startup_losses_kg + engine.dry_mass_kg * f64::from(engine_count);

    let margin_percent = (structural_budget_kg - actual_structural_kg) / actual_structural_kg
        * 100.0
        - REQUIRED_STRUCTURAL_MARGIN_PERCENT;

    Ok(MarginSample {
        margin_percent,
        total_mass_kg,
        engine_count,
        structural_fraction: repaired_fraction,
    })
}

fn repair_fractions(isp_s: f64, delta_v_m_s: f64, initial: f64) -> Option<(MassFractions, f64)> {
    let mut trial = initial;
    for _ in 0..=REPAIR_MAX_HALVINGS {
        if let Ok(fractions) = mass_fractions(isp_s, delta_v_m_s, trial) {
            return Some((fractions, trial));
        }
        trial /= 2.0;
    }
    None
}
