//! Single-stage sizing: drive the structural margin to zero over the
//! structural mass fraction.

use launch_propulsion::Engine;
use launch_solver::{SolverOptions, find_root};
use serde::Serialize;
use thiserror::Error;

use crate::margin::{self, MarginError};

/// Structural fraction used to seed the root search.
pub const INITIAL_STRUCTURAL_FRACTION: f64 = 0.01;

/// Sizing result for one stage.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StageSummary {
    pub total_mass_kg: f64,
    pub engine_count: u32,
    pub structural_fraction: f64,
    /// Residual margin at the reported fraction (percentage points).
    pub margin_percent: f64,
    pub iterations: u32,
    /// False when the root search stalled or ran out of iterations; the
    /// fields above then hold the best available iterate.
    pub converged: bool,
}

#[derive(Debug, Error)]
pub enum StageError {
    #[error("payload mass must be positive, got {0} kg")]
    NonPositivePayload(f64),
    #[error("delta-v must be non-negative, got {0} m/s")]
    NegativeDeltaV(f64),
    #[error(transparent)]
    Margin(#[from] MarginError),
}

/// Size one stage for a payload mass (kg) and required delta-v (m/s).
///
/// Infeasibility repair stays inside the margin evaluation; this function
/// only validates its inputs and drives the shared root finder.
pub fn size_stage(
    engine: &Engine,
    payload_mass_kg: f64,
    delta_v_m_s: f64,
    options: &SolverOptions,
) -> Result<StageSummary, StageError> {
    if payload_mass_kg <= 0.0 {
        return Err(StageError::NonPositivePayload(payload_mass_kg));
    }
    if delta_v_m_s < 0.0 {
        return Err(StageError::NegativeDeltaV(delta_v_m_s));
    }

    let solve = find_root(
        |fraction| {
            margin::evaluate_margin(engine, payload_mass_kg, delta_v_m_s, fraction)
                .map(|sample| sample.margin_percent)
        },
        INITIAL_STRUCTURAL_FRACTION,
        options,
    )?;

    let sample = margin::evaluate_margin(engine, payload_mass_kg, delta_v_m_s, solve.root)?;
    Ok(StageSummary {
        total_mass_kg: sample.total_mass_kg,
        engine_count: sample.engine_count,
        structural_fraction: sample.structural_fraction,
        margin_percent: sample.margin_percent,
        iterations: solve.iterations,
        converged: solve.converged,
    })
}
