//! Two-stage delta-v split sweep.
//!
//! Partitions a total delta-v budget between an upper and a lower stage
//! across a fraction grid and sizes both stages at every point. The sweep
//! records the curve for inspection; it does not pick a winner.

use launch_propulsion::Engine;
use launch_solver::SolverOptions;
use serde::Serialize;
use thiserror::Error;

use crate::stage::{StageError, StageSummary, size_stage};

/// Fraction grid swept across the open interval (0, 1).
#[derive(Debug, Clone, Copy)]
pub struct FractionGrid {
    pub start: f64,
    pub end: f64,
    pub steps: usize,
}

impl Default for FractionGrid {
    fn default() -> Self {
        Self {
            start: 0.1,
            end: 0.9,
            steps: 100,
        }
    }
}

impl FractionGrid {
    /// Evenly spaced fraction values across `[start, end]`.
    pub fn values(&self) -> Vec<f64> {
        if self.steps == 1 {
            return vec![self.start];
        }
        let span = self.end - self.start;
        (0..self.steps)
            .map(|i| self.start + span * i as f64 / (self.steps - 1) as f64)
            .collect()
    }
}

/// Inputs for a two-stage split sweep.
#[derive(Debug, Clone)]
pub struct SweepRequest<'a> {
    pub engine: &'a Engine,
    /// Payload carried by the upper stage (kg).
    pub payload_mass_kg: f64,
    /// Total delta-v to partition across both stages (m/s).
    pub total_delta_v_m_s: f64,
    pub grid: FractionGrid,
    pub solver: SolverOptions,
}

/// One sample of the split curve.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SplitPoint {
    /// Fraction of the total delta-v assigned to the upper stage.
    pub fraction: f64,
    pub upper_delta_v_m_s: f64,
    pub lower_delta_v_m_s: f64,
    pub upper: StageSummary,
    pub lower: StageSummary,
    /// Liftoff mass of the full stack (kg).
    pub total_mass_kg: f64,
    pub total_engine_count: u32,
    /// True only when both stage searches converged.
    pub converged: bool,
}

#[derive(Debug, Error)]
pub enum SweepError {
    #[error("split grid must stay strictly inside (0, 1), got [{start}, {end}]")]
    GridOutOfRange { start: f64, end: f64 },
    #[error("split grid needs at least one step")]
    EmptyGrid,
    #[error("total delta-v must be positive, got {0} m/s")]
    NonPositiveDeltaV(f64),
    #[error(transparent)]
    Stage(#[from] StageError),
}

/// Size both stages at every grid fraction and record the resulting curve.
///
/// The lower stage carries the converged upper stage as its payload, so each
/// point is two sizing runs chained back to back.
pub fn sweep_split(request: &SweepRequest<'_>) -> Result<Vec<SplitPoint>, SweepError> {
    let grid = request.grid;
    if grid.steps == 0 {
        return Err(SweepError::EmptyGrid);
    }
    if !(grid.start > 0.0 && grid.end < 1.0 && grid.start <= grid.end) {
        return Err(SweepError::GridOutOfRange {
            start: grid.start,
            end: grid.end,
        });
    }
    if request.total_delta_v_m_s <= 0.0 {
        return Err(SweepError::NonPositiveDeltaV(request.total_delta_v_m_s));
    }

    let mut points = Vec::with_capacity(grid.steps);
    for fraction in grid.values() {
        let upper_delta_v_m_s = fraction * request.total_delta_v_m_s;
        let lower_delta_v_m_s = (1.0 - fraction) * request.total_delta_v_m_s;

        let upper = size_stage(
            request.engine,
            request.payload_mass_kg,
            upper_delta_v_m_s,
            &request.solver,
        )?;
        let lower = size_stage(
            request.engine,
            upper.total_mass_kg,
            lower_delta_v_m_s,
            &request.solver,
        )?;

        points.push(SplitPoint {
            fraction,
            upper_delta_v_m_s,
            lower_delta_v_m_s,
            upper,
            lower,
            total_mass_kg: lower.total_mass_kg,
            total_engine_count: upper.engine_count + lower.engine_count,
            converged: upper.converged && lower.converged,
        });
    }

    Ok(points)
}

/// Minimum-total-mass sample of a recorded curve.
///
/// A passive scan over the computed points for report annotations; no extra
/// sizing is performed.
pub fn min_mass_point(points: &[SplitPoint]) -> Option<&SplitPoint> {
    points.iter().min_by(|a, b| {
        a.total_mass_kg
            .partial_cmp(&b.total_mass_kg)
            .unwrap_or(std::cmp::Ordering::Equal)
    })
}
