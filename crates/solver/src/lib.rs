//! Scalar root finding by secant-style Newton iteration.
//!
//! One shared routine serves every sizing loop in the workspace. The slope is
//! estimated from a relative perturbation of the current iterate rather than
//! an analytic derivative, so objectives only need to be evaluable, not
//! differentiable.

/// Tuning knobs for the secant iteration.
#[derive(Debug, Clone)]
pub struct SolverOptions {
    /// Relative perturbation used for the slope estimate (`dx = relative_step · x`).
    pub relative_step: f64,
    /// Absolute floor on the perturbation magnitude so an iterate at zero still moves.
    pub min_step: f64,
    /// Convergence threshold on the change between successive iterates.
    pub tolerance: f64,
    /// Slope magnitude at or below which the iteration is reported as stalled.
    pub flat_slope_threshold: f64,
    /// Hard cap on iterations.
    pub max_iterations: u32,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            relative_step: -1e-3,
            min_step: 1e-9,
            tolerance: 1e-6,
            flat_slope_threshold: 1e-3,
            max_iterations: 200,
        }
    }
}

/// Result of a root search.
///
/// `converged` is false when the slope estimate flattened out or the
/// iteration cap was reached; `root` then carries the best available iterate
/// and callers decide whether the approximation is acceptable.
#[derive(Debug, Clone, Copy)]
pub struct RootSolve {
    pub root: f64,
    /// Objective value at the reported root.
    pub residual: f64,
    pub iterations: u32,
    pub converged: bool,
}

/// Find `x` such that `objective(x) ≈ 0`, starting from `initial_guess`.
///
/// Errors from the objective abort the search and propagate unchanged.
pub fn find_root<E>(
    mut objective: impl FnMut(f64) -> Result<f64, E>,
    initial_guess: f64,
    options: &SolverOptions,
) -> Result<RootSolve, E> {
    let mut x = initial_guess;
    let mut value = objective(x)?;
    let mut iterations = 0;

    while iterations < options.max_iterations {
        let mut dx = options.relative_step * x;
        if dx.abs() < options.min_step {
            dx = options.min_step.copysign(options.relative_step);
        }

        let perturbed = objective(x + dx)?;
        let slope = (perturbed - value) / dx;
        iterations += 1;

        if !slope.is_finite() || slope.abs() <= options.flat_slope_threshold {
            return Ok(RootSolve {
                root: x,
                residual: value,
                iterations,
                converged: false,
            });
        }

        let next = x - value / slope;
        let change = next - x;
        x = next;
        value = objective(x)?;

        if change.abs() < options.tolerance {
            return Ok(RootSolve {
                root: x,
                residual: value,
                iterations,
                converged: true,
            });
        }
    }

    Ok(RootSolve {
        root: x,
        residual: value,
        iterations,
        converged: false,
    })
}
