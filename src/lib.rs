//! Launch-vehicle stage sizing: rocket-equation mass fractions, propellant
//! budgeting, structural margin convergence, and two-stage split sweeps.
//!
//! This root crate re-exports the workspace members under stable module
//! names so front-ends (CLI, plotting, tests) depend on a single crate.

pub use launch_config as config;
pub use launch_core as core;
pub use launch_export as export;
pub use launch_mers as mers;
pub use launch_propulsion as propulsion;
pub use launch_requirements as requirements;
pub use launch_sizing as sizing;
pub use launch_solver as solver;

/// Returns the version of the library for smoke tests.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
