//! Stage mass sizing: rocket-equation fractions, propellant budgeting,
//! structural margin evaluation, and the two-stage split sweep.

pub mod budget;
pub mod catalog;
pub mod fractions;
pub mod margin;
pub mod stage;
pub mod sweep;

pub use budget::{
    BudgetError, DEFAULT_STARTUP_TIME_S, DEFAULT_ULLAGE_FRACTION, PropellantBudget,
    propellant_budget,
};
pub use fractions::{InfeasibleSplit, MassFractions, mass_fractions};
pub use margin::{
    MarginError, MarginSample, REQUIRED_STRUCTURAL_MARGIN_PERCENT, THRUST_TO_WEIGHT_MARGIN,
    evaluate_margin,
};
pub use stage::{INITIAL_STRUCTURAL_FRACTION, StageError, StageSummary, size_stage};
pub use sweep::{FractionGrid, SplitPoint, SweepError, SweepRequest, min_mass_point, sweep_split};
