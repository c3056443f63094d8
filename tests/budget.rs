use launch_sizing_calculator::core::propellants::PropellantKind;
use launch_sizing_calculator::propulsion::{Engine, Propellant};
use launch_sizing_calculator::sizing::{
    BudgetError, DEFAULT_STARTUP_TIME_S, DEFAULT_ULLAGE_FRACTION, propellant_budget,
};

fn rl10() -> Engine {
    let lox = Propellant::new("LOX", PropellantKind::Lox, 1140.0, 88.71).expect("lox");
    let lh2 = Propellant::new("LH2", PropellantKind::Lh2, 41.0, 20.15).expect("lh2");
    Engine::new("RL10", 110.1e3, 465.5, lh2, lox, 6.0, None).expect("engine")
}

#[test]
fn split_follows_mixture_ratio() {
    let engine = rl10();
    let budget = propellant_budget(
        700.0,
        &engine,
        DEFAULT_ULLAGE_FRACTION,
        DEFAULT_STARTUP_TIME_S,
    )
    .expect("budget");

    // MR = 6: six parts oxidizer to one part fuel.
    assert!((budget.oxidizer_mass_kg - 600.0).abs() < 1e-9);
    assert!((budget.fuel_mass_kg - 100.0).abs() < 1e-9);

    // Startup draws twice the nominal flow for one second.
    let expected_losses = 2.0 * engine.mass_flow_kg_s();
    assert!(
        (budget.startup_losses_kg - expected_losses).abs() < 1e-9,
        "losses = {}",
        budget.startup_losses_kg
    );
}

#[test]
fn zero_ullage_reduces_volume_to_mass_over_density() {
    let engine = rl10();
    let budget = propellant_budget(700.0, &engine, 0.0, 1.0).expect("budget");

    let ox_startup = 2.0 * engine.mass_flow_kg_s() * 6.0 / 7.0;
    let expected_ox = (600.0 + ox_startup) / 1140.0;
    assert!((budget.oxidizer_volume_m3 - expected_ox).abs() < 1e-12);

    let fuel_startup = 2.0 * engine.mass_flow_kg_s() / 7.0;
    let expected_fuel = (100.0 + fuel_startup) / 41.0;
    assert!((budget.fuel_volume_m3 - expected_fuel).abs() < 1e-12);
}

#[test]
fn ullage_headroom_inflates_volumes() {
    let engine = rl10();
    let without = propellant_budget(700.0, &engine, 0.0, 1.0).expect("budget");
    let with = propellant_budget(700.0, &engine, 0.05, 1.0).expect("budget");

    assert!((with.oxidizer_volume_m3 * 0.95 - without.oxidizer_volume_m3).abs() < 1e-12);
    assert!((with.fuel_volume_m3 * 0.95 - without.fuel_volume_m3).abs() < 1e-12);
}

#[test]
fn ullage_at_or_above_one_is_rejected() {
    let engine = rl10();
    assert!(matches!(
        propellant_budget(700.0, &engine, 1.0, 1.0),
        Err(BudgetError::UllageFractionTooHigh(_))
    ));
    assert!(matches!(
        propellant_budget(700.0, &engine, 1.5, 1.0),
        Err(BudgetError::UllageFractionTooHigh(_))
    ));
}

#[test]
fn non_positive_propellant_mass_is_rejected() {
    let engine = rl10();
    assert!(matches!(
        propellant_budget(0.0, &engine, 0.05, 1.0),
        Err(BudgetError::NonPositivePropellantMass(_))
    ));
    assert!(matches!(
        propellant_budget(-5.0, &engine, 0.05, 1.0),
        Err(BudgetError::NonPositivePropellantMass(_))
    ));
}

#[test]
fn negative_ullage_is_accepted_and_shrinks_volumes() {
    let engine = rl10();
    let nominal = propellant_budget(700.0, &engine, 0.0, 1.0).expect("budget");
    let shrunk = propellant_budget(700.0, &engine, -0.05, 1.0).expect("budget");
    assert!(shrunk.oxidizer_volume_m3 < nominal.oxidizer_volume_m3);
    assert!(shrunk.fuel_volume_m3 < nominal.fuel_volume_m3);
}
