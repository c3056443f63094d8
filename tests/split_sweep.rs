use launch_sizing_calculator::core::propellants::PropellantKind;
use launch_sizing_calculator::propulsion::{Engine, Propellant};
use launch_sizing_calculator::sizing::{
    FractionGrid, SweepError, SweepRequest, min_mass_point, sweep_split,
};
use launch_sizing_calculator::solver::SolverOptions;

fn rl10() -> Engine {
    let lox = Propellant::new("LOX", PropellantKind::Lox, 1140.0, 88.71).expect("lox");
    let lh2 = Propellant::new("LH2", PropellantKind::Lh2, 41.0, 20.15).expect("lh2");
    Engine::new("RL10", 110.1e3, 465.5, lh2, lox, 6.0, None).expect("engine")
}

fn request(engine: &Engine, grid: FractionGrid) -> SweepRequest<'_> {
    SweepRequest {
        engine,
        payload_mass_kg: 1000.0,
        total_delta_v_m_s: 9000.0,
        grid,
        solver: SolverOptions::default(),
    }
}

#[test]
fn nine_point_sweep_records_the_curve() {
    let engine = rl10();
    let grid = FractionGrid {
        start: 0.1,
        end: 0.9,
        steps: 9,
    };
    let points = sweep_split(&request(&engine, grid)).expect("sweep");
    assert_eq!(points.len(), 9);

    for point in &points {
        assert!(
            point.converged,
            "point at fraction {} did not converge",
            point.fraction
        );
        assert!(
            point.total_mass_kg > 1000.0,
            "stack must outweigh its payload, got {} kg",
            point.total_mass_kg
        );
        // The lower stage carries the upper stage as payload.
        assert!(point.lower.total_mass_kg > point.upper.total_mass_kg);
        assert!((point.upper_delta_v_m_s + point.lower_delta_v_m_s - 9000.0).abs() < 1e-9);
        assert_eq!(
            point.total_engine_count,
            point.upper.engine_count + point.lower.engine_count
        );
    }

    assert!((points[0].fraction - 0.1).abs() < 1e-12);
    assert!((points[8].fraction - 0.9).abs() < 1e-12);
}

#[test]
fn min_mass_point_scans_the_recorded_curve() {
    let engine = rl10();
    let grid = FractionGrid {
        start: 0.1,
        end: 0.9,
        steps: 9,
    };
    let points = sweep_split(&request(&engine, grid)).expect("sweep");
    let best = min_mass_point(&points).expect("non-empty curve");
    for point in &points {
        assert!(best.total_mass_kg <= point.total_mass_kg);
    }
}

#[test]
fn default_grid_matches_the_reference_sweep() {
    let grid = FractionGrid::default();
    assert_eq!(grid.steps, 100);
    let values = grid.values();
    assert_eq!(values.len(), 100);
    assert!((values[0] - 0.1).abs() < 1e-12);
    assert!((values[99] - 0.9).abs() < 1e-12);
}

#[test]
fn grid_and_delta_v_validation() {
    let engine = rl10();

    let empty = FractionGrid {
        start: 0.1,
        end: 0.9,
        steps: 0,
    };
    assert!(matches!(
        sweep_split(&request(&engine, empty)),
        Err(SweepError::EmptyGrid)
    ));

    let at_zero = FractionGrid {
        start: 0.0,
        end: 0.9,
        steps: 10,
    };
    assert!(matches!(
        sweep_split(&request(&engine, at_zero)),
        Err(SweepError::GridOutOfRange { .. })
    ));

    let at_one = FractionGrid {
        start: 0.1,
        end: 1.0,
        steps: 10,
    };
    assert!(matches!(
        sweep_split(&request(&engine, at_one)),
        Err(SweepError::GridOutOfRange { .. })
    ));

    let mut bad_dv = request(&engine, FractionGrid::default());
    bad_dv.total_delta_v_m_s = 0.0;
    assert!(matches!(
        sweep_split(&bad_dv),
        Err(SweepError::NonPositiveDeltaV(_))
    ));
}

#[test]
fn empty_curve_has_no_minimum() {
    assert!(min_mass_point(&[]).is_none());
}
