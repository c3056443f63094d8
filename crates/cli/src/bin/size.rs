use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use launch_sizing_calculator::config::{load_engines, load_propellants};
use launch_sizing_calculator::core::units::{kg_to_t, km_to_m, n_to_kn};
use launch_sizing_calculator::mers::{self, tanks};
use launch_sizing_calculator::propulsion::Engine;
use launch_sizing_calculator::requirements;
use launch_sizing_calculator::sizing::{
    self, DEFAULT_STARTUP_TIME_S, DEFAULT_ULLAGE_FRACTION, PropellantBudget, catalog,
};
use launch_sizing_calculator::solver::SolverOptions;

/// Size a single launch-vehicle stage for a payload and delta-v requirement.
#[derive(Parser, Debug)]
#[command(author, version, about = "Single-stage mass sizing")]
struct Cli {
    /// Payload mass (kg)
    #[arg(long, default_value_t = 1000.0)]
    payload: f64,

    /// Required delta-v (m/s); replaced by the injection estimate when
    /// --altitude is given
    #[arg(long, default_value_t = 1000.0)]
    delta_v: f64,

    /// Target circular orbit altitude (km); switches --delta-v to the
    /// estimated injection requirement
    #[arg(long)]
    altitude: Option<f64>,

    /// Launch site latitude (deg), used with --altitude
    #[arg(long, default_value_t = 28.5)]
    latitude: f64,

    /// Orbit inclination (deg), used with --altitude
    #[arg(long, default_value_t = 28.5)]
    inclination: f64,

    /// Engine name from the engine catalog
    #[arg(long, default_value = "RL10")]
    engine: String,

    /// Engine catalog path
    #[arg(long, default_value = "configs/engines.yaml")]
    engines: PathBuf,

    /// Propellant catalog path
    #[arg(long, default_value = "configs/propellants.yaml")]
    propellants: PathBuf,

    /// Tank ullage fraction for the budget breakdown
    #[arg(long, default_value_t = DEFAULT_ULLAGE_FRACTION)]
    ullage: f64,

    /// Engine startup transient (s) for the budget breakdown
    #[arg(long, default_value_t = DEFAULT_STARTUP_TIME_S)]
    startup_time: f64,

    /// Report tank dimensions for this shell family
    #[arg(long, value_enum)]
    tank_geometry: Option<TankShape>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TankShape {
    Spherical,
    Elliptical,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let propellant_configs = load_propellants(&cli.propellants)?;
    let propellants = propellant_configs
        .iter()
        .map(catalog::propellant_from_config)
        .collect::<Result<Vec<_>, _>>()?;
    let engine_configs = load_engines(&cli.engines)?;
    let engine = catalog::select_engine(&engine_configs, &propellants, Some(&cli.engine))?;

    let delta_v = match cli.altitude {
        Some(altitude_km) => requirements::injection_delta_v_m_s(
            km_to_m(altitude_km),
            cli.latitude,
            cli.inclination,
        )?,
        None => cli.delta_v,
    };

    if cli.ullage < 0.0 {
        eprintln!(
            "warning: negative ullage fraction {} shrinks tank volumes below the propellant volume",
            cli.ullage
        );
    }

    let summary = sizing::size_stage(&engine, cli.payload, delta_v, &SolverOptions::default())?;
    if !summary.converged {
        eprintln!(
            "warning: sizing did not converge after {} iterations; reporting the best iterate",
            summary.iterations
        );
    }

    println!(
        "Stage sizing for {} ({:.1} kN, isp {:.1} s)",
        engine.name,
        n_to_kn(engine.thrust_n),
        engine.isp_s
    );
    println!("  payload:             {:>12.1} kg", cli.payload);
    println!("  delta-v:             {:>12.1} m/s", delta_v);
    println!(
        "  total mass:          {:>12.1} kg ({:.2} t)",
        summary.total_mass_kg,
        kg_to_t(summary.total_mass_kg)
    );
    println!("  engines:             {:>12}", summary.engine_count);
    println!(
        "  structural fraction: {:>12.5}",
        summary.structural_fraction
    );
    println!("  residual margin:     {:>12.3} %", summary.margin_percent);

    let fractions = sizing::mass_fractions(engine.isp_s, delta_v, summary.structural_fraction)?;
    let propellant_mass = fractions.propellant * summary.total_mass_kg;
    let budget =
        sizing::propellant_budget(propellant_mass, &engine, cli.ullage, cli.startup_time)?;
    println!(
        "  oxidizer:            {:>12.1} kg in {:>8.2} m³",
        budget.oxidizer_mass_kg, budget.oxidizer_volume_m3
    );
    println!(
        "  fuel:                {:>12.1} kg in {:>8.2} m³",
        budget.fuel_mass_kg, budget.fuel_volume_m3
    );
    println!("  startup losses:      {:>12.1} kg", budget.startup_losses_kg);
    println!(
        "  thrust structure:    {:>12.1} kg",
        mers::thrust_structure_mass_kg(engine.thrust_n * f64::from(summary.engine_count))
    );

    if let Some(shape) = cli.tank_geometry {
        report_tanks(shape, &engine, &budget)?;
    }

    Ok(())
}

fn report_tanks(shape: TankShape, engine: &Engine, budget: &PropellantBudget) -> anyhow::Result<()> {
    let geometry = match shape {
        TankShape::Spherical => tanks::TankGeometry::Spherical,
        TankShape::Elliptical => tanks::TankGeometry::Elliptical {
            dome_fraction: tanks::DEFAULT_DOME_FRACTION,
            diameter_m: tanks::DEFAULT_DIAMETER_M,
        },
    };

    for (label, volume, kind) in [
        ("oxidizer tank:", budget.oxidizer_volume_m3, engine.oxidizer.kind),
        ("fuel tank:", budget.fuel_volume_m3, engine.fuel.kind),
    ] {
        let dims = tanks::size_tank(volume, geometry)?;
        let shell = mers::tank_mass_kg(volume, kind);
        let insulation = mers::insulation_mass_kg(dims.surface_area_m2, kind);
        println!(
            "  {:<20} r {:.2} m, height {:.2} m, shell {:.1} kg, insulation {:.1} kg",
            label, dims.radius_m, dims.overall_height_m, shell, insulation
        );
    }

    Ok(())
}
