use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use launch_sizing_calculator::config::{load_engines, load_propellants};
use launch_sizing_calculator::export::{split_sweep as export_sweep, summary as export_summary};
use launch_sizing_calculator::sizing::{
    FractionGrid, SweepRequest, catalog, min_mass_point, sweep_split,
};
use launch_sizing_calculator::solver::SolverOptions;

/// Generate the two-stage delta-v split curve (CSV) by sweeping the fraction
/// of the total delta-v assigned to the upper stage.
#[derive(Parser, Debug)]
#[command(author, version, about = "Two-stage split sweep CSV generator")]
struct Cli {
    /// Payload mass carried by the upper stage (kg)
    #[arg(long, default_value_t = 1000.0)]
    payload: f64,

    /// Total delta-v to partition across both stages (m/s)
    #[arg(long, default_value_t = 9000.0)]
    total_dv: f64,

    /// Lowest upper-stage fraction in the sweep
    #[arg(long, default_value_t = 0.1)]
    f_min: f64,

    /// Highest upper-stage fraction in the sweep
    #[arg(long, default_value_t = 0.9)]
    f_max: f64,

    /// Number of grid points
    #[arg(long, default_value_t = 100)]
    steps: usize,

    /// Engine name from the engine catalog
    #[arg(long, default_value = "RL10")]
    engine: String,

    /// Engine catalog path
    #[arg(long, default_value = "configs/engines.yaml")]
    engines: PathBuf,

    /// Propellant catalog path
    #[arg(long, default_value = "configs/propellants.yaml")]
    propellants: PathBuf,

    /// Output CSV file (use '-' for stdout)
    #[arg(long, default_value = "artifacts/split_sweep.csv")]
    output: PathBuf,

    /// Optional JSON summary sidecar path
    #[arg(long)]
    summary: Option<PathBuf>,
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

    let request = SweepRequest {
        engine: &engine,
        payload_mass_kg: cli.payload,
        total_delta_v_m_s: cli.total_dv,
        grid: FractionGrid {
            start: cli.f_min,
            end: cli.f_max,
            steps: cli.steps,
        },
        solver: SolverOptions::default(),
    };
    let points = sweep_split(&request)?;

    let mut writer = export_sweep::writer_for_path(&cli.output)?;
    export_sweep::write_header(writer.as_mut())?;
    for point in &points {
        let record = export_sweep::Record {
            fraction: point.fraction,
            upper_dv_m_s: point.upper_delta_v_m_s,
            lower_dv_m_s: point.lower_delta_v_m_s,
            upper_mass_kg: point.upper.total_mass_kg,
            upper_engines: point.upper.engine_count,
            upper_structural_fraction: point.upper.structural_fraction,
            lower_mass_kg: point.lower.total_mass_kg,
            lower_engines: point.lower.engine_count,
            lower_structural_fraction: point.lower.structural_fraction,
            total_mass_kg: point.total_mass_kg,
            total_engines: point.total_engine_count,
            converged: point.converged,
        };
        record.write_to(writer.as_mut())?;
    }
    writer.flush()?;

    let converged_points = points.iter().filter(|p| p.converged).count();
    if converged_points < points.len() {
        eprintln!(
            "warning: {} of {} sweep points did not converge",
            points.len() - converged_points,
            points.len()
        );
    }

    let best = min_mass_point(&points);
    if let Some(best) = best {
        eprintln!(
            "minimum stack mass {:.1} kg at upper-stage fraction {:.3} ({} engines)",
            best.total_mass_kg, best.fraction, best.total_engine_count
        );
    }

    if let Some(path) = &cli.summary {
        let summary = export_summary::SweepSummary {
            engine: &engine.name,
            payload_mass_kg: cli.payload,
            total_delta_v_m_s: cli.total_dv,
            points: points.len(),
            converged_points,
            min_mass: best.map(|p| export_summary::MinMassPoint {
                fraction: p.fraction,
                total_mass_kg: p.total_mass_kg,
                total_engines: p.total_engine_count,
            }),
        };
        export_summary::write_summary(path, &summary)?;
    }

    Ok(())
}
