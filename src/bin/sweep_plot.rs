use clap::Parser;
use csv::ReaderBuilder;
use plotters::prelude::*;
use std::fs;
use std::path::PathBuf;

/// Render the two-stage split sweep curve: total stack mass and engine count
/// against the upper-stage delta-v fraction.
#[derive(Parser, Debug)]
#[command(author, version, about = "Split sweep chart renderer")]
struct Cli {
    /// Input CSV produced by the sweep binary
    #[arg(long)]
    input: String,

    /// Output PNG path
    #[arg(long, default_value = "artifacts/split_sweep.png")]
    output: PathBuf,

    #[arg(long, default_value_t = 1400)]
    width: u32,

    #[arg(long, default_value_t = 700)]
    height: u32,
}

#[derive(Debug, Clone, Copy)]
struct SweepRow {
    fraction: f64,
    total_mass_kg: f64,
    total_engines: f64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let rows = read_rows(&cli.input)?;
    if rows.is_empty() {
        return Err(anyhow::anyhow!(
            "No converged sweep points in the provided CSV"
        ));
    }

    if let Some(parent) = cli.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let output_str = cli
        .output
        .to_str()
        .ok_or_else(|| anyhow::anyhow!("Output path contains invalid UTF-8"))?;

    let f_min = rows.iter().map(|r| r.fraction).fold(f64::INFINITY, f64::min);
    let f_max = rows
        .iter()
        .map(|r| r.fraction)
        .fold(f64::NEG_INFINITY, f64::max);
    let mass_max = rows
        .iter()
        .map(|r| r.total_mass_kg)
        .fold(f64::NEG_INFINITY, f64::max);
    let engines_max = rows
        .iter()
        .map(|r| r.total_engines)
        .fold(f64::NEG_INFINITY, f64::max);

    let best = rows
        .iter()
        .copied()
        .min_by(|a, b| {
            a.total_mass_kg
                .partial_cmp(&b.total_mass_kg)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .ok_or_else(|| anyhow::anyhow!("No converged sweep points in the provided CSV"))?;

    let root = BitMapBackend::new(output_str, (cli.width, cli.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let font_family = select_font_family();
    let caption_font = FontDesc::new(font_family, 22.0, FontStyle::Bold);
    let label_font = FontDesc::new(font_family, 16.0, FontStyle::Normal);

    let (mass_area, engine_area) = root.split_horizontally((cli.width / 2) as i32);

    {
        let mut chart = ChartBuilder::on(&mass_area)
            .margin(20)
            .caption("Stack mass vs split fraction", caption_font.clone())
            .x_label_area_size(50)
            .y_label_area_size(80)
            .build_cartesian_2d(f_min..f_max, 0.0..mass_max * 1.05)?;

        chart
            .configure_mesh()
            .x_desc("Upper-stage delta-v fraction")
            .y_desc("Total stack mass (kg)")
            .label_style(label_font.clone())
            .x_labels(6)
            .y_labels(6)
            .y_label_formatter(&|v| format!("{v:.0}"))
            .draw()?;

        chart.draw_series(LineSeries::new(
            rows.iter().map(|r| (r.fraction, r.total_mass_kg)),
            BLUE.stroke_width(2),
        ))?;

        // Crosshair on the minimum-mass point.
        let marker_color = RGBColor(210, 100, 20);
        chart.draw_series(std::iter::once(PathElement::new(
            vec![(best.fraction, 0.0), (best.fraction, mass_max * 1.05)],
            ShapeStyle::from(&BLACK.mix(0.5)).stroke_width(1),
        )))?;
        chart.draw_series(std::iter::once(Circle::new(
            (best.fraction, best.total_mass_kg),
            4,
            marker_color.filled(),
        )))?;
        let text = format!("{:.0} kg @ f = {:.3}", best.total_mass_kg, best.fraction);
        chart.draw_series(std::iter::once(Text::new(
            text,
            (best.fraction, best.total_mass_kg + mass_max * 0.04),
            label_font.clone().color(&marker_color),
        )))?;
    }

    {
        let mut chart = ChartBuilder::on(&engine_area)
            .margin(20)
            .caption("Engine count vs split fraction", caption_font)
            .x_label_area_size(50)
            .y_label_area_size(60)
            .build_cartesian_2d(f_min..f_max, 0.0..engines_max + 1.0)?;

        chart
            .configure_mesh()
            .x_desc("Upper-stage delta-v fraction")
            .y_desc("Total engines")
            .label_style(label_font.clone())
            .x_labels(6)
            .y_labels(6)
            .y_label_formatter(&|v| format!("{v:.0}"))
            .draw()?;

        chart.draw_series(LineSeries::new(
            rows.iter().map(|r| (r.fraction, r.total_engines)),
            RED.stroke_width(2),
        ))?;
    }

    root.present()?;
    Ok(())
}

fn select_font_family() -> FontFamily<'static> {
    if cfg!(target_os = "macos") {
        FontFamily::Name("Helvetica")
    } else if cfg!(target_os = "windows") {
        FontFamily::Name("Arial")
    } else {
        FontFamily::Name("DejaVu Sans")
    }
}

fn read_rows(path: &str) -> anyhow::Result<Vec<SweepRow>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let headers = rdr.headers()?.clone();
    let fraction_idx = column(&headers, "fraction")?;
    let mass_idx = column(&headers, "total_mass_kg")?;
    let engines_idx = column(&headers, "total_engines")?;
    let converged_idx = column(&headers, "converged")?;

    let mut rows = Vec::new();
    for rec in rdr.records() {
        let r = rec?;
        let fraction: f64 = r.get(fraction_idx).unwrap_or("").parse().unwrap_or(f64::NAN);
        let mass: f64 = r.get(mass_idx).unwrap_or("").parse().unwrap_or(f64::NAN);
        let engines: f64 = r
            .get(engines_idx)
            .unwrap_or("")
            .parse()
            .unwrap_or(f64::NAN);
        let converged = r
            .get(converged_idx)
            .unwrap_or("false")
            .eq_ignore_ascii_case("true");
        if converged && fraction.is_finite() && mass.is_finite() && engines.is_finite() {
            rows.push(SweepRow {
                fraction,
                total_mass_kg: mass,
                total_engines: engines,
            });
        }
    }
    Ok(rows)
}

fn column(headers: &csv::StringRecord, name: &str) -> anyhow::Result<usize> {
    headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case(name))
        .ok_or_else(|| anyhow::anyhow!("CSV missing '{}' column", name))
}
