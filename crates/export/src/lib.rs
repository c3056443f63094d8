//! Export helpers for sweep CSV and JSON artifacts.

pub mod split_sweep {
    use std::fs::{self, File};
    use std::io::{self, BufWriter, Write};
    use std::path::Path;

    const HEADER: &str = "fraction,upper_dv_m_s,lower_dv_m_s,upper_mass_kg,upper_engines,upper_structural_fraction,lower_mass_kg,lower_engines,lower_structural_fraction,total_mass_kg,total_engines,converged";

    /// Create a writer for the target path, handling stdout (`-`) by convention.
    pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
        if path == Path::new("-") {
            return Ok(Box::new(BufWriter::new(io::stdout())));
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(path)?;
        Ok(Box::new(BufWriter::new(file)))
    }

    /// Write the standard sweep CSV header.
    pub fn write_header(writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "{}", HEADER)
    }

    /// CSV row emitted by the sweep exporter.
    #[derive(Debug, Clone)]
    pub struct Record {
        pub fraction: f64,
        pub upper_dv_m_s: f64,
        pub lower_dv_m_s: f64,
        pub upper_mass_kg: f64,
        pub upper_engines: u32,
        pub upper_structural_fraction: f64,
        pub lower_mass_kg: f64,
        pub lower_engines: u32,
        pub lower_structural_fraction: f64,
        pub total_mass_kg: f64,
        pub total_engines: u32,
        pub converged: bool,
    }

    impl Record {
        /// Serialize the record to CSV, matching the standard header ordering.
        pub fn write_to(&self, writer: &mut dyn Write) -> io::Result<()> {
            writeln!(
                writer,
                "{:.6},{:.3},{:.3},{:.3},{},{:.6},{:.3},{},{:.6},{:.3},{},{}",
                self.fraction,
                self.upper_dv_m_s,
                self.lower_dv_m_s,
                self.upper_mass_kg,
                self.upper_engines,
                self.upper_structural_fraction,
                self.lower_mass_kg,
                self.lower_engines,
                self.lower_structural_fraction,
                self.total_mass_kg,
                self.total_engines,
                if self.converged { "true" } else { "false" },
            )
        }
    }
}

pub mod summary {
    use std::fs::{self, File};
    use std::io;
    use std::path::Path;

    use serde::Serialize;
    use serde_json::to_writer_pretty;

    /// Minimum-mass annotation of a sweep.
    #[derive(Debug, Clone, Serialize)]
    pub struct MinMassPoint {
        pub fraction: f64,
        pub total_mass_kg: f64,
        pub total_engines: u32,
    }

    /// Envelope describing a completed sweep run.
    #[derive(Debug, Serialize)]
    pub struct SweepSummary<'a> {
        pub engine: &'a str,
        pub payload_mass_kg: f64,
        pub total_delta_v_m_s: f64,
        pub points: usize,
        pub converged_points: usize,
        pub min_mass: Option<MinMassPoint>,
    }

    /// Write the JSON summary sidecar for a sweep run.
    pub fn write_summary(output: &Path, summary: &SweepSummary<'_>) -> io::Result<()> {
        if let Some(parent) = output.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        to_writer_pretty(File::create(output)?, summary)?;
        Ok(())
    }
}
