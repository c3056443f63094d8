//! Mass-estimating relationships for launch-vehicle structural components.
//!
//! Closed-form regressions against historical vehicle data (Rohrschneider,
//! Heineman, Akin). Every function takes and returns SI units; the empirical
//! coefficients are named constants rather than inline literals.

use launch_core::propellants::PropellantKind;

/// Tank shell unit mass for conventional construction (kg per m³ of tank volume).
pub const TANK_UNIT_MASS_KG_PER_M3: f64 = 12.16;
/// Tank shell unit mass for liquid-hydrogen tanks (kg per m³ of tank volume).
pub const LH2_TANK_UNIT_MASS_KG_PER_M3: f64 = 9.09;
/// Insulation unit mass for liquid-hydrogen tanks (kg per m² of tank area).
pub const LH2_INSULATION_KG_PER_M2: f64 = 2.88;
/// Insulation unit mass for liquid-oxygen tanks (kg per m² of tank area).
pub const LOX_INSULATION_KG_PER_M2: f64 = 1.123;
/// Nozzle expansion ratio assumed when an engine definition does not supply one.
pub const DEFAULT_EXPANSION_RATIO: f64 = 30.0;

/// Dry mass (kg) of a pump-fed rocket engine from thrust (N) and nozzle
/// expansion ratio.
pub fn engine_dry_mass_kg(thrust_n: f64, expansion_ratio: f64) -> f64 {
    7.81e-4 * thrust_n + 3.37e-5 * thrust_n * expansion_ratio.sqrt() + 59.0
}

/// Thrust structure mass (kg) from total liftoff thrust (N).
pub fn thrust_structure_mass_kg(thrust_n: f64) -> f64 {
    2.55e-4 * thrust_n
}

/// Propellant tank shell mass (kg) from contained volume (m³).
pub fn tank_mass_kg(volume_m3: f64, kind: PropellantKind) -> f64 {
    match kind {
        PropellantKind::Lh2 => LH2_TANK_UNIT_MASS_KG_PER_M3 * volume_m3,
        _ => TANK_UNIT_MASS_KG_PER_M3 * volume_m3,
    }
}

/// Tank insulation mass (kg) from tank surface area (m²). Propellants without
/// a dedicated relationship are assumed uninsulated.
pub fn insulation_mass_kg(area_m2: f64, kind: PropellantKind) -> f64 {
    match kind {
        PropellantKind::Lh2 => LH2_INSULATION_KG_PER_M2 * area_m2,
        PropellantKind::Lox => LOX_INSULATION_KG_PER_M2 * area_m2,
        _ => 0.0,
    }
}

pub mod tanks {
    //! Tank pressure-vessel geometry resolved from contained volume.

    use std::f64::consts::PI;

    use thiserror::Error;

    /// Default dome semi-minor fraction for elliptical tanks.
    pub const DEFAULT_DOME_FRACTION: f64 = 0.7;
    /// Default barrel diameter (m) for elliptical tanks.
    pub const DEFAULT_DIAMETER_M: f64 = 3.7;

    /// Exponent of the Knud Thomsen ellipsoid surface approximation.
    const THOMSEN_P: f64 = 1.6075;

    /// Tank shell family used to translate a volume into dimensions.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub enum TankGeometry {
        /// Single spherical vessel.
        Spherical,
        /// Cylindrical barrel closed by two ellipsoidal dome caps.
        Elliptical {
            /// Dome semi-minor axis as a fraction of the barrel radius.
            dome_fraction: f64,
            /// Barrel diameter (m).
            diameter_m: f64,
        },
    }

    /// Physical dimensions resolved for a tank volume.
    #[derive(Debug, Clone, Copy)]
    pub struct TankDimensions {
        pub radius_m: f64,
        /// Cylindrical barrel length (zero for spherical tanks).
        pub barrel_length_m: f64,
        pub overall_height_m: f64,
        pub surface_area_m2: f64,
    }

    #[derive(Debug, Clone, Copy, Error)]
    pub enum TankError {
        #[error("tank volume must be positive, got {0} m³")]
        NonPositiveVolume(f64),
        #[error("dome fraction must lie in (0, 1], got {0}")]
        DomeFractionOutOfRange(f64),
        #[error("tank diameter must be positive, got {0} m")]
        NonPositiveDiameter(f64),
        #[error("volume {volume_m3} m³ does not fill the dome caps of a {diameter_m} m diameter tank")]
        VolumeBelowDomes { volume_m3: f64, diameter_m: f64 },
    }

    /// Resolve tank dimensions for a required contained volume (m³).
    pub fn size_tank(volume_m3: f64, geometry: TankGeometry) -> Result<TankDimensions, TankError> {
        if volume_m3 <= 0.0 {
            return Err(TankError::NonPositiveVolume(volume_m3));
        }

        match geometry {
            TankGeometry::Spherical => {
                let radius = (3.0 * volume_m3 / (4.0 * PI)).powf(1.0 / 3.0);
                Ok(TankDimensions {
                    radius_m: radius,
                    barrel_length_m: 0.0,
                    overall_height_m: 2.0 * radius,
                    surface_area_m2: 4.0 * PI * radius * radius,
                })
            }
            TankGeometry::Elliptical {
                dome_fraction,
                diameter_m,
            } => {
                if !(dome_fraction > 0.0 && dome_fraction <= 1.0) {
                    return Err(TankError::DomeFractionOutOfRange(dome_fraction));
                }
                if diameter_m <= 0.0 {
                    return Err(TankError::NonPositiveDiameter(diameter_m));
                }

                let radius = diameter_m / 2.0;
                let dome_height = radius * dome_fraction;

                // The two dome caps together form one full ellipsoid of revolution.
                let caps_volume = (4.0 / 3.0) * PI * dome_height * radius * radius;
                let barrel_volume = volume_m3 - caps_volume;
                if barrel_volume < 0.0 {
                    return Err(TankError::VolumeBelowDomes {
                        volume_m3,
                        diameter_m,
                    });
                }
                let barrel_length = barrel_volume / (PI * radius * radius);

                let caps_area = ellipsoid_surface_area(radius, dome_height);
                let barrel_area = 2.0 * PI * radius * barrel_length;

                Ok(TankDimensions {
                    radius_m: radius,
                    barrel_length_m: barrel_length,
                    overall_height_m: barrel_length + 2.0 * dome_height,
                    surface_area_m2: caps_area + barrel_area,
                })
            }
        }
    }

    /// Knud Thomsen approximation for an ellipsoid of revolution with
    /// equatorial radius `a` and polar radius `c` (within ~1% of exact).
    fn ellipsoid_surface_area(a: f64, c: f64) -> f64 {
        let ap = a.powf(THOMSEN_P);
        let cp = c.powf(THOMSEN_P);
        4.0 * PI * ((ap * ap + 2.0 * ap * cp) / 3.0).powf(1.0 / THOMSEN_P)
    }
}
