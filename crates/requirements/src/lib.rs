//! Ascent delta-v requirement estimators for circular-orbit injection.

use std::f64::consts::TAU;

use launch_core::constants::{EARTH_MU_M3_S2, EARTH_RADIUS_M, EARTH_ROTATION_PERIOD_S, G0};
use thiserror::Error;

/// Circular orbit velocity (m/s) at an altitude (m) above the mean radius.
pub fn circular_orbit_velocity_m_s(altitude_m: f64) -> f64 {
    (EARTH_MU_M3_S2 / (EARTH_RADIUS_M + altitude_m)).sqrt()
}

/// Gravity-loss estimate (m/s) for a launch to a final altitude (m).
///
/// Edberg and Costa Eq. 3.13.
pub fn gravity_loss_m_s(altitude_m: f64) -> f64 {
    0.8 * ((2.0 * G0 * altitude_m) / (1.0 + altitude_m / EARTH_RADIUS_M)).sqrt()
}

#[derive(Debug, Clone, Copy, Error)]
pub enum RequirementError {
    #[error("inclination {inclination_deg}° is unreachable from latitude {latitude_deg}°")]
    UnreachableInclination {
        latitude_deg: f64,
        inclination_deg: f64,
    },
}

/// Delta-v credit (m/s) from Earth rotation for a direct-ascent launch.
///
/// Inputs:
/// - `inertial_velocity_m_s`: inertial velocity of the final orbit
/// - `latitude_deg`: launch site latitude
/// - `inclination_deg`: final orbit inclination (must be at or above the latitude)
pub fn rotation_credit_m_s(
    inertial_velocity_m_s: f64,
    latitude_deg: f64,
    inclination_deg: f64,
) -> Result<f64, RequirementError> {
    let latitude = latitude_deg.to_radians();
    let inclination = inclination_deg.to_radians();

    let sin_azimuth = inclination.cos() / latitude.cos();
    if sin_azimuth.abs() > 1.0 {
        return Err(RequirementError::UnreachableInclination {
            latitude_deg,
            inclination_deg,
        });
    }
    let azimuth = sin_azimuth.asin();

    let surface_velocity = (TAU * EARTH_RADIUS_M / EARTH_ROTATION_PERIOD_S) * latitude.cos();
    let east = inertial_velocity_m_s * azimuth.sin() - surface_velocity;
    let north = inertial_velocity_m_s * azimuth.cos();
    let relative = (east * east + north * north).sqrt();

    Ok(inertial_velocity_m_s - relative)
}

/// Composed injection requirement (m/s): circular orbit velocity plus gravity
/// losses, less the Earth-rotation credit.
pub fn injection_delta_v_m_s(
    altitude_m: f64,
    latitude_deg: f64,
    inclination_deg: f64,
) -> Result<f64, RequirementError> {
    let orbital = circular_orbit_velocity_m_s(altitude_m);
    let credit = rotation_credit_m_s(orbital, latitude_deg, inclination_deg)?;
    Ok(orbital + gravity_loss_m_s(altitude_m) - credit)
}
