//! Ideal-rocket-equation mass fraction split.

use launch_core::constants::G0;
use thiserror::Error;

/// Mass fractions for one stage at a trial structural allocation.
///
/// All fields are fractions of the stage's total initial mass. `burnout` is
/// the fraction remaining at propellant depletion; the set satisfies
/// `structural + payload + propellant == 1` with `payload = burnout - structural`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MassFractions {
    pub burnout: f64,
    pub propellant: f64,
    pub payload: f64,
    pub structural: f64,
}

/// The requested structural fraction leaves no payload fraction.
#[derive(Debug, Clone, Copy, Error)]
#[error("structural fraction {structural} reaches burnout fraction {burnout}; no payload fraction remains")]
pub struct InfeasibleSplit {
    pub structural: f64,
    pub burnout: f64,
}

/// Split total stage mass into burnout/propellant/payload/structural fractions
/// for a required delta-v (m/s) at a given specific impulse (s).
pub fn mass_fractions(
    isp_s: f64,
    delta_v_m_s: f64,
    structural: f64,
) -> Result<MassFractions, InfeasibleSplit> {
    let exhaust_velocity = isp_s * G0;
    let burnout = (-delta_v_m_s / exhaust_velocity).exp();

    if structural >= burnout {
        return Err(InfeasibleSplit {
            structural,
            burnout,
        });
    }

    Ok(MassFractions {
        burnout,
        propellant: 1.0 - burnout,
        payload: burnout - structural,
        structural,
    })
}
