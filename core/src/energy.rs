//! Closed form energies of the single-electron atom model.
//!
//! Both formulas are deliberately simplified: the kinetic energy uses the inverse
//! orbital radius in place of a velocity, and the potential energy is Coulomb's law
//! for a single electron/nucleus pair.

use serde::Serialize;

use crate::{
    atom::{Electron, Nucleus},
    error::DomainError,
};

/// The two energies computed for a single atom (J)
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Energies {
    pub kinetic: f64,
    pub potential: f64,
}

fn check_radius(radius: f64) -> Result<f64, DomainError> {
    if radius.is_nan() || radius.is_infinite() {
        return Err(DomainError::NonFinite {
            quantity: "orbital radius",
            value: radius,
        });
    }

    if radius <= 0.0 {
        return Err(DomainError::NonPositiveRadius(radius));
    }

    Ok(radius)
}

fn check_finite(quantity: &'static str, value: f64) -> Result<f64, DomainError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DomainError::NonFinite { quantity, value })
    }
}

/// 0.5 * m * (1 / r)^2
pub fn kinetic_energy(electron: &Electron) -> Result<f64, DomainError> {
    let radius = check_radius(electron.radius)?;

    check_finite(
        "kinetic energy",
        0.5 * electron.mass * (1.0 / radius).powi(2),
    )
}

/// -k * q_e * q_n / r
pub fn potential_energy(
    electron: &Electron,
    nucleus: &Nucleus,
    coulomb_constant: f64,
) -> Result<f64, DomainError> {
    let radius = check_radius(electron.radius)?;

    check_finite(
        "potential energy",
        -coulomb_constant * electron.charge * nucleus.charge / radius,
    )
}
