use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Coulomb constant k (N·m²/C²)
pub const COULOMB_CONSTANT: f64 = 8.9875517923e9;

/// Approximate proton mass, used as the mass of every nucleus (kg)
pub const NUCLEUS_MASS: f64 = 1.67e-27;

/// Electron mass (kg)
pub const ELECTRON_MASS: f64 = 9.11e-31;

/// Bohr radius, used as the orbital radius of every electron (m)
pub const BOHR_RADIUS: f64 = 5.29e-11;

/// Elementary charge as it appears in the built-in element table (C)
pub const ELEMENTARY_CHARGE: f64 = 1.602e-19;

/// The fixed physical parameters of the atom model.
///
/// Every element in a table shares the same masses and orbital radius, only the
/// charge and the per-element record vary.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModelConstants {
    /// k in Coulomb's law (N·m²/C²)
    pub coulomb_constant: f64,
    /// mass assigned to every nucleus (kg)
    pub nucleus_mass: f64,
    /// mass assigned to every electron (kg)
    pub electron_mass: f64,
    /// orbital radius assigned to every electron (m)
    pub orbital_radius: f64,
}

impl Default for ModelConstants {
    fn default() -> Self {
        Self {
            coulomb_constant: COULOMB_CONSTANT,
            nucleus_mass: NUCLEUS_MASS,
            electron_mass: ELECTRON_MASS,
            orbital_radius: BOHR_RADIUS,
        }
    }
}

impl ModelConstants {
    /// Returns a copy of these constants with a different orbital radius
    pub fn with_orbital_radius(self, orbital_radius: f64) -> Self {
        Self {
            orbital_radius,
            ..self
        }
    }

    /// Checks that every constant is positive and finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("coulomb_constant", self.coulomb_constant),
            ("nucleus_mass", self.nucleus_mass),
            ("electron_mass", self.electron_mass),
            ("orbital_radius", self.orbital_radius),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidConstant { name, value });
            }
        }

        Ok(())
    }
}
