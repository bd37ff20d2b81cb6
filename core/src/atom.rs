use serde::Serialize;

use crate::{
    constants::ModelConstants,
    energy::{self, Energies},
    error::DomainError,
    periodic_table::ElementRecord,
};

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Nucleus {
    /// (C)
    pub charge: f64,
    /// (kg)
    pub mass: f64,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Electron {
    /// (C)
    pub charge: f64,
    /// (kg)
    pub mass: f64,
    /// orbital radius (m)
    pub radius: f64,
}

/// A single-electron model of an atom: one nucleus and one electron orbiting it.
#[derive(Clone, Debug, PartialEq)]
pub struct Atom<'a> {
    pub(crate) element: &'a ElementRecord,
    pub(crate) nucleus: Nucleus,
    pub(crate) electron: Electron,
}

impl<'a> Atom<'a> {
    /// Builds the model of `element`. The nucleus carries the element's charge, the
    /// electron carries the opposite charge; masses and radius come from `constants`.
    pub fn from_element(element: &'a ElementRecord, constants: &ModelConstants) -> Self {
        Self {
            element,
            nucleus: Nucleus {
                charge: element.charge,
                mass: constants.nucleus_mass,
            },
            electron: Electron {
                charge: -element.charge,
                mass: constants.electron_mass,
                radius: constants.orbital_radius,
            },
        }
    }

    pub fn element(&self) -> &ElementRecord {
        self.element
    }

    pub fn nucleus(&self) -> &Nucleus {
        &self.nucleus
    }

    pub fn electron(&self) -> &Electron {
        &self.electron
    }

    /// Computes the kinetic and potential energy of this atom's electron
    pub fn energies(&self, constants: &ModelConstants) -> Result<Energies, DomainError> {
        Ok(Energies {
            kinetic: energy::kinetic_energy(&self.electron)?,
            potential: energy::potential_energy(
                &self.electron,
                &self.nucleus,
                constants.coulomb_constant,
            )?,
        })
    }
}
