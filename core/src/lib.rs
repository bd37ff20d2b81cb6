//! Electron energies of a simplified single-electron atom model, evaluated for a
//! table of chemical elements.

pub mod atom;
pub mod config;
pub mod constants;
pub mod energy;
pub mod error;
pub mod periodic_table;
pub mod report;

pub use constants::ModelConstants;
pub use error::{ConfigError, DomainError, Error};
pub use periodic_table::{ElementRecord, ElementTable};
pub use report::{EnergyReport, LabelStyle};
