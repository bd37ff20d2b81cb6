use std::io::{self, Write};

use serde::Serialize;

use crate::{
    atom::Atom, constants::ModelConstants, energy::Energies, error::Error,
    periodic_table::ElementTable,
};

/// Label printed for every element when [`LabelStyle::Placeholder`] is used
pub const PLACEHOLDER_LABEL: &str = "element";

/// How elements are labelled in the text report.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum LabelStyle {
    /// each element's own name
    #[default]
    Names,
    /// the same generic label for every element
    Placeholder,
}

/// The computed energies of a single element, along with the data it was computed from.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ElementEnergies {
    pub name: String,
    pub symbol: String,
    pub atomic_number: u32,
    /// (g/mol)
    pub atomic_mass: f64,
    /// (C)
    pub charge: f64,
    /// (J)
    pub kinetic_energy: f64,
    /// (J)
    pub potential_energy: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EnergyReport {
    pub(crate) constants: ModelConstants,
    pub(crate) elements: Vec<ElementEnergies>,
    pub(crate) count: usize,
}

impl EnergyReport {
    /// Computes the energies of every element in `table`, in table order.
    pub fn compute(table: &ElementTable, constants: &ModelConstants) -> Result<Self, Error> {
        constants.validate()?;
        for element in table.elements() {
            element.validate()?;
        }

        let mut elements = Vec::with_capacity(table.len());

        for element in table.elements() {
            let atom = Atom::from_element(element, constants);
            let Energies { kinetic, potential } = atom.energies(constants)?;

            log::debug!(
                "{:<2} - kinetic energy {kinetic:1.4e} J, potential energy {potential:1.4e} J",
                element.symbol
            );

            elements.push(ElementEnergies {
                name: element.name.clone(),
                symbol: element.symbol.clone(),
                atomic_number: element.atomic_number,
                atomic_mass: element.atomic_mass,
                charge: element.charge,
                kinetic_energy: kinetic,
                potential_energy: potential,
            });
        }

        log::info!("computed energies for {} elements", elements.len());

        Ok(Self {
            constants: *constants,
            count: elements.len(),
            elements,
        })
    }

    /// The constants the energies were computed with
    pub fn constants(&self) -> &ModelConstants {
        &self.constants
    }

    /// Number of elements that were processed
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn elements(&self) -> &[ElementEnergies] {
        &self.elements
    }

    /// Writes the human readable report
    pub fn write_text(&self, mut writer: impl Write, style: LabelStyle) -> io::Result<()> {
        writeln!(writer, "Elements composing the human body:")?;
        writeln!(writer)?;

        for element in &self.elements {
            let label = match style {
                LabelStyle::Names => element.name.as_str(),
                LabelStyle::Placeholder => PLACEHOLDER_LABEL,
            };

            writeln!(writer, "Element: {label}")?;
            writeln!(writer, "Atomic number: {}", element.atomic_number)?;
            writeln!(writer, "Atomic mass: {:.3} g/mol", element.atomic_mass)?;
            writeln!(writer, "Charge: {} C", format_scientific(element.charge, 2))?;
            writeln!(writer)?;

            writeln!(writer, "Element: {label}")?;
            writeln!(
                writer,
                "Electron kinetic energy: {} J",
                format_scientific(element.kinetic_energy, 2)
            )?;
            writeln!(
                writer,
                "Electron potential energy: {} J",
                format_scientific(element.potential_energy, 2)
            )?;
            writeln!(writer)?;
        }

        writeln!(writer, "Total elements: {}", self.count)
    }
}

/// Formats `value` like C's `%.{precision}e`: the exponent always carries a sign and
/// at least two digits.
pub fn format_scientific(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_owned();
    }

    let formatted = format!("{value:.precision$e}");
    let Some((mantissa, exponent)) = formatted.split_once('e') else {
        return formatted;
    };

    // rust never emits anything but an integer exponent here
    let exponent = exponent.parse::<i32>().unwrap_or_default();
    let sign = if exponent < 0 { '-' } else { '+' };

    format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
}
