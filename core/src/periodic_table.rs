use crate::{constants::ELEMENTARY_CHARGE, error::ConfigError};

/// Static description of a single chemical element.
#[derive(Clone, Debug, PartialEq)]
pub struct ElementRecord {
    /// chemical symbol, e.g. "O"
    pub symbol: String,
    /// english name, e.g. "Oxygen"
    pub name: String,
    pub atomic_number: u32,
    /// atomic mass (g/mol)
    pub atomic_mass: f64,
    /// assumed charge magnitude of a single electron of this element (C)
    pub charge: f64,
}

impl ElementRecord {
    pub fn new(
        symbol: impl Into<String>,
        name: impl Into<String>,
        atomic_number: u32,
        atomic_mass: f64,
        charge: f64,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            atomic_number,
            atomic_mass,
            charge,
        }
    }

    /// Checks that this record describes a real element.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.atomic_number < 1 {
            return Err(ConfigError::InvalidAtomicNumber {
                symbol: self.symbol.clone(),
                value: self.atomic_number,
            });
        }

        if !(self.atomic_mass.is_finite() && self.atomic_mass > 0.0) {
            return Err(ConfigError::InvalidAtomicMass {
                symbol: self.symbol.clone(),
                value: self.atomic_mass,
            });
        }

        if !self.charge.is_finite() {
            return Err(ConfigError::NonFiniteCharge {
                symbol: self.symbol.clone(),
                value: self.charge,
            });
        }

        Ok(())
    }
}

/// An ordered list of elements. Order is preserved through to the report.
#[derive(Clone, Debug, PartialEq)]
pub struct ElementTable {
    pub(crate) elements: Vec<ElementRecord>,
}

impl ElementTable {
    /// Creates a table, validating every record.
    pub fn new(elements: Vec<ElementRecord>) -> Result<Self, ConfigError> {
        if elements.is_empty() {
            return Err(ConfigError::EmptyTable);
        }

        for element in &elements {
            element.validate()?;
        }

        Ok(Self { elements })
    }

    pub fn elements(&self) -> &[ElementRecord] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

// (symbol, name, atomic number, atomic mass)
const HUMAN_BODY: [(&str, &str, u32, f64); 21] = [
    ("O", "Oxygen", 8, 15.999),
    ("C", "Carbon", 6, 12.011),
    ("H", "Hydrogen", 1, 1.008),
    ("N", "Nitrogen", 7, 14.007),
    ("Ca", "Calcium", 20, 40.078),
    ("P", "Phosphorus", 15, 30.974),
    ("K", "Potassium", 19, 39.098),
    ("S", "Sulfur", 16, 32.06),
    ("Na", "Sodium", 11, 22.990),
    ("Cl", "Chlorine", 17, 35.45),
    ("Mg", "Magnesium", 12, 24.305),
    ("Fe", "Iron", 26, 55.845),
    ("Zn", "Zinc", 30, 65.38),
    ("Cu", "Copper", 29, 63.546),
    ("Mn", "Manganese", 25, 54.938),
    ("I", "Iodine", 53, 126.90),
    ("Se", "Selenium", 34, 78.971),
    ("Mo", "Molybdenum", 42, 95.95),
    ("Cr", "Chromium", 24, 51.996),
    ("Co", "Cobalt", 27, 58.933),
    ("F", "Fluorine", 9, 18.998),
];

/// The major and trace elements of the human body, most abundant first.
pub fn human_body() -> ElementTable {
    ElementTable {
        elements: HUMAN_BODY
            .iter()
            .map(|&(symbol, name, atomic_number, atomic_mass)| {
                ElementRecord::new(symbol, name, atomic_number, atomic_mass, ELEMENTARY_CHARGE)
            })
            .collect(),
    }
}
