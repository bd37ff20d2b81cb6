use std::{fs::File, io::BufReader, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    constants::{ModelConstants, ELEMENTARY_CHARGE},
    error::ConfigError,
    periodic_table::{ElementRecord, ElementTable},
};

/// An element table as stored in a config file, optionally with its own model
/// constants.
#[derive(Deserialize, Serialize, Debug)]
pub struct ConfigElementTable {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constants: Option<ConfigConstants>,
    pub elements: Vec<ConfigElement>,
}

/// Every constant is optional, missing ones fall back to [`ModelConstants::default`].
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigConstants {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coulomb_constant: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nucleus_mass: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub electron_mass: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orbital_radius: Option<f64>,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct ConfigElement {
    pub symbol: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub atomic_number: u32,
    pub atomic_mass: f64,
    #[serde(default = "default_charge")]
    pub charge: f64,
}

fn default_charge() -> f64 {
    ELEMENTARY_CHARGE
}

/// A validated element table together with the constants to evaluate it with.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadedTable {
    pub table: ElementTable,
    pub constants: ModelConstants,
}

impl From<ConfigConstants> for ModelConstants {
    fn from(value: ConfigConstants) -> Self {
        let defaults = ModelConstants::default();

        Self {
            coulomb_constant: value.coulomb_constant.unwrap_or(defaults.coulomb_constant),
            nucleus_mass: value.nucleus_mass.unwrap_or(defaults.nucleus_mass),
            electron_mass: value.electron_mass.unwrap_or(defaults.electron_mass),
            orbital_radius: value.orbital_radius.unwrap_or(defaults.orbital_radius),
        }
    }
}

impl From<ConfigElement> for ElementRecord {
    fn from(value: ConfigElement) -> Self {
        let name = value.name.unwrap_or_else(|| value.symbol.clone());

        ElementRecord::new(
            value.symbol,
            name,
            value.atomic_number,
            value.atomic_mass,
            value.charge,
        )
    }
}

impl TryFrom<ConfigElementTable> for LoadedTable {
    type Error = ConfigError;

    fn try_from(value: ConfigElementTable) -> Result<Self, Self::Error> {
        let constants = ModelConstants::from(value.constants.unwrap_or_default());
        constants.validate()?;

        let table = ElementTable::new(value.elements.into_iter().map(Into::into).collect())?;

        Ok(Self { table, constants })
    }
}

impl ConfigElementTable {
    /// Builds the config file representation of a table. All constants are written
    /// out explicitly.
    pub fn new(table: &ElementTable, constants: &ModelConstants) -> Self {
        Self {
            constants: Some(ConfigConstants {
                coulomb_constant: Some(constants.coulomb_constant),
                nucleus_mass: Some(constants.nucleus_mass),
                electron_mass: Some(constants.electron_mass),
                orbital_radius: Some(constants.orbital_radius),
            }),
            elements: table
                .elements()
                .iter()
                .map(|element| ConfigElement {
                    symbol: element.symbol.clone(),
                    name: Some(element.name.clone()),
                    atomic_number: element.atomic_number,
                    atomic_mass: element.atomic_mass,
                    charge: element.charge,
                })
                .collect(),
        }
    }
}

/// Reads and validates an element table from a json file.
pub fn load_table(path: impl AsRef<Path>) -> Result<LoadedTable, ConfigError> {
    let path = path.as_ref();
    log::debug!("loading element table from {}", path.display());

    let config: ConfigElementTable = serde_json::from_reader(BufReader::new(File::open(path)?))?;
    let loaded = LoadedTable::try_from(config)?;

    log::info!(
        "loaded {} elements from {}",
        loaded.table.len(),
        path.display()
    );
    Ok(loaded)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::{constants::BOHR_RADIUS, periodic_table::human_body};

    #[test]
    fn minimal_table() {
        const TABLE: &str = r#"{"elements":[{"symbol":"O","atomic_number":8,"atomic_mass":15.999}]}"#;

        let config: ConfigElementTable = serde_json::from_str(TABLE).unwrap();
        let LoadedTable { table, constants } = LoadedTable::try_from(config).unwrap();

        assert_eq!(constants, ModelConstants::default());
        assert_eq!(table.len(), 1);

        let oxygen = &table.elements()[0];
        assert_eq!(oxygen.name, "O");
        assert_eq!(oxygen.atomic_number, 8);
        assert_relative_eq!(oxygen.charge, ELEMENTARY_CHARGE);
    }

    #[test]
    fn partial_constants() {
        const TABLE: &str = r#"{
            "constants": { "orbital_radius": 1e-10 },
            "elements": [
                { "symbol": "H", "name": "Hydrogen", "atomic_number": 1, "atomic_mass": 1.008, "charge": 1.602e-19 }
            ]
        }"#;

        let config: ConfigElementTable = serde_json::from_str(TABLE).unwrap();
        let LoadedTable { table, constants } = LoadedTable::try_from(config).unwrap();

        assert_relative_eq!(constants.orbital_radius, 1e-10);
        assert_eq!(constants.electron_mass, ModelConstants::default().electron_mass);
        assert_eq!(table.elements()[0].name, "Hydrogen");
    }

    #[test]
    fn invalid_tables() {
        const ZERO_NUMBER: &str =
            r#"{"elements":[{"symbol":"X","atomic_number":0,"atomic_mass":1.0}]}"#;
        const NEGATIVE_MASS: &str =
            r#"{"elements":[{"symbol":"X","atomic_number":3,"atomic_mass":-6.94}]}"#;
        const ZERO_RADIUS: &str = r#"{"constants":{"orbital_radius":0.0},"elements":[{"symbol":"H","atomic_number":1,"atomic_mass":1.008}]}"#;
        const EMPTY: &str = r#"{"elements":[]}"#;

        let load = |json: &str| {
            LoadedTable::try_from(serde_json::from_str::<ConfigElementTable>(json).unwrap())
        };

        assert!(matches!(
            load(ZERO_NUMBER),
            Err(ConfigError::InvalidAtomicNumber { .. })
        ));
        assert!(matches!(
            load(NEGATIVE_MASS),
            Err(ConfigError::InvalidAtomicMass { .. })
        ));
        assert!(matches!(
            load(ZERO_RADIUS),
            Err(ConfigError::InvalidConstant {
                name: "orbital_radius",
                ..
            })
        ));
        assert!(matches!(load(EMPTY), Err(ConfigError::EmptyTable)));
    }

    #[test]
    fn negative_atomic_number_fails_to_parse() {
        const TABLE: &str =
            r#"{"elements":[{"symbol":"X","atomic_number":-1,"atomic_mass":1.0}]}"#;

        assert!(serde_json::from_str::<ConfigElementTable>(TABLE).is_err());
    }

    #[test]
    fn exported_table_loads_back() {
        let table = human_body();
        let constants = ModelConstants::default();

        let json = serde_json::to_string(&ConfigElementTable::new(&table, &constants)).unwrap();
        let loaded =
            LoadedTable::try_from(serde_json::from_str::<ConfigElementTable>(&json).unwrap())
                .unwrap();

        assert_eq!(loaded.table.len(), table.len());
        for (loaded, original) in loaded.table.elements().iter().zip(table.elements()) {
            assert_eq!(loaded.symbol, original.symbol);
            assert_eq!(loaded.name, original.name);
            assert_eq!(loaded.atomic_number, original.atomic_number);
            assert_relative_eq!(loaded.atomic_mass, original.atomic_mass, max_relative = 1e-15);
            assert_relative_eq!(loaded.charge, original.charge, max_relative = 1e-15);
        }
        assert_relative_eq!(
            loaded.constants.orbital_radius,
            BOHR_RADIUS,
            max_relative = 1e-15
        );
    }

    #[test]
    fn demo_table() {
        let LoadedTable { table, constants } = load_table("../demos/trace_elements.json").unwrap();

        assert_relative_eq!(constants.orbital_radius, 1.0e-10);
        let symbols = table
            .elements()
            .iter()
            .map(|element| element.symbol.as_str())
            .collect::<Vec<_>>();
        assert_eq!(symbols, ["Zn", "Cu", "Se"]);
    }

    #[test]
    fn missing_file() {
        assert!(matches!(
            load_table("this/table/does/not/exist.json"),
            Err(ConfigError::Io(_))
        ));
    }
}
