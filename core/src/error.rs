use thiserror::Error;

/// A physically meaningless input to one of the energy formulas.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("orbital radius must be positive, got {0:e} m")]
    NonPositiveRadius(f64),

    #[error("{quantity} must be finite, got {value}")]
    NonFinite { quantity: &'static str, value: f64 },
}

/// An element table or set of model constants that can't be used.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("element {symbol}: atomic number must be at least 1, got {value}")]
    InvalidAtomicNumber { symbol: String, value: u32 },

    #[error("element {symbol}: atomic mass must be positive and finite, got {value}")]
    InvalidAtomicMass { symbol: String, value: f64 },

    #[error("element {symbol}: charge must be finite, got {value}")]
    NonFiniteCharge { symbol: String, value: f64 },

    #[error("element table contains no elements")]
    EmptyTable,

    #[error("model constant {name} must be positive and finite, got {value}")]
    InvalidConstant { name: &'static str, value: f64 },

    #[error("failed to read element table: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse element table: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
