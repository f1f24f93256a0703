//! Error types shared by the models and services.

/// Input rejected before any calculation runs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid date '{value}': expected yyyy-MM-dd")]
    InvalidDate { value: String },

    #[error("cycle length {days} is outside the supported range {min}-{max} days")]
    CycleLengthOutOfRange { days: u32, min: u32, max: u32 },

    #[error("diapers per day must be between 0 and {max}, got {value}")]
    DiapersPerDayOutOfRange { value: u32, max: u32 },

    #[error("{field} must be an amount between 0 and {max}, got {value}")]
    InvalidAmount {
        field: &'static str,
        value: f64,
        max: f64,
    },

    #[error("unknown gear item '{0}'")]
    UnknownGearItem(String),
}

/// Problems with a static reference table (vaccination, pregnancy weeks, pricing).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TableError {
    #[error("failed to read {table} table: {message}")]
    Read {
        table: &'static str,
        message: String,
    },

    #[error("failed to parse {table} table: {message}")]
    Parse {
        table: &'static str,
        message: String,
    },

    #[error("{table} table is empty")]
    Empty { table: &'static str },

    #[error("{table} table is out of order at '{entry}'")]
    OutOfOrder {
        table: &'static str,
        entry: String,
    },

    #[error("pricing table has no price for {0}")]
    MissingPrice(String),

    #[error("pricing table has an invalid price for {entry}: {value}")]
    InvalidPrice { entry: String, value: f64 },
}
