use thiserror::Error;

#[derive(Error, Debug)]
pub enum OopError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Failed to encode report: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid {field} for {shape}: {value} (must be finite and non-negative)")]
    InvalidDimension {
        shape: &'static str,
        field: &'static str,
        value: f64,
    },

    #[error("Cell DNA must not be empty")]
    EmptyDna,

    #[error("Precision {0} is out of range (min: 1, max: 17)")]
    InvalidPrecision(usize),

    #[error("{0}\nUsage: complete_oop_tour [config.toml] [--json]")]
    Usage(String),
}

impl OopError {
    pub fn invalid_dimension(shape: &'static str, field: &'static str, value: f64) -> Self {
        Self::InvalidDimension { shape, field, value }
    }
}

pub type Result<T> = std::result::Result<T, OopError>;
