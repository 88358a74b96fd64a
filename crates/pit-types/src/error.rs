use thiserror::Error;

/// Construction, deserialization and I/O failures.
///
/// Geometric inconsistencies are not errors; they are reported as findings
/// by `pit-validate`.
#[derive(Error, Debug)]
pub enum PitError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Field {field} is not coercible to {expected}: got {found}")]
    InvalidField {
        field: String,
        expected: &'static str,
        found: String,
    },

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Expected a JSON object for {0}")]
    NotAnObject(String),

    #[error("radius must be positive, got {0}")]
    NonPositiveRadius(f64),

    #[error("{field} = {count} exceeds the drawable limit of {limit}")]
    CountTooLarge {
        field: String,
        count: i64,
        limit: i64,
    },

    #[error("Unknown preset: {0}")]
    UnknownPreset(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type PitResult<T> = Result<T, PitError>;
