use thiserror::Error;

/// Why a set of calculator inputs was rejected before projection.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },

    #[error("{field} must be >= 0")]
    Negative { field: &'static str },

    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
    },

    #[error("{field} must be between 1 and {max} years, got {value}")]
    InvalidYears {
        field: &'static str,
        value: u32,
        max: u32,
    },
}

impl InputError {
    pub fn field(&self) -> &'static str {
        match self {
            InputError::NonFinite { field }
            | InputError::Negative { field }
            | InputError::OutOfRange { field, .. }
            | InputError::InvalidYears { field, .. } => *field,
        }
    }
}
