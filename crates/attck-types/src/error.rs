//! Error types for ATT&CK field validation

use thiserror::Error;

/// Validation error raised when constructing a constrained field
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Input was not a string
    #[error("string required for {type_name}, got {found}")]
    TypeKindMismatch {
        type_name: &'static str,
        found: &'static str,
    },

    /// String failed the field's grammar
    #[error("Invalid {type_name} format. got {value:?}")]
    InvalidFormat {
        type_name: &'static str,
        value: String,
    },

    /// String is not a member of the field's allowed set
    #[error("Invalid {type_name} attribute. got {value:?}")]
    InvalidAttribute {
        type_name: &'static str,
        value: String,
    },

    /// No schema registered under this name
    #[error("unknown field type: {0}")]
    UnknownFieldType(String),
}

impl ValidationError {
    pub(crate) fn format(type_name: &'static str, value: &str) -> Self {
        Self::InvalidFormat {
            type_name,
            value: value.to_string(),
        }
    }

    pub(crate) fn attribute(type_name: &'static str, value: &str) -> Self {
        Self::InvalidAttribute {
            type_name,
            value: value.to_string(),
        }
    }

    /// Name of the field type that rejected the input
    pub fn type_name(&self) -> Option<&'static str> {
        match self {
            Self::TypeKindMismatch { type_name, .. }
            | Self::InvalidFormat { type_name, .. }
            | Self::InvalidAttribute { type_name, .. } => Some(*type_name),
            Self::UnknownFieldType(_) => None,
        }
    }

    /// Rejected string, when there was one
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::InvalidFormat { value, .. } | Self::InvalidAttribute { value, .. } => {
                Some(value.as_str())
            }
            _ => None,
        }
    }
}

/// Result type for field validation
pub type ValidationResult<T> = Result<T, ValidationError>;
