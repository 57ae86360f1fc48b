//! Error types for the schema data model.

use crate::digest::Ref;
use thiserror::Error;

/// Error type for schema data model operations.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Malformed package ref text.
    #[error("invalid package ref '{value}': {reason}")]
    InvalidRef {
        /// Offending text.
        value: String,
        /// What is wrong with it.
        reason: String,
    },

    /// Package already holds as many types as ordinals can address.
    #[error("package already declares {count} types, no ordinal left")]
    TooManyTypes {
        /// Number of declared types.
        count: usize,
    },

    /// Package registered twice.
    #[error("duplicate package definition: '{package}'")]
    DuplicatePackage {
        /// Package ref.
        package: Ref,
    },
}

impl SchemaError {
    /// Creates an invalid ref error.
    pub fn invalid_ref(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidRef {
            value: value.into(),
            reason: reason.into(),
        }
    }
}
