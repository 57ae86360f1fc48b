//! Error types for code generation.

use nomgen_schema::{Kind, Ref};
use thiserror::Error;

/// Error type for code generation operations.
///
/// Every variant is a non-recoverable failure of a single generation call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodegenError {
    /// The kind has no mapping for the requested operation.
    #[error("unsupported kind {kind} for {operation}")]
    UnsupportedKind {
        /// Offending kind.
        kind: Kind,
        /// Operation that was requested.
        operation: &'static str,
    },

    /// An unresolved descriptor has no ordinal to refer to.
    #[error("unresolved type '{name}' does not have an ordinal set")]
    UnresolvedWithoutOrdinal {
        /// Declared name, possibly empty.
        name: String,
    },

    /// A descriptor lacks the payload its kind requires.
    #[error("malformed {kind} descriptor '{name}': {reason}")]
    MalformedDescriptor {
        /// Claimed kind.
        kind: Kind,
        /// Declared name, possibly empty.
        name: String,
        /// What is missing or inconsistent.
        reason: String,
    },

    /// No declared type at the ordinal.
    #[error("no type at ordinal {ordinal} in {}", describe_unit(.package))]
    TypeNotFound {
        /// Requested ordinal.
        ordinal: u16,
        /// Package searched, `None` for the current compilation unit.
        package: Option<Ref>,
    },

    /// Referenced package is not registered.
    #[error("package '{package}' not found")]
    PackageNotFound {
        /// Package ref.
        package: Ref,
    },
}

impl CodegenError {
    /// Creates an unsupported kind error.
    pub fn unsupported(kind: Kind, operation: &'static str) -> Self {
        Self::UnsupportedKind { kind, operation }
    }

    /// Creates a malformed descriptor error.
    pub fn malformed(kind: Kind, name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedDescriptor {
            kind,
            name: name.into(),
            reason: reason.into(),
        }
    }
}

fn describe_unit(package: &Option<Ref>) -> String {
    match package {
        Some(package) => format!("package '{package}'"),
        None => "current unit".to_string(),
    }
}

/// Result alias for code generation.
pub type Result<T> = std::result::Result<T, CodegenError>;
