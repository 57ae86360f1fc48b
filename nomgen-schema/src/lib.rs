//! # nomgen Schema
//!
//! Type descriptor data model consumed by the code generator.
//!
//! This crate provides:
//! - The closed set of schema kinds and their descriptor payloads
//! - Forward references by ordinal and by package ref
//! - Compilation units and the registry of built packages

pub mod digest;
pub mod error;
pub mod package;
pub mod types;

pub use digest::Ref;
pub use error::SchemaError;
pub use package::{Package, PackageRegistry};
pub use types::{CompoundDesc, EnumDesc, Field, Kind, StructDesc, TypeDesc, TypeRef};
