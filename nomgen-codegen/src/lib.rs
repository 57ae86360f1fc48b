//! # nomgen Codegen
//!
//! Type-representation mapping and naming engine.
//!
//! This crate provides:
//! - Identifiers for every schema type, including anonymous unions and
//!   imported types
//! - Type expressions, conversions and zero values for the Definition,
//!   Native, Storage and User representations
//! - Serialization of type descriptors into reconstructing expressions
//! - Resolution of forward references through an injected [`Resolver`]

pub mod error;
pub mod generator;
pub mod host;
pub mod resolver;

pub use error::{CodegenError, Result};
pub use generator::{Generator, GeneratorBuilder, GeneratorConfig, OpaqueZero, Representation};
pub use host::{SerializeContext, to_tag};
pub use resolver::{PackageResolver, Resolver};

use nomgen_schema::{Package, PackageRegistry};

/// Serializes every declared type of a compilation unit.
///
/// # Arguments
/// * `unit` - Compilation unit being generated
/// * `registry` - Packages the unit imports from, if any
/// * `ctx` - File and package context of the unit
///
/// # Returns
/// One reconstructing expression per declared type, in ordinal order.
///
/// # Errors
/// Returns `CodegenError` on the first type that cannot be serialized.
pub fn serialize_package(
    unit: &Package,
    registry: Option<&PackageRegistry>,
    ctx: &SerializeContext,
) -> Result<Vec<String>> {
    let mut resolver = PackageResolver::new(unit);
    if let Some(registry) = registry {
        resolver = resolver.with_registry(registry);
    }
    let generator = Generator::new(&resolver);

    unit.types
        .iter()
        .map(|t| generator.serialize_descriptor(t, ctx))
        .collect()
}
