//! Resolution of forward type references.

use crate::error::{CodegenError, Result};
use nomgen_schema::{Package, PackageRegistry, TypeRef};

/// Maps a possibly-unresolved descriptor to its resolved form.
///
/// Implementations must return resolved input unchanged and must resolve by
/// identity lookup (ordinal, package ref), never by expanding the graph, so
/// that cyclic schemas terminate.
pub trait Resolver {
    /// Resolves `t`.
    ///
    /// # Errors
    /// Returns `CodegenError` if the referenced type cannot be found.
    fn resolve<'a>(&'a self, t: &'a TypeRef) -> Result<&'a TypeRef>;
}

impl<R: Resolver + ?Sized> Resolver for &R {
    fn resolve<'a>(&'a self, t: &'a TypeRef) -> Result<&'a TypeRef> {
        (**self).resolve(t)
    }
}

/// Resolver backed by the compilation unit being generated and the registry
/// of packages it imports from.
#[derive(Debug, Clone, Copy)]
pub struct PackageResolver<'a> {
    unit: &'a Package,
    registry: Option<&'a PackageRegistry>,
}

impl<'a> PackageResolver<'a> {
    /// Creates a resolver over a single compilation unit.
    #[must_use]
    pub const fn new(unit: &'a Package) -> Self {
        Self {
            unit,
            registry: None,
        }
    }

    /// Sets the registry used for types declared in other packages.
    #[must_use]
    pub const fn with_registry(mut self, registry: &'a PackageRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    fn lookup(&self, t: &TypeRef) -> Result<&'a TypeRef> {
        let ordinal = t
            .ordinal
            .ok_or_else(|| CodegenError::UnresolvedWithoutOrdinal {
                name: t.name.clone(),
            })?;

        let package = match t.package_ref {
            Some(package_ref) => self
                .registry
                .and_then(|registry| registry.get(&package_ref))
                .ok_or(CodegenError::PackageNotFound {
                    package: package_ref,
                })?,
            None => self.unit,
        };

        package
            .type_at(ordinal)
            .ok_or(CodegenError::TypeNotFound {
                ordinal,
                package: t.package_ref,
            })
    }
}

impl Resolver for PackageResolver<'_> {
    fn resolve<'b>(&'b self, t: &'b TypeRef) -> Result<&'b TypeRef> {
        if !t.is_unresolved() {
            return Ok(t);
        }

        tracing::trace!(
            "Resolving ordinal {:?} in package {:?}",
            t.ordinal,
            t.package_ref.map(|r| r.to_string())
        );

        let resolved = self.lookup(t).inspect_err(|e| {
            tracing::debug!("Type lookup failed: {}", e);
        })?;

        // One hop only; a declared type must carry its structure inline.
        if resolved.is_unresolved() {
            return Err(CodegenError::malformed(
                resolved.kind(),
                resolved.name.clone(),
                "declared type is itself an unresolved reference",
            ));
        }
        Ok(resolved)
    }
}
