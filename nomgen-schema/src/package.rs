//! Compilation units and the registry of built packages.

use crate::digest::Ref;
use crate::error::SchemaError;
use crate::types::TypeRef;
use std::collections::HashMap;

/// Compilation unit: the ordered list of types generated together.
///
/// Types are addressed by ordinal, their index in [`Package::types`], which
/// lets declared types refer to each other (or to themselves) through
/// [`TypeRef::unresolved`] before they have a content identity.
#[derive(Debug, Clone, Default)]
pub struct Package {
    /// Declared types, indexed by ordinal.
    pub types: Vec<TypeRef>,
    /// Packages this one imports types from.
    pub dependencies: Vec<Ref>,
}

impl Package {
    /// Creates a package from its declared types.
    #[must_use]
    pub fn new(types: Vec<TypeRef>) -> Self {
        Self {
            types,
            dependencies: Vec::new(),
        }
    }

    /// Appends a declared type and returns its ordinal.
    ///
    /// # Errors
    /// Returns `SchemaError::TooManyTypes` if the package already holds every
    /// ordinal a `u16` can address.
    pub fn add_type(&mut self, type_ref: TypeRef) -> Result<u16, SchemaError> {
        let ordinal = u16::try_from(self.types.len()).map_err(|_| SchemaError::TooManyTypes {
            count: self.types.len(),
        })?;
        self.types.push(type_ref);
        Ok(ordinal)
    }

    /// Records a dependency on another package.
    pub fn add_dependency(&mut self, package: Ref) {
        if !self.dependencies.contains(&package) {
            self.dependencies.push(package);
        }
    }

    /// Looks up a declared type by ordinal.
    #[must_use]
    pub fn type_at(&self, ordinal: u16) -> Option<&TypeRef> {
        self.types.get(usize::from(ordinal))
    }

    /// Looks up a named declared type, returning its ordinal.
    #[must_use]
    pub fn ordinal_of(&self, name: &str) -> Option<u16> {
        self.types
            .iter()
            .enumerate()
            .find_map(|(idx, t)| {
                (!name.is_empty() && t.name == name)
                    .then(|| u16::try_from(idx).ok())
                    .flatten()
            })
    }

    /// Returns the number of declared types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns true if nothing has been declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// Read-only lookup of already-built packages by ref.
#[derive(Debug, Clone, Default)]
pub struct PackageRegistry {
    packages: HashMap<Ref, Package>,
}

impl PackageRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a built package under its ref.
    ///
    /// # Errors
    /// Returns `SchemaError::DuplicatePackage` if the ref is already taken.
    pub fn register(&mut self, package_ref: Ref, package: Package) -> Result<(), SchemaError> {
        if self.packages.contains_key(&package_ref) {
            return Err(SchemaError::DuplicatePackage {
                package: package_ref,
            });
        }
        self.packages.insert(package_ref, package);
        Ok(())
    }

    /// Looks up a package by ref.
    #[must_use]
    pub fn get(&self, package_ref: &Ref) -> Option<&Package> {
        self.packages.get(package_ref)
    }

    /// Returns true if a package with the given ref is registered.
    #[must_use]
    pub fn contains(&self, package_ref: &Ref) -> bool {
        self.packages.contains_key(package_ref)
    }

    /// Returns the number of registered packages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    /// Returns true if no package is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}
