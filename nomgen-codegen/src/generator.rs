//! Generator entry point and configuration.

use crate::error::{CodegenError, Result};
use crate::host::typeref::SerializeContext;
use crate::resolver::Resolver;
use nomgen_schema::TypeRef;
use std::fmt;

/// Form a schema value takes in generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Representation {
    /// Plain host value used to build data before it is stored.
    Definition,
    /// Host-language primitive, only for native kinds.
    Native,
    /// Generic stored value, uniform across kinds.
    Storage,
    /// Type used in generated accessor signatures.
    User,
}

impl Representation {
    /// All representations.
    pub const ALL: [Self; 4] = [Self::Definition, Self::Native, Self::Storage, Self::User];

    /// Returns the representation name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Definition => "definition",
            Self::Native => "native",
            Self::Storage => "storage",
            Self::User => "user",
        }
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Zero form emitted for the opaque `Value` kind.
///
/// The stored-value model has no null value, so one of these has to stand in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpaqueZero {
    /// Explicit empty sentinel, `types.Value(nil)`.
    #[default]
    Nil,
    /// Boolean placeholder, `types.Bool(false)`.
    BoolPlaceholder,
}

/// Generator configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Package qualifier of the runtime value library.
    pub runtime_package: String,
    /// Package qualifier of the runtime ref library.
    pub ref_package: String,
    /// Zero form for the opaque `Value` kind.
    pub opaque_zero: OpaqueZero,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            runtime_package: "types".to_string(),
            ref_package: "ref".to_string(),
            opaque_zero: OpaqueZero::default(),
        }
    }
}

/// Builder for configuring and creating a generator.
pub struct GeneratorBuilder<'a, R: ?Sized> {
    resolver: &'a R,
    config: GeneratorConfig,
}

impl<'a, R: Resolver + ?Sized> GeneratorBuilder<'a, R> {
    /// Creates a builder with default settings.
    #[must_use]
    pub fn new(resolver: &'a R) -> Self {
        Self {
            resolver,
            config: GeneratorConfig::default(),
        }
    }

    /// Sets the runtime value package qualifier.
    #[must_use]
    pub fn runtime_package(mut self, package: impl Into<String>) -> Self {
        self.config.runtime_package = package.into();
        self
    }

    /// Sets the runtime ref package qualifier.
    #[must_use]
    pub fn ref_package(mut self, package: impl Into<String>) -> Self {
        self.config.ref_package = package.into();
        self
    }

    /// Sets the zero form of the opaque `Value` kind.
    #[must_use]
    pub fn opaque_zero(mut self, zero: OpaqueZero) -> Self {
        self.config.opaque_zero = zero;
        self
    }

    /// Replaces the whole configuration.
    #[must_use]
    pub fn config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    /// Builds the generator.
    #[must_use]
    pub fn build(self) -> Generator<'a, R> {
        Generator {
            resolver: self.resolver,
            config: self.config,
        }
    }
}

/// Produces host source fragments for schema types.
///
/// Stateless apart from the injected resolver: every method is a pure
/// mapping from a descriptor to source text, so a single generator can serve
/// any number of generation sites, in any order.
pub struct Generator<'a, R: ?Sized> {
    resolver: &'a R,
    config: GeneratorConfig,
}

impl<'a, R: Resolver + ?Sized> Generator<'a, R> {
    /// Creates a generator with the default configuration.
    #[must_use]
    pub fn new(resolver: &'a R) -> Self {
        GeneratorBuilder::new(resolver).build()
    }

    /// Returns a builder for a configured generator.
    #[must_use]
    pub fn builder(resolver: &'a R) -> GeneratorBuilder<'a, R> {
        GeneratorBuilder::new(resolver)
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub(crate) fn resolve<'t>(&'t self, t: &'t TypeRef) -> Result<&'t TypeRef> {
        self.resolver.resolve(t)
    }

    pub(crate) fn runtime(&self) -> &str {
        &self.config.runtime_package
    }

    pub(crate) fn ref_pkg(&self) -> &str {
        &self.config.ref_package
    }

    /// Returns the identifier of `t` under `repr`.
    ///
    /// # Errors
    /// Returns `CodegenError` if `t` cannot be resolved or named.
    pub fn name_for(&self, t: &TypeRef, repr: Representation) -> Result<String> {
        self.name_in(t, repr)
    }

    /// Returns the source type expression of `t` under `repr`.
    ///
    /// # Errors
    /// Returns `CodegenError` if `t` has no type under `repr`.
    pub fn type_expr_for(&self, t: &TypeRef, repr: Representation) -> Result<String> {
        match repr {
            Representation::Definition => self.def_type(t),
            Representation::Native => self.native_type(t),
            Representation::Storage => self.storage_type(t),
            Representation::User => self.user_type(t),
        }
    }

    /// Returns an expression converting `val` of type `t` from one
    /// representation to another.
    ///
    /// # Errors
    /// Returns `CodegenError` if either representation does not apply to `t`.
    pub fn convert_expression(
        &self,
        val: &str,
        t: &TypeRef,
        from: Representation,
        to: Representation,
    ) -> Result<String> {
        use Representation::{Definition, Native, Storage, User};

        match (from, to) {
            (Native, _) | (_, Native) => {
                let kind = self.resolve(t)?.kind();
                if !kind.is_native() {
                    return Err(CodegenError::unsupported(kind, "native conversion"));
                }
                match (from, to) {
                    (Native, Storage) => self.native_to_value(val, kind),
                    (Storage, Native) => self.value_to_native(val, kind),
                    // Definition and User are the native type itself.
                    _ => Ok(val.to_string()),
                }
            }
            (Definition, Definition) | (Storage, Storage) | (User, User) => {
                self.resolve(t)?;
                Ok(val.to_string())
            }
            (Definition, Storage) => self.def_to_value(val, t),
            (Storage, Definition) => self.value_to_def(val, t),
            (User, Storage) => self.user_to_value(val, t),
            (Storage, User) => self.value_to_user(val, t),
            (Definition, User) => self.def_to_user(val, t),
            (User, Definition) => self.user_to_def(val, t),
        }
    }

    /// Returns an expression for the uninitialized value of `t` under `repr`.
    ///
    /// # Errors
    /// Returns `CodegenError` if `t` has no value under `repr`.
    pub fn zero_value_expression(&self, t: &TypeRef, repr: Representation) -> Result<String> {
        match repr {
            Representation::Definition => self.def_zero(t),
            Representation::Native => self.native_zero(t),
            Representation::Storage => self.value_zero(t),
            Representation::User => self.user_zero(t),
        }
    }

    /// Returns an expression reconstructing the descriptor `t` at run time.
    ///
    /// # Errors
    /// Returns `CodegenError` if `t` is malformed or lacks a required ordinal.
    pub fn serialize_descriptor(&self, t: &TypeRef, ctx: &SerializeContext) -> Result<String> {
        self.to_type_ref(t, ctx)
    }
}
