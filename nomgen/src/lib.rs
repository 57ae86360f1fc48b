//! # nomgen
//!
//! Core of a schema-driven code generator.
//!
//! nomgen takes type descriptors from a schema and produces the source
//! fragments a generator needs for each type: identifiers, type expressions,
//! conversions between representations, zero values and code that rebuilds
//! the descriptor at runtime.
//!
//! ## Features
//!
//! - **Four representations** - Definition, Native, Storage and User forms of
//!   every type, with conversions between any pair
//! - **Deterministic naming** - Structural names for compound types and
//!   anonymous unions, qualified by package tag for imported types
//! - **Forward references** - Recursive and cross-package types resolved
//!   through an injected resolver
//!
//! ## Quick Start
//!
//! ```
//! use nomgen::prelude::*;
//!
//! let unit = Package::new(vec![TypeRef::primitive(Kind::Int32)]);
//! let resolver = PackageResolver::new(&unit);
//! let generator = Generator::new(&resolver);
//!
//! let list = TypeRef::list(TypeRef::unresolved(0));
//! assert_eq!(
//!     generator.name_for(&list, Representation::User).unwrap(),
//!     "ListOfInt32"
//! );
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Type descriptors, package refs and package registries
//! - [`codegen`] - Resolver, naming engine and representation mapper

pub mod prelude;

/// Type descriptors and packages.
pub mod schema {
    pub use nomgen_schema::*;
}

/// Source fragment generation.
pub mod codegen {
    pub use nomgen_codegen::*;
}

// Re-export commonly used items at the crate root
pub use nomgen_codegen::{CodegenError, Generator, PackageResolver, Representation, Resolver};
pub use nomgen_schema::{Kind, Package, PackageRegistry, Ref, TypeRef};
