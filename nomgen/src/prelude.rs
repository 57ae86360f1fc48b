//! Prelude module for convenient imports.
//!
//! ```
//! use nomgen::prelude::*;
//! ```

// Schema types
pub use nomgen_schema::{
    CompoundDesc, EnumDesc, Field, Kind, Package, PackageRegistry, Ref, SchemaError, StructDesc,
    TypeDesc, TypeRef,
};

// Generator types
pub use nomgen_codegen::{
    CodegenError, Generator, GeneratorBuilder, GeneratorConfig, OpaqueZero, PackageResolver,
    Representation, Resolver, SerializeContext, serialize_package, to_tag,
};
