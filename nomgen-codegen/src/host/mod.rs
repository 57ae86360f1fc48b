//! Host source fragment generation.
//!
//! Each submodule adds one family of methods to [`crate::Generator`]:
//! identifiers, type expressions, conversions, zero values and descriptor
//! serialization.

pub mod convert;
pub mod naming;
pub mod typeref;
pub mod types;
pub mod zero;

pub use naming::to_tag;
pub use typeref::SerializeContext;

use crate::error::{CodegenError, Result};
use nomgen_schema::{EnumDesc, StructDesc, TypeDesc, TypeRef};

/// Returns the element types of a compound descriptor, checking its arity.
pub(crate) fn compound_elems(t: &TypeRef) -> Result<&[TypeRef]> {
    let kind = t.kind();
    let expected = kind
        .arity()
        .ok_or_else(|| {
            CodegenError::malformed(kind, t.name.clone(), "kind does not take element types")
        })?;
    let elems = t
        .elem_types()
        .ok_or_else(|| CodegenError::malformed(kind, t.name.clone(), "missing element types"))?;
    if elems.len() != expected {
        return Err(CodegenError::malformed(
            kind,
            t.name.clone(),
            format!("expected {expected} element types, found {}", elems.len()),
        ));
    }
    Ok(elems)
}

pub(crate) fn struct_desc(t: &TypeRef) -> Result<&StructDesc> {
    match &t.desc {
        TypeDesc::Struct(desc) => Ok(desc),
        _ => Err(CodegenError::malformed(
            t.kind(),
            t.name.clone(),
            "missing struct fields",
        )),
    }
}

pub(crate) fn enum_desc(t: &TypeRef) -> Result<&EnumDesc> {
    match &t.desc {
        TypeDesc::Enum(desc) => Ok(desc),
        _ => Err(CodegenError::malformed(
            t.kind(),
            t.name.clone(),
            "missing enum members",
        )),
    }
}
