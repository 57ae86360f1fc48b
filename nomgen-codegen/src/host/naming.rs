//! Identifier generation for schema types.

use super::{compound_elems, struct_desc};
use crate::error::{CodegenError, Result};
use crate::generator::{Generator, Representation};
use crate::resolver::Resolver;
use nomgen_schema::{Kind, Ref, TypeRef};

/// Spelling of native kinds inside identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Casing {
    /// `int32`, `string`.
    Native,
    /// `Int32`, `String`.
    Kind,
}

impl Casing {
    fn ident(self, kind: Kind) -> &'static str {
        match self {
            Self::Native => kind.native_name().unwrap_or_else(|| kind.name()),
            Self::Kind => kind.name(),
        }
    }
}

/// Converts a package ref into a tag usable inside a host identifier.
///
/// Every character that is not an ASCII letter, digit or underscore becomes
/// `_`, so `sha1-abc` becomes `sha1_abc`.
#[must_use]
pub fn to_tag(package_ref: &Ref) -> String {
    package_ref
        .to_string()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}

/// Uppercases the first character.
fn title(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl<R: Resolver + ?Sized> Generator<'_, R> {
    /// Returns the name of the User type for `t`, qualified with the package
    /// tag when `t` is imported from another package.
    ///
    /// # Errors
    /// Returns `CodegenError` if `t` cannot be resolved or named.
    pub fn user_name(&self, t: &TypeRef) -> Result<String> {
        self.name_with(t, Casing::Kind)
    }

    pub(crate) fn name_in(&self, t: &TypeRef, repr: Representation) -> Result<String> {
        match repr {
            Representation::Native => {
                let kind = self.resolve(t)?.kind();
                if !kind.is_native() {
                    return Err(CodegenError::unsupported(kind, "native name"));
                }
                Ok(Casing::Native.ident(kind).to_string())
            }
            Representation::Definition => self.name_with(t, Casing::Native),
            Representation::Storage | Representation::User => self.name_with(t, Casing::Kind),
        }
    }

    fn name_with(&self, t: &TypeRef, casing: Casing) -> Result<String> {
        let rt = self.resolve(t)?;
        let kind = rt.kind();
        match kind {
            Kind::Bool
            | Kind::UInt8
            | Kind::UInt16
            | Kind::UInt32
            | Kind::UInt64
            | Kind::Int8
            | Kind::Int16
            | Kind::Int32
            | Kind::Int64
            | Kind::Float32
            | Kind::Float64
            | Kind::String => Ok(casing.ident(kind).to_string()),
            Kind::Blob | Kind::Value | Kind::TypeRef | Kind::Package => Ok(kind.name().to_string()),
            Kind::Enum => Ok(self.qualify(t, &rt.name)),
            Kind::Struct if rt.name.is_empty() => self.union_name(rt, casing),
            Kind::Struct => Ok(self.qualify(t, &rt.name)),
            Kind::List | Kind::Ref | Kind::Set => {
                let elems = compound_elems(rt)?;
                Ok(format!("{}Of{}", kind.name(), self.elem_id(&elems[0], casing)?))
            }
            Kind::Map => {
                let elems = compound_elems(rt)?;
                Ok(format!(
                    "MapOf{}To{}",
                    self.elem_id(&elems[0], casing)?,
                    self.elem_id(&elems[1], casing)?
                ))
            }
            Kind::Unresolved => Err(CodegenError::unsupported(kind, "type name")),
        }
    }

    /// Name of a resolved type without any package qualification.
    pub(crate) fn local_name(&self, rt: &TypeRef) -> Result<String> {
        match rt.kind() {
            Kind::Enum => Ok(rt.name.clone()),
            Kind::Struct if !rt.name.is_empty() => Ok(rt.name.clone()),
            _ => self.name_with(rt, Casing::Kind),
        }
    }

    fn qualify(&self, t: &TypeRef, name: &str) -> String {
        match &t.package_ref {
            Some(package_ref) => format!("{}.{}", to_tag(package_ref), name),
            None => name.to_string(),
        }
    }

    fn union_name(&self, rt: &TypeRef, casing: Casing) -> Result<String> {
        let desc = struct_desc(rt)?;
        if desc.union.is_empty() {
            return Err(CodegenError::malformed(
                Kind::Struct,
                "",
                "struct has neither a name nor union choices",
            ));
        }

        let mut name = String::from("__unionOf");
        for (i, choice) in desc.union.iter().enumerate() {
            if i > 0 {
                name.push_str("And");
            }
            name.push_str(&title(&choice.name));
            name.push_str("Of");
            name.push_str(&self.elem_id(&choice.ty, casing)?);
        }
        Ok(name)
    }

    /// Identifier of a type nested inside a composite name. An imported
    /// forward reference joins its tag with `_` instead of `.`.
    fn elem_id(&self, t: &TypeRef, casing: Casing) -> Result<String> {
        match (&t.package_ref, t.is_unresolved()) {
            (Some(package_ref), true) => {
                let rt = self.resolve(t)?;
                Ok(format!(
                    "{}_{}",
                    to_tag(package_ref),
                    self.name_with(rt, casing)?
                ))
            }
            _ => self.name_with(t, casing),
        }
    }
}
