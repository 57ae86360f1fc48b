//! Serialization of type descriptors into reconstructing expressions.

use super::{compound_elems, enum_desc, struct_desc};
use crate::error::{CodegenError, Result};
use crate::generator::Generator;
use crate::resolver::Resolver;
use nomgen_schema::{Field, Kind, TypeDesc, TypeRef};

/// Compilation unit context for descriptor serialization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SerializeContext {
    /// Id of the file being generated. When set, local forward references
    /// go through that file's cached package ref.
    pub file_id: Option<String>,
    /// Name of the package being generated.
    pub package_name: String,
}

impl SerializeContext {
    /// Creates a context for a package.
    #[must_use]
    pub fn new(package_name: impl Into<String>) -> Self {
        Self {
            file_id: None,
            package_name: package_name.into(),
        }
    }

    /// Sets the id of the file being generated.
    #[must_use]
    pub fn with_file_id(mut self, file_id: impl Into<String>) -> Self {
        self.file_id = Some(file_id.into()).filter(|id: &String| !id.is_empty());
        self
    }
}

impl<R: Resolver + ?Sized> Generator<'_, R> {
    /// Returns code that builds a descriptor equivalent to `t`.
    ///
    /// Imported types and local forward references are emitted as references
    /// by package and ordinal, so self-referential structs never expand
    /// themselves.
    ///
    /// # Errors
    /// Returns `CodegenError` if a reference lacks its ordinal or a
    /// descriptor lacks the payload its kind requires.
    pub fn to_type_ref(&self, t: &TypeRef, ctx: &SerializeContext) -> Result<String> {
        let runtime = self.runtime();

        if let Some(package_ref) = &t.package_ref {
            return Ok(format!(
                "{runtime}.MakeTypeRef({}.Parse(\"{package_ref}\"), {})",
                self.ref_pkg(),
                required_ordinal(t)?
            ));
        }

        if t.is_unresolved() {
            let ordinal = required_ordinal(t)?;
            return Ok(match &ctx.file_id {
                Some(file_id) => format!(
                    "{runtime}.MakeTypeRef(__{}PackageInFile_{file_id}_CachedRef, {ordinal})",
                    ctx.package_name
                ),
                None => format!("{runtime}.MakeTypeRef({}.Ref{{}}, {ordinal})", self.ref_pkg()),
            });
        }

        let kind = t.kind();
        match &t.desc {
            TypeDesc::Primitive(_) if kind.is_primitive() => {
                Ok(format!("{runtime}.MakePrimitiveTypeRef({runtime}.{kind}Kind)"))
            }
            TypeDesc::Compound(_) => {
                let elems = compound_elems(t)?
                    .iter()
                    .map(|elem| self.to_type_ref(elem, ctx))
                    .collect::<Result<Vec<_>>>()?;
                Ok(format!(
                    "{runtime}.MakeCompoundTypeRef(\"{}\", {runtime}.{kind}Kind, {})",
                    t.name,
                    elems.join(", ")
                ))
            }
            TypeDesc::Enum(_) => {
                let desc = enum_desc(t)?;
                let mut args = vec![format!("\"{}\"", t.name)];
                args.extend(desc.ids.iter().map(|id| format!("\"{id}\"")));
                Ok(format!("{runtime}.MakeEnumTypeRef({})", args.join(", ")))
            }
            TypeDesc::Struct(_) => {
                let desc = struct_desc(t)?;
                let fields = self.flatten_fields(&desc.fields, ctx)?;
                let choices = self.flatten_fields(&desc.union, ctx)?;
                Ok(format!(
                    "{runtime}.MakeStructTypeRef(\"{}\",\n[]{runtime}.Field{{\n{fields}\n}},\n{runtime}.Choices{{\n{choices}\n}},\n)",
                    t.name
                ))
            }
            TypeDesc::Primitive(_) => Err(CodegenError::malformed(
                kind,
                t.name.clone(),
                "kind requires a structural payload",
            )),
            TypeDesc::Unresolved => Err(CodegenError::unsupported(kind, "type ref")),
        }
    }

    fn flatten_fields(&self, fields: &[Field], ctx: &SerializeContext) -> Result<String> {
        let runtime = self.runtime();
        let lines = fields
            .iter()
            .map(|field| {
                Ok(format!(
                    "{runtime}.Field{{\"{}\", {}, {}}},",
                    field.name,
                    self.to_type_ref(&field.ty, ctx)?,
                    field.optional
                ))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(lines.join("\n"))
    }
}

fn required_ordinal(t: &TypeRef) -> Result<u16> {
    t.ordinal.ok_or_else(|| {
        tracing::debug!("Type reference '{}' has no ordinal", t.name);
        if t.is_unresolved() {
            CodegenError::UnresolvedWithoutOrdinal {
                name: t.name.clone(),
            }
        } else {
            CodegenError::malformed(
                t.kind(),
                t.name.clone(),
                "package-qualified type has no ordinal",
            )
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::PackageResolver;
    use nomgen_schema::{Package, Ref};

    const HASH: &str = "sha1-00112233445566778899aabbccddeeff00112233";

    fn linked_list() -> Package {
        Package::new(vec![TypeRef::structure(
            "S",
            vec![Field::new("next", TypeRef::reference(TypeRef::unresolved(0)))],
            Vec::new(),
        )])
    }

    #[test]
    fn test_context_builder() {
        let ctx = SerializeContext::new("test").with_file_id("abc");
        assert_eq!(ctx.file_id.as_deref(), Some("abc"));
        assert_eq!(ctx.package_name, "test");
        assert_eq!(SerializeContext::new("test").with_file_id("").file_id, None);
    }

    #[test]
    fn test_primitive_type_refs() {
        let unit = Package::default();
        let resolver = PackageResolver::new(&unit);
        let generator = Generator::new(&resolver);
        let ctx = SerializeContext::new("test");

        assert_eq!(
            generator
                .to_type_ref(&TypeRef::primitive(Kind::Int32), &ctx)
                .unwrap(),
            "types.MakePrimitiveTypeRef(types.Int32Kind)"
        );
        assert_eq!(
            generator
                .to_type_ref(&TypeRef::primitive(Kind::Blob), &ctx)
                .unwrap(),
            "types.MakePrimitiveTypeRef(types.BlobKind)"
        );
    }

    #[test]
    fn test_compound_type_ref() {
        let unit = Package::default();
        let resolver = PackageResolver::new(&unit);
        let generator = Generator::new(&resolver);
        let ctx = SerializeContext::new("test");
        let map = TypeRef::map(
            TypeRef::primitive(Kind::String),
            TypeRef::list(TypeRef::primitive(Kind::Bool)),
        );

        assert_eq!(
            generator.to_type_ref(&map, &ctx).unwrap(),
            "types.MakeCompoundTypeRef(\"\", types.MapKind, \
             types.MakePrimitiveTypeRef(types.StringKind), \
             types.MakeCompoundTypeRef(\"\", types.ListKind, \
             types.MakePrimitiveTypeRef(types.BoolKind)))"
        );
    }

    #[test]
    fn test_enum_type_ref() {
        let unit = Package::default();
        let resolver = PackageResolver::new(&unit);
        let generator = Generator::new(&resolver);
        let ctx = SerializeContext::new("test");
        let color = TypeRef::enumeration("Color", ["Red", "Green", "Blue"]);

        assert_eq!(
            generator.to_type_ref(&color, &ctx).unwrap(),
            "types.MakeEnumTypeRef(\"Color\", \"Red\", \"Green\", \"Blue\")"
        );
    }

    #[test]
    fn test_struct_type_ref() {
        let unit = Package::default();
        let resolver = PackageResolver::new(&unit);
        let generator = Generator::new(&resolver);
        let ctx = SerializeContext::new("test");
        let t = TypeRef::structure(
            "Shape",
            vec![Field::optional("label", TypeRef::primitive(Kind::String))],
            vec![
                Field::new("circle", TypeRef::primitive(Kind::Float64)),
                Field::new("square", TypeRef::primitive(Kind::Int32)),
            ],
        );

        let expected = "types.MakeStructTypeRef(\"Shape\",\n\
[]types.Field{\n\
types.Field{\"label\", types.MakePrimitiveTypeRef(types.StringKind), true},\n\
},\n\
types.Choices{\n\
types.Field{\"circle\", types.MakePrimitiveTypeRef(types.Float64Kind), false},\n\
types.Field{\"square\", types.MakePrimitiveTypeRef(types.Int32Kind), false},\n\
},\n\
)";
        assert_eq!(generator.to_type_ref(&t, &ctx).unwrap(), expected);
    }

    #[test]
    fn test_self_reference_uses_ordinal() {
        let unit = linked_list();
        let resolver = PackageResolver::new(&unit);
        let generator = Generator::new(&resolver);

        let out = generator
            .serialize_descriptor(&unit.types[0], &SerializeContext::new("test"))
            .unwrap();
        assert!(out.contains(
            "types.Field{\"next\", types.MakeCompoundTypeRef(\"\", types.RefKind, \
             types.MakeTypeRef(ref.Ref{}, 0)), false},"
        ));
        assert_eq!(out.matches("MakeStructTypeRef").count(), 1);
    }

    #[test]
    fn test_self_reference_with_file_id_uses_cache() {
        let unit = linked_list();
        let resolver = PackageResolver::new(&unit);
        let generator = Generator::new(&resolver);
        let ctx = SerializeContext::new("test").with_file_id("f00d");

        let out = generator.serialize_descriptor(&unit.types[0], &ctx).unwrap();
        assert!(out.contains("types.MakeTypeRef(__testPackageInFile_f00d_CachedRef, 0)"));
        assert_eq!(out.matches("MakeStructTypeRef").count(), 1);
    }

    #[test]
    fn test_imported_type_ref() {
        let unit = Package::default();
        let resolver = PackageResolver::new(&unit);
        let generator = Generator::new(&resolver);
        let pkg = Ref::parse(HASH).unwrap();
        let ctx = SerializeContext::new("test").with_file_id("f00d");

        assert_eq!(
            generator
                .to_type_ref(&TypeRef::imported(pkg, 3), &ctx)
                .unwrap(),
            format!("types.MakeTypeRef(ref.Parse(\"{HASH}\"), 3)")
        );
    }

    #[test]
    fn test_unresolved_without_ordinal_fails() {
        let unit = Package::default();
        let resolver = PackageResolver::new(&unit);
        let generator = Generator::new(&resolver);
        let mut t = TypeRef::unresolved(0).named("Dangling");
        t.ordinal = None;

        assert_eq!(
            generator
                .to_type_ref(&t, &SerializeContext::new("test"))
                .unwrap_err(),
            CodegenError::UnresolvedWithoutOrdinal {
                name: "Dangling".to_string()
            }
        );
    }

    #[test]
    fn test_package_qualified_type_without_ordinal_is_malformed() {
        let unit = Package::default();
        let resolver = PackageResolver::new(&unit);
        let generator = Generator::new(&resolver);
        let pkg = Ref::parse(HASH).unwrap();
        let point = TypeRef::structure(
            "Point",
            vec![Field::new("x", TypeRef::primitive(Kind::Int32))],
            Vec::new(),
        )
        .in_package(pkg);

        assert!(generator.user_name(&point).is_ok());
        assert_eq!(
            generator
                .to_type_ref(&point, &SerializeContext::new("test"))
                .unwrap_err(),
            CodegenError::malformed(Kind::Struct, "Point", "package-qualified type has no ordinal")
        );
    }

    #[test]
    fn test_malformed_descriptors_fail() {
        let unit = Package::default();
        let resolver = PackageResolver::new(&unit);
        let generator = Generator::new(&resolver);
        let ctx = SerializeContext::new("test");

        let bare_list = TypeRef::primitive(Kind::List);
        assert!(matches!(
            generator.to_type_ref(&bare_list, &ctx),
            Err(CodegenError::MalformedDescriptor { kind: Kind::List, .. })
        ));

        let short_map = TypeRef::compound(Kind::Map, vec![TypeRef::primitive(Kind::Int8)]);
        assert!(matches!(
            generator.to_type_ref(&short_map, &ctx),
            Err(CodegenError::MalformedDescriptor { kind: Kind::Map, .. })
        ));

        let nested = TypeRef::list(TypeRef::compound(Kind::Set, Vec::new()));
        assert!(matches!(
            generator.to_type_ref(&nested, &ctx),
            Err(CodegenError::MalformedDescriptor { kind: Kind::Set, .. })
        ));
    }
}
