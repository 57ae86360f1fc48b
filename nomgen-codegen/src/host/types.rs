//! Type expressions for each representation.

use crate::error::{CodegenError, Result};
use crate::generator::Generator;
use crate::resolver::Resolver;
use nomgen_schema::{Kind, TypeRef};

impl<R: Resolver + ?Sized> Generator<'_, R> {
    /// Returns the Def type for `t`: the plain host type used to build data
    /// before it becomes a stored value.
    ///
    /// # Errors
    /// Returns `CodegenError` if `t` cannot be resolved or named.
    pub fn def_type(&self, t: &TypeRef) -> Result<String> {
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
            | Kind::String => self.native_type(rt),
            Kind::Blob | Kind::Value | Kind::TypeRef | Kind::Package => {
                Ok(format!("{}.{}", self.runtime(), kind.name()))
            }
            Kind::Enum => self.user_name(t),
            Kind::List | Kind::Map | Kind::Set | Kind::Struct => {
                Ok(format!("{}Def", self.user_name(t)?))
            }
            Kind::Ref => Ok(format!("{}.Ref", self.ref_pkg())),
            Kind::Unresolved => Err(CodegenError::unsupported(kind, "def type")),
        }
    }

    /// Returns the User type for `t`, used in generated getters and setters.
    /// Native kinds map to the native type, everything else to a runtime or
    /// generated type.
    ///
    /// # Errors
    /// Returns `CodegenError` if `t` cannot be resolved or named.
    pub fn user_type(&self, t: &TypeRef) -> Result<String> {
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
            | Kind::String => self.native_type(rt),
            Kind::Blob | Kind::Value | Kind::TypeRef | Kind::Package => {
                Ok(format!("{}.{}", self.runtime(), kind.name()))
            }
            Kind::Enum | Kind::List | Kind::Map | Kind::Ref | Kind::Set | Kind::Struct => {
                self.user_name(t)
            }
            Kind::Unresolved => Err(CodegenError::unsupported(kind, "user type")),
        }
    }

    /// Returns the host primitive type for a native kind.
    ///
    /// # Errors
    /// Returns `CodegenError::UnsupportedKind` for non-native kinds.
    pub fn native_type(&self, t: &TypeRef) -> Result<String> {
        let kind = self.resolve(t)?.kind();
        kind.native_name()
            .map(str::to_string)
            .ok_or_else(|| CodegenError::unsupported(kind, "native type"))
    }

    /// Returns the generic stored-value type, which is the same for every
    /// kind.
    ///
    /// # Errors
    /// Returns `CodegenError` if `t` cannot be resolved.
    pub fn storage_type(&self, t: &TypeRef) -> Result<String> {
        let kind = self.resolve(t)?.kind();
        if kind == Kind::Unresolved {
            return Err(CodegenError::unsupported(kind, "storage type"));
        }
        Ok(format!("{}.Value", self.runtime()))
    }
}

#[cfg(test)]
mod tests {
    use crate::generator::{Generator, Representation};
    use crate::resolver::PackageResolver;
    use nomgen_schema::{Field, Kind, Package, Ref, TypeRef};

    fn unit() -> Package {
        Package::new(vec![
            TypeRef::structure(
                "Point",
                vec![
                    Field::new("x", TypeRef::primitive(Kind::Int32)),
                    Field::new("y", TypeRef::primitive(Kind::Int32)),
                ],
                Vec::new(),
            ),
            TypeRef::enumeration("Color", ["Red", "Green", "Blue"]),
        ])
    }

    #[test]
    fn test_primitive_types() {
        let unit = unit();
        let resolver = PackageResolver::new(&unit);
        let generator = Generator::new(&resolver);
        let t = TypeRef::primitive(Kind::UInt32);

        assert_eq!(generator.def_type(&t).unwrap(), "uint32");
        assert_eq!(generator.user_type(&t).unwrap(), "uint32");
        assert_eq!(generator.native_type(&t).unwrap(), "uint32");
        assert_eq!(generator.storage_type(&t).unwrap(), "types.Value");
    }

    #[test]
    fn test_runtime_types() {
        let unit = unit();
        let resolver = PackageResolver::new(&unit);
        let generator = Generator::new(&resolver);

        for (kind, expected) in [
            (Kind::Blob, "types.Blob"),
            (Kind::Value, "types.Value"),
            (Kind::TypeRef, "types.TypeRef"),
            (Kind::Package, "types.Package"),
        ] {
            let t = TypeRef::primitive(kind);
            assert_eq!(generator.def_type(&t).unwrap(), expected);
            assert_eq!(generator.user_type(&t).unwrap(), expected);
            assert!(generator.native_type(&t).is_err());
        }
    }

    #[test]
    fn test_aggregate_types() {
        let unit = unit();
        let resolver = PackageResolver::new(&unit);
        let generator = Generator::new(&resolver);

        let point = TypeRef::unresolved(0);
        assert_eq!(generator.def_type(&point).unwrap(), "PointDef");
        assert_eq!(generator.user_type(&point).unwrap(), "Point");

        let list = TypeRef::list(TypeRef::primitive(Kind::Int32));
        assert_eq!(generator.def_type(&list).unwrap(), "ListOfInt32Def");
        assert_eq!(generator.user_type(&list).unwrap(), "ListOfInt32");

        let color = TypeRef::unresolved(1);
        assert_eq!(generator.def_type(&color).unwrap(), "Color");
        assert_eq!(generator.user_type(&color).unwrap(), "Color");

        let reference = TypeRef::reference(TypeRef::unresolved(0));
        assert_eq!(generator.def_type(&reference).unwrap(), "ref.Ref");
        assert_eq!(generator.user_type(&reference).unwrap(), "RefOfPoint");
        assert_eq!(
            generator
                .type_expr_for(&reference, Representation::Storage)
                .unwrap(),
            "types.Value"
        );
    }

    #[test]
    fn test_imported_types_are_qualified() {
        let pkg = Ref::from_digest([0xcd; 20]);
        let unit = unit();
        let resolver = PackageResolver::new(&unit);
        let generator = Generator::new(&resolver);
        let point = unit.types[0].clone().in_package(pkg);
        let tag = crate::host::to_tag(&pkg);

        assert_eq!(generator.user_type(&point).unwrap(), format!("{tag}.Point"));
        assert_eq!(generator.def_type(&point).unwrap(), format!("{tag}.PointDef"));
    }

    #[test]
    fn test_native_type_of_aggregate_fails() {
        let unit = unit();
        let resolver = PackageResolver::new(&unit);
        let generator = Generator::new(&resolver);
        let err = generator
            .type_expr_for(&TypeRef::unresolved(0), Representation::Native)
            .unwrap_err();
        assert_eq!(
            err,
            crate::CodegenError::unsupported(Kind::Struct, "native type")
        );
    }
}
