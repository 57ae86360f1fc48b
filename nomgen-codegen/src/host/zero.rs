//! Uninitialized values for each representation.

use crate::error::{CodegenError, Result};
use crate::generator::{Generator, OpaqueZero};
use crate::host::to_tag;
use crate::resolver::Resolver;
use nomgen_schema::{Kind, TypeRef};

impl<R: Resolver + ?Sized> Generator<'_, R> {
    /// Returns code creating an uninitialized User value of `t`.
    ///
    /// # Errors
    /// Returns `CodegenError` if `t` cannot be resolved or named.
    pub fn user_zero(&self, t: &TypeRef) -> Result<String> {
        let rt = self.resolve(t)?;
        let kind = rt.kind();
        match kind {
            Kind::Blob => Ok(format!("{}.NewEmptyBlob()", self.runtime())),
            Kind::Bool => Ok("false".to_string()),
            Kind::UInt8
            | Kind::UInt16
            | Kind::UInt32
            | Kind::UInt64
            | Kind::Int8
            | Kind::Int16
            | Kind::Int32
            | Kind::Int64
            | Kind::Float32
            | Kind::Float64 => Ok(format!("{}(0)", self.native_type(rt)?)),
            Kind::String => Ok("\"\"".to_string()),
            Kind::Enum | Kind::List | Kind::Map | Kind::Set | Kind::Struct => {
                self.new_user_name(t, rt)
            }
            Kind::Ref => Ok(format!(
                "New{}({}.Ref{{}})",
                self.user_name(rt)?,
                self.ref_pkg()
            )),
            Kind::Package => Ok(format!("{}.NewPackage()", self.runtime())),
            Kind::Value => Ok(self.opaque_zero()),
            Kind::TypeRef => Ok(format!(
                "{}.TypeRef{{R: {}.Ref{{}}}}",
                self.runtime(),
                self.ref_pkg()
            )),
            Kind::Unresolved => Err(CodegenError::unsupported(kind, "user zero")),
        }
    }

    /// Returns code creating an uninitialized stored value of `t`.
    ///
    /// # Errors
    /// Returns `CodegenError` if `t` cannot be resolved or named.
    pub fn value_zero(&self, t: &TypeRef) -> Result<String> {
        let rt = self.resolve(t)?;
        let kind = rt.kind();
        match kind {
            Kind::Blob => Ok(format!("{}.NewEmptyBlob()", self.runtime())),
            Kind::Bool => Ok(format!("{}.Bool(false)", self.runtime())),
            Kind::UInt8
            | Kind::UInt16
            | Kind::UInt32
            | Kind::UInt64
            | Kind::Int8
            | Kind::Int16
            | Kind::Int32
            | Kind::Int64
            | Kind::Float32
            | Kind::Float64 => Ok(format!("{}.{}(0)", self.runtime(), kind.name())),
            Kind::String => Ok(format!("{}.NewString(\"\")", self.runtime())),
            Kind::Enum | Kind::List | Kind::Map | Kind::Ref | Kind::Set => self.user_zero(t),
            Kind::Struct => self.new_user_name(t, rt),
            Kind::Package => Ok(format!("{}.NewPackage()", self.runtime())),
            Kind::Value => Ok(self.opaque_zero()),
            Kind::TypeRef => Ok(format!("{}.TypeRef{{}}", self.runtime())),
            Kind::Unresolved => Err(CodegenError::unsupported(kind, "value zero")),
        }
    }

    /// Returns code creating an uninitialized Def value of `t`.
    ///
    /// # Errors
    /// Returns `CodegenError` if `t` cannot be resolved or named.
    pub fn def_zero(&self, t: &TypeRef) -> Result<String> {
        let rt = self.resolve(t)?;
        let kind = rt.kind();
        match kind {
            Kind::List | Kind::Map | Kind::Set | Kind::Struct => {
                Ok(format!("{}.Def()", self.new_user_name(t, rt)?))
            }
            Kind::Ref => Ok(format!("{}.Ref{{}}", self.ref_pkg())),
            Kind::Unresolved => Err(CodegenError::unsupported(kind, "def zero")),
            // Def and User coincide for everything else.
            _ => self.user_zero(t),
        }
    }

    /// Returns the zero literal of a native kind.
    ///
    /// # Errors
    /// Returns `CodegenError::UnsupportedKind` for non-native kinds.
    pub fn native_zero(&self, t: &TypeRef) -> Result<String> {
        let kind = self.resolve(t)?.kind();
        if !kind.is_native() {
            return Err(CodegenError::unsupported(kind, "native zero"));
        }
        self.user_zero(t)
    }

    /// Invocation of the generated zero-argument constructor of `rt`,
    /// qualified with the package tag when `t` is imported.
    fn new_user_name(&self, t: &TypeRef, rt: &TypeRef) -> Result<String> {
        let name = self.local_name(rt)?;
        Ok(match &t.package_ref {
            Some(package_ref) => format!("{}.New{name}()", to_tag(package_ref)),
            None => format!("New{name}()"),
        })
    }

    fn opaque_zero(&self) -> String {
        match self.config().opaque_zero {
            OpaqueZero::Nil => format!("{}.Value(nil)", self.runtime()),
            OpaqueZero::BoolPlaceholder => {
                tracing::debug!("Emitting boolean placeholder as opaque value zero");
                format!("{}.Bool(false)", self.runtime())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::generator::{Generator, OpaqueZero, Representation};
    use crate::resolver::PackageResolver;
    use nomgen_schema::{Field, Kind, Package, PackageRegistry, Ref, TypeRef};

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
            TypeRef::enumeration("Color", ["Red"]),
        ])
    }

    #[test]
    fn test_numeric_zeros() {
        let unit = unit();
        let resolver = PackageResolver::new(&unit);
        let generator = Generator::new(&resolver);
        let t = TypeRef::primitive(Kind::Float32);

        assert_eq!(generator.user_zero(&t).unwrap(), "float32(0)");
        assert_eq!(generator.def_zero(&t).unwrap(), "float32(0)");
        assert_eq!(generator.native_zero(&t).unwrap(), "float32(0)");
        assert_eq!(generator.value_zero(&t).unwrap(), "types.Float32(0)");
    }

    #[test]
    fn test_bool_and_string_zeros() {
        let unit = unit();
        let resolver = PackageResolver::new(&unit);
        let generator = Generator::new(&resolver);

        let b = TypeRef::primitive(Kind::Bool);
        assert_eq!(generator.user_zero(&b).unwrap(), "false");
        assert_eq!(generator.value_zero(&b).unwrap(), "types.Bool(false)");

        let s = TypeRef::primitive(Kind::String);
        assert_eq!(generator.user_zero(&s).unwrap(), "\"\"");
        assert_eq!(generator.value_zero(&s).unwrap(), "types.NewString(\"\")");
    }

    #[test]
    fn test_list_zero_matches_user_name() {
        let unit = unit();
        let resolver = PackageResolver::new(&unit);
        let generator = Generator::new(&resolver);
        let list = TypeRef::list(TypeRef::primitive(Kind::Int32));

        let name = generator.name_for(&list, Representation::User).unwrap();
        assert_eq!(
            generator
                .zero_value_expression(&list, Representation::User)
                .unwrap(),
            format!("New{name}()")
        );
        assert_eq!(generator.value_zero(&list).unwrap(), "NewListOfInt32()");
        assert_eq!(generator.def_zero(&list).unwrap(), "NewListOfInt32().Def()");
    }

    #[test]
    fn test_struct_and_enum_zeros() {
        let unit = unit();
        let resolver = PackageResolver::new(&unit);
        let generator = Generator::new(&resolver);

        assert_eq!(generator.user_zero(&TypeRef::unresolved(0)).unwrap(), "NewPoint()");
        assert_eq!(generator.value_zero(&TypeRef::unresolved(0)).unwrap(), "NewPoint()");
        assert_eq!(generator.user_zero(&TypeRef::unresolved(1)).unwrap(), "NewColor()");
        assert_eq!(generator.def_zero(&TypeRef::unresolved(1)).unwrap(), "NewColor()");
    }

    #[test]
    fn test_imported_zero_is_qualified() {
        let pkg = Ref::from_digest([0x42; 20]);
        let mut registry = PackageRegistry::new();
        registry.register(pkg, unit()).unwrap();
        let local = Package::default();
        let resolver = PackageResolver::new(&local).with_registry(&registry);
        let generator = Generator::new(&resolver);
        let tag = crate::host::to_tag(&pkg);

        assert_eq!(
            generator.user_zero(&TypeRef::imported(pkg, 0)).unwrap(),
            format!("{tag}.NewPoint()")
        );
        assert_eq!(
            generator.value_zero(&TypeRef::imported(pkg, 1)).unwrap(),
            format!("{tag}.NewColor()")
        );
    }

    #[test]
    fn test_ref_zeros() {
        let unit = unit();
        let resolver = PackageResolver::new(&unit);
        let generator = Generator::new(&resolver);
        let t = TypeRef::reference(TypeRef::unresolved(0));

        assert_eq!(generator.user_zero(&t).unwrap(), "NewRefOfPoint(ref.Ref{})");
        assert_eq!(generator.value_zero(&t).unwrap(), "NewRefOfPoint(ref.Ref{})");
        assert_eq!(generator.def_zero(&t).unwrap(), "ref.Ref{}");
    }

    #[test]
    fn test_runtime_kind_zeros() {
        let unit = unit();
        let resolver = PackageResolver::new(&unit);
        let generator = Generator::new(&resolver);

        let blob = TypeRef::primitive(Kind::Blob);
        assert_eq!(generator.user_zero(&blob).unwrap(), "types.NewEmptyBlob()");
        assert_eq!(generator.value_zero(&blob).unwrap(), "types.NewEmptyBlob()");

        let type_ref = TypeRef::primitive(Kind::TypeRef);
        assert_eq!(
            generator.user_zero(&type_ref).unwrap(),
            "types.TypeRef{R: ref.Ref{}}"
        );
        assert_eq!(generator.value_zero(&type_ref).unwrap(), "types.TypeRef{}");

        let package = TypeRef::primitive(Kind::Package);
        assert_eq!(generator.user_zero(&package).unwrap(), "types.NewPackage()");
        assert_eq!(generator.value_zero(&package).unwrap(), "types.NewPackage()");
    }

    #[test]
    fn test_opaque_value_zero_policy() {
        let unit = unit();
        let resolver = PackageResolver::new(&unit);
        let value = TypeRef::primitive(Kind::Value);

        let generator = Generator::new(&resolver);
        assert_eq!(generator.user_zero(&value).unwrap(), "types.Value(nil)");
        assert_eq!(generator.value_zero(&value).unwrap(), "types.Value(nil)");

        let legacy = Generator::builder(&resolver)
            .opaque_zero(OpaqueZero::BoolPlaceholder)
            .build();
        assert_eq!(legacy.user_zero(&value).unwrap(), "types.Bool(false)");
        assert_eq!(legacy.def_zero(&value).unwrap(), "types.Bool(false)");
    }

    #[test]
    fn test_native_zero_of_aggregate_fails() {
        let unit = unit();
        let resolver = PackageResolver::new(&unit);
        let generator = Generator::new(&resolver);
        assert!(matches!(
            generator.zero_value_expression(&TypeRef::unresolved(0), Representation::Native),
            Err(crate::CodegenError::UnsupportedKind {
                kind: Kind::Struct,
                ..
            })
        ));
    }
}
