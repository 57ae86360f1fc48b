//! Type descriptor definitions.
//!
//! This module contains the data structures describing schema types: the
//! closed set of kinds, the descriptor payloads for compound, enum and struct
//! types, and the unresolved forward references used while a compilation unit
//! is still being assembled.

use crate::digest::Ref;
use std::fmt;

/// Kind of a schema type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Boolean.
    Bool,
    /// Unsigned 8-bit integer.
    UInt8,
    /// Unsigned 16-bit integer.
    UInt16,
    /// Unsigned 32-bit integer.
    UInt32,
    /// Unsigned 64-bit integer.
    UInt64,
    /// Signed 8-bit integer.
    Int8,
    /// Signed 16-bit integer.
    Int16,
    /// Signed 32-bit integer.
    Int32,
    /// Signed 64-bit integer.
    Int64,
    /// 32-bit floating point.
    Float32,
    /// 64-bit floating point.
    Float64,
    /// Text string.
    String,
    /// Opaque byte sequence.
    Blob,
    /// Any schema value.
    Value,
    /// Homogeneous list.
    List,
    /// Key/value map.
    Map,
    /// Reference to a stored value.
    Ref,
    /// Homogeneous set.
    Set,
    /// Named enumeration.
    Enum,
    /// Struct, optionally carrying a union.
    Struct,
    /// Type descriptor of a type descriptor.
    TypeRef,
    /// Forward reference that has not been bound yet.
    Unresolved,
    /// Package descriptor.
    Package,
}

impl Kind {
    /// Returns the display name of the kind.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Bool => "Bool",
            Self::UInt8 => "UInt8",
            Self::UInt16 => "UInt16",
            Self::UInt32 => "UInt32",
            Self::UInt64 => "UInt64",
            Self::Int8 => "Int8",
            Self::Int16 => "Int16",
            Self::Int32 => "Int32",
            Self::Int64 => "Int64",
            Self::Float32 => "Float32",
            Self::Float64 => "Float64",
            Self::String => "String",
            Self::Blob => "Blob",
            Self::Value => "Value",
            Self::List => "List",
            Self::Map => "Map",
            Self::Ref => "Ref",
            Self::Set => "Set",
            Self::Enum => "Enum",
            Self::Struct => "Struct",
            Self::TypeRef => "TypeRef",
            Self::Unresolved => "Unresolved",
            Self::Package => "Package",
        }
    }

    /// Returns the host-language native type name, for native kinds only.
    #[must_use]
    pub const fn native_name(&self) -> Option<&'static str> {
        match self {
            Self::Bool => Some("bool"),
            Self::UInt8 => Some("uint8"),
            Self::UInt16 => Some("uint16"),
            Self::UInt32 => Some("uint32"),
            Self::UInt64 => Some("uint64"),
            Self::Int8 => Some("int8"),
            Self::Int16 => Some("int16"),
            Self::Int32 => Some("int32"),
            Self::Int64 => Some("int64"),
            Self::Float32 => Some("float32"),
            Self::Float64 => Some("float64"),
            Self::String => Some("string"),
            _ => None,
        }
    }

    /// Returns true for kinds that have a host-language native type.
    #[must_use]
    pub const fn is_native(&self) -> bool {
        self.native_name().is_some()
    }

    /// Returns true for numeric kinds.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::UInt8
                | Self::UInt16
                | Self::UInt32
                | Self::UInt64
                | Self::Int8
                | Self::Int16
                | Self::Int32
                | Self::Int64
                | Self::Float32
                | Self::Float64
        )
    }

    /// Returns true for kinds described without any payload.
    #[must_use]
    pub const fn is_primitive(&self) -> bool {
        self.is_native() || matches!(self, Self::Blob | Self::Value | Self::TypeRef | Self::Package)
    }

    /// Returns true for kinds parameterized by element types.
    #[must_use]
    pub const fn is_compound(&self) -> bool {
        matches!(self, Self::List | Self::Map | Self::Ref | Self::Set)
    }

    /// Returns the number of element types a compound kind carries.
    #[must_use]
    pub const fn arity(&self) -> Option<usize> {
        match self {
            Self::List | Self::Ref | Self::Set => Some(1),
            Self::Map => Some(2),
            _ => None,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Structural payload of a type descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDesc {
    /// Kind without payload.
    Primitive(Kind),
    /// List, set, map or ref over element types.
    Compound(CompoundDesc),
    /// Enumeration members.
    Enum(EnumDesc),
    /// Struct fields and union choices.
    Struct(StructDesc),
    /// Identity not bound yet; see [`TypeRef::ordinal`] and
    /// [`TypeRef::package_ref`].
    Unresolved,
}

/// Element types of a compound descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompoundDesc {
    /// Compound kind.
    pub kind: Kind,
    /// Element types, key before value for maps.
    pub elem_types: Vec<TypeRef>,
}

/// Members of an enum descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDesc {
    /// Member identifiers in declaration order.
    pub ids: Vec<String>,
}

/// Fields and union choices of a struct descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StructDesc {
    /// Named fields.
    pub fields: Vec<Field>,
    /// Mutually exclusive union choices, empty when the struct has no union.
    pub union: Vec<Field>,
}

/// Struct field or union choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Field name.
    pub name: String,
    /// Field type.
    pub ty: TypeRef,
    /// Whether the field may be absent.
    pub optional: bool,
}

impl Field {
    /// Creates a required field.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            optional: false,
        }
    }

    /// Creates an optional field.
    #[must_use]
    pub fn optional(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            optional: true,
        }
    }
}

/// Type descriptor.
///
/// A descriptor is either resolved, carrying its full structure inline, or
/// unresolved, naming its target by ordinal within a compilation unit and,
/// for types declared in another package, by that package's [`Ref`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRef {
    /// Declared name, empty for anonymous and unnamed types.
    pub name: String,
    /// Package that declares the type, when declared elsewhere.
    pub package_ref: Option<Ref>,
    /// Position within the declaring compilation unit.
    pub ordinal: Option<u16>,
    /// Structural payload.
    pub desc: TypeDesc,
}

impl TypeRef {
    /// Creates a descriptor for a payload-free kind.
    #[must_use]
    pub fn primitive(kind: Kind) -> Self {
        Self::with_desc(String::new(), TypeDesc::Primitive(kind))
    }

    /// Creates a compound descriptor.
    #[must_use]
    pub fn compound(kind: Kind, elem_types: Vec<TypeRef>) -> Self {
        Self::with_desc(
            String::new(),
            TypeDesc::Compound(CompoundDesc { kind, elem_types }),
        )
    }

    /// Creates a list descriptor.
    #[must_use]
    pub fn list(elem: TypeRef) -> Self {
        Self::compound(Kind::List, vec![elem])
    }

    /// Creates a set descriptor.
    #[must_use]
    pub fn set(elem: TypeRef) -> Self {
        Self::compound(Kind::Set, vec![elem])
    }

    /// Creates a ref descriptor.
    #[must_use]
    pub fn reference(target: TypeRef) -> Self {
        Self::compound(Kind::Ref, vec![target])
    }

    /// Creates a map descriptor.
    #[must_use]
    pub fn map(key: TypeRef, value: TypeRef) -> Self {
        Self::compound(Kind::Map, vec![key, value])
    }

    /// Creates an enum descriptor.
    #[must_use]
    pub fn enumeration<I, S>(name: impl Into<String>, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_desc(
            name.into(),
            TypeDesc::Enum(EnumDesc {
                ids: ids.into_iter().map(Into::into).collect(),
            }),
        )
    }

    /// Creates a struct descriptor.
    #[must_use]
    pub fn structure(name: impl Into<String>, fields: Vec<Field>, union: Vec<Field>) -> Self {
        Self::with_desc(name.into(), TypeDesc::Struct(StructDesc { fields, union }))
    }

    /// Creates an anonymous union descriptor.
    #[must_use]
    pub fn union_of(choices: Vec<Field>) -> Self {
        Self::structure(String::new(), Vec::new(), choices)
    }

    /// Creates a forward reference to a type in the current compilation unit.
    #[must_use]
    pub fn unresolved(ordinal: u16) -> Self {
        Self {
            name: String::new(),
            package_ref: None,
            ordinal: Some(ordinal),
            desc: TypeDesc::Unresolved,
        }
    }

    /// Creates a forward reference to a type declared in another package.
    #[must_use]
    pub fn imported(package_ref: Ref, ordinal: u16) -> Self {
        Self {
            name: String::new(),
            package_ref: Some(package_ref),
            ordinal: Some(ordinal),
            desc: TypeDesc::Unresolved,
        }
    }

    fn with_desc(name: String, desc: TypeDesc) -> Self {
        Self {
            name,
            package_ref: None,
            ordinal: None,
            desc,
        }
    }

    /// Sets the declared name.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the declaring package.
    #[must_use]
    pub fn in_package(mut self, package_ref: Ref) -> Self {
        self.package_ref = Some(package_ref);
        self
    }

    /// Sets the ordinal.
    #[must_use]
    pub fn at_ordinal(mut self, ordinal: u16) -> Self {
        self.ordinal = Some(ordinal);
        self
    }

    /// Returns the kind described by this descriptor.
    #[must_use]
    pub fn kind(&self) -> Kind {
        match &self.desc {
            TypeDesc::Primitive(kind) => *kind,
            TypeDesc::Compound(desc) => desc.kind,
            TypeDesc::Enum(_) => Kind::Enum,
            TypeDesc::Struct(_) => Kind::Struct,
            TypeDesc::Unresolved => Kind::Unresolved,
        }
    }

    /// Returns the declared name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns true if the descriptor is a forward reference.
    #[must_use]
    pub fn is_unresolved(&self) -> bool {
        matches!(self.desc, TypeDesc::Unresolved)
    }

    /// Returns true if the type is declared in another package.
    #[must_use]
    pub fn has_package_ref(&self) -> bool {
        self.package_ref.is_some()
    }

    /// Returns true for a struct with no name and a non-empty union.
    #[must_use]
    pub fn is_anonymous_union(&self) -> bool {
        match &self.desc {
            TypeDesc::Struct(desc) => self.name.is_empty() && !desc.union.is_empty(),
            _ => false,
        }
    }

    /// Returns the element types of a compound descriptor.
    #[must_use]
    pub fn elem_types(&self) -> Option<&[TypeRef]> {
        match &self.desc {
            TypeDesc::Compound(desc) => Some(&desc.elem_types),
            _ => None,
        }
    }
}
