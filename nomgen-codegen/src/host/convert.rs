//! Conversion expressions between representations.

use crate::error::{CodegenError, Result};
use crate::generator::Generator;
use crate::resolver::Resolver;
use nomgen_schema::{Kind, TypeRef};

impl<R: Resolver + ?Sized> Generator<'_, R> {
    /// Returns code converting a Def value `val` into a stored value.
    ///
    /// # Errors
    /// Returns `CodegenError` if `t` cannot be resolved or named.
    pub fn def_to_value(&self, val: &str, t: &TypeRef) -> Result<String> {
        let rt = self.resolve(t)?;
        let kind = rt.kind();
        match kind {
            // No separate Def representation.
            Kind::Blob | Kind::Enum | Kind::Package | Kind::Value | Kind::TypeRef => {
                Ok(val.to_string())
            }
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
            | Kind::String => self.native_to_value(val, kind),
            Kind::List | Kind::Map | Kind::Set | Kind::Struct => Ok(format!("{val}.New()")),
            Kind::Ref => Ok(format!("New{}({val})", self.user_name(rt)?)),
            Kind::Unresolved => Err(CodegenError::unsupported(kind, "def to value")),
        }
    }

    /// Returns code converting a stored value `val` into the Def type of `t`.
    ///
    /// # Errors
    /// Returns `CodegenError` if `t` cannot be resolved or named.
    pub fn value_to_def(&self, val: &str, t: &TypeRef) -> Result<String> {
        let rt = self.resolve(t)?;
        let kind = rt.kind();
        match kind {
            Kind::Blob | Kind::Package | Kind::TypeRef => self.value_to_user(val, rt),
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
            | Kind::String => self.value_to_native(val, kind),
            Kind::Enum => Ok(format!("{val}.({})", self.user_name(t)?)),
            Kind::List | Kind::Map | Kind::Set | Kind::Struct => {
                Ok(format!("{}.Def()", self.value_to_user(val, t)?))
            }
            Kind::Ref => Ok(format!("{val}.Ref()")),
            Kind::Value => Ok(val.to_string()),
            Kind::Unresolved => Err(CodegenError::unsupported(kind, "value to def")),
        }
    }

    /// Returns code wrapping a native value `val` of an already-resolved
    /// `kind` into a stored value.
    ///
    /// # Errors
    /// Returns `CodegenError::UnsupportedKind` for non-native kinds.
    pub fn native_to_value(&self, val: &str, kind: Kind) -> Result<String> {
        match kind {
            Kind::String => Ok(format!("{}.NewString({val})", self.runtime())),
            _ if kind.is_native() => Ok(format!("{}.{}({val})", self.runtime(), kind.name())),
            _ => Err(CodegenError::unsupported(kind, "native to value")),
        }
    }

    /// Returns code unwrapping a stored value `val` into the native type of
    /// an already-resolved `kind`.
    ///
    /// # Errors
    /// Returns `CodegenError::UnsupportedKind` for non-native kinds.
    pub fn value_to_native(&self, val: &str, kind: Kind) -> Result<String> {
        match (kind, kind.native_name()) {
            (Kind::String, _) => Ok(format!("{val}.({}.String).String()", self.runtime())),
            (_, Some(native)) => Ok(format!(
                "{native}({val}.({}.{}))",
                self.runtime(),
                kind.name()
            )),
            (_, None) => Err(CodegenError::unsupported(kind, "value to native")),
        }
    }

    /// Returns code converting a Def value `val` into the User type of `t`.
    ///
    /// # Errors
    /// Returns `CodegenError` if `t` cannot be resolved or named.
    pub fn def_to_user(&self, val: &str, t: &TypeRef) -> Result<String> {
        let rt = self.resolve(t)?;
        let kind = rt.kind();
        match kind {
            Kind::List | Kind::Map | Kind::Set | Kind::Struct => Ok(format!("{val}.New()")),
            Kind::Ref => Ok(format!("New{}({val})", self.user_name(rt)?)),
            Kind::Unresolved => Err(CodegenError::unsupported(kind, "def to user")),
            // Def and User coincide for everything else.
            _ => Ok(val.to_string()),
        }
    }

    /// Returns code converting a User value `val` into the Def type of `t`.
    ///
    /// # Errors
    /// Returns `CodegenError` if `t` cannot be resolved.
    pub fn user_to_def(&self, val: &str, t: &TypeRef) -> Result<String> {
        let kind = self.resolve(t)?.kind();
        match kind {
            Kind::List | Kind::Map | Kind::Set | Kind::Struct => Ok(format!("{val}.Def()")),
            Kind::Ref => Ok(format!("{val}.Ref()")),
            Kind::Unresolved => Err(CodegenError::unsupported(kind, "user to def")),
            _ => Ok(val.to_string()),
        }
    }

    /// Returns code converting a User value `val` into a stored value.
    /// Non-native User types already are stored values, so this is mostly a
    /// pass-through.
    ///
    /// # Errors
    /// Returns `CodegenError` if `t` cannot be resolved.
    pub fn user_to_value(&self, val: &str, t: &TypeRef) -> Result<String> {
        let kind = self.resolve(t)?.kind();
        match kind {
            Kind::Blob
            | Kind::Enum
            | Kind::List
            | Kind::Map
            | Kind::Package
            | Kind::Ref
            | Kind::Set
            | Kind::Struct
            | Kind::TypeRef
            | Kind::Value => Ok(val.to_string()),
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
            | Kind::String => self.native_to_value(val, kind),
            Kind::Unresolved => Err(CodegenError::unsupported(kind, "user to value")),
        }
    }

    /// Returns code converting a stored value `val` into the User type of
    /// `t`.
    ///
    /// # Errors
    /// Returns `CodegenError` if `t` cannot be resolved or named.
    pub fn value_to_user(&self, val: &str, t: &TypeRef) -> Result<String> {
        let rt = self.resolve(t)?;
        let kind = rt.kind();
        match kind {
            Kind::Blob | Kind::Package | Kind::TypeRef => {
                Ok(format!("{val}.({}.{})", self.runtime(), kind.name()))
            }
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
            | Kind::String => self.value_to_native(val, kind),
            Kind::Enum | Kind::List | Kind::Map | Kind::Ref | Kind::Set | Kind::Struct => {
                Ok(format!("{val}.({})", self.user_name(t)?))
            }
            Kind::Value => Ok(val.to_string()),
            Kind::Unresolved => Err(CodegenError::unsupported(kind, "value to user")),
        }
    }
}
