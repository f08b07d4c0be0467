//! Error types for the marshalling layer
//!
//! Out-parameter marshalling never fails (absent containers degrade to null
//! pointers); these errors cover strict string staging, handles and
//! reflective field access.

use thiserror::Error;

use crate::reflect::FieldKind;

#[cfg(feature = "tracing")]
use tracing::warn;

/// Result type for marshalling operations
pub type MarshalResult<T> = Result<T, MarshalError>;

/// Errors raised while staging values for a native call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarshalError {
    /// A host string contains a NUL byte and cannot become a C string
    #[error("string contains a NUL byte at offset {position}")]
    InteriorNul { position: usize },

    /// A native object was required but the handle is null
    #[error("null {what} handle")]
    NullHandle { what: &'static str },
}

impl MarshalError {
    /// A null handle passed where a live object is needed.
    pub fn null_handle(what: &'static str) -> Self {
        #[cfg(feature = "tracing")]
        warn!("null {} handle passed across the boundary", what);
        Self::NullHandle { what }
    }
}

/// Errors raised by [`crate::reflect::StructBinder`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReflectError {
    /// The struct has no field with that name
    #[error("{struct_name} has no field named `{field}`")]
    UnknownField {
        struct_name: &'static str,
        field: String,
    },

    /// The value does not match the field's declared kind
    #[error("field `{field}` holds {expected}, got {found}")]
    KindMismatch {
        field: &'static str,
        expected: FieldKind,
        found: FieldKind,
    },

    /// The host value cannot be converted to the field's kind
    #[error("field `{field}` holds {expected}, host value is not convertible")]
    InvalidHostValue {
        field: &'static str,
        expected: FieldKind,
    },

    /// The struct pointer is null
    #[error("null {struct_name} pointer")]
    NullStruct { struct_name: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_field() {
        let err = ReflectError::UnknownField {
            struct_name: "ImGuiStyle",
            field: "Alpah".into(),
        };
        assert_eq!(err.to_string(), "ImGuiStyle has no field named `Alpah`");

        let err = ReflectError::KindMismatch {
            field: "Alpha",
            expected: FieldKind::F32,
            found: FieldKind::Bool,
        };
        assert_eq!(err.to_string(), "field `Alpha` holds float, got bool");
    }
}
