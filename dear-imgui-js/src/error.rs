//! Error types for the binding layer
//!
//! Out-parameter marshalling never produces an error; these cover calls that
//! need live native state (a current context, a registered clipboard backend)
//! and reflective field access.

use dear_imgui_js_marshal::{MarshalError, ReflectError};
use thiserror::Error;

#[cfg(feature = "tracing")]
use tracing::{error, warn};

/// Result type for binding operations
pub type BindResult<T> = Result<T, BindError>;

/// Errors surfaced to the host
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BindError {
    /// The call needs a current ImGui context
    #[error("no current Dear ImGui context")]
    NoCurrentContext,

    /// The call needs a current context of an extension (ImNodes, ...)
    #[error("no current {extension} context")]
    NoExtensionContext { extension: &'static str },

    /// The native library returned null where an object was expected
    #[error("{call} returned null")]
    NullResult { call: &'static str },

    /// Marshalling a string or handle failed
    #[error(transparent)]
    Marshal(#[from] MarshalError),

    /// Reflective field access failed
    #[error(transparent)]
    Reflect(#[from] ReflectError),
}

impl BindError {
    /// No Dear ImGui context is current.
    pub fn no_current_context() -> Self {
        #[cfg(feature = "tracing")]
        warn!("call requires a current Dear ImGui context");
        Self::NoCurrentContext
    }

    /// The extension named `extension` has no current context.
    pub fn no_extension_context(extension: &'static str) -> Self {
        #[cfg(feature = "tracing")]
        warn!("call requires a current {} context", extension);
        Self::NoExtensionContext { extension }
    }

    /// `call` returned null where an object was expected.
    pub fn null_result(call: &'static str) -> Self {
        #[cfg(feature = "tracing")]
        error!("{} returned null", call);
        Self::NullResult { call }
    }
}

#[cfg(feature = "wasm")]
impl From<BindError> for wasm_bindgen::JsValue {
    fn from(err: BindError) -> Self {
        wasm_bindgen::JsError::new(&err.to_string()).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapped_errors_keep_their_message() {
        let err = BindError::from(ReflectError::NullStruct {
            struct_name: "ImGuiIO",
        });
        assert_eq!(err.to_string(), "null ImGuiIO pointer");
        assert_eq!(
            BindError::null_result("igCreateContext").to_string(),
            "igCreateContext returned null"
        );
        assert_eq!(
            BindError::no_extension_context("ImNodes").to_string(),
            "no current ImNodes context"
        );
    }
}
