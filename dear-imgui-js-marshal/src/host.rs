//! Host containers
//!
//! A host container is whatever the host language hands us in place of "the
//! address of a primitive": in JavaScript a plain array, `[false]` for a
//! `bool*` or `[0.1, 0.2, 0.3, 0.4]` for a `float[4]`. `null`, `undefined` and
//! non-array values are "absent" and turn into null pointers on the native side.

/// A single element read from, or written to, a host container.
///
/// JavaScript only has one number type, so every numeric element travels as
/// `f64`; narrowing to the native element type happens in [`crate::Element`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum HostScalar {
    Bool(bool),
    Number(f64),
    /// Holes, strings, objects and anything else that is not a primitive.
    Other,
}

impl HostScalar {
    /// Numeric view, JS `ToNumber`-style for booleans.
    pub fn as_number(self) -> Option<f64> {
        match self {
            HostScalar::Number(n) => Some(n),
            HostScalar::Bool(b) => Some(if b { 1.0 } else { 0.0 }),
            HostScalar::Other => None,
        }
    }
}

impl From<bool> for HostScalar {
    fn from(value: bool) -> Self {
        HostScalar::Bool(value)
    }
}

impl From<f64> for HostScalar {
    fn from(value: f64) -> Self {
        HostScalar::Number(value)
    }
}

/// A mutable, array-like host value.
///
/// Implementations must treat a non-array value as absent: `is_array_like`
/// returns `false`, `length` returns 0, reads return [`HostScalar::Other`] and
/// writes are ignored.
pub trait HostContainer {
    /// Whether the value is a non-null array.
    fn is_array_like(&self) -> bool;

    /// Number of elements currently held.
    fn length(&self) -> usize;

    /// Reads one element. Out-of-range indices read as [`HostScalar::Other`].
    fn read(&self, index: usize) -> HostScalar;

    /// Writes one element. Writing past the end grows the container.
    fn write(&mut self, index: usize, value: HostScalar);

    /// Truncates or grows the container to exactly `len` elements.
    fn resize(&mut self, len: usize);
}

impl<H: HostContainer + ?Sized> HostContainer for &mut H {
    fn is_array_like(&self) -> bool {
        (**self).is_array_like()
    }

    fn length(&self) -> usize {
        (**self).length()
    }

    fn read(&self, index: usize) -> HostScalar {
        (**self).read(index)
    }

    fn write(&mut self, index: usize, value: HostScalar) {
        (**self).write(index, value)
    }

    fn resize(&mut self, len: usize) {
        (**self).resize(len)
    }
}

/// In-process container; always array-like.
impl HostContainer for Vec<HostScalar> {
    fn is_array_like(&self) -> bool {
        true
    }

    fn length(&self) -> usize {
        self.len()
    }

    fn read(&self, index: usize) -> HostScalar {
        self.get(index).copied().unwrap_or(HostScalar::Other)
    }

    fn write(&mut self, index: usize, value: HostScalar) {
        if index >= self.len() {
            self.resize(index + 1, HostScalar::Other);
        }
        self[index] = value;
    }

    fn resize(&mut self, len: usize) {
        Vec::resize(self, len, HostScalar::Other);
    }
}

/// `Option::None` is the native-host spelling of `null`.
impl<H: HostContainer> HostContainer for Option<H> {
    fn is_array_like(&self) -> bool {
        self.as_ref().is_some_and(HostContainer::is_array_like)
    }

    fn length(&self) -> usize {
        self.as_ref().map_or(0, HostContainer::length)
    }

    fn read(&self, index: usize) -> HostScalar {
        self.as_ref()
            .map_or(HostScalar::Other, |host| host.read(index))
    }

    fn write(&mut self, index: usize, value: HostScalar) {
        if let Some(host) = self {
            host.write(index, value);
        }
    }

    fn resize(&mut self, len: usize) {
        if let Some(host) = self {
            host.resize(len);
        }
    }
}

#[cfg(feature = "json")]
mod json {
    use super::{HostContainer, HostScalar};
    use serde_json::Value;

    // Largest integer an f64 represents exactly.
    const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

    pub(crate) fn scalar_from_json(value: &Value) -> HostScalar {
        match value {
            Value::Bool(b) => HostScalar::Bool(*b),
            Value::Number(n) => n.as_f64().map_or(HostScalar::Other, HostScalar::Number),
            _ => HostScalar::Other,
        }
    }

    /// Integral numbers are written as JSON integers so that `[8]` compares
    /// equal to `json!([8])`; non-finite numbers have no JSON spelling and
    /// become `null`.
    fn scalar_to_json(value: HostScalar) -> Value {
        match value {
            HostScalar::Bool(b) => Value::Bool(b),
            HostScalar::Number(n) if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER => {
                Value::from(n as i64)
            }
            HostScalar::Number(n) => serde_json::Number::from_f64(n)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            HostScalar::Other => Value::Null,
        }
    }

    impl HostContainer for Value {
        fn is_array_like(&self) -> bool {
            self.is_array()
        }

        fn length(&self) -> usize {
            self.as_array().map_or(0, Vec::len)
        }

        fn read(&self, index: usize) -> HostScalar {
            self.as_array()
                .and_then(|items| items.get(index))
                .map_or(HostScalar::Other, scalar_from_json)
        }

        fn write(&mut self, index: usize, value: HostScalar) {
            if let Some(items) = self.as_array_mut() {
                if index >= items.len() {
                    items.resize(index + 1, Value::Null);
                }
                items[index] = scalar_to_json(value);
            }
        }

        fn resize(&mut self, len: usize) {
            if let Some(items) = self.as_array_mut() {
                items.resize(len, Value::Null);
            }
        }
    }
}

#[cfg(feature = "json")]
pub(crate) use json::scalar_from_json;

#[cfg(feature = "wasm")]
mod wasm {
    use super::{HostContainer, HostScalar};
    use js_sys::Array;
    use wasm_bindgen::{JsCast, JsValue};

    pub(crate) fn scalar_from_js(value: &JsValue) -> HostScalar {
        if let Some(b) = value.as_bool() {
            HostScalar::Bool(b)
        } else if let Some(n) = value.as_f64() {
            HostScalar::Number(n)
        } else {
            HostScalar::Other
        }
    }

    fn scalar_to_js(value: HostScalar) -> JsValue {
        match value {
            HostScalar::Bool(b) => JsValue::from_bool(b),
            HostScalar::Number(n) => JsValue::from_f64(n),
            HostScalar::Other => JsValue::UNDEFINED,
        }
    }

    impl HostContainer for JsValue {
        fn is_array_like(&self) -> bool {
            Array::is_array(self)
        }

        fn length(&self) -> usize {
            self.dyn_ref::<Array>()
                .map_or(0, |array| array.length() as usize)
        }

        fn read(&self, index: usize) -> HostScalar {
            self.dyn_ref::<Array>()
                .map_or(HostScalar::Other, |array| {
                    scalar_from_js(&array.get(index as u32))
                })
        }

        fn write(&mut self, index: usize, value: HostScalar) {
            if let Some(array) = self.dyn_ref::<Array>() {
                array.set(index as u32, scalar_to_js(value));
            }
        }

        fn resize(&mut self, len: usize) {
            if let Some(array) = self.dyn_ref::<Array>() {
                array.set_length(len as u32);
            }
        }
    }
}

#[cfg(feature = "wasm")]
pub(crate) use wasm::scalar_from_js;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_container_grows_on_write() {
        let mut host = vec![HostScalar::Bool(true)];
        host.write(2, HostScalar::Number(4.0));
        assert_eq!(
            host,
            vec![
                HostScalar::Bool(true),
                HostScalar::Other,
                HostScalar::Number(4.0)
            ]
        );
    }

    #[test]
    fn none_is_absent() {
        let mut host: Option<Vec<HostScalar>> = None;
        assert!(!host.is_array_like());
        host.write(0, HostScalar::Bool(true));
        assert_eq!(host.read(0), HostScalar::Other);
    }

    #[cfg(feature = "json")]
    #[test]
    fn json_non_arrays_are_absent() {
        use serde_json::json;

        for value in [json!(null), json!(true), json!(3), json!("[1]"), json!({"0": 1})] {
            assert!(!value.is_array_like(), "{value} should not be array-like");
            assert_eq!(value.length(), 0);
        }
        assert!(json!([]).is_array_like());
    }

    #[cfg(feature = "json")]
    #[test]
    fn json_write_normalizes_numbers() {
        use serde_json::json;

        let mut value = json!([0, 0, 0]);
        value.write(0, HostScalar::Number(8.0));
        value.write(1, HostScalar::Number(0.5));
        value.write(2, HostScalar::Number(f64::NAN));
        assert_eq!(value, json!([8, 0.5, null]));
    }
}
