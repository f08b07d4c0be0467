//! Declarative struct field access
//!
//! Native structs such as `ImGuiStyle` or `ImNodesStyle` expose dozens of
//! plain fields. Instead of one getter/setter pair per field, a binding crate
//! declares a table with [`field_table!`](crate::field_table) and serves every
//! field through one [`StructBinder`].
//!
//! ```
//! use dear_imgui_js_marshal::field_table;
//! use dear_imgui_js_marshal::reflect::{FieldValue, StructBinder};
//!
//! #[repr(C)]
//! #[allow(non_snake_case)]
//! #[derive(Default)]
//! struct Metrics {
//!     Enabled: bool,
//!     Scale: f32,
//!     Padding: [f32; 2],
//! }
//!
//! field_table! {
//!     fn metrics_fields() -> Metrics {
//!         Enabled: Bool,
//!         Scale: F32,
//!         Padding: Vec2,
//!     }
//! }
//!
//! let binder = StructBinder::new("Metrics", metrics_fields());
//! let mut metrics = Metrics::default();
//! unsafe {
//!     binder.set(&mut metrics, "Scale", FieldValue::F32(2.0)).unwrap();
//!     assert_eq!(binder.get(&metrics, "Scale"), Ok(FieldValue::F32(2.0)));
//! }
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::mem::size_of;

use crate::{HostScalar, ReflectError};

#[cfg(feature = "tracing")]
use tracing::warn;

/// Field type as seen from the host
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum FieldKind {
    Bool,
    I32,
    U32,
    F32,
    F64,
    /// `ImVec2`-compatible: two consecutive `f32`
    Vec2,
    /// `ImVec4`-compatible: four consecutive `f32`
    Vec4,
}

impl FieldKind {
    /// Native size in bytes.
    pub const fn size(self) -> usize {
        match self {
            FieldKind::Bool => size_of::<bool>(),
            FieldKind::I32 => size_of::<i32>(),
            FieldKind::U32 => size_of::<u32>(),
            FieldKind::F32 => size_of::<f32>(),
            FieldKind::F64 => size_of::<f64>(),
            FieldKind::Vec2 => size_of::<[f32; 2]>(),
            FieldKind::Vec4 => size_of::<[f32; 4]>(),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FieldKind::Bool => "bool",
            FieldKind::I32 => "int",
            FieldKind::U32 => "unsigned int",
            FieldKind::F32 => "float",
            FieldKind::F64 => "double",
            FieldKind::Vec2 => "ImVec2",
            FieldKind::Vec4 => "ImVec4",
        })
    }
}

/// A field value copied out of, or into, a native struct
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum FieldValue {
    Bool(bool),
    I32(i32),
    U32(u32),
    F32(f32),
    F64(f64),
    Vec2([f32; 2]),
    Vec4([f32; 4]),
}

impl FieldValue {
    /// The kind this value would be stored as.
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Bool(_) => FieldKind::Bool,
            FieldValue::I32(_) => FieldKind::I32,
            FieldValue::U32(_) => FieldKind::U32,
            FieldValue::F32(_) => FieldKind::F32,
            FieldValue::F64(_) => FieldKind::F64,
            FieldValue::Vec2(_) => FieldKind::Vec2,
            FieldValue::Vec4(_) => FieldKind::Vec4,
        }
    }

    /// Converts a host primitive into a scalar kind, with the same rules as
    /// out-parameter elements. Vector kinds are not scalars and yield `None`.
    pub fn from_scalar(kind: FieldKind, scalar: HostScalar) -> Option<FieldValue> {
        use crate::Element;

        if scalar == HostScalar::Other {
            return None;
        }
        let number = scalar.as_number();
        match kind {
            FieldKind::Bool => Some(FieldValue::Bool(bool::from_host(scalar))),
            FieldKind::I32 => Some(FieldValue::I32(i32::from_host(scalar))),
            FieldKind::U32 => number.map(|n| FieldValue::U32(n as u32)),
            FieldKind::F32 => Some(FieldValue::F32(f32::from_host(scalar))),
            FieldKind::F64 => Some(FieldValue::F64(f64::from_host(scalar))),
            FieldKind::Vec2 | FieldKind::Vec4 => None,
        }
    }

    /// Builds a vector kind from per-component host primitives (`x`, `y`,
    /// `z`, `w` in order).
    fn from_components(kind: FieldKind, component: impl Fn(usize) -> HostScalar) -> Option<Self> {
        let read = |index: usize| component(index).as_number().map(|n| n as f32);
        match kind {
            FieldKind::Vec2 => Some(FieldValue::Vec2([read(0)?, read(1)?])),
            FieldKind::Vec4 => Some(FieldValue::Vec4([read(0)?, read(1)?, read(2)?, read(3)?])),
            scalar => FieldValue::from_scalar(scalar, component(0)),
        }
    }
}

const COMPONENTS: [&str; 4] = ["x", "y", "z", "w"];

#[cfg(feature = "json")]
impl FieldValue {
    /// Vectors become `{x, y[, z, w]}` objects.
    pub fn to_json(self) -> serde_json::Value {
        use serde_json::{Map, Value};

        fn vector(components: &[f32]) -> Value {
            let map: Map<String, Value> = COMPONENTS
                .iter()
                .zip(components)
                .map(|(name, value)| ((*name).to_owned(), Value::from(f64::from(*value))))
                .collect();
            Value::Object(map)
        }

        match self {
            FieldValue::Bool(b) => Value::Bool(b),
            FieldValue::I32(v) => Value::from(v),
            FieldValue::U32(v) => Value::from(v),
            FieldValue::F32(v) => Value::from(f64::from(v)),
            FieldValue::F64(v) => Value::from(v),
            FieldValue::Vec2(v) => vector(&v),
            FieldValue::Vec4(v) => vector(&v),
        }
    }

    /// Accepts `{x, y, ...}` objects or `[x, y, ...]` arrays for vectors.
    pub fn from_json(kind: FieldKind, value: &serde_json::Value) -> Option<Self> {
        use crate::host::scalar_from_json;
        use serde_json::Value;

        match value {
            Value::Object(map) => FieldValue::from_components(kind, |index| {
                map.get(COMPONENTS[index])
                    .map_or(HostScalar::Other, scalar_from_json)
            }),
            Value::Array(items) => FieldValue::from_components(kind, |index| {
                items.get(index).map_or(HostScalar::Other, scalar_from_json)
            }),
            scalar => FieldValue::from_scalar(kind, scalar_from_json(scalar)),
        }
    }
}

#[cfg(feature = "wasm")]
impl FieldValue {
    /// Vectors become `{x, y[, z, w]}` objects.
    pub fn to_js(self) -> wasm_bindgen::JsValue {
        use js_sys::{Object, Reflect};
        use wasm_bindgen::JsValue;

        fn vector(components: &[f32]) -> JsValue {
            let object = Object::new();
            for (name, value) in COMPONENTS.iter().zip(components) {
                // Setting a property on a fresh plain object cannot throw.
                let _ = Reflect::set(
                    &object,
                    &JsValue::from_str(name),
                    &JsValue::from_f64(f64::from(*value)),
                );
            }
            object.into()
        }

        match self {
            FieldValue::Bool(b) => JsValue::from_bool(b),
            FieldValue::I32(v) => JsValue::from_f64(f64::from(v)),
            FieldValue::U32(v) => JsValue::from_f64(f64::from(v)),
            FieldValue::F32(v) => JsValue::from_f64(f64::from(v)),
            FieldValue::F64(v) => JsValue::from_f64(v),
            FieldValue::Vec2(v) => vector(&v),
            FieldValue::Vec4(v) => vector(&v),
        }
    }

    /// Accepts `{x, y, ...}` objects or `[x, y, ...]` arrays for vectors.
    pub fn from_js(kind: FieldKind, value: &wasm_bindgen::JsValue) -> Option<Self> {
        use crate::host::scalar_from_js;
        use crate::HostContainer;
        use js_sys::Reflect;
        use wasm_bindgen::JsValue;

        if value.is_array_like() {
            FieldValue::from_components(kind, |index| value.read(index))
        } else if value.is_object() {
            FieldValue::from_components(kind, |index| {
                Reflect::get(value, &JsValue::from_str(COMPONENTS[index]))
                    .map_or(HostScalar::Other, |component| scalar_from_js(&component))
            })
        } else {
            FieldValue::from_scalar(kind, scalar_from_js(value))
        }
    }
}

/// One field of `S`: name, byte offset and kind.
pub struct FieldDescriptor<S> {
    name: &'static str,
    offset: usize,
    kind: FieldKind,
    _marker: PhantomData<fn() -> S>,
}

impl<S> FieldDescriptor<S> {
    /// Used by [`field_table!`](crate::field_table); `size` is the field's
    /// real size and must match `kind`.
    ///
    /// # Panics
    /// Panics when the declared kind does not fit the field.
    #[doc(hidden)]
    pub fn new(name: &'static str, offset: usize, kind: FieldKind, size: usize) -> Self {
        assert_eq!(
            size,
            kind.size(),
            "field `{name}` is {size} bytes but was declared as {kind}"
        );
        Self {
            name,
            offset,
            kind,
            _marker: PhantomData,
        }
    }

    /// Field name as spelled in the C struct.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Byte offset from the start of `S`.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// # Safety
    /// `base` must point to a live, initialised `S`.
    pub unsafe fn read(&self, base: *const S) -> FieldValue {
        unsafe {
            let at = base.cast::<u8>().add(self.offset);
            match self.kind {
                FieldKind::Bool => FieldValue::Bool(at.cast::<bool>().read()),
                FieldKind::I32 => FieldValue::I32(at.cast::<i32>().read()),
                FieldKind::U32 => FieldValue::U32(at.cast::<u32>().read()),
                FieldKind::F32 => FieldValue::F32(at.cast::<f32>().read()),
                FieldKind::F64 => FieldValue::F64(at.cast::<f64>().read()),
                FieldKind::Vec2 => FieldValue::Vec2(at.cast::<[f32; 2]>().read()),
                FieldKind::Vec4 => FieldValue::Vec4(at.cast::<[f32; 4]>().read()),
            }
        }
    }

    /// # Safety
    /// `base` must point to a live `S` that may be written.
    pub unsafe fn write(&self, base: *mut S, value: FieldValue) -> Result<(), ReflectError> {
        if value.kind() != self.kind {
            return Err(ReflectError::KindMismatch {
                field: self.name,
                expected: self.kind,
                found: value.kind(),
            });
        }
        unsafe {
            let at = base.cast::<u8>().add(self.offset);
            match value {
                FieldValue::Bool(v) => at.cast::<bool>().write(v),
                FieldValue::I32(v) => at.cast::<i32>().write(v),
                FieldValue::U32(v) => at.cast::<u32>().write(v),
                FieldValue::F32(v) => at.cast::<f32>().write(v),
                FieldValue::F64(v) => at.cast::<f64>().write(v),
                FieldValue::Vec2(v) => at.cast::<[f32; 2]>().write(v),
                FieldValue::Vec4(v) => at.cast::<[f32; 4]>().write(v),
            }
        }
        Ok(())
    }
}

impl<S> fmt::Debug for FieldDescriptor<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name)
            .field("offset", &self.offset)
            .field("kind", &self.kind)
            .finish()
    }
}

/// Generic getter/setter over a field table.
pub struct StructBinder<S: 'static> {
    struct_name: &'static str,
    fields: &'static [FieldDescriptor<S>],
}

impl<S: 'static> StructBinder<S> {
    /// Wraps a static field table, usually built with [`field_table!`](crate::field_table).
    pub const fn new(struct_name: &'static str, fields: &'static [FieldDescriptor<S>]) -> Self {
        Self {
            struct_name,
            fields,
        }
    }

    pub fn struct_name(&self) -> &'static str {
        self.struct_name
    }

    pub fn fields(&self) -> &'static [FieldDescriptor<S>] {
        self.fields
    }

    /// Field names in table order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(FieldDescriptor::name)
    }

    /// Looks a field up by name.
    pub fn descriptor(&self, name: &str) -> Result<&'static FieldDescriptor<S>, ReflectError> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .ok_or_else(|| {
                #[cfg(feature = "tracing")]
                warn!(struct_name = self.struct_name, field = name, "unknown field");
                ReflectError::UnknownField {
                    struct_name: self.struct_name,
                    field: name.to_owned(),
                }
            })
    }

    fn non_null<P>(&self, base: *const P) -> Result<(), ReflectError> {
        if base.is_null() {
            Err(ReflectError::NullStruct {
                struct_name: self.struct_name,
            })
        } else {
            Ok(())
        }
    }

    /// # Safety
    /// `base` must be null or point to a live `S`.
    pub unsafe fn get(&self, base: *const S, name: &str) -> Result<FieldValue, ReflectError> {
        self.non_null(base)?;
        let field = self.descriptor(name)?;
        Ok(unsafe { field.read(base) })
    }

    /// # Safety
    /// `base` must be null or point to a live, writable `S`.
    pub unsafe fn set(
        &self,
        base: *mut S,
        name: &str,
        value: FieldValue,
    ) -> Result<(), ReflectError> {
        self.non_null(base)?;
        let field = self.descriptor(name)?;
        unsafe { field.write(base, value) }
    }

    /// # Safety
    /// See [`StructBinder::get`].
    #[cfg(feature = "json")]
    pub unsafe fn get_json(
        &self,
        base: *const S,
        name: &str,
    ) -> Result<serde_json::Value, ReflectError> {
        unsafe { self.get(base, name) }.map(FieldValue::to_json)
    }

    /// Converts `value` to the field's kind before writing.
    ///
    /// # Safety
    /// See [`StructBinder::set`].
    #[cfg(feature = "json")]
    pub unsafe fn set_json(
        &self,
        base: *mut S,
        name: &str,
        value: &serde_json::Value,
    ) -> Result<(), ReflectError> {
        self.non_null(base)?;
        let field = self.descriptor(name)?;
        let value = FieldValue::from_json(field.kind, value).ok_or(
            ReflectError::InvalidHostValue {
                field: field.name,
                expected: field.kind,
            },
        )?;
        unsafe { field.write(base, value) }
    }

    /// Every field as one JSON object.
    ///
    /// # Safety
    /// See [`StructBinder::get`].
    #[cfg(feature = "json")]
    pub unsafe fn snapshot_json(&self, base: *const S) -> Result<serde_json::Value, ReflectError> {
        self.non_null(base)?;
        let map = self
            .fields
            .iter()
            .map(|field| (field.name.to_owned(), unsafe { field.read(base) }.to_json()))
            .collect();
        Ok(serde_json::Value::Object(map))
    }

    /// # Safety
    /// See [`StructBinder::get`].
    #[cfg(feature = "wasm")]
    pub unsafe fn get_js(
        &self,
        base: *const S,
        name: &str,
    ) -> Result<wasm_bindgen::JsValue, ReflectError> {
        unsafe { self.get(base, name) }.map(FieldValue::to_js)
    }

    /// Converts `value` to the field's kind before writing.
    ///
    /// # Safety
    /// See [`StructBinder::set`].
    #[cfg(feature = "wasm")]
    pub unsafe fn set_js(
        &self,
        base: *mut S,
        name: &str,
        value: &wasm_bindgen::JsValue,
    ) -> Result<(), ReflectError> {
        self.non_null(base)?;
        let field = self.descriptor(name)?;
        let value = FieldValue::from_js(field.kind, value).ok_or(
            ReflectError::InvalidHostValue {
                field: field.name,
                expected: field.kind,
            },
        )?;
        unsafe { field.write(base, value) }
    }
}

impl<S: 'static> fmt::Debug for StructBinder<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StructBinder")
            .field("struct_name", &self.struct_name)
            .field("fields", &self.fields.len())
            .finish()
    }
}

/// Declares a lazily built field table for a `#[repr(C)]` struct.
///
/// Each entry is `FieldName: Kind` where `Kind` is a [`FieldKind`] variant.
/// Offsets and sizes come from `memoffset::span_of!`; a kind whose size does
/// not match the field panics the first time the table is built.
#[macro_export]
macro_rules! field_table {
    ($vis:vis fn $table:ident() -> $S:path { $($field:ident : $kind:ident),* $(,)? }) => {
        #[allow(non_snake_case)]
        $vis fn $table() -> &'static [$crate::reflect::FieldDescriptor<$S>] {
            static TABLE: ::std::sync::OnceLock<::std::vec::Vec<$crate::reflect::FieldDescriptor<$S>>> =
                ::std::sync::OnceLock::new();
            TABLE.get_or_init(|| {
                ::std::vec![
                    $({
                        let span = $crate::__memoffset::span_of!($S, $field);
                        $crate::reflect::FieldDescriptor::new(
                            ::core::stringify!($field),
                            span.start,
                            $crate::reflect::FieldKind::$kind,
                            span.end - span.start,
                        )
                    }),*
                ]
            })
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[repr(C)]
    #[derive(Default)]
    #[allow(non_snake_case)]
    struct Sample {
        Flag: bool,
        Count: i32,
        Mask: u32,
        Scale: f32,
        Time: f64,
        Size: [f32; 2],
        Tint: [f32; 4],
    }

    crate::field_table! {
        fn sample_fields() -> Sample {
            Flag: Bool,
            Count: I32,
            Mask: U32,
            Scale: F32,
            Time: F64,
            Size: Vec2,
            Tint: Vec4,
        }
    }

    #[repr(C)]
    #[allow(non_snake_case)]
    struct Wrong {
        Value: f64,
    }

    crate::field_table! {
        fn wrong_fields() -> Wrong {
            Value: F32,
        }
    }

    fn binder() -> StructBinder<Sample> {
        StructBinder::new("Sample", sample_fields())
    }

    #[test]
    fn table_lists_fields_in_order() {
        let names: Vec<_> = binder().names().collect();
        assert_eq!(names, ["Flag", "Count", "Mask", "Scale", "Time", "Size", "Tint"]);
    }

    #[test]
    fn set_then_get_each_kind() {
        let binder = binder();
        let mut sample = Sample::default();
        let base: *mut Sample = &mut sample;
        let values = [
            ("Flag", FieldValue::Bool(true)),
            ("Count", FieldValue::I32(-4)),
            ("Mask", FieldValue::U32(0xff)),
            ("Scale", FieldValue::F32(1.5)),
            ("Time", FieldValue::F64(0.25)),
            ("Size", FieldValue::Vec2([3.0, 4.0])),
            ("Tint", FieldValue::Vec4([0.1, 0.2, 0.3, 0.4])),
        ];
        for (name, value) in values {
            unsafe {
                binder.set(base, name, value).unwrap();
                assert_eq!(binder.get(base, name), Ok(value));
            }
        }
        assert_eq!(sample.Size, [3.0, 4.0]);
        assert!(sample.Flag);
    }

    #[test]
    fn errors_are_reported() {
        let binder = binder();
        let mut sample = Sample::default();
        unsafe {
            assert!(matches!(
                binder.get(&sample, "Missing"),
                Err(ReflectError::UnknownField { .. })
            ));
            assert_eq!(
                binder.set(&mut sample, "Scale", FieldValue::Bool(true)),
                Err(ReflectError::KindMismatch {
                    field: "Scale",
                    expected: FieldKind::F32,
                    found: FieldKind::Bool,
                })
            );
            assert_eq!(
                binder.get(std::ptr::null(), "Scale"),
                Err(ReflectError::NullStruct {
                    struct_name: "Sample"
                })
            );
        }
    }

    #[test]
    #[should_panic(expected = "field `Value` is 8 bytes but was declared as float")]
    fn size_mismatch_panics_on_first_use() {
        let _ = wrong_fields();
    }

    #[cfg(feature = "json")]
    #[test]
    fn json_conversion_uses_field_kind() {
        use serde_json::json;

        let binder = binder();
        let mut sample = Sample::default();
        unsafe {
            binder.set_json(&mut sample, "Count", &json!(7.9)).unwrap();
            binder
                .set_json(&mut sample, "Size", &json!({"x": 1, "y": 2}))
                .unwrap();
            binder.set_json(&mut sample, "Tint", &json!([1, 0, 0, 1])).unwrap();
            assert_eq!(binder.get_json(&sample, "Size"), Ok(json!({"x": 1.0, "y": 2.0})));
            assert!(matches!(
                binder.set_json(&mut sample, "Scale", &json!("wide")),
                Err(ReflectError::InvalidHostValue { field: "Scale", .. })
            ));
        }
        assert_eq!(sample.Count, 7);
        assert_eq!(sample.Tint, [1.0, 0.0, 0.0, 1.0]);
    }
}
