//! `JsValue` as the host container, run with `wasm-pack test --node`.

#![cfg(all(target_arch = "wasm32", feature = "wasm"))]

use dear_imgui_js_marshal::reflect::{FieldKind, FieldValue};
use dear_imgui_js_marshal::{
    BoolSlot, FloatVecSlot, HostContainer, HostScalar, IntSlot, SelectionBuffer,
};
use js_sys::{Array, Float32Array, Object, Reflect};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

fn js_array(values: &[JsValue]) -> (Array, JsValue) {
    let array = Array::new();
    for value in values {
        array.push(value);
    }
    let host = JsValue::from(array.clone());
    (array, host)
}

fn num(n: f64) -> JsValue {
    JsValue::from_f64(n)
}

#[wasm_bindgen_test]
fn native_write_reaches_the_js_array() {
    let (array, mut host) = js_array(&[JsValue::FALSE]);
    BoolSlot::scope(&mut host, |ptr| unsafe { *ptr = true });
    assert_eq!(array.length(), 1);
    assert_eq!(array.get(0), JsValue::TRUE);
}

#[wasm_bindgen_test]
fn non_arrays_pass_null_and_stay_untouched() {
    let typed = Float32Array::new_with_length(2);
    let hosts = [
        JsValue::NULL,
        JsValue::UNDEFINED,
        num(1.0),
        JsValue::from(Object::new()),
        JsValue::from(typed.clone()),
    ];
    for mut host in hosts {
        let null = FloatVecSlot::<_, 2>::scope(&mut host, |ptr| ptr.is_null());
        assert!(null, "{host:?} should pass null");
        assert!(!host.is_array_like());
    }
    assert_eq!(typed.get_index(0), 0.0);
    assert_eq!(typed.get_index(1), 0.0);
}

#[wasm_bindgen_test]
fn tail_survives_and_short_arrays_grow() {
    let tail = JsValue::from_str("tail");
    let (array, mut host) = js_array(&[num(1.0), num(2.0), tail.clone()]);
    IntSlot::scope(&mut host, |ptr| unsafe { *ptr += 5 });
    assert_eq!(array.length(), 3);
    assert_eq!(array.get(0).as_f64(), Some(6.0));
    assert_eq!(array.get(2), tail);

    let (short, mut host) = js_array(&[num(0.5)]);
    FloatVecSlot::<_, 3>::scope(&mut host, |ptr| unsafe { *ptr.add(2) = 4.0 });
    assert_eq!(short.length(), 3);
    assert_eq!(short.get(0).as_f64(), Some(0.5));
    assert_eq!(short.get(1).as_f64(), Some(0.0));
    assert_eq!(short.get(2).as_f64(), Some(4.0));
}

#[wasm_bindgen_test]
fn selection_buffer_resizes_the_js_array() {
    let (array, mut host) = js_array(&[num(9.0), num(9.0), num(9.0), num(9.0)]);
    {
        let mut ids = SelectionBuffer::<_, i32>::new(&mut host, 2);
        let ptr = ids.as_mut_ptr();
        unsafe {
            *ptr = 3;
            *ptr.add(1) = 7;
        }
    }
    assert_eq!(array.length(), 2);
    assert_eq!(array.get(0).as_f64(), Some(3.0));
    assert_eq!(array.get(1).as_f64(), Some(7.0));

    assert_eq!(host.read(5), HostScalar::Other);
}

#[wasm_bindgen_test]
fn field_values_from_objects_and_arrays() {
    let point = Object::new();
    Reflect::set(&point, &"x".into(), &num(3.0)).unwrap();
    Reflect::set(&point, &"y".into(), &num(4.5)).unwrap();
    assert_eq!(
        FieldValue::from_js(FieldKind::Vec2, &point.into()),
        Some(FieldValue::Vec2([3.0, 4.5]))
    );

    let (_, pair) = js_array(&[num(1.0), num(2.0)]);
    assert_eq!(
        FieldValue::from_js(FieldKind::Vec2, &pair),
        Some(FieldValue::Vec2([1.0, 2.0]))
    );

    let partial = Object::new();
    Reflect::set(&partial, &"x".into(), &num(1.0)).unwrap();
    assert_eq!(FieldValue::from_js(FieldKind::Vec2, &partial.into()), None);

    assert_eq!(
        FieldValue::from_js(FieldKind::Bool, &num(1.0)),
        Some(FieldValue::Bool(true))
    );
    assert_eq!(FieldValue::from_js(FieldKind::F32, &JsValue::UNDEFINED), None);
}

#[wasm_bindgen_test]
fn field_values_to_js() {
    let color = FieldValue::Vec4([0.25, 0.5, 0.75, 1.0]).to_js();
    for (name, want) in [("x", 0.25), ("y", 0.5), ("z", 0.75), ("w", 1.0)] {
        let got = Reflect::get(&color, &name.into()).unwrap();
        assert_eq!(got.as_f64(), Some(want), "component {name}");
    }

    assert_eq!(FieldValue::Bool(true).to_js(), JsValue::TRUE);
    assert_eq!(FieldValue::I32(-3).to_js().as_f64(), Some(-3.0));
}
