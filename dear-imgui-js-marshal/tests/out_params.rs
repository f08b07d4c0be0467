use approx::assert_relative_eq;
use dear_imgui_js_marshal::{
    BoolSlot, DoubleSlot, FloatVecSlot, HostContainer, HostScalar, IntSlot, IntVecSlot, Slot,
};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use std::cell::Cell;

// Synthetic natives standing in for cimgui entry points.

unsafe extern "C" fn set_true(v: *mut bool) -> bool {
    match unsafe { v.as_mut() } {
        Some(v) => {
            *v = true;
            true
        }
        None => false,
    }
}

unsafe extern "C" fn add_tenth(v: *mut f32) {
    for i in 0..4 {
        unsafe { *v.add(i) += 0.1 };
    }
}

unsafe extern "C" fn add_five(v: *mut i32) -> i32 {
    let old = unsafe { *v };
    unsafe { *v += 5 };
    old
}

unsafe extern "C" fn toggle_second(a: *mut bool, b: *mut bool) {
    let _ = a;
    unsafe { *b = !*b };
}

thread_local! {
    static SEEN_NULL: Cell<bool> = const { Cell::new(false) };
}

unsafe extern "C" fn record_null(v: *mut f64) {
    SEEN_NULL.with(|seen| seen.set(v.is_null()));
}

#[test]
fn seeding_round_trips_without_native_writes() {
    let mut host = json!([0.5, 1.5, 2.5]);
    {
        let slot = FloatVecSlot::<_, 3>::new(&mut host);
        assert_eq!(slot.values(), &[0.5, 1.5, 2.5]);
    }
    assert_eq!(host, json!([0.5, 1.5, 2.5]));

    let mut flags = json!([true, false]);
    drop(BoolSlot::new(&mut flags));
    assert_eq!(flags, json!([true, false]));
}

#[test]
fn native_write_is_visible_to_host() {
    let mut v = json!([false]);
    let pressed = BoolSlot::scope(&mut v, |ptr| unsafe { set_true(ptr) });
    assert!(pressed);
    assert_eq!(v, json!([true]));
}

#[test]
fn four_float_arity_is_independent() {
    let mut col = json!([1.0, 1.1, 1.2, 1.3]);
    FloatVecSlot::<_, 4>::scope(&mut col, |ptr| unsafe { add_tenth(ptr) });

    let expected = [1.1, 1.2, 1.3, 1.4];
    for (index, want) in expected.iter().enumerate() {
        let got = col[index].as_f64().unwrap();
        assert_relative_eq!(got, *want, epsilon = 1e-6);
    }
}

#[test]
fn absent_containers_degrade_to_null() {
    for mut host in [Value::Null, json!(1.0), json!("[1.0]"), json!({"0": 1.0})] {
        let before = host.clone();
        SEEN_NULL.with(|seen| seen.set(false));
        DoubleSlot::scope(&mut host, |ptr| unsafe { record_null(ptr) });
        assert!(SEEN_NULL.with(Cell::get), "{before} should pass null");
        assert_eq!(host, before);
    }

    let mut missing: Option<Vec<HostScalar>> = None;
    let pressed = BoolSlot::scope(&mut missing, |ptr| unsafe { set_true(ptr) });
    assert!(!pressed);
    assert!(missing.is_none());
}

#[test]
fn explicit_absent_slot_is_null() {
    let mut slot = Slot::<Value, f64, 1>::absent();
    unsafe { record_null(slot.as_mut_ptr()) };
    assert!(SEEN_NULL.with(Cell::get));
    assert!(!slot.is_valid());
}

#[test]
fn calls_do_not_share_storage() {
    let mut first = json!([1]);
    let mut second = json!([100]);
    IntSlot::scope(&mut first, |ptr| unsafe { add_five(ptr) });
    let seen = IntSlot::scope(&mut second, |ptr| unsafe { add_five(ptr) });

    assert_eq!(seen, 100);
    assert_eq!(first, json!([6]));
    assert_eq!(second, json!([105]));
}

#[test]
fn two_arguments_are_independent() {
    let mut a = json!([true]);
    let mut b = json!([false]);
    {
        let mut slot_a = BoolSlot::new(&mut a);
        let mut slot_b = BoolSlot::new(&mut b);
        unsafe { toggle_second(slot_a.as_mut_ptr(), slot_b.as_mut_ptr()) };
    }
    assert_eq!(a, json!([true]));
    assert_eq!(b, json!([true]));
}

#[test]
fn increment_returns_old_value() {
    let mut v = json!([3]);
    let old = IntSlot::scope(&mut v, |ptr| unsafe { add_five(ptr) });
    assert_eq!(old, 3);
    assert_eq!(v, json!([8]));
}

#[test]
fn longer_containers_keep_their_tail() {
    let mut v = json!([1, 2, "tail", {"keep": true}]);
    IntVecSlot::<_, 2>::scope(&mut v, |ptr| unsafe {
        *ptr = 10;
        *ptr.add(1) = 20;
    });
    assert_eq!(v, json!([10, 20, "tail", {"keep": true}]));
}

#[test]
fn vec_host_behaves_like_json() {
    let mut host = vec![HostScalar::Number(3.0)];
    let old = IntSlot::scope(&mut host, |ptr| unsafe { add_five(ptr) });
    assert_eq!(old, 3);
    assert_eq!(host.read(0), HostScalar::Number(8.0));
}

#[test]
fn untouched_storage_still_normalizes_elements() {
    let mut tenth = json!([0.1]);
    drop(Slot::<Value, f32, 1>::new(&mut tenth));
    assert_eq!(tenth, json!([f64::from(0.1f32)]));
    assert_ne!(tenth, json!([0.1]));

    let mut one = json!([1]);
    drop(BoolSlot::new(&mut one));
    assert_eq!(one, json!([true]));

    let mut fraction = json!([3.7]);
    drop(IntSlot::new(&mut fraction));
    assert_eq!(fraction, json!([3]));
}

#[test]
fn bool_slots_are_scalars() {
    assert_eq!(<bool as dear_imgui_js_marshal::Element>::MAX_ARITY, 1);
    assert_eq!(<f32 as dear_imgui_js_marshal::Element>::MAX_ARITY, 4);

    let mut flag = json!([0, "tail"]);
    let pressed = BoolSlot::scope(&mut flag, |ptr| unsafe { set_true(ptr) });
    assert!(pressed);
    assert_eq!(flag, json!([true, "tail"]));
}
