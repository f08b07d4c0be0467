use dear_imgui_js_marshal::{
    DoubleSlot, FloatSlot, FloatVecSlot, HostContainer, IntSlot, IntVecSlot, with_cstr,
};

use super::with_label_format;
use crate::sys;

/// `step`/`step_fast` of 0 hide the +/- buttons.
pub fn input_float<H: HostContainer + ?Sized>(
    label: &str,
    v: &mut H,
    step: f32,
    step_fast: f32,
    format: Option<&str>,
    flags: i32,
) -> bool {
    with_label_format(label, format, |label, format| {
        let mut v = FloatSlot::new(v);
        unsafe { sys::igInputFloat(label, v.as_mut_ptr(), step, step_fast, format, flags) }
    })
}

macro_rules! input_float_n {
    ($($name:ident => $native:ident, $n:literal;)*) => {$(
        pub fn $name<H: HostContainer + ?Sized>(
            label: &str,
            v: &mut H,
            format: Option<&str>,
            flags: i32,
        ) -> bool {
            with_label_format(label, format, |label, format| {
                let mut v = FloatVecSlot::<_, $n>::new(v);
                unsafe { sys::$native(label, v.as_mut_ptr(), format, flags) }
            })
        }
    )*};
}

input_float_n! {
    input_float2 => igInputFloat2, 2;
    input_float3 => igInputFloat3, 3;
    input_float4 => igInputFloat4, 4;
}

/// `int*` input with +/- buttons stepping by `step` (`step_fast` with Ctrl).
pub fn input_int<H: HostContainer + ?Sized>(
    label: &str,
    v: &mut H,
    step: i32,
    step_fast: i32,
    flags: i32,
) -> bool {
    with_cstr(label, |label| {
        let mut v = IntSlot::new(v);
        unsafe { sys::igInputInt(label, v.as_mut_ptr(), step, step_fast, flags) }
    })
}

macro_rules! input_int_n {
    ($($name:ident => $native:ident, $n:literal;)*) => {$(
        pub fn $name<H: HostContainer + ?Sized>(label: &str, v: &mut H, flags: i32) -> bool {
            with_cstr(label, |label| {
                let mut v = IntVecSlot::<_, $n>::new(v);
                unsafe { sys::$native(label, v.as_mut_ptr(), flags) }
            })
        }
    )*};
}

input_int_n! {
    input_int2 => igInputInt2, 2;
    input_int3 => igInputInt3, 3;
    input_int4 => igInputInt4, 4;
}

/// `double*` input; a `format` of `None` uses the native default for doubles.
pub fn input_double<H: HostContainer + ?Sized>(
    label: &str,
    v: &mut H,
    step: f64,
    step_fast: f64,
    format: Option<&str>,
    flags: i32,
) -> bool {
    with_label_format(label, format, |label, format| {
        let mut v = DoubleSlot::new(v);
        unsafe { sys::igInputDouble(label, v.as_mut_ptr(), step, step_fast, format, flags) }
    })
}
