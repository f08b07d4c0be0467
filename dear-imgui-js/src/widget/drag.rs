use dear_imgui_js_marshal::{
    FloatSlot, FloatVecSlot, HostContainer, IntSlot, IntVecSlot, ScratchBuffer,
};

use super::with_label_format;
use crate::sys;

macro_rules! drag_family {
    ($slot:ident, $elem:ty; $($name:ident => $native:ident, $n:literal;)*) => {$(
        #[doc = concat!("`", stringify!($native), "`; reads and writes the first ", stringify!($n), " element(s) of `v`.")]
        pub fn $name<H: HostContainer + ?Sized>(
            label: &str,
            v: &mut H,
            v_speed: f32,
            v_min: $elem,
            v_max: $elem,
            format: Option<&str>,
            flags: i32,
        ) -> bool {
            with_label_format(label, format, |label, format| {
                let mut v = $slot::<_, $n>::new(v);
                unsafe { sys::$native(label, v.as_mut_ptr(), v_speed, v_min, v_max, format, flags) }
            })
        }
    )*};
}

drag_family! { FloatVecSlot, f32;
    drag_float => igDragFloat, 1;
    drag_float2 => igDragFloat2, 2;
    drag_float3 => igDragFloat3, 3;
    drag_float4 => igDragFloat4, 4;
}

drag_family! { IntVecSlot, i32;
    drag_int => igDragInt, 1;
    drag_int2 => igDragInt2, 2;
    drag_int3 => igDragInt3, 3;
    drag_int4 => igDragInt4, 4;
}

/// Two independent containers for the lower and upper bound.
#[allow(clippy::too_many_arguments)]
pub fn drag_float_range2<H1, H2>(
    label: &str,
    v_current_min: &mut H1,
    v_current_max: &mut H2,
    v_speed: f32,
    v_min: f32,
    v_max: f32,
    format: Option<&str>,
    format_max: Option<&str>,
    flags: i32,
) -> bool
where
    H1: HostContainer + ?Sized,
    H2: HostContainer + ?Sized,
{
    let mut scratch = ScratchBuffer::new();
    let label = scratch.push(label);
    let format = scratch.push_opt(format);
    let format_max = scratch.push_opt(format_max);
    let mut current_min = FloatSlot::new(v_current_min);
    let mut current_max = FloatSlot::new(v_current_max);
    unsafe {
        sys::igDragFloatRange2(
            scratch.ptr(label),
            current_min.as_mut_ptr(),
            current_max.as_mut_ptr(),
            v_speed,
            v_min,
            v_max,
            scratch.ptr(format),
            scratch.ptr(format_max),
            flags,
        )
    }
}

#[allow(clippy::too_many_arguments)]
pub fn drag_int_range2<H1, H2>(
    label: &str,
    v_current_min: &mut H1,
    v_current_max: &mut H2,
    v_speed: f32,
    v_min: i32,
    v_max: i32,
    format: Option<&str>,
    format_max: Option<&str>,
    flags: i32,
) -> bool
where
    H1: HostContainer + ?Sized,
    H2: HostContainer + ?Sized,
{
    let mut scratch = ScratchBuffer::new();
    let label = scratch.push(label);
    let format = scratch.push_opt(format);
    let format_max = scratch.push_opt(format_max);
    let mut current_min = IntSlot::new(v_current_min);
    let mut current_max = IntSlot::new(v_current_max);
    unsafe {
        sys::igDragIntRange2(
            scratch.ptr(label),
            current_min.as_mut_ptr(),
            current_max.as_mut_ptr(),
            v_speed,
            v_min,
            v_max,
            scratch.ptr(format),
            scratch.ptr(format_max),
            flags,
        )
    }
}
