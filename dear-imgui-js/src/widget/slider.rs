use dear_imgui_js_marshal::{FloatVecSlot, HostContainer, IntVecSlot};

use super::with_label_format;
use crate::sys;

macro_rules! slider_family {
    ($slot:ident, $elem:ty; $($name:ident => $native:ident, $n:literal;)*) => {$(
        #[doc = concat!("`", stringify!($native), "`; reads and writes the first ", stringify!($n), " element(s) of `v`.")]
        pub fn $name<H: HostContainer + ?Sized>(
            label: &str,
            v: &mut H,
            v_min: $elem,
            v_max: $elem,
            format: Option<&str>,
            flags: i32,
        ) -> bool {
            with_label_format(label, format, |label, format| {
                let mut v = $slot::<_, $n>::new(v);
                unsafe { sys::$native(label, v.as_mut_ptr(), v_min, v_max, format, flags) }
            })
        }
    )*};
}

slider_family! { FloatVecSlot, f32;
    slider_float => igSliderFloat, 1;
    slider_float2 => igSliderFloat2, 2;
    slider_float3 => igSliderFloat3, 3;
    slider_float4 => igSliderFloat4, 4;
}

slider_family! { IntVecSlot, i32;
    slider_int => igSliderInt, 1;
    slider_int2 => igSliderInt2, 2;
    slider_int3 => igSliderInt3, 3;
    slider_int4 => igSliderInt4, 4;
}

/// `v_rad[0]` is in radians; the slider shows degrees.
pub fn slider_angle<H: HostContainer + ?Sized>(
    label: &str,
    v_rad: &mut H,
    v_degrees_min: f32,
    v_degrees_max: f32,
    format: Option<&str>,
    flags: i32,
) -> bool {
    with_label_format(label, format, |label, format| {
        let mut v_rad = FloatVecSlot::<_, 1>::new(v_rad);
        unsafe {
            sys::igSliderAngle(
                label,
                v_rad.as_mut_ptr(),
                v_degrees_min,
                v_degrees_max,
                format,
                flags,
            )
        }
    })
}

/// Vertical `float*` slider of the given size.
pub fn v_slider_float<H: HostContainer + ?Sized>(
    label: &str,
    size: [f32; 2],
    v: &mut H,
    v_min: f32,
    v_max: f32,
    format: Option<&str>,
    flags: i32,
) -> bool {
    with_label_format(label, format, |label, format| {
        let mut v = FloatVecSlot::<_, 1>::new(v);
        let size = sys::ImVec2 {
            x: size[0],
            y: size[1],
        };
        unsafe { sys::igVSliderFloat(label, size, v.as_mut_ptr(), v_min, v_max, format, flags) }
    })
}

pub fn v_slider_int<H: HostContainer + ?Sized>(
    label: &str,
    size: [f32; 2],
    v: &mut H,
    v_min: i32,
    v_max: i32,
    format: Option<&str>,
    flags: i32,
) -> bool {
    with_label_format(label, format, |label, format| {
        let mut v = IntVecSlot::<_, 1>::new(v);
        let size = sys::ImVec2 {
            x: size[0],
            y: size[1],
        };
        unsafe { sys::igVSliderInt(label, size, v.as_mut_ptr(), v_min, v_max, format, flags) }
    })
}
