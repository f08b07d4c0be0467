use std::fmt;

use crate::HostScalar;

/// The primitive an out-parameter points at.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ElementKind {
    Bool,
    I32,
    F32,
    F64,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ElementKind::Bool => "bool",
            ElementKind::I32 => "int",
            ElementKind::F32 => "float",
            ElementKind::F64 => "double",
        })
    }
}

/// Primitive element marker.
///
/// # Safety
/// Implementors must have exactly the same representation as the C primitive
/// described by `KIND` (`bool`, `int`, `float`, `double`), since native
/// functions write through `*mut Self`.
pub unsafe trait Element: Copy + Default + fmt::Debug + 'static {
    const KIND: ElementKind;

    /// Largest slot arity the C API uses for this primitive.
    const MAX_ARITY: usize = 4;

    /// Converts a host element, JS `ToBoolean`/`ToNumber`-style.
    fn from_host(value: HostScalar) -> Self;

    /// Converts back into a host element.
    fn into_host(self) -> HostScalar;
}

unsafe impl Element for bool {
    const KIND: ElementKind = ElementKind::Bool;
    // No cimgui entry point takes `bool v[N]`.
    const MAX_ARITY: usize = 1;

    fn from_host(value: HostScalar) -> Self {
        match value {
            HostScalar::Bool(b) => b,
            HostScalar::Number(n) => n != 0.0 && !n.is_nan(),
            HostScalar::Other => false,
        }
    }

    fn into_host(self) -> HostScalar {
        HostScalar::Bool(self)
    }
}

unsafe impl Element for i32 {
    const KIND: ElementKind = ElementKind::I32;

    fn from_host(value: HostScalar) -> Self {
        // `as` truncates toward zero, saturates, and maps NaN to 0.
        value.as_number().map_or(0, |n| n as i32)
    }

    fn into_host(self) -> HostScalar {
        HostScalar::Number(f64::from(self))
    }
}

unsafe impl Element for f32 {
    const KIND: ElementKind = ElementKind::F32;

    fn from_host(value: HostScalar) -> Self {
        value.as_number().map_or(0.0, |n| n as f32)
    }

    fn into_host(self) -> HostScalar {
        HostScalar::Number(f64::from(self))
    }
}

unsafe impl Element for f64 {
    const KIND: ElementKind = ElementKind::F64;

    fn from_host(value: HostScalar) -> Self {
        value.as_number().unwrap_or(0.0)
    }

    fn into_host(self) -> HostScalar {
        HostScalar::Number(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_follows_truthiness() {
        assert!(bool::from_host(HostScalar::Bool(true)));
        assert!(bool::from_host(HostScalar::Number(2.0)));
        assert!(!bool::from_host(HostScalar::Number(0.0)));
        assert!(!bool::from_host(HostScalar::Number(f64::NAN)));
        assert!(!bool::from_host(HostScalar::Other));
    }

    #[test]
    fn int_truncates_and_saturates() {
        assert_eq!(i32::from_host(HostScalar::Number(3.9)), 3);
        assert_eq!(i32::from_host(HostScalar::Number(-3.9)), -3);
        assert_eq!(i32::from_host(HostScalar::Number(1e12)), i32::MAX);
        assert_eq!(i32::from_host(HostScalar::Number(f64::NAN)), 0);
        assert_eq!(i32::from_host(HostScalar::Bool(true)), 1);
        assert_eq!(i32::from_host(HostScalar::Other), 0);
    }

    #[test]
    fn floats_accept_booleans() {
        assert_eq!(f32::from_host(HostScalar::Bool(true)), 1.0);
        assert_eq!(f64::from_host(HostScalar::Other), 0.0);
        assert_eq!(f64::from_host(HostScalar::Number(0.25)), 0.25);
    }

    #[test]
    fn write_back_uses_host_primitives() {
        assert_eq!(true.into_host(), HostScalar::Bool(true));
        assert_eq!(8i32.into_host(), HostScalar::Number(8.0));
        assert_eq!(0.5f32.into_host(), HostScalar::Number(0.5));
    }
}
