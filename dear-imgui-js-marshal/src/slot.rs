//! The out-parameter adapter
//!
//! A [`Slot`] backs one `T*` (or `T[N]`) argument of one native call with a
//! stack array seeded from the host container. The native function writes
//! through [`Slot::as_mut_ptr`]; dropping the slot copies the storage back.
//!
//! Validity is decided once, at construction: a container that is not
//! array-like yields a null pointer, and its host value is never written.

use std::ptr;

use crate::{Element, HostContainer};

#[cfg(feature = "tracing")]
use tracing::trace;

/// Call-scoped native storage for one pointer-to-primitive argument.
///
/// `N` is the arity: 1 for scalars, 2 to 4 for vector arguments such as
/// `float v[3]` or `float col[4]`. `bool` only comes as a scalar, and
/// `Slot<_, bool, 2>` fails to build:
///
/// ```compile_fail
/// use dear_imgui_js_marshal::{HostScalar, Slot};
///
/// let _ = Slot::<Vec<HostScalar>, bool, 2>::absent();
/// ```
///
/// Seeding converts each host element to `T` and write-back stores the
/// native value, so a call that leaves the storage untouched still
/// normalizes the host array: `[0.1]` through `float*` comes back as the
/// nearest `f32` (`0.10000000149011612`), `[1]` through `bool*` as
/// `[true]`, `[3.7]` through `int*` as `[3]`.
///
/// Elements at index `N` and beyond are neither read nor written, so a longer
/// host array keeps its tail. A shorter one is seeded with `T::default()` for
/// the missing elements and grows on write-back.
///
/// Write-back happens in `Drop` and therefore also runs while unwinding. A
/// native abort (failed assertion) terminates the process before it can run.
#[must_use = "the native pointer is only valid while the slot is alive"]
pub struct Slot<'h, H: HostContainer + ?Sized, T: Element, const N: usize> {
    host: Option<&'h mut H>,
    storage: [T; N],
}

/// `bool*`
pub type BoolSlot<'h, H> = Slot<'h, H, bool, 1>;
/// `int*`
pub type IntSlot<'h, H> = Slot<'h, H, i32, 1>;
/// `int v[N]`
pub type IntVecSlot<'h, H, const N: usize> = Slot<'h, H, i32, N>;
/// `float*`
pub type FloatSlot<'h, H> = Slot<'h, H, f32, 1>;
/// `float v[N]`
pub type FloatVecSlot<'h, H, const N: usize> = Slot<'h, H, f32, N>;
/// `double*`
pub type DoubleSlot<'h, H> = Slot<'h, H, f64, 1>;

impl<'h, H, T, const N: usize> Slot<'h, H, T, N>
where
    H: HostContainer + ?Sized,
    T: Element,
{
    const ARITY_IN_RANGE: () = assert!(
        N >= 1 && N <= 4 && N <= T::MAX_ARITY,
        "out-parameter arity must be 1..=4, and 1 for bool"
    );

    /// Seeds native storage from `host`.
    ///
    /// Never fails: a host value that is not array-like produces a slot whose
    /// pointer is null, the native convention for "output not requested".
    pub fn new(host: &'h mut H) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::ARITY_IN_RANGE;

        let mut storage = [T::default(); N];
        if !host.is_array_like() {
            #[cfg(feature = "tracing")]
            trace!(
                element = %T::KIND,
                arity = N,
                "host container is not array-like, passing null"
            );
            return Self {
                host: None,
                storage,
            };
        }

        for (index, value) in storage.iter_mut().enumerate() {
            *value = T::from_host(host.read(index));
        }

        Self {
            host: Some(host),
            storage,
        }
    }

    /// A slot with no host container at all; its pointer is null.
    pub fn absent() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::ARITY_IN_RANGE;

        Self {
            host: None,
            storage: [T::default(); N],
        }
    }

    /// [`Slot::new`] for an optional host container.
    pub fn from_option(host: Option<&'h mut H>) -> Self {
        match host {
            Some(host) => Self::new(host),
            None => Self::absent(),
        }
    }

    /// Runs `f` with the native pointer, then writes back.
    ///
    /// ```
    /// use dear_imgui_js_marshal::IntSlot;
    /// use serde_json::json;
    ///
    /// let mut v = json!([3]);
    /// let old = IntSlot::scope(&mut v, |ptr| unsafe {
    ///     let old = *ptr;
    ///     *ptr += 5;
    ///     old
    /// });
    /// assert_eq!(old, 3);
    /// assert_eq!(v, json!([8]));
    /// ```
    pub fn scope<R>(host: &'h mut H, f: impl FnOnce(*mut T) -> R) -> R {
        let mut slot = Self::new(host);
        f(slot.as_mut_ptr())
    }

    /// Whether the host container was array-like at construction.
    pub fn is_valid(&self) -> bool {
        self.host.is_some()
    }

    /// The argument to pass to the native function: the storage, or null for
    /// an absent container.
    ///
    /// The pointer borrows the slot's storage; it must not be kept past the
    /// native call.
    pub fn as_mut_ptr(&mut self) -> *mut T {
        if self.host.is_some() {
            self.storage.as_mut_ptr()
        } else {
            ptr::null_mut()
        }
    }

    /// Current native-side values.
    pub fn values(&self) -> &[T; N] {
        &self.storage
    }
}

impl<H, T, const N: usize> Drop for Slot<'_, H, T, N>
where
    H: HostContainer + ?Sized,
    T: Element,
{
    fn drop(&mut self) {
        if let Some(host) = self.host.take() {
            for (index, value) in self.storage.iter().enumerate() {
                host.write(index, value.into_host());
            }
        }
    }
}

impl<H, T, const N: usize> std::fmt::Debug for Slot<'_, H, T, N>
where
    H: HostContainer + ?Sized,
    T: Element,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Slot")
            .field("element", &T::KIND)
            .field("valid", &self.is_valid())
            .field("storage", &self.storage)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HostScalar;

    #[test]
    fn seeds_in_index_order() {
        let mut host = vec![
            HostScalar::Number(1.0),
            HostScalar::Number(2.0),
            HostScalar::Number(3.0),
        ];
        let slot = FloatVecSlot::<_, 3>::new(&mut host);
        assert_eq!(slot.values(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn short_container_seeds_defaults_and_grows() {
        let mut host = vec![HostScalar::Number(7.0)];
        {
            let slot = IntVecSlot::<_, 2>::new(&mut host);
            assert_eq!(slot.values(), &[7, 0]);
        }
        assert_eq!(host, vec![HostScalar::Number(7.0), HostScalar::Number(0.0)]);
    }

    #[test]
    fn absent_slot_has_null_pointer() {
        let mut slot = BoolSlot::<Vec<HostScalar>>::absent();
        assert!(!slot.is_valid());
        assert!(slot.as_mut_ptr().is_null());
    }

    #[test]
    fn trailing_elements_are_untouched() {
        let mut host = vec![
            HostScalar::Number(1.0),
            HostScalar::Bool(true),
            HostScalar::Other,
        ];
        IntSlot::scope(&mut host, |ptr| unsafe { *ptr = 9 });
        assert_eq!(
            host,
            vec![HostScalar::Number(9.0), HostScalar::Bool(true), HostScalar::Other]
        );
    }

    #[test]
    fn write_back_runs_while_unwinding() {
        let mut host = vec![HostScalar::Bool(false)];
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            BoolSlot::scope(&mut host, |ptr| {
                unsafe { *ptr = true };
                panic!("native callback unwound");
            })
        }));
        assert!(result.is_err());
        assert_eq!(host, vec![HostScalar::Bool(true)]);
    }
}
