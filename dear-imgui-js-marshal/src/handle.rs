use std::fmt;
use std::hash::{Hash, Hasher};
use std::ptr;

use crate::{MarshalError, MarshalResult};

/// Opaque identifier of a native-owned object (context, style, draw list, ...).
///
/// A handle is the object's address and nothing else: it carries identity, not
/// ownership, and is never dereferenced by the marshalling layer. Retrieving
/// "the current X" twice yields equal handles.
///
/// Bindings that take a handle pass its pointer straight to the native
/// library, so building one is `unsafe`: a forged or stale address would be
/// dereferenced on the native side.
///
/// ```compile_fail
/// use dear_imgui_js_marshal::Handle;
///
/// let forged = Handle::<u32>::from_addr(0x1000);
/// ```
///
/// Not `Send`/`Sync`: the native library's current-context state is
/// thread-affine.
#[repr(transparent)]
pub struct Handle<T> {
    raw: *mut T,
}

impl<T> Handle<T> {
    /// Wraps a pointer returned by the native library.
    ///
    /// # Safety
    ///
    /// `raw` must be null or point to a live native `T`, and stay live for as
    /// long as the handle is passed to bindings.
    pub const unsafe fn from_ptr(raw: *mut T) -> Self {
        Self { raw }
    }

    /// The null handle, standing for "the current one" where a binding
    /// accepts it.
    pub const fn null() -> Self {
        Self {
            raw: ptr::null_mut(),
        }
    }

    /// Rebuilds a handle from the number the host was given.
    ///
    /// # Safety
    ///
    /// Same contract as [`Handle::from_ptr`]: `addr` must be zero or an
    /// address previously returned by [`Handle::addr`] whose object has not
    /// been destroyed since.
    pub unsafe fn from_addr(addr: usize) -> Self {
        // SAFETY: forwarded to the caller.
        unsafe { Self::from_ptr(addr as *mut T) }
    }

    /// The number handed to the host.
    pub fn addr(self) -> usize {
        self.raw as usize
    }

    /// The wrapped pointer, possibly null.
    pub fn as_ptr(self) -> *mut T {
        self.raw
    }

    pub fn is_null(self) -> bool {
        self.raw.is_null()
    }

    /// Pointer for calls that require a live object.
    pub fn require(self, what: &'static str) -> MarshalResult<*mut T> {
        if self.raw.is_null() {
            Err(MarshalError::null_handle(what))
        } else {
            Ok(self.raw)
        }
    }
}

impl<T> Clone for Handle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Handle<T> {}

impl<T> PartialEq for Handle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<T> Eq for Handle<T> {}

impl<T> Hash for Handle<T> {
    fn hash<S: Hasher>(&self, state: &mut S) {
        self.addr().hash(state);
    }
}

impl<T> Default for Handle<T> {
    fn default() -> Self {
        Self::null()
    }
}

impl<T> fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handle<{}>({:#x})", std::any::type_name::<T>(), self.addr())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_is_the_address() {
        let mut value = 5u32;
        let a = unsafe { Handle::from_ptr(&mut value as *mut u32) };
        let b = unsafe { Handle::<u32>::from_addr(a.addr()) };
        assert_eq!(a, b);
        assert_ne!(a, Handle::null());
    }

    #[test]
    fn zero_address_is_the_null_handle() {
        let h = unsafe { Handle::<u32>::from_addr(0) };
        assert!(h.is_null());
        assert_eq!(h, Handle::default());
        assert_eq!(std::mem::size_of::<Handle<u32>>(), std::mem::size_of::<usize>());
    }

    #[test]
    fn require_rejects_null() {
        assert_eq!(
            Handle::<u8>::null().require("ImGuiContext"),
            Err(MarshalError::NullHandle {
                what: "ImGuiContext"
            })
        );
    }
}
