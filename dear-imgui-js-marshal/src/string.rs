//! String marshalling
//!
//! Host strings are staged as NUL-terminated bytes in a [`ScratchBuffer`] that
//! lives for one native call. Strings coming back from the native side are
//! copied immediately with [`copy_native_str`]; no binding hands out a
//! pointer into native memory.

use std::ffi::CStr;
use std::os::raw::c_char;
use std::ptr;

use crate::{MarshalError, MarshalResult};

#[cfg(feature = "tracing")]
use tracing::warn;

/// Position of a staged string inside a [`ScratchBuffer`]; `None` stands for a
/// null `const char*`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StagedStr(Option<usize>);

impl StagedStr {
    pub const NULL: StagedStr = StagedStr(None);
}

/// Call-scoped staging area for C strings.
///
/// All strings of a call go into one allocation. Pointers are resolved with
/// [`ScratchBuffer::ptr`] after every string is pushed, since a later push may
/// reallocate.
#[derive(Debug, Default)]
pub struct ScratchBuffer {
    buffer: Vec<u8>,
}

impl ScratchBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Preallocates `capacity` bytes for all strings of one call.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
        }
    }

    /// Stages `txt`, truncating at the first NUL byte.
    pub fn push(&mut self, txt: impl AsRef<str>) -> StagedStr {
        let txt = txt.as_ref();
        let bytes = match txt.find('\0') {
            Some(position) => {
                #[cfg(feature = "tracing")]
                warn!(position, "string contains a NUL byte, truncating");
                &txt.as_bytes()[..position]
            }
            None => txt.as_bytes(),
        };
        self.push_bytes(bytes)
    }

    /// Stages `txt`, rejecting interior NUL bytes.
    pub fn try_push(&mut self, txt: impl AsRef<str>) -> MarshalResult<StagedStr> {
        let txt = txt.as_ref();
        if let Some(position) = txt.find('\0') {
            return Err(MarshalError::InteriorNul { position });
        }
        Ok(self.push_bytes(txt.as_bytes()))
    }

    /// Stages an optional string; `None` becomes a null pointer.
    pub fn push_opt(&mut self, txt: Option<impl AsRef<str>>) -> StagedStr {
        match txt {
            Some(txt) => self.push(txt),
            None => StagedStr::NULL,
        }
    }

    fn push_bytes(&mut self, bytes: &[u8]) -> StagedStr {
        let start = self.buffer.len();
        self.buffer.extend_from_slice(bytes);
        self.buffer.push(b'\0');
        StagedStr(Some(start))
    }

    /// Resolves a staged string to a pointer valid until the next push or
    /// until the buffer is dropped.
    pub fn ptr(&self, staged: StagedStr) -> *const c_char {
        match staged.0 {
            Some(start) => self.buffer[start..].as_ptr().cast(),
            None => ptr::null(),
        }
    }

    /// Byte length of a staged string, excluding the terminator.
    pub fn len_of(&self, staged: StagedStr) -> usize {
        match staged.0 {
            Some(start) => self.buffer[start..]
                .iter()
                .position(|&b| b == b'\0')
                .unwrap_or(0),
            None => 0,
        }
    }
}

/// Runs `f` with `txt` as a C string.
pub fn with_cstr<R>(txt: impl AsRef<str>, f: impl FnOnce(*const c_char) -> R) -> R {
    let mut scratch = ScratchBuffer::with_capacity(txt.as_ref().len() + 1);
    let staged = scratch.push(txt);
    f(scratch.ptr(staged))
}

/// Copies a native NUL-terminated string into an owned `String`.
///
/// Invalid UTF-8 is replaced lossily; a null pointer yields `None`.
///
/// # Safety
/// `ptr` must be null or point to a NUL-terminated string that stays valid for
/// the duration of this call.
pub unsafe fn copy_native_str(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    let cstr = unsafe { CStr::from_ptr(ptr) };
    Some(cstr.to_string_lossy().into_owned())
}

/// Copies `len` bytes of native text that is not necessarily NUL-terminated.
///
/// # Safety
/// `ptr` must be null or valid for reads of `len` bytes.
pub unsafe fn copy_native_bytes(ptr: *const c_char, len: usize) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    let bytes = unsafe { std::slice::from_raw_parts(ptr.cast::<u8>(), len) };
    let bytes = bytes.split(|&b| b == b'\0').next().unwrap_or(bytes);
    Some(String::from_utf8_lossy(bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn staged_strings_are_nul_terminated() {
        let mut scratch = ScratchBuffer::new();
        let label = scratch.push("Label");
        let hint = scratch.push_opt(Some("hint"));
        let none = scratch.push_opt(None::<&str>);

        let label = unsafe { CStr::from_ptr(scratch.ptr(label)) };
        let hint = unsafe { CStr::from_ptr(scratch.ptr(hint)) };
        assert_eq!(label.to_str(), Ok("Label"));
        assert_eq!(hint.to_str(), Ok("hint"));
        assert!(scratch.ptr(none).is_null());
    }

    #[test]
    fn push_truncates_and_try_push_rejects() {
        let mut scratch = ScratchBuffer::new();
        let staged = scratch.push("ab\0cd");
        assert_eq!(scratch.len_of(staged), 2);
        assert_eq!(
            scratch.try_push("ab\0cd"),
            Err(MarshalError::InteriorNul { position: 2 })
        );
    }

    #[test]
    fn native_strings_are_copied() {
        let native = b"1.92.0\0";
        let copied = unsafe { copy_native_str(native.as_ptr().cast()) };
        assert_eq!(copied.as_deref(), Some("1.92.0"));
        assert_eq!(unsafe { copy_native_str(ptr::null()) }, None);
    }

    #[test]
    fn native_bytes_stop_at_nul() {
        let native = b"[node.1]\0junk";
        let copied = unsafe { copy_native_bytes(native.as_ptr().cast(), native.len()) };
        assert_eq!(copied.as_deref(), Some("[node.1]"));
    }
}
