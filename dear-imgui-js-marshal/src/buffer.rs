use std::ptr;

use crate::{Element, HostContainer};

/// Output buffer whose length is decided by the native side.
///
/// Used for calls such as ImNodes' `GetSelectedNodes(int* node_ids)`, which
/// writes `NumSelectedNodes()` ids. The storage is sized from that count, never
/// from the host array, so a short host array cannot cause an overflow. On
/// drop a valid host container is resized to exactly `count` elements and
/// filled in index order.
#[must_use = "the native pointer is only valid while the buffer is alive"]
pub struct SelectionBuffer<'h, H: HostContainer + ?Sized, T: Element> {
    host: Option<&'h mut H>,
    storage: Vec<T>,
}

impl<'h, H, T> SelectionBuffer<'h, H, T>
where
    H: HostContainer + ?Sized,
    T: Element,
{
    /// Allocates `count` elements for `host`. Negative native counts are
    /// treated as zero by the caller converting them to `usize`.
    pub fn new(host: &'h mut H, count: usize) -> Self {
        if !host.is_array_like() {
            return Self {
                host: None,
                storage: Vec::new(),
            };
        }

        Self {
            host: Some(host),
            storage: vec![T::default(); count],
        }
    }

    /// Whether the host container was array-like at construction.
    pub fn is_valid(&self) -> bool {
        self.host.is_some()
    }

    /// Number of elements the native side may write.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Null when the host container is absent.
    pub fn as_mut_ptr(&mut self) -> *mut T {
        if self.host.is_some() {
            self.storage.as_mut_ptr()
        } else {
            ptr::null_mut()
        }
    }
}

impl<H, T> Drop for SelectionBuffer<'_, H, T>
where
    H: HostContainer + ?Sized,
    T: Element,
{
    fn drop(&mut self) {
        if let Some(host) = self.host.take() {
            host.resize(self.storage.len());
            for (index, value) in self.storage.iter().enumerate() {
                host.write(index, value.into_host());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HostScalar;

    #[test]
    fn host_takes_native_length() {
        let mut host = vec![HostScalar::Number(1.0); 5];
        {
            let mut buffer = SelectionBuffer::<_, i32>::new(&mut host, 2);
            let ptr = buffer.as_mut_ptr();
            unsafe {
                *ptr = 10;
                *ptr.add(1) = 20;
            }
        }
        assert_eq!(host, vec![HostScalar::Number(10.0), HostScalar::Number(20.0)]);
    }

    #[test]
    fn absent_host_gets_null() {
        let mut host: Option<Vec<HostScalar>> = None;
        let mut buffer = SelectionBuffer::<_, i32>::new(&mut host, 3);
        assert!(buffer.as_mut_ptr().is_null());
        assert!(buffer.is_empty());
    }
}
