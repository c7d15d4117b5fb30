use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::ptr::NonNull;

/// The most bytes any single allocation may span.
pub(crate) const MAX_BYTES: usize = isize::MAX as usize;

/// The allocation behind a [`Vector`](super::Vector): a pointer and a slot
/// count, nothing more. The buffer hands out uninitialized storage and
/// deallocates it on drop; which slots hold live values is entirely the
/// owner's concern, so nothing here ever reads or drops an element.
pub(crate) struct RawBuffer<T> {
    ptr: NonNull<T>,
    cap: usize,
    _phantom: PhantomData<T>,
}

impl<T> RawBuffer<T> {
    /// An unallocated buffer: dangling pointer, zero capacity.
    pub(crate) const fn new() -> RawBuffer<T> {
        RawBuffer {
            ptr: NonNull::dangling(),
            cap: 0,
            _phantom: PhantomData,
        }
    }

    /// Allocates a buffer of exactly `cap` slots.
    ///
    /// # Panics
    /// Panics if the memory layout size exceeds [`isize::MAX`].
    pub(crate) fn with_cap(cap: usize) -> RawBuffer<T> {
        let mut buf = RawBuffer::new();
        buf.realloc(cap);
        buf
    }

    pub(crate) const fn cap(&self) -> usize {
        self.cap
    }

    pub(crate) const fn ptr(&self) -> NonNull<T> {
        self.ptr
    }

    /// A helper function to create a [`Layout`] for `cap` slots of `T`.
    ///
    /// # Panics
    /// Panics if the memory layout size exceeds [`isize::MAX`].
    fn make_layout(cap: usize) -> Layout {
        Layout::array::<T>(cap).expect("Capacity overflow!")
    }

    /// Reallocates to exactly `new_cap` slots, preserving the contents of the
    /// first `min(cap, new_cap)` slots. New slots are uninitialized; any live
    /// values in slots being cut off must have been dropped by the caller
    /// beforehand.
    ///
    /// In the event of an allocation error, this method calls
    /// [`alloc::handle_alloc_error`] as recommended, to avoid new allocations
    /// rather than panicking. The old allocation is never released before the
    /// replacement exists.
    ///
    /// # Panics
    /// Panics if the memory layout of the new allocation would have a size
    /// that exceeds [`isize::MAX`].
    pub(crate) fn realloc(&mut self, new_cap: usize) {
        let new_ptr = match (self.cap, new_cap) {
            (_, _) if size_of::<T>() == 0 => {
                // Zero-sized types are never allocated. The dangling pointer
                // is kept as-is and only the slot count changes.
                self.ptr
            },
            (old, new) if old == new => {
                return;
            },
            (0, _) => {
                let layout = Self::make_layout(new_cap);

                // SAFETY: The layout has non-zero size: new_cap == 0 is caught
                // by the equal-capacity arm and zero-sized T by the first arm.
                let raw_ptr: *mut T = unsafe { alloc::alloc(layout).cast() };

                NonNull::new(raw_ptr).unwrap_or_else(|| alloc::handle_alloc_error(layout))
            },
            (_, 0) => {
                // SAFETY: cap > 0 and T is not zero-sized, so this allocation
                // exists and was created with this exact layout.
                unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), Self::make_layout(self.cap)) };

                NonNull::dangling()
            },
            (_, _) => {
                let layout = Self::make_layout(self.cap);
                let new_layout = Self::make_layout(new_cap);

                // SAFETY: The same allocator and layout are used as for the
                // original allocation, and the new size is non-zero and at
                // most isize::MAX bytes.
                let raw_ptr: *mut T = unsafe {
                    alloc::realloc(self.ptr.as_ptr().cast(), layout, new_layout.size()).cast()
                };

                NonNull::new(raw_ptr).unwrap_or_else(|| alloc::handle_alloc_error(new_layout))
            },
        };

        self.ptr = new_ptr;
        self.cap = new_cap;
    }

    /// Returns the buffer to the unallocated state.
    pub(crate) fn release(&mut self) {
        self.realloc(0);
    }
}

impl<T> Drop for RawBuffer<T> {
    fn drop(&mut self) {
        let layout = Self::make_layout(self.cap);

        if layout.size() != 0 {
            // SAFETY: ptr was allocated in the global allocator with this
            // layout. Zero-sized layouts are never allocated and are guarded
            // against deallocation.
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), layout) }
        }
    }
}
