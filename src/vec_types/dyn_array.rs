use core::{
    marker::PhantomData,
    mem::needs_drop,
    ops::{Deref, DerefMut, Index, IndexMut},
    ptr::NonNull,
    slice,
};

use crate::{
    allocator::Allocator,
    capacity_policy::{CapacityPolicy, Doubling},
    errors::CapacityError,
    const_assert,
    size_of,
};

#[cfg(feature = "std")]
use crate::global_alloc::{GlobalAlloc, GLOBAL_ALLOC};

use CapacityError::{AllocFailed, CapacityOverflow, ZeroCapacity, ZeroSizedElement};

/// Slot count a default-constructed array starts with.
pub const DEFAULT_CAPACITY: usize = 1;

/// Growable contiguous array over a borrowed allocator.
///
/// Slots `[0, len)` hold live values, slots `[len, capacity)` are
/// uninitialized. Capacity is at least 1 from construction on and never
/// shrinks for the lifetime of a value. After every successful push
/// `len < capacity` holds, so the buffer always keeps a spare slot past
/// the live range.
///
/// The value exclusively owns its buffer and is move-only; dropping it
/// drops the live elements and releases the buffer. Pushing may reallocate
/// and invalidates any pointer previously obtained into the buffer.
pub struct DynArray<'alloc, T, A, P = Doubling>
    where
        A: Allocator,
        P: CapacityPolicy,
{
    data: NonNull<T>,
    capacity: usize,
    len: usize,
    alloc: &'alloc A,
    _marker: PhantomData<P>,
}

/// [`DynArray`] over the global allocator.
#[cfg(feature = "std")]
pub type GlobalArray<T, P = Doubling> = DynArray<'static, T, GlobalAlloc, P>;

#[cfg(feature = "std")]
const_assert!(size_of!(GlobalArray<u32>) == size_of!(Option<GlobalArray<u32>>));

impl<'alloc, T, A, P> DynArray<'alloc, T, A, P>
    where
        A: Allocator,
        P: CapacityPolicy,
{

    /// Constructs an array with [`DEFAULT_CAPACITY`] slots.
    pub fn new_in(alloc: &'alloc A) -> Result<Self, CapacityError> {
        Self::with_capacity_in(DEFAULT_CAPACITY, alloc)
    }

    /// Constructs an array with `capacity` slots, all uninitialized.
    ///
    /// `capacity` must be at least 1. On failure no array value exists;
    /// nothing is leaked and nothing partially-built escapes.
    pub fn with_capacity_in(
        capacity: usize,
        alloc: &'alloc A,
    ) -> Result<Self, CapacityError> {
        if capacity == 0 {
            return Err(ZeroCapacity)
        }
        let data = match unsafe { alloc.allocate_uninit(capacity) } {
            Some(ptr) => ptr,
            None => return Err(
                if size_of!(T) == 0 {
                    ZeroSizedElement
                }
                else {
                    AllocFailed { new_capacity: capacity }
                }
            ),
        };
        Ok(Self {
            data,
            capacity,
            len: 0,
            alloc,
            _marker: PhantomData,
        })
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline(always)]
    pub fn as_ptr(&self) -> *const T {
        self.data.as_ptr()
    }

    #[inline(always)]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.data.as_ptr()
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.data.as_ptr(), self.len) }
    }

    #[inline(always)]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.data.as_ptr(), self.len) }
    }

    /// Appends `value` as the new last element.
    ///
    /// Grows the buffer first whenever `len + 1 >= capacity`, so a spare
    /// slot remains past the new element. On a failed growth the error is
    /// returned and the array keeps its previous buffer, length and
    /// contents.
    #[inline(always)]
    pub fn push(&mut self, value: T) -> Result<&mut T, CapacityError> {
        self.reserve(self.len + 1)?;
        let mut ptr = unsafe { self.data.add(self.len) };
        unsafe { ptr.write(value) };
        self.len += 1;
        Ok(unsafe { ptr.as_mut() })
    }

    /// Removes and returns the last element, or `None` if the array is
    /// empty. Never touches capacity.
    #[inline(always)]
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None
        }
        self.len -= 1;
        Some(unsafe { self.data.add(self.len).read() })
    }

    #[inline(always)]
    pub fn back(&self) -> Option<&T> {
        if self.len == 0 {
            None
        }
        else {
            unsafe {
                Some(
                    self.data.add(self.len - 1).as_ref()
                )
            }
        }
    }

    #[inline(always)]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        if self.len == 0 {
            None
        }
        else {
            unsafe {
                Some(
                    self.data.add(self.len - 1).as_mut()
                )
            }
        }
    }

    /// Drops all live elements and sets the length to zero. Capacity and
    /// buffer stay as they are; no allocator call is made.
    pub fn clear(&mut self) {
        debug_assert!(self.len <= self.capacity);
        unsafe {
            drop_range(self.data, self.len);
        }
        self.len = 0;
    }

    /// Grows the buffer so that `min_len` elements fit while keeping
    /// `len < capacity`. Does nothing if the current capacity already
    /// admits that many.
    pub fn reserve(&mut self, min_len: usize) -> Result<(), CapacityError> {
        if min_len < self.capacity {
            return Ok(())
        }
        let new_capacity = match P::grow(self.capacity, min_len) {
            Some(c) => c,
            None => return Err(CapacityOverflow { current: self.capacity }),
        };
        self.replace_buffer(new_capacity)
    }

    /// Allocate new, copy, free old. The previous buffer is released only
    /// after the new one holds every live element, so failure leaves the
    /// array untouched.
    fn replace_buffer(&mut self, new_capacity: usize) -> Result<(), CapacityError> {
        debug_assert!(new_capacity > self.capacity);
        let new_data = match unsafe { self.alloc.allocate_uninit(new_capacity) } {
            Some(ptr) => ptr,
            None => return Err(
                if size_of!(T) == 0 {
                    ZeroSizedElement
                }
                else {
                    AllocFailed { new_capacity }
                }
            ),
        };
        unsafe {
            move_range(self.data, new_data, self.len);
            self.alloc.free_uninit(self.data, self.capacity);
        }
        self.data = new_data;
        self.capacity = new_capacity;
        Ok(())
    }
}

#[cfg(feature = "std")]
impl<T> DynArray<'static, T, GlobalAlloc> {

    /// Constructs an array over [`GLOBAL_ALLOC`] with [`DEFAULT_CAPACITY`]
    /// slots.
    pub fn new() -> Result<Self, CapacityError> {
        Self::new_in(&GLOBAL_ALLOC)
    }

    /// Constructs an array over [`GLOBAL_ALLOC`] with `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Result<Self, CapacityError> {
        Self::with_capacity_in(capacity, &GLOBAL_ALLOC)
    }
}

/// Ownership moves to `dst`; the values in `src` must not be dropped
/// afterwards.
unsafe fn move_range<T>(src: NonNull<T>, dst: NonNull<T>, len: usize) {
    unsafe { src.copy_to_nonoverlapping(dst, len) }
}

unsafe fn drop_range<T>(ptr: NonNull<T>, len: usize) {
    if needs_drop::<T>() {
        for i in 0..len {
            unsafe { ptr.add(i).drop_in_place() }
        }
    }
}

impl<'alloc, T, A, P> Drop for DynArray<'alloc, T, A, P>
    where
        A: Allocator,
        P: CapacityPolicy,
{

    fn drop(&mut self) {
        unsafe {
            drop_range(self.data, self.len);
            self.alloc.free_uninit(self.data, self.capacity);
        }
    }
}

impl<'alloc, T, A, P> Index<usize> for DynArray<'alloc, T, A, P>
    where
        A: Allocator,
        P: CapacityPolicy,
{

    type Output = T;

    /// Panics if `index >= len`; slots past the live range are never
    /// readable.
    #[inline(always)]
    fn index(&self, index: usize) -> &Self::Output {
        if index >= self.len {
            panic!("index {} out of bounds for length {}", index, self.len)
        }
        unsafe { self.data.add(index).as_ref() }
    }
}

impl<'alloc, T, A, P> IndexMut<usize> for DynArray<'alloc, T, A, P>
    where
        A: Allocator,
        P: CapacityPolicy,
{

    #[inline(always)]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        if index >= self.len {
            panic!("index {} out of bounds for length {}", index, self.len)
        }
        unsafe { self.data.add(index).as_mut() }
    }
}

impl<'alloc, T, A, P> AsRef<[T]> for DynArray<'alloc, T, A, P>
    where
        A: Allocator,
        P: CapacityPolicy,
{

    #[inline(always)]
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<'alloc, T, A, P> AsMut<[T]> for DynArray<'alloc, T, A, P>
    where
        A: Allocator,
        P: CapacityPolicy,
{

    #[inline(always)]
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<'alloc, T, A, P> Deref for DynArray<'alloc, T, A, P>
    where
        A: Allocator,
        P: CapacityPolicy,
{

    type Target = [T];

    #[inline(always)]
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<'alloc, T, A, P> DerefMut for DynArray<'alloc, T, A, P>
    where
        A: Allocator,
        P: CapacityPolicy,
{

    #[inline(always)]
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}
