use core::{
    mem,
    ptr::NonNull,
};

/// Opaque allocation service backing [`DynArray`](crate::DynArray).
///
/// The contract is success-or-failure only: `allocate_raw` either returns a
/// block of at least `size` bytes aligned to `align`, or `None`. Zero-sized
/// requests fail rather than return a dangling pointer.
pub trait Allocator {

    /// # Safety
    ///
    /// `align` must be a power of two. The returned block is uninitialized.
    unsafe fn allocate_raw(&self, size: usize, align: usize) -> Option<NonNull<u8>>;

    /// Allocates room for `count` values of `T`, uninitialized.
    ///
    /// # Safety
    ///
    /// Same contract as [`allocate_raw`](Allocator::allocate_raw).
    unsafe fn allocate_uninit<T>(&self, count: usize) -> Option<NonNull<T>> {
        let size = mem::size_of::<T>() * count;
        let align = mem::align_of::<T>();
        unsafe { self.allocate_raw(size, align).map(|ptr| ptr.cast::<T>()) }
    }

    /// # Safety
    ///
    /// `ptr` must have come from `allocate_raw` on this same allocator with
    /// exactly this `size` and `align`, and must not be used afterwards.
    unsafe fn free_raw(&self, ptr: NonNull<u8>, size: usize, align: usize);

    /// Releases a block obtained from [`allocate_uninit`](Allocator::allocate_uninit).
    ///
    /// # Safety
    ///
    /// Same contract as [`free_raw`](Allocator::free_raw); `count` must match
    /// the original request. Does not drop any values in the block.
    unsafe fn free_uninit<T>(&self, ptr: NonNull<T>, count: usize) {
        let size = mem::size_of::<T>() * count;
        let align = mem::align_of::<T>();
        unsafe { self.free_raw(ptr.cast::<u8>(), size, align) }
    }
}
