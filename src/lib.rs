#![cfg_attr(not(feature = "std"), no_std)]

//! Allocator-backed growable contiguous array.
//!
//! [`DynArray`] owns a single contiguous buffer and grows it geometrically
//! when it runs out of room, keeping at least one spare slot past the live
//! range after every push. Growth never frees the old buffer before the new
//! one is allocated and filled, so a failed allocation leaves the array in
//! its previous valid state.
//!
//! Allocation failures are reported as [`CapacityError`] values. Indexing
//! past the live range is a contract violation and panics; it never reads
//! or writes uninitialized slots.

pub mod capacity_policy;
pub mod vec_types;

mod macros;
mod errors;
mod allocator;
#[cfg(feature = "std")]
mod global_alloc;

pub use errors::CapacityError;
pub use allocator::Allocator;
#[cfg(feature = "std")]
pub use global_alloc::{GlobalAlloc, GLOBAL_ALLOC};
pub use capacity_policy::{CapacityPolicy, Geometric, Doubling};
pub use vec_types::{DynArray, DEFAULT_CAPACITY};
#[cfg(feature = "std")]
pub use vec_types::GlobalArray;
