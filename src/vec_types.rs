mod dyn_array;

pub use dyn_array::{DynArray, DEFAULT_CAPACITY};
#[cfg(feature = "std")]
pub use dyn_array::GlobalArray;
