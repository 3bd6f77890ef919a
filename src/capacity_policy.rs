//! Growth policies for [`DynArray`](crate::DynArray).

/// Decides the next capacity when an array must grow.
pub trait CapacityPolicy {

    /// Returns the smallest policy capacity reachable from `current` that is
    /// strictly greater than `required`, or `None` if the computation
    /// overflows `usize`.
    ///
    /// The strict inequality keeps one spare slot past the live range even
    /// when `required` lands exactly on a policy step.
    fn grow(current: usize, required: usize) -> Option<usize>;
}

/// Multiplies capacity by `FACTOR` until it exceeds the required slot count.
///
/// `FACTOR` must be at least 2; a factor of 1 could never escape a full
/// buffer and is rejected at compile time.
pub struct Geometric<const FACTOR: usize = 2> {}

/// The default policy, `Geometric::<2>`.
pub type Doubling = Geometric<2>;

impl<const FACTOR: usize> CapacityPolicy for Geometric<FACTOR> {

    #[inline]
    fn grow(current: usize, required: usize) -> Option<usize> {
        const { assert!(FACTOR >= 2, "growth factor must be at least 2") }
        let mut capacity = current.max(1);
        while capacity <= required {
            capacity = capacity.checked_mul(FACTOR)?;
        }
        Some(capacity)
    }
}
