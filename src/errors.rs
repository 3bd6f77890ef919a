#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CapacityError {
    AllocFailed {
        new_capacity: usize,
    },
    ZeroCapacity,
    CapacityOverflow {
        current: usize,
    },
    ZeroSizedElement,
}

impl core::fmt::Display for CapacityError {

    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::AllocFailed { new_capacity } => {
                write!(f, "allocation failed with new capacity {}", new_capacity)
            },
            Self::ZeroCapacity => {
                write!(f, "capacity must be at least 1")
            },
            Self::CapacityOverflow { current } => {
                write!(f, "growing past capacity {} overflowed", current)
            },
            Self::ZeroSizedElement => {
                write!(f, "size of element type is zero")
            },
        }
    }
}

impl core::error::Error for CapacityError {}
