//! Capacity policy for [`MaxHeap`](crate::MaxHeap).

/// Backing capacity used by `MaxHeap::new`.
pub const DEFAULT_CAPACITY: usize = 64;

/// Capacity at or below which the heap never shrinks.
pub const SHRINK_FLOOR: usize = 32;

pub const GROWTH_FACTOR: usize = 2;

/// The heap shrinks once fewer than `capacity / SHRINK_TRIGGER` items remain.
pub const SHRINK_TRIGGER: usize = 4;

pub const SHRINK_FACTOR: usize = 2;

/// Capacity after a grow step. A zero capacity grows to one.
pub(crate) fn grown(capacity: usize) -> usize {
    (capacity * GROWTH_FACTOR).max(1)
}

/// Capacity after a shrink step, or `None` if the heap should keep its storage.
pub(crate) fn shrunk(capacity: usize, len: usize) -> Option<usize> {
    if len < capacity / SHRINK_TRIGGER && capacity > SHRINK_FLOOR {
        Some((capacity / SHRINK_FACTOR).max(len))
    } else {
        None
    }
}
