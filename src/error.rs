use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// `op` was called on a heap holding no items.
    Empty { op: &'static str },
    /// A heap cannot be created with room for zero items.
    InvalidCapacity(usize),
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            HeapError::Empty { op } => write!(f, "{op} called on an empty heap"),
            HeapError::InvalidCapacity(capacity) => {
                write!(f, "invalid heap capacity {capacity}, must be at least 1")
            }
        }
    }
}

impl std::error::Error for HeapError {}
