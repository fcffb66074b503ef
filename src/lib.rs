pub mod config;
pub mod error;
pub mod heap;

pub use error::HeapError;
pub use heap::MaxHeap;
