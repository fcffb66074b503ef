use crate::config::{self, DEFAULT_CAPACITY};
use crate::error::HeapError;

/// A max-priority queue backed by a binary heap in a contiguous buffer.
///
/// Positions are 1-based: the root lives at position 1 and the children of
/// position `i` are `2i` and `2i + 1`. Position `i` is stored at
/// `storage[i - 1]`.
///
/// The backing capacity follows the policy in [`config`](crate::config): it
/// doubles when an insert finds the buffer full, and halves on `pop_max`
/// once less than a quarter of it is in use.
#[derive(Clone, Debug)]
pub struct MaxHeap<T> {
    storage: Vec<T>,
    capacity: usize,
}

impl<T: Ord> MaxHeap<T> {
    /// Creates an empty heap with room for [`DEFAULT_CAPACITY`] items.
    pub fn new() -> Self {
        Self::allocate(DEFAULT_CAPACITY)
    }

    /// Creates an empty heap that will not reallocate until more than
    /// `capacity` items are inserted.
    pub fn with_capacity(capacity: usize) -> Result<Self, HeapError> {
        if capacity == 0 {
            return Err(HeapError::InvalidCapacity(capacity));
        }
        Ok(Self::allocate(capacity))
    }

    /// Builds a heap from `items` in linear time, reusing their buffer.
    pub fn from_vec(mut items: Vec<T>) -> Self {
        let len = items.len();
        let capacity = (len * 2).max(1);
        items.reserve_exact(capacity - len);
        let mut heap = Self {
            storage: items,
            capacity,
        };
        heap.heapify();
        heap
    }

    fn allocate(capacity: usize) -> Self {
        Self {
            storage: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn insert(&mut self, item: T) {
        if self.storage.len() == self.capacity {
            self.reallocate(config::grown(self.capacity));
        }
        self.storage.push(item);
        self.swim(self.storage.len());
    }

    /// Returns the greatest item without removing it.
    pub fn max(&self) -> Result<&T, HeapError> {
        self.storage.first().ok_or(HeapError::Empty { op: "max" })
    }

    /// Removes and returns the greatest item.
    pub fn pop_max(&mut self) -> Result<T, HeapError> {
        if self.storage.is_empty() {
            return Err(HeapError::Empty { op: "pop_max" });
        }
        if let Some(capacity) = config::shrunk(self.capacity, self.storage.len()) {
            self.reallocate(capacity);
        }
        // swap_remove moves the last item into the root slot.
        let max = self.storage.swap_remove(0);
        self.sink(1);
        Ok(max)
    }

    pub fn peek(&self) -> Option<&T> {
        self.max().ok()
    }

    pub fn pop(&mut self) -> Option<T> {
        self.pop_max().ok()
    }

    #[doc(alias = "empty")]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    #[doc(alias = "size")]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Number of items the heap holds before its next reallocation.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the items in heap order, root first.
    pub fn into_vec(self) -> Vec<T> {
        self.storage
    }

    /// Drains the heap into a vector sorted in ascending order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Some(item) = self.pop() {
            sorted.push(item);
        }
        sorted.reverse();
        sorted
    }

    fn reallocate(&mut self, capacity: usize) {
        log::debug!(
            "reallocating heap storage: {} -> {} slots, {} items",
            self.capacity,
            capacity,
            self.storage.len()
        );
        let mut storage = Vec::with_capacity(capacity);
        storage.append(&mut self.storage);
        self.storage = storage;
        self.capacity = capacity;
    }

    // Sinking from the last internal position up to the root is what makes
    // this linear; the opposite order does not yield a heap.
    fn heapify(&mut self) {
        let len = self.storage.len();
        log::trace!("heapifying {} items", len);
        for i in (1..=len / 2).rev() {
            self.sink(i);
        }
    }

    fn sink(&mut self, mut i: usize) {
        let len = self.storage.len();
        while 2 * i <= len {
            let mut child = 2 * i;
            // Ties go to the left child.
            if child < len && self.less(child, child + 1) {
                child += 1;
            }
            if !self.less(i, child) {
                break;
            }
            self.exchange(i, child);
            i = child;
        }
    }

    fn swim(&mut self, mut i: usize) {
        while i > 1 {
            let parent = i / 2;
            if !self.less(parent, i) {
                break;
            }
            self.exchange(i, parent);
            i = parent;
        }
    }

    #[inline]
    fn less(&self, i: usize, j: usize) -> bool {
        self.storage[i - 1] < self.storage[j - 1]
    }

    #[inline]
    fn exchange(&mut self, i: usize, j: usize) {
        self.storage.swap(i - 1, j - 1);
    }
}

impl<T: Ord> Default for MaxHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> From<Vec<T>> for MaxHeap<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_vec(items)
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for MaxHeap<T> {
    fn from(items: [T; N]) -> Self {
        Self::from_vec(Vec::from(items))
    }
}

impl<T: Ord> FromIterator<T> for MaxHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T: Ord> Extend<T> for MaxHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}
