//! A fixed-capacity buffer that drops its oldest element when full.

use std::collections::VecDeque;
use std::collections::vec_deque;

/// A fixed-capacity circular buffer with O(1) push operations.
///
/// When the buffer reaches capacity, new elements evict the oldest ones.
#[derive(Clone, Debug)]
pub struct RingBuffer<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> RingBuffer<T> {
    /// Creates a new ring buffer with the specified capacity.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "RingBuffer capacity must be greater than 0");

        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Adds an element to the back of the buffer, evicting the oldest if full.
    pub fn push(&mut self, item: T) {
        if self.items.len() == self.capacity {
            self.items.pop_front();
        }
        self.items.push_back(item);
    }

    /// Index 0 is the oldest element.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterates from oldest to newest.
    pub fn iter(&self) -> vec_deque::Iter<'_, T> {
        self.items.iter()
    }

    /// Collects all elements into a `Vec`.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.iter().cloned().collect()
    }
}

impl<T> Extend<T> for RingBuffer<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<'a, T> IntoIterator for &'a RingBuffer<T> {
    type Item = &'a T;
    type IntoIter = vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_within_capacity() {
        let mut buf = RingBuffer::new(3);
        buf.push(1);
        buf.push(2);
        assert_eq!(buf.len(), 2);
        assert_eq!(buf.to_vec(), vec![1, 2]);
    }

    #[test]
    fn test_overwrites_oldest() {
        let mut buf = RingBuffer::new(3);
        buf.extend(1..=5);
        assert_eq!(buf.len(), 3);
        assert_eq!(buf.capacity(), 3);
        assert_eq!(buf.to_vec(), vec![3, 4, 5]);
        assert_eq!(buf.get(0), Some(&3));
        assert_eq!(buf.get(3), None);
    }

    #[test]
    fn test_clear() {
        let mut buf = RingBuffer::new(2);
        buf.extend(["a", "b"]);
        buf.clear();
        assert!(buf.is_empty());
        buf.push("c");
        assert_eq!(buf.to_vec(), vec!["c"]);
    }

    #[test]
    #[should_panic(expected = "capacity must be greater than 0")]
    fn test_zero_capacity_panics() {
        let _ = RingBuffer::<u8>::new(0);
    }
}
