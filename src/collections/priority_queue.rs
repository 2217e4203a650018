//! `PriorityQueue` — a max-priority queue implemented with a binary heap.
//!
//! The heap lives in a dense, zero-indexed `Vec` describing a complete binary
//! tree: the parent of slot `i` is `(i - 1) / 2` and its children are `2i + 1`
//! and `2i + 2`. For every non-root slot `i` the comparator never ranks `i`
//! above its parent.
//!
//! Ordering comes entirely from a [`Comparator`]; the queue itself assumes
//! nothing about `T`. Only insert and extract-max are exposed: there is no
//! decrease-key and no removal of arbitrary elements.
//!
//! ### Performance Characteristics
//! | Operation | Complexity |
//! |-----------|------------|
//! | `enqueue` | \(O(\log n)\) |
//! | `dequeue_max` | \(O(\log n)\) |
//! | `peek_max` | \(O(1)\) |
//! | `len` / `is_empty` | \(O(1)\) |

use core::fmt;
use core::mem;

use thiserror::Error;

use super::comparator::{Comparator, NaturalOrder};
use crate::invariant::math_assert_msg;

/// Returned when `dequeue_max` or `peek_max` is called on an empty queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("priority queue is empty")]
pub struct EmptyQueueError;

#[inline(always)]
const fn parent(i: usize) -> usize {
    (i - 1) / 2
}

#[inline(always)]
const fn left_child(i: usize) -> usize {
    2 * i + 1
}

/// A max-priority queue ordered by a caller-supplied comparator.
///
/// The default comparator is [`NaturalOrder`], so `PriorityQueue<i32>` pops
/// the largest integer first.
pub struct PriorityQueue<T, C = NaturalOrder> {
    heap: Vec<T>,
    comparator: C,
}

impl<T: Ord> PriorityQueue<T, NaturalOrder> {
    /// Creates an empty queue ordered by `Ord` (largest first).
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }

    /// Creates an empty queue ordered by `Ord` with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, NaturalOrder)
    }
}

impl<T, C: Comparator<T>> PriorityQueue<T, C> {
    /// Creates an empty queue ordered by `comparator`.
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            heap: Vec::new(),
            comparator,
        }
    }

    /// Creates an empty queue ordered by `comparator` with room for `capacity` elements.
    pub fn with_capacity_and_comparator(capacity: usize, comparator: C) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            comparator,
        }
    }

    /// Returns the number of queued elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` if nothing is queued.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of slots allocated for the heap.
    pub fn capacity(&self) -> usize {
        self.heap.capacity()
    }

    /// Returns the comparator ordering this queue.
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Adds `value` to the queue.
    pub fn enqueue(&mut self, value: T) {
        self.heap.push(value);
        self.sift_up(self.heap.len() - 1);
    }

    /// Removes and returns the element with the highest priority.
    ///
    /// # Errors
    /// Returns [`EmptyQueueError`] if the queue holds no elements.
    pub fn dequeue_max(&mut self) -> Result<T, EmptyQueueError> {
        if self.heap.is_empty() {
            return Err(EmptyQueueError);
        }
        let last = self.heap.len() - 1;
        self.heap.swap(0, last);
        let max = self.heap.pop().ok_or(EmptyQueueError)?;
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Ok(max)
    }

    /// Returns the element with the highest priority without removing it.
    ///
    /// # Errors
    /// Returns [`EmptyQueueError`] if the queue holds no elements.
    pub fn peek_max(&self) -> Result<&T, EmptyQueueError> {
        self.heap.first().ok_or(EmptyQueueError)
    }

    /// Drops every queued element, keeping the allocation.
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Dequeues every element, highest priority first.
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, T, C> {
        DrainSorted { queue: self }
    }

    /// Checks the heap relation over the whole backing array.
    ///
    /// Always `true` for a well-behaved comparator; useful in tests and when
    /// auditing a comparator suspected of being inconsistent.
    pub fn is_heap(&self) -> bool {
        (1..self.heap.len())
            .all(|i| !self.comparator.outranks(&self.heap[i], &self.heap[parent(i)]))
    }

    fn sift_up(&mut self, mut node: usize) {
        while node > 0 {
            let up = parent(node);
            if !self.comparator.outranks(&self.heap[node], &self.heap[up]) {
                break;
            }
            self.heap.swap(node, up);
            node = up;
        }
        // Only the resting slot is checked; inconsistent comparators must not panic.
        if node > 0 {
            math_assert_msg(
                !self.comparator.outranks(&self.heap[node], &self.heap[parent(node)]),
                "sift_up left a child above its parent",
            );
        }
    }

    fn sift_down(&mut self, mut node: usize) {
        let len = self.heap.len();
        loop {
            let left = left_child(node);
            if left >= len {
                break;
            }
            let right = left + 1;
            // Right wins ties between siblings.
            let chosen =
                if right < len && !self.comparator.outranks(&self.heap[left], &self.heap[right]) {
                    right
                } else {
                    left
                };
            if !self.comparator.outranks(&self.heap[chosen], &self.heap[node]) {
                break;
            }
            self.heap.swap(node, chosen);
            node = chosen;
        }
        math_assert_msg(
            left_child(node) >= len
                || !self.comparator.outranks(&self.heap[left_child(node)], &self.heap[node]),
            "sift_down stopped below a higher-priority child",
        );
    }
}

impl<T, C> PriorityQueue<T, C> {
    /// Iterates over queued elements in storage (level) order.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.heap.iter()
    }

    /// Returns the backing heap array in storage order.
    pub fn as_slice(&self) -> &[T] {
        &self.heap
    }

    /// Approximate memory held by the queue: the struct plus every allocated slot.
    pub fn bytes_used(&self) -> usize {
        mem::size_of::<Self>() + self.heap.capacity() * mem::size_of::<T>()
    }

    /// Names the storage strategy.
    pub fn implementation_name(&self) -> &'static str {
        "binary heap"
    }

    /// Consumes the queue, returning the backing array in storage order.
    pub fn into_vec(self) -> Vec<T> {
        self.heap
    }
}

/// Iterator returned by [`PriorityQueue::drain_sorted`].
pub struct DrainSorted<'a, T, C: Comparator<T>> {
    queue: &'a mut PriorityQueue<T, C>,
}

impl<T, C: Comparator<T>> Iterator for DrainSorted<'_, T, C> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.queue.dequeue_max().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.queue.len();
        (len, Some(len))
    }
}

impl<T, C: Comparator<T>> ExactSizeIterator for DrainSorted<'_, T, C> {}

impl<T, C: Comparator<T>> Extend<T> for PriorityQueue<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.heap.reserve(iter.size_hint().0);
        for value in iter {
            self.enqueue(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for PriorityQueue<T, NaturalOrder> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<T: Ord> Default for PriorityQueue<T, NaturalOrder> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, C> fmt::Debug for PriorityQueue<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("len", &self.heap.len())
            .field("heap", &self.heap)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collections::comparator::{LowestFirst, LowestKeyFirst};
    use core::cmp::Ordering;

    #[test]
    fn test_priority_queue_basic() {
        let mut pq = PriorityQueue::new();
        pq.enqueue(1);
        pq.enqueue(5);
        pq.enqueue(2);
        pq.enqueue(10);

        assert_eq!(pq.peek_max(), Ok(&10));
        assert_eq!(pq.dequeue_max(), Ok(10));
        assert_eq!(pq.peek_max(), Ok(&5));
        assert_eq!(pq.dequeue_max(), Ok(5));
        assert_eq!(pq.dequeue_max(), Ok(2));
        assert_eq!(pq.dequeue_max(), Ok(1));
        assert_eq!(pq.dequeue_max(), Err(EmptyQueueError));
    }

    #[test]
    fn test_fresh_queue_is_empty() {
        let mut pq: PriorityQueue<u8> = PriorityQueue::new();
        assert!(pq.is_empty());
        assert_eq!(pq.len(), 0);
        assert_eq!(pq.peek_max(), Err(EmptyQueueError));
        assert_eq!(pq.dequeue_max(), Err(EmptyQueueError));
    }

    #[test]
    fn test_priority_queue_order_with_duplicates() {
        let data = vec![1, 10, 5, 2, 8, 3, 7, 5, 10, 1];
        let mut pq: PriorityQueue<_> = data.iter().copied().collect();
        assert!(pq.is_heap());

        let result: Vec<_> = pq.drain_sorted().collect();
        let mut expected = data;
        expected.sort_unstable();
        expected.reverse();
        assert_eq!(result, expected);
        assert!(pq.is_empty());
    }

    #[test]
    fn test_lowest_first_comparator() {
        let mut pq = PriorityQueue::with_comparator(LowestFirst);
        pq.extend([9, 4, 7, 1]);
        assert_eq!(pq.dequeue_max(), Ok(1));
        assert_eq!(pq.dequeue_max(), Ok(4));
        assert_eq!(pq.len(), 2);
    }

    #[test]
    fn test_closure_comparator_over_non_ord_type() {
        let mut pq = PriorityQueue::with_comparator(|a: &f64, b: &f64| a.total_cmp(b));
        pq.extend([0.5, -3.0, 2.25, 1.0]);
        assert_eq!(pq.dequeue_max(), Ok(2.25));
        assert_eq!(pq.dequeue_max(), Ok(1.0));
    }

    #[test]
    fn test_storage_layout_after_enqueue() {
        let mut pq = PriorityQueue::new();
        pq.extend([3, 1, 2, 5]);
        // 5 bubbles through slot 1 to the root.
        assert_eq!(pq.as_slice(), &[5, 3, 2, 1]);
        assert!(pq.is_heap());
    }

    #[test]
    fn test_sibling_tie_prefers_right() {
        let mut pq = PriorityQueue::with_comparator(LowestKeyFirst(|p: &(u32, char)| p.0));
        pq.extend([(0, 'r'), (1, 'a'), (1, 'b'), (9, 'z')]);
        assert_eq!(pq.as_slice(), &[(0, 'r'), (1, 'a'), (1, 'b'), (9, 'z')]);
        assert_eq!(pq.dequeue_max(), Ok((0, 'r')));
        // (9, 'z') moved to the root and sank towards the right twin.
        assert_eq!(pq.as_slice(), &[(1, 'b'), (1, 'a'), (9, 'z')]);
    }

    #[test]
    fn test_size_tracks_enqueues_and_dequeues() {
        let mut pq = PriorityQueue::new();
        for i in 0..20 {
            pq.enqueue(i % 7);
        }
        for _ in 0..8 {
            pq.dequeue_max().unwrap();
        }
        assert_eq!(pq.len(), 12);
        assert!(!pq.is_empty());
        pq.clear();
        assert!(pq.is_empty());
    }

    #[test]
    fn test_sift_checks_tolerate_inconsistent_comparators() {
        // Nothing ever outranks anything: no sift moves an element.
        let mut never = PriorityQueue::with_comparator(|_: &u8, _: &u8| Ordering::Less);
        never.extend([3, 1, 2, 5, 4]);
        assert_eq!(never.as_slice(), &[3, 1, 2, 5, 4]);
        assert_eq!(never.dequeue_max(), Ok(3));
        assert_eq!(never.as_slice(), &[4, 1, 2, 5]);

        // Everything outranks everything: every sift runs to the end of its path.
        let mut always = PriorityQueue::with_comparator(|_: &u8, _: &u8| Ordering::Greater);
        always.extend(0..16);
        assert_eq!(always.drain_sorted().count(), 16);
    }

    #[test]
    fn test_bytes_used_and_name() {
        let pq: PriorityQueue<u64> = PriorityQueue::with_capacity(16);
        assert!(pq.bytes_used() >= 16 * mem::size_of::<u64>());
        assert_eq!(pq.implementation_name(), "binary heap");
    }
}
