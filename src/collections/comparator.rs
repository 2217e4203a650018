//! Three-way priority comparators for [`PriorityQueue`](super::PriorityQueue).
//!
//! A comparator answers one question: which of two elements should leave the
//! queue first? `Ordering::Greater` means the *first* argument has the higher
//! priority, `Less` means the second one does, and `Equal` means neither wins.
//!
//! The queue never validates a comparator. A comparator that is not a total
//! order (for example one where `compare(a, b)` and `compare(b, a)` are both
//! `Greater`) yields an unspecified extraction order, never a panic.

use core::cmp::Ordering;
use core::fmt;

/// Orders queue elements by priority.
///
/// `compare(a, b) == Ordering::Greater` means `a` is dequeued before `b`.
pub trait Comparator<T: ?Sized> {
    /// Compares `a` against `b` by priority.
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// Returns `true` if `a` strictly outranks `b`.
    #[inline]
    fn outranks(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Greater
    }
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Larger values (per `Ord`) have higher priority.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Comparator<T> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Smaller values (per `Ord`) have higher priority.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LowestFirst;

impl<T: Ord + ?Sized> Comparator<T> for LowestFirst {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        b.cmp(a)
    }
}

/// Priority taken from a key: the larger key wins.
#[derive(Clone, Copy)]
pub struct ByKey<F>(pub F);

impl<T, K: Ord, F: Fn(&T) -> K> Comparator<T> for ByKey<F> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a).cmp(&(self.0)(b))
    }
}

impl<F> fmt::Debug for ByKey<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ByKey(..)")
    }
}

/// Priority taken from a key: the smaller key wins.
///
/// Both graph algorithms use this with a weight key.
#[derive(Clone, Copy)]
pub struct LowestKeyFirst<F>(pub F);

impl<T, K: Ord, F: Fn(&T) -> K> Comparator<T> for LowestKeyFirst<F> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(b).cmp(&(self.0)(a))
    }
}

impl<F> fmt::Debug for LowestKeyFirst<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LowestKeyFirst(..)")
    }
}
