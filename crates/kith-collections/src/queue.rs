//! Persistent FIFO queue built from two stacks.
//!
//! # Algorithm
//!
//! `front` holds the next elements out, oldest on top; `back` holds newly
//! enqueued elements, newest on top. `enqueue` pushes onto `back` in O(1).
//! `dequeue` pops `front`; when `front` is exhausted the whole of `back` is
//! reversed into a fresh `front`. The reversal costs O(n) once per n
//! enqueued elements, so the amortized cost per operation stays O(1).

use std::fmt;

use crate::Stack;

/// An immutable FIFO queue with O(1) `enqueue` and amortized O(1) `dequeue`.
///
/// Cloning is O(1): clones share the underlying stacks.
pub struct Queue<T> {
    /// Next elements out, oldest on top.
    front: Stack<T>,
    /// Newly enqueued elements, newest on top.
    back: Stack<T>,
}

impl<T> Queue<T> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            front: Stack::new(),
            back: Stack::new(),
        }
    }

    /// Returns a new queue with `value` at the rear. The receiver is
    /// unchanged.
    pub fn enqueue(&self, value: T) -> Self {
        Self {
            front: self.front.clone(),
            back: self.back.push(value),
        }
    }

    /// Returns the element at the head of the queue, or `None` when empty.
    pub fn peek(&self) -> Option<&T> {
        // When front is exhausted the oldest element sits at the bottom of
        // back.
        self.front.peek().or_else(|| self.back.iter().last())
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.front.len() + self.back.len()
    }

    /// `true` when the queue holds no elements.
    pub fn is_empty(&self) -> bool {
        self.front.is_empty() && self.back.is_empty()
    }

    /// Iterates from the head of the queue to the rear.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        let mut rear: Vec<&T> = self.back.iter().collect();
        rear.reverse();
        self.front.iter().chain(rear)
    }
}

impl<T: Clone> Queue<T> {
    /// Returns the queue after removing the head element, or `None` when
    /// empty.
    ///
    /// The removed value itself is read with [`peek`](Self::peek) before
    /// dequeuing. `Clone` is needed only for the reversal of `back`: the
    /// receiver keeps its own stacks, so reversing must copy elements.
    pub fn dequeue(&self) -> Option<Self> {
        if let Some(front) = self.front.pop() {
            return Some(Self {
                front,
                back: self.back.clone(),
            });
        }
        // Front exhausted: reverse back into a fresh front, then drop its
        // head.
        let front = self.back.reversed().pop()?;
        Some(Self {
            front,
            back: Stack::new(),
        })
    }
}

impl<T> Clone for Queue<T> {
    fn clone(&self) -> Self {
        Self {
            front: self.front.clone(),
            back: self.back.clone(),
        }
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for Queue<T> {
    /// Queues compare by element sequence; how elements are split between
    /// the two stacks is not observable.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Queue<T> {}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |acc, value| acc.enqueue(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enqueue_then_dequeue_in_fifo_order() {
        let queue = Queue::new().enqueue(1).enqueue(2).enqueue(3);

        assert_eq!(queue.peek(), Some(&1));
        let after_one = queue.dequeue().unwrap();
        assert_eq!(after_one.peek(), Some(&2));
        let after_two = after_one.dequeue().unwrap();
        assert_eq!(after_two.peek(), Some(&3));
        assert!(after_two.dequeue().unwrap().is_empty());
    }

    #[test]
    fn dequeue_empty_is_none() {
        let queue: Queue<i32> = Queue::new();
        assert!(queue.dequeue().is_none());
        assert!(queue.peek().is_none());
        assert_eq!(queue.len(), 0);
    }

    #[test]
    fn older_versions_are_untouched() {
        let base = Queue::new().enqueue("a").enqueue("b");
        let longer = base.enqueue("c");
        let shorter = base.dequeue().unwrap();

        assert_eq!(base.iter().copied().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(
            longer.iter().copied().collect::<Vec<_>>(),
            vec!["a", "b", "c"]
        );
        assert_eq!(shorter.iter().copied().collect::<Vec<_>>(), vec!["b"]);
    }

    #[test]
    fn order_survives_the_back_reversal() {
        // First dequeue drains front, forcing back to reverse over
        let queue: Queue<i32> = (1..=3).collect();
        let after_one = queue.dequeue().unwrap();
        let mixed = after_one.enqueue(4);

        assert_eq!(mixed.iter().copied().collect::<Vec<_>>(), vec![2, 3, 4]);
        assert_eq!(mixed.peek(), Some(&2));
    }

    #[test]
    fn equality_is_by_element_sequence() {
        // Same logical sequence, different front/back splits
        let settled: Queue<i32> = [1, 2, 3].into_iter().collect::<Queue<_>>();
        let settled = settled.dequeue().unwrap();
        let fresh: Queue<i32> = [2, 3].into_iter().collect();

        assert_eq!(settled, fresh);
        assert_ne!(settled, fresh.enqueue(4));
    }

    #[test]
    fn len_counts_both_stacks() {
        let queue: Queue<i32> = (1..=5).collect();
        let settled = queue.dequeue().unwrap().enqueue(6).enqueue(7);
        assert_eq!(settled.len(), 6);
        assert!(!settled.is_empty());
    }
}
