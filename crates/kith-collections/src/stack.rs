//! Persistent stack backed by an `Rc` cons list.
//!
//! # Algorithm
//!
//! The stack is a singly linked list of reference-counted nodes with the top
//! at the head. `push` allocates one node pointing at the previous head;
//! `pop` returns a stack whose head is the next node down. Neither touches
//! existing nodes, so every older version keeps observing the list it was
//! built from.

use std::fmt;
use std::rc::Rc;

/// An immutable LIFO stack with O(1) `push`, `pop`, and `peek`.
///
/// Cloning is O(1): clones share the underlying nodes.
pub struct Stack<T> {
    /// Topmost node, `None` when the stack is empty.
    head: Option<Rc<Node<T>>>,
    /// Element count, tracked eagerly so `len` is O(1).
    len: usize,
}

struct Node<T> {
    value: T,
    next: Option<Rc<Node<T>>>,
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Returns a new stack with `value` on top. The receiver is unchanged.
    pub fn push(&self, value: T) -> Self {
        Self {
            head: Some(Rc::new(Node {
                value,
                next: self.head.clone(),
            })),
            len: self.len + 1,
        }
    }

    /// Returns the top element, or `None` when empty.
    pub fn peek(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.value)
    }

    /// Returns the stack below the top element, or `None` when empty.
    ///
    /// The removed value itself is read with [`peek`](Self::peek); splitting
    /// the two keeps `pop` free of any `Clone` bound.
    pub fn pop(&self) -> Option<Self> {
        self.head.as_deref().map(|node| Self {
            head: node.next.clone(),
            len: self.len - 1,
        })
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// `true` when the stack holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterates from the top of the stack down.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            cursor: self.head.as_deref(),
            remaining: self.len,
        }
    }
}

impl<T: Clone> Stack<T> {
    /// Returns a stack holding the same elements in reverse order.
    ///
    /// O(n); the result shares no nodes with the receiver.
    pub fn reversed(&self) -> Self {
        self.iter()
            .fold(Self::new(), |acc, value| acc.push(value.clone()))
    }
}

impl<T> Clone for Stack<T> {
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
            len: self.len,
        }
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Stack<T> {
    fn drop(&mut self) {
        // Unlink iteratively: the derived drop recurses once per node and
        // overflows the call stack on long chains. Stop at the first node
        // another stack still shares.
        let mut cursor = self.head.take();
        while let Some(node) = cursor {
            match Rc::try_unwrap(node) {
                Ok(mut inner) => cursor = inner.next.take(),
                Err(_) => break,
            }
        }
    }
}

impl<T: PartialEq> PartialEq for Stack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Stack<T> {}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for Stack<T> {
    /// Pushes elements in iteration order, so the last element ends on top.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), |acc, value| acc.push(value))
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// Iterator over stack elements, top to bottom.
pub struct Iter<'a, T> {
    cursor: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.cursor?;
        self.cursor = node.next.as_deref();
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
