//! Persistent stack and queue.
//!
//! Both collections are immutable: every operation returns a new collection
//! and leaves the receiver untouched, so any number of older versions can be
//! held and used concurrently. Structure is shared through [`std::rc::Rc`],
//! which keeps `push`/`enqueue`/`pop` at O(1).
//!
//! ## Usage
//!
//! ```rust
//! use kith_collections::Stack;
//!
//! let base = Stack::new().push(1).push(2);
//! let taller = base.push(3);
//!
//! assert_eq!(taller.peek(), Some(&3));
//! assert_eq!(base.peek(), Some(&2)); // base is unchanged
//! ```

mod queue;
mod stack;

pub use queue::Queue;
pub use stack::Stack;
