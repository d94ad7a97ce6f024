//! Model-based checks: the persistent collections must agree with their
//! mutable standard-library counterparts and must never mutate older
//! versions.

use std::collections::VecDeque;

use kith_collections::{Queue, Stack};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Add(i64),
    Remove,
}

fn ops() -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(
        prop_oneof![any::<i64>().prop_map(Op::Add), Just(Op::Remove)],
        0..64,
    )
}

proptest! {
    #[test]
    fn stack_matches_vec_model(ops in ops()) {
        let mut model: Vec<i64> = Vec::new();
        let mut stack: Stack<i64> = Stack::new();

        for op in ops {
            match op {
                Op::Add(v) => {
                    model.push(v);
                    stack = stack.push(v);
                }
                Op::Remove => {
                    let expected = model.pop();
                    prop_assert_eq!(stack.peek().copied(), expected);
                    if let Some(rest) = stack.pop() {
                        stack = rest;
                    } else {
                        prop_assert!(expected.is_none());
                    }
                }
            }
            prop_assert_eq!(stack.len(), model.len());
        }

        // Top-to-bottom equals the model newest-to-oldest
        let drained: Vec<i64> = stack.iter().copied().collect();
        model.reverse();
        prop_assert_eq!(drained, model);
    }

    #[test]
    fn queue_matches_deque_model(ops in ops()) {
        let mut model: VecDeque<i64> = VecDeque::new();
        let mut queue: Queue<i64> = Queue::new();

        for op in ops {
            match op {
                Op::Add(v) => {
                    model.push_back(v);
                    queue = queue.enqueue(v);
                }
                Op::Remove => {
                    let expected = model.pop_front();
                    prop_assert_eq!(queue.peek().copied(), expected);
                    if let Some(rest) = queue.dequeue() {
                        queue = rest;
                    } else {
                        prop_assert!(expected.is_none());
                    }
                }
            }
            prop_assert_eq!(queue.len(), model.len());
        }

        let drained: Vec<i64> = queue.iter().copied().collect();
        let model_vec: Vec<i64> = model.into_iter().collect();
        prop_assert_eq!(drained, model_vec);
    }

    #[test]
    fn stack_snapshots_survive_later_operations(values in prop::collection::vec(any::<i64>(), 1..32)) {
        let mut snapshots = Vec::new();
        let mut stack = Stack::new();
        for &v in &values {
            stack = stack.push(v);
            snapshots.push((stack.clone(), v));
        }

        // Grow and shrink the newest version; snapshots must not move
        let _taller = stack.push(7);
        let _shorter = stack.pop();

        for (i, (snapshot, top)) in snapshots.iter().enumerate() {
            prop_assert_eq!(snapshot.len(), i + 1);
            prop_assert_eq!(snapshot.peek(), Some(top));
        }
    }

    #[test]
    fn queue_snapshots_survive_later_operations(values in prop::collection::vec(any::<i64>(), 1..32)) {
        let mut snapshots = Vec::new();
        let mut queue = Queue::new();
        for &v in &values {
            queue = queue.enqueue(v);
            snapshots.push((queue.clone(), v));
        }

        let _longer = queue.enqueue(7);
        let _shorter = queue.dequeue();

        for (i, (snapshot, _)) in snapshots.iter().enumerate() {
            prop_assert_eq!(snapshot.len(), i + 1);
            // Head is always the first value ever enqueued
            prop_assert_eq!(snapshot.peek(), Some(&values[0]));
        }
    }
}
