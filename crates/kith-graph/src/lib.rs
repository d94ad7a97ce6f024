//! # kith-graph: the friendship graph
//!
//! A mutable, cyclic, undirected graph of people:
//! - [`Person`] is a node with a name, a birth date, and a friend list.
//! - [`PersonId`] is an arena index identifying a node within one graph.
//! - [`PersonGraph`] is the arena itself, plus traversal and comparison.
//!
//! Nodes reference each other by [`PersonId`] rather than by pointer, so
//! mutual friendships and cycles are plain data: a friend list is a list of
//! indices into the same arena. Friendships are symmetric and
//! duplicate-free; both properties are maintained by
//! [`PersonGraph::befriend`], the only relation-mutating operation.
//!
//! ## Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use kith_graph::PersonGraph;
//!
//! let mut graph = PersonGraph::new();
//! let ivan = graph.add_person("Ivan", NaiveDate::from_ymd_opt(2020, 4, 12).unwrap().into());
//! let petr = graph.add_person("Petr", NaiveDate::from_ymd_opt(2021, 9, 27).unwrap().into());
//!
//! graph.befriend(ivan, petr)?;
//! assert!(graph.are_friends(petr, ivan));
//! # Ok::<(), kith_graph::GraphError>(())
//! ```

mod error;
mod graph;
mod person;

pub use error::GraphError;
pub use graph::PersonGraph;
pub use person::{Person, PersonId};
