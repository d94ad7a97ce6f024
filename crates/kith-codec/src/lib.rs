//! # kith-codec: the graph wire codec
//!
//! Serializes the subgraph of a [`PersonGraph`](kith_graph::PersonGraph)
//! reachable from a chosen root into a self-contained JSON blob, and
//! rebuilds an isomorphic graph from such a blob.
//!
//! The wire form is a flat node table plus a root reference:
//!
//! ```json
//! {
//!   "objects": {
//!     "0": { "name": "Ivan", "born_in": "2020-04-12T00:00:00", "friends": ["1"] },
//!     "1": { "name": "Petr", "born_in": "2021-09-27T00:00:00", "friends": ["0"] }
//!   },
//!   "root_id": "0"
//! }
//! ```
//!
//! Cycles never recurse: [`encode`] walks breadth-first behind a visited
//! set, assigning each node a synthetic identifier the first time it is
//! seen, and [`decode`] rebuilds in two phases. Every node is allocated
//! before any relation is wired, so forward and backward references both
//! resolve against the finished table. Synthetic identifiers mean nothing
//! outside their blob and are not stable across encode calls.

mod blob;
mod codec;
mod error;

pub use blob::{BlobPerson, GraphBlob};
pub use codec::{Decoded, decode, encode, flatten, rebuild};
pub use error::CodecError;
