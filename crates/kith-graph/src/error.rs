//! Error type for graph operations.

use crate::PersonId;

/// Errors produced by [`PersonGraph`](crate::PersonGraph) operations.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// The id was not issued by this graph.
    #[error("person {0} is not in the graph")]
    PersonNotFound(PersonId),
}
