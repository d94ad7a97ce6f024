//! The wire-level representation of a flattened graph.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::CodecError;

/// A flattened, self-contained subgraph: the node table plus the root
/// identifier.
///
/// Keys of `objects` are synthetic identifiers assigned at encode time in
/// first-seen order. The `BTreeMap` keeps serialization deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphBlob {
    /// Node table keyed by synthetic identifier.
    pub objects: BTreeMap<String, BlobPerson>,
    /// Identifier of the entry-point node.
    pub root_id: String,
}

/// One node record in the table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlobPerson {
    /// The person's name.
    pub name: String,
    /// ISO-8601 date-time without offset, e.g. `2020-04-12T00:00:00`.
    pub born_in: NaiveDateTime,
    /// Synthetic ids of the node's friends, in friend-list order.
    pub friends: Vec<String>,
}

impl GraphBlob {
    /// Serializes the blob to pretty-printed JSON bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CodecError> {
        Ok(serde_json::to_vec_pretty(self)?)
    }

    /// Parses a blob without rebuilding a graph from it.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CodecError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Table entries ordered for rebuilding: numeric identifiers first,
    /// ascending by value, then any non-numeric identifiers
    /// lexicographically.
    ///
    /// Rebuilding in assignment order keeps breadth-first discovery stable
    /// across a round trip, instead of following the table's lexicographic
    /// key order (where "10" sorts before "2").
    pub(crate) fn ordered_entries(&self) -> Vec<(&String, &BlobPerson)> {
        let mut entries: Vec<(&String, &BlobPerson)> = self.objects.iter().collect();
        entries.sort_by(|(a, _), (b, _)| key_rank(a).cmp(&key_rank(b)).then_with(|| a.cmp(b)));
        entries
    }
}

/// Numeric keys sort before non-numeric ones.
fn key_rank(key: &str) -> (u8, u64) {
    key.parse::<u64>().map_or((1, 0), |value| (0, value))
}
