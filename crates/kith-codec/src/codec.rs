//! Encode and decode between a live graph and its wire blob.

use std::collections::{BTreeMap, HashMap, VecDeque};

use kith_graph::{PersonGraph, PersonId};

use crate::{BlobPerson, CodecError, GraphBlob};

/// A graph rebuilt from a blob, with the node the blob designated as root.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded {
    /// The rebuilt graph, holding exactly the nodes of the blob's table.
    pub graph: PersonGraph,
    /// Id of the root node within `graph`.
    pub root: PersonId,
}

/// Serializes the subgraph reachable from `root` to pretty-printed JSON
/// bytes.
///
/// Fails with [`CodecError::MissingRoot`] when `root` is not in the graph.
/// The traversal is read-only.
pub fn encode(graph: &PersonGraph, root: PersonId) -> Result<Vec<u8>, CodecError> {
    flatten(graph, root)?.to_bytes()
}

/// Flattens the subgraph reachable from `root` into its wire form.
///
/// The walk is breadth-first behind a visited set, so cyclic graphs
/// terminate with each node recorded exactly once. Synthetic identifiers
/// come from a per-call counter in first-seen order: a node is assigned its
/// id either as the root or the first time a visited friend lists it.
pub fn flatten(graph: &PersonGraph, root: PersonId) -> Result<GraphBlob, CodecError> {
    if !graph.contains(root) {
        return Err(CodecError::MissingRoot(root));
    }

    let root_key = "0".to_owned();
    let mut counter = 1u64;
    let mut assigned: HashMap<PersonId, String> = HashMap::from([(root, root_key.clone())]);
    let mut frontier = VecDeque::from([(root, root_key.clone())]);

    let mut objects = BTreeMap::new();
    while let Some((id, key)) = frontier.pop_front() {
        let person = &graph[id];
        let mut friends = Vec::with_capacity(person.friends().len());
        for &friend in person.friends() {
            let friend_key = if let Some(known) = assigned.get(&friend) {
                known.clone()
            } else {
                let fresh = counter.to_string();
                counter += 1;
                assigned.insert(friend, fresh.clone());
                frontier.push_back((friend, fresh.clone()));
                fresh
            };
            friends.push(friend_key);
        }

        objects.insert(
            key,
            BlobPerson {
                name: person.name().to_owned(),
                born_in: person.born_in(),
                friends,
            },
        );
    }

    tracing::debug!(
        people = objects.len(),
        root_id = %root_key,
        "flattened reachable subgraph"
    );
    Ok(GraphBlob {
        objects,
        root_id: root_key,
    })
}

/// Parses a blob and rebuilds the graph it describes.
///
/// Equivalent to [`GraphBlob::from_bytes`] followed by [`rebuild`].
pub fn decode(bytes: &[u8]) -> Result<Decoded, CodecError> {
    rebuild(&GraphBlob::from_bytes(bytes)?)
}

/// Rebuilds a graph from its parsed wire form in two phases.
///
/// Phase 1 allocates one node per table entry, relations left empty.
/// Phase 2 wires every listed friendship through
/// [`PersonGraph::befriend`], whose duplicate check makes the symmetric
/// double listing (A lists B, B lists A) land as a single edge and makes
/// rewiring a no-op. Cycles need no special casing: every node already
/// exists when the first relation is wired.
pub fn rebuild(blob: &GraphBlob) -> Result<Decoded, CodecError> {
    let entries = blob.ordered_entries();

    let mut graph = PersonGraph::new();
    let mut allocated = Vec::with_capacity(entries.len());
    for &(_, person) in &entries {
        allocated.push(graph.add_person(person.name.clone(), person.born_in));
    }
    let by_key: HashMap<&str, PersonId> = entries
        .iter()
        .map(|&(key, _)| key.as_str())
        .zip(allocated.iter().copied())
        .collect();

    for (&(key, person), &holder) in entries.iter().zip(&allocated) {
        for reference in &person.friends {
            let friend = by_key.get(reference.as_str()).copied().ok_or_else(|| {
                CodecError::DanglingFriend {
                    holder: key.clone(),
                    reference: reference.clone(),
                }
            })?;
            graph
                .befriend(holder, friend)
                .map_err(|_| CodecError::DanglingFriend {
                    holder: key.clone(),
                    reference: reference.clone(),
                })?;
        }
    }

    let root = by_key
        .get(blob.root_id.as_str())
        .copied()
        .ok_or_else(|| CodecError::DanglingRoot(blob.root_id.clone()))?;

    tracing::debug!(people = graph.len(), root = %root, "rebuilt graph from blob");
    Ok(Decoded { graph, root })
}
