//! Relation invariants under arbitrary befriend sequences: symmetry,
//! duplicate-freedom, and idempotence.

use chrono::NaiveDate;
use kith_graph::{PersonGraph, PersonId};
use proptest::prelude::*;

/// Builds an `n`-person graph and applies every `(a, b)` pair as a
/// friendship, reducing indices modulo `n` so they always land in the
/// graph.
fn build(n: u32, edges: &[(u32, u32)]) -> PersonGraph {
    let mut graph = PersonGraph::new();
    for i in 0..n {
        let born = NaiveDate::from_ymd_opt(2000, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
            + chrono::Duration::days(i64::from(i));
        graph.add_person(format!("p{i}"), born);
    }
    for &(a, b) in edges {
        graph
            .befriend(PersonId::new(a % n), PersonId::new(b % n))
            .expect("ids are reduced into range");
    }
    graph
}

proptest! {
    #[test]
    fn friendships_stay_symmetric_and_duplicate_free(
        n in 1u32..16,
        edges in prop::collection::vec((any::<u32>(), any::<u32>()), 0..64),
    ) {
        let graph = build(n, &edges);

        for (id, person) in graph.iter() {
            // No duplicates anywhere
            let mut seen = std::collections::HashSet::new();
            for &friend in person.friends() {
                prop_assert!(seen.insert(friend), "duplicate friend {friend} on {id}");
                // Every edge is listed from both ends
                prop_assert!(graph.are_friends(friend, id));
            }
        }
    }

    #[test]
    fn repeating_every_edge_changes_nothing(
        n in 1u32..16,
        edges in prop::collection::vec((any::<u32>(), any::<u32>()), 0..32),
    ) {
        let once = build(n, &edges);

        let doubled: Vec<(u32, u32)> = edges
            .iter()
            .flat_map(|&(a, b)| [(a, b), (b, a)])
            .collect();
        let twice = build(n, &doubled);

        prop_assert_eq!(once, twice);
    }
}
