//! The arena of people and the relation operations over it.

use std::collections::{HashMap, HashSet, VecDeque};
use std::ops::Index;

use chrono::NaiveDateTime;

use crate::{GraphError, Person, PersonId};

/// An arena of [`Person`] nodes linked by symmetric friendships.
///
/// Nodes live in a `Vec` and address each other by [`PersonId`] index, so a
/// cycle is ordinary data: an id in a friend list is just an index back into
/// the same arena, with no ownership between nodes.
///
/// Invariants maintained by the mutating operations:
/// - every id stored in a friend list was issued by this graph;
/// - friend lists never contain duplicates;
/// - every edge except a self-loop appears in both endpoints' lists.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersonGraph {
    people: Vec<Person>,
}

impl PersonGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self { people: Vec::new() }
    }

    /// Adds a person with no relations and returns their id.
    pub fn add_person(&mut self, name: impl Into<String>, born_in: NaiveDateTime) -> PersonId {
        let id = PersonId::new(self.people.len() as u32);
        self.people.push(Person::new(name, born_in));
        id
    }

    /// The person with this id, or `None` for an id this graph never
    /// issued.
    pub fn person(&self, id: PersonId) -> Option<&Person> {
        self.people.get(id.as_usize())
    }

    /// `true` when `id` was issued by this graph.
    pub fn contains(&self, id: PersonId) -> bool {
        id.as_usize() < self.people.len()
    }

    /// Establishes the friendship between `a` and `b`, mutating both
    /// endpoints so the relation stays symmetric.
    ///
    /// Befriending an existing friend is a no-op; the returned flag tells
    /// whether the edge is new. `befriend(a, a)` records a self-loop as a
    /// single entry in `a`'s list.
    pub fn befriend(&mut self, a: PersonId, b: PersonId) -> Result<bool, GraphError> {
        if !self.contains(a) {
            return Err(GraphError::PersonNotFound(a));
        }
        if !self.contains(b) {
            return Err(GraphError::PersonNotFound(b));
        }

        // Symmetry invariant: the edge is either on both sides or neither,
        // so one side answers whether it is new.
        let newly_added = self.people[a.as_usize()].add_friend(b);
        if a != b {
            self.people[b.as_usize()].add_friend(a);
        }
        Ok(newly_added)
    }

    /// `true` when `a` lists `b` as a friend (for `a == b`, when `a` has a
    /// self-loop).
    pub fn are_friends(&self, a: PersonId, b: PersonId) -> bool {
        self.person(a).is_some_and(|person| person.is_friend_of(b))
    }

    /// Number of people in the graph.
    pub fn len(&self) -> usize {
        self.people.len()
    }

    /// `true` when the graph holds no people.
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// All ids in creation order.
    pub fn ids(&self) -> impl Iterator<Item = PersonId> + '_ {
        (0..self.people.len() as u32).map(PersonId::new)
    }

    /// People with their ids, in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (PersonId, &Person)> + '_ {
        self.people
            .iter()
            .enumerate()
            .map(|(i, person)| (PersonId::new(i as u32), person))
    }

    /// Ids reachable from `root` through friendships, in breadth-first
    /// discovery order starting at `root`.
    ///
    /// Each id appears exactly once; the visited set makes cycles and
    /// self-loops terminate like any other edge.
    pub fn reachable_from(&self, root: PersonId) -> Result<Vec<PersonId>, GraphError> {
        if !self.contains(root) {
            return Err(GraphError::PersonNotFound(root));
        }

        let mut visited = HashSet::from([root]);
        let mut order = Vec::new();
        let mut frontier = VecDeque::from([root]);
        while let Some(id) = frontier.pop_front() {
            order.push(id);
            for &friend in self[id].friends() {
                if visited.insert(friend) {
                    frontier.push_back(friend);
                }
            }
        }
        Ok(order)
    }

    /// Structural equality of the subgraphs reachable from `self_root` and
    /// `other_root`: same names, same birth dates, same friendship shape,
    /// with the two graphs free to label their nodes differently.
    ///
    /// The correspondence pairs the i-th node discovered breadth-first on
    /// each side, then checks that paired nodes agree on attributes and
    /// that their friend sets map onto each other. Friendship is a set
    /// relation, so friend-list order does not participate.
    pub fn isomorphic(
        &self,
        self_root: PersonId,
        other: &PersonGraph,
        other_root: PersonId,
    ) -> Result<bool, GraphError> {
        let left_order = self.reachable_from(self_root)?;
        let right_order = other.reachable_from(other_root)?;
        if left_order.len() != right_order.len() {
            return Ok(false);
        }

        let pairing: HashMap<PersonId, PersonId> = left_order
            .iter()
            .copied()
            .zip(right_order.iter().copied())
            .collect();

        for (&left_id, &right_id) in left_order.iter().zip(&right_order) {
            let left = &self[left_id];
            let right = &other[right_id];
            if left.name() != right.name() || left.born_in() != right.born_in() {
                return Ok(false);
            }
            if left.friends().len() != right.friends().len() {
                return Ok(false);
            }

            let mapped: HashSet<Option<PersonId>> = left
                .friends()
                .iter()
                .map(|friend| pairing.get(friend).copied())
                .collect();
            let expected: HashSet<Option<PersonId>> =
                right.friends().iter().map(|&friend| Some(friend)).collect();
            if mapped != expected {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

impl Index<PersonId> for PersonGraph {
    type Output = Person;

    /// # Panics
    ///
    /// Panics when `id` was not issued by this graph; [`PersonGraph::person`]
    /// returns `None` instead. Ids read out of friend lists always index
    /// successfully.
    fn index(&self, id: PersonId) -> &Person {
        &self.people[id.as_usize()]
    }
}
