//! People and their identifiers.

use std::fmt::{self, Display};

use chrono::NaiveDateTime;

/// Identifier of a person within one [`PersonGraph`](crate::PersonGraph).
///
/// Ids are arena indices: dense, zero-based, assigned in creation order.
/// An id is meaningful only for the graph that issued it; it is not a wire
/// identifier and is not stable across encode calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PersonId(u32);

impl PersonId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the id as a `usize` for arena indexing.
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for PersonId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<PersonId> for u32 {
    fn from(id: PersonId) -> Self {
        id.0
    }
}

/// A node in the friendship graph.
///
/// Fields are private: reads go through accessors, and relation changes go
/// through [`PersonGraph::befriend`](crate::PersonGraph::befriend), which
/// keeps every friend list duplicate-free and every friendship symmetric.
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    name: String,
    born_in: NaiveDateTime,
    friends: Vec<PersonId>,
}

impl Person {
    /// Creates a person with no relations. People enter a graph through
    /// [`PersonGraph::add_person`](crate::PersonGraph::add_person).
    pub(crate) fn new(name: impl Into<String>, born_in: NaiveDateTime) -> Self {
        Self {
            name: name.into(),
            born_in,
            friends: Vec::new(),
        }
    }

    /// The person's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// When the person was born.
    pub fn born_in(&self) -> NaiveDateTime {
        self.born_in
    }

    /// Ids of this person's friends, oldest relation first.
    pub fn friends(&self) -> &[PersonId] {
        &self.friends
    }

    /// `true` when `other` appears in this person's friend list.
    pub fn is_friend_of(&self, other: PersonId) -> bool {
        self.friends.contains(&other)
    }

    /// Appends `friend` unless already present; returns whether the list
    /// changed.
    pub(crate) fn add_friend(&mut self, friend: PersonId) -> bool {
        if self.friends.contains(&friend) {
            return false;
        }
        self.friends.push(friend);
        true
    }
}
