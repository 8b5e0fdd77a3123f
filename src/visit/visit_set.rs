use std::{collections::HashSet, hash::BuildHasher};

use fixedbitset::FixedBitSet;
use rustc_hash::FxHashSet;

use crate::core::id::{IdType, VertexId};

/// Bookkeeping of the vertices a traversal has already seen.
///
/// Marks are never removed one by one, only all at once by
/// [`reset_visited`](VisitSet::reset_visited).
pub trait VisitSet<I: IdType> {
    /// Marks the vertex and returns `true` if it was not marked before.
    fn visit(&mut self, id: I) -> bool;

    fn is_visited(&self, id: &I) -> bool;

    fn visited_count(&self) -> usize;

    fn reset_visited(&mut self);
}

impl<I, S> VisitSet<I> for HashSet<I, S>
where
    I: IdType,
    S: BuildHasher,
{
    fn visit(&mut self, id: I) -> bool {
        self.insert(id)
    }

    fn is_visited(&self, id: &I) -> bool {
        self.contains(id)
    }

    fn visited_count(&self) -> usize {
        self.len()
    }

    fn reset_visited(&mut self) {
        self.clear();
    }
}

/// Visited set for graphs whose vertices are arena slots addressed by
/// [`VertexId`].
///
/// Ids that index into the arena are kept in a bit set of the arena size.
/// Any other id (a root the graph does not hold) goes to a small side set,
/// so the bit set is never resized.
#[derive(Debug, Clone)]
pub struct ArenaVisitSet {
    slots: FixedBitSet,
    strays: FxHashSet<VertexId>,
}

impl ArenaVisitSet {
    /// Creates an empty set for an arena of `vertex_count` vertices.
    pub fn for_arena(vertex_count: usize) -> Self {
        Self {
            slots: FixedBitSet::with_capacity(vertex_count),
            strays: FxHashSet::default(),
        }
    }

    fn slot(&self, id: &VertexId) -> Option<usize> {
        usize::try_from(id.0)
            .ok()
            .filter(|&index| index < self.slots.len())
    }
}

impl VisitSet<VertexId> for ArenaVisitSet {
    fn visit(&mut self, id: VertexId) -> bool {
        match self.slot(&id) {
            Some(index) => !self.slots.put(index),
            None => self.strays.insert(id),
        }
    }

    fn is_visited(&self, id: &VertexId) -> bool {
        match self.slot(id) {
            Some(index) => self.slots.contains(index),
            None => self.strays.contains(id),
        }
    }

    fn visited_count(&self) -> usize {
        self.slots.count_ones(..) + self.strays.len()
    }

    fn reset_visited(&mut self) {
        self.slots.clear();
        self.strays.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_marks<S: VisitSet<VertexId>>(mut set: S) {
        assert!(set.visit(VertexId(3)));
        assert!(!set.visit(VertexId(3)));
        assert!(set.visit(VertexId(0)));

        assert!(set.is_visited(&VertexId(3)));
        assert!(!set.is_visited(&VertexId(1)));
        assert!(!set.is_visited(&VertexId(100)));
        assert_eq!(set.visited_count(), 2);

        set.reset_visited();
        assert_eq!(set.visited_count(), 0);
        assert!(!set.is_visited(&VertexId(3)));
    }

    #[test]
    fn hash_set() {
        check_marks(FxHashSet::default());
    }

    #[test]
    fn arena_set() {
        check_marks(ArenaVisitSet::for_arena(4));
        check_marks(ArenaVisitSet::for_arena(0));
    }

    #[test]
    fn arena_set_ids_outside_arena() {
        let mut set = ArenaVisitSet::for_arena(2);

        assert!(set.visit(VertexId(1)));
        assert!(set.visit(VertexId(u64::MAX)));
        assert!(!set.visit(VertexId(u64::MAX)));
        assert!(set.visit(VertexId(2)));

        assert!(set.is_visited(&VertexId(u64::MAX)));
        assert!(!set.is_visited(&VertexId(0)));
        assert_eq!(set.visited_count(), 3);
        assert_eq!(set.slots.len(), 2);
    }
}
