use super::base::GraphBase;

/// Access to the outgoing neighbors of a vertex.
///
/// Neighbors are yielded in the order they are stored. A vertex may list
/// itself (self-loop) and may list the same neighbor more than once. Asking
/// for neighbors of a vertex that is not in the graph yields nothing.
pub trait Neighbors: GraphBase {
    type NeighborsIter<'a>: Iterator<Item = Self::VertexId>
    where
        Self: 'a;

    fn neighbors(&self, from: &Self::VertexId) -> Self::NeighborsIter<'_>;

    fn degree(&self, id: &Self::VertexId) -> usize {
        self.neighbors(id).count()
    }

    /// Returns `true` if `to` is a direct neighbor of `from`.
    fn has_neighbor(&self, from: &Self::VertexId, to: &Self::VertexId) -> bool {
        self.neighbors(from).any(|neighbor| &neighbor == to)
    }

    /// Returns `true` if the vertex lists itself as its own neighbor.
    ///
    /// Only a direct edge counts, a longer cycle leading back to the vertex
    /// does not.
    fn has_self_loop(&self, id: &Self::VertexId) -> bool {
        self.has_neighbor(id, id)
    }
}

macro_rules! deref_neighbors {
    ($($ref_kind:tt)*) => {
        impl<G> Neighbors for $($ref_kind)* G
        where
            G: Neighbors,
        {
            type NeighborsIter<'a> = G::NeighborsIter<'a>
            where
                Self: 'a;

            fn neighbors(&self, from: &Self::VertexId) -> Self::NeighborsIter<'_> {
                (**self).neighbors(from)
            }

            fn degree(&self, id: &Self::VertexId) -> usize {
                (**self).degree(id)
            }

            fn has_neighbor(&self, from: &Self::VertexId, to: &Self::VertexId) -> bool {
                (**self).has_neighbor(from, to)
            }
        }
    }
}

deref_neighbors!(&);
deref_neighbors!(&mut);
