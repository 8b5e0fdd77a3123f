use std::{iter::Copied, ops::Index, ops::Range, slice};

use crate::core::{
    error::{AddNeighborError, AddNeighborErrorKind},
    id::{IntegerIdType, VertexId},
    GraphBase, Neighbors, VertexSet, Vertices,
};

/// A vertex stored in [`VertexGraph`]: its value and the ordered list of its
/// outgoing neighbors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex<V> {
    data: V,
    neighbors: Vec<VertexId>,
}

impl<V> Vertex<V> {
    pub fn data(&self) -> &V {
        &self.data
    }

    pub fn neighbors(&self) -> &[VertexId] {
        &self.neighbors
    }
}

/// Directed graph of vertices holding a value and an ordered neighbor list.
///
/// Vertices live in an arena and are addressed by [`VertexId`]. Two vertices
/// with equal values are still distinct vertices. A neighbor list may contain
/// the vertex itself (self-loop) and duplicates. Vertices are never removed,
/// so an ID stays valid for the lifetime of the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexGraph<V> {
    vertices: Vec<Vertex<V>>,
}

impl<V> VertexGraph<V> {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }

    pub fn with_capacity(vertex_capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_capacity),
        }
    }

    pub fn add_vertex(&mut self, data: V) -> VertexId {
        let id = VertexId::from_usize(self.vertices.len());
        self.vertices.push(Vertex {
            data,
            neighbors: Vec::new(),
        });
        id
    }

    /// Appends `to` at the end of the neighbor list of `from`.
    ///
    /// Adding the same neighbor twice stores it twice.
    pub fn try_add_neighbor(
        &mut self,
        from: &VertexId,
        to: &VertexId,
    ) -> Result<(), AddNeighborError> {
        if !self.contains_vertex(to) {
            return Err(AddNeighborError::new(
                *from,
                *to,
                AddNeighborErrorKind::DestinationAbsent,
            ));
        }

        match self.vertices.get_mut(from.as_usize()) {
            Some(vertex) => {
                vertex.neighbors.push(*to);
                Ok(())
            }
            None => Err(AddNeighborError::new(
                *from,
                *to,
                AddNeighborErrorKind::SourceAbsent,
            )),
        }
    }

    /// Infallible version of [`try_add_neighbor`](VertexGraph::try_add_neighbor).
    ///
    /// # Panics
    ///
    /// Panics if either of the vertices does not exist.
    #[track_caller]
    pub fn add_neighbor(&mut self, from: &VertexId, to: &VertexId) {
        if let Err(error) = self.try_add_neighbor(from, to) {
            panic!("{error}");
        }
    }

    pub fn extend_with_vertices<I>(&mut self, iter: I) -> Vec<VertexId>
    where
        I: IntoIterator<Item = V>,
    {
        iter.into_iter().map(|data| self.add_vertex(data)).collect()
    }

    /// Adds all `(from, to)` pairs in the given order.
    ///
    /// # Panics
    ///
    /// Panics if any of the vertices does not exist.
    #[track_caller]
    pub fn extend_with_neighbors<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = (VertexId, VertexId)>,
    {
        for (from, to) in iter {
            self.add_neighbor(&from, &to);
        }
    }

    pub fn get(&self, id: &VertexId) -> Option<&Vertex<V>> {
        self.vertices.get(id.as_usize())
    }

    /// Returns the neighbor list of the vertex, or an empty slice if the
    /// vertex does not exist.
    pub fn neighbor_ids(&self, id: &VertexId) -> &[VertexId] {
        self.get(id).map(Vertex::neighbors).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

impl<V> Default for VertexGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Index<VertexId> for VertexGraph<V> {
    type Output = V;

    #[track_caller]
    fn index(&self, id: VertexId) -> &Self::Output {
        &self.vertices[id.as_usize()].data
    }
}

impl<V> GraphBase for VertexGraph<V> {
    type VertexId = VertexId;

    fn vertex_count_hint(&self) -> Option<usize> {
        Some(self.vertices.len())
    }
}

impl<V> Neighbors for VertexGraph<V> {
    type NeighborsIter<'a> = Copied<slice::Iter<'a, VertexId>>
    where
        Self: 'a;

    fn neighbors(&self, from: &VertexId) -> Self::NeighborsIter<'_> {
        self.neighbor_ids(from).iter().copied()
    }

    fn degree(&self, id: &VertexId) -> usize {
        self.neighbor_ids(id).len()
    }

    fn has_neighbor(&self, from: &VertexId, to: &VertexId) -> bool {
        self.neighbor_ids(from).contains(to)
    }
}

/// Iterator over [`VertexId`]s of a [`VertexGraph`].
#[derive(Debug, Clone)]
pub struct VertexIds(Range<usize>);

impl Iterator for VertexIds {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(VertexId::from_usize)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl ExactSizeIterator for VertexIds {}

impl<V> VertexSet for VertexGraph<V> {
    type VertexIdsIter<'a> = VertexIds
    where
        Self: 'a;

    fn vertex_ids(&self) -> Self::VertexIdsIter<'_> {
        VertexIds(0..self.vertices.len())
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn contains_vertex(&self, id: &VertexId) -> bool {
        id.as_usize() < self.vertices.len()
    }
}

impl<V> Vertices for VertexGraph<V> {
    type Vertex = V;

    fn vertex(&self, id: &VertexId) -> Option<&V> {
        self.get(id).map(Vertex::data)
    }
}
