//! Adjacency maps as graphs.
//!
//! A map from a value to the list of its neighbor values is a graph whose
//! vertex IDs are the values themselves. The vertex set is the key set. A
//! value that appears only in some neighbor list is a valid vertex to walk
//! through, but it has no outgoing edges and is not part of the vertex set.

use std::{
    collections::{btree_map, hash_map, BTreeMap, HashMap},
    hash::{BuildHasher, Hash},
    iter::Cloned,
    slice,
};

use crate::core::{id::IdType, GraphBase, Neighbors, VertexSet, Vertices};

fn neighbors_or_empty<V>(list: Option<&Vec<V>>) -> &[V] {
    list.map(Vec::as_slice).unwrap_or(&[])
}

impl<V, S> GraphBase for HashMap<V, Vec<V>, S>
where
    V: IdType,
{
    type VertexId = V;

    fn vertex_count_hint(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<V, S> Neighbors for HashMap<V, Vec<V>, S>
where
    V: IdType,
    S: BuildHasher,
{
    type NeighborsIter<'a> = Cloned<slice::Iter<'a, V>>
    where
        Self: 'a;

    fn neighbors(&self, from: &V) -> Self::NeighborsIter<'_> {
        neighbors_or_empty(self.get(from)).iter().cloned()
    }

    fn degree(&self, id: &V) -> usize {
        neighbors_or_empty(self.get(id)).len()
    }
}

impl<V, S> VertexSet for HashMap<V, Vec<V>, S>
where
    V: IdType,
    S: BuildHasher,
{
    type VertexIdsIter<'a> = Cloned<hash_map::Keys<'a, V, Vec<V>>>
    where
        Self: 'a;

    fn vertex_ids(&self) -> Self::VertexIdsIter<'_> {
        self.keys().cloned()
    }

    fn vertex_count(&self) -> usize {
        self.len()
    }

    fn contains_vertex(&self, id: &V) -> bool {
        self.contains_key(id)
    }
}

impl<V, S> Vertices for HashMap<V, Vec<V>, S>
where
    V: IdType,
    S: BuildHasher,
{
    type Vertex = V;

    fn vertex(&self, id: &V) -> Option<&V> {
        self.get_key_value(id).map(|(key, _)| key)
    }
}

impl<V> GraphBase for BTreeMap<V, Vec<V>>
where
    V: IdType + Ord,
{
    type VertexId = V;

    fn vertex_count_hint(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<V> Neighbors for BTreeMap<V, Vec<V>>
where
    V: IdType + Ord,
{
    type NeighborsIter<'a> = Cloned<slice::Iter<'a, V>>
    where
        Self: 'a;

    fn neighbors(&self, from: &V) -> Self::NeighborsIter<'_> {
        neighbors_or_empty(self.get(from)).iter().cloned()
    }

    fn degree(&self, id: &V) -> usize {
        neighbors_or_empty(self.get(id)).len()
    }
}

impl<V> VertexSet for BTreeMap<V, Vec<V>>
where
    V: IdType + Ord,
{
    type VertexIdsIter<'a> = Cloned<btree_map::Keys<'a, V, Vec<V>>>
    where
        Self: 'a;

    fn vertex_ids(&self) -> Self::VertexIdsIter<'_> {
        self.keys().cloned()
    }

    fn vertex_count(&self) -> usize {
        self.len()
    }

    fn contains_vertex(&self, id: &V) -> bool {
        self.contains_key(id)
    }
}

impl<V> Vertices for BTreeMap<V, Vec<V>>
where
    V: IdType + Ord,
{
    type Vertex = V;

    fn vertex(&self, id: &V) -> Option<&V> {
        self.get_key_value(id).map(|(key, _)| key)
    }
}

/// Builds an adjacency map from `(vertex, neighbors)` pairs.
///
/// Later entries for the same vertex append to its neighbor list.
pub fn adjacency_map<V, I, N>(entries: I) -> HashMap<V, Vec<V>>
where
    V: Eq + Hash,
    I: IntoIterator<Item = (V, N)>,
    N: IntoIterator<Item = V>,
{
    let mut map: HashMap<V, Vec<V>> = HashMap::new();

    for (vertex, neighbors) in entries {
        map.entry(vertex).or_default().extend(neighbors);
    }

    map
}
