use std::{collections::HashSet, hash::BuildHasherDefault, marker::PhantomData};

use rustc_hash::FxHashSet;

use crate::core::{id::VertexId, GraphBase, Neighbors};

use super::{ArenaVisitSet, VisitSet, Visitor};

/// Pre-order depth-first search.
///
/// A vertex is reported when it is visited for the first time, before any of
/// its neighbors. Neighbors are explored in the order the graph yields them.
/// The visited set is kept across [`start`](Dfs::start) calls until
/// [`reset`](Dfs::reset), so starting from an already visited root reports
/// nothing.
pub struct Dfs<G, S = FxHashSet<<G as GraphBase>::VertexId>>
where
    G: GraphBase,
{
    stack: Vec<G::VertexId>,
    visited: S,
    ty: PhantomData<fn() -> G>,
}

pub struct DfsRooted<'a, G, S>
where
    G: GraphBase,
{
    dfs: &'a mut Dfs<G, S>,
}

impl<G> Dfs<G>
where
    G: GraphBase,
{
    pub fn new(graph: &G) -> Self {
        let visited = graph
            .vertex_count_hint()
            .map(|count| HashSet::with_capacity_and_hasher(count, BuildHasherDefault::default()))
            .unwrap_or_default();

        Self::with_visit_set(visited)
    }
}

impl<G> Dfs<G, ArenaVisitSet>
where
    G: GraphBase<VertexId = VertexId>,
{
    /// Creates the traversal for an arena graph, tracking visited vertices
    /// in a bit set sized by the vertex count hint.
    pub fn new_bit_set(graph: &G) -> Self {
        let vertex_count = graph.vertex_count_hint().unwrap_or_default();
        Self::with_visit_set(ArenaVisitSet::for_arena(vertex_count))
    }
}

impl<G, S> Dfs<G, S>
where
    G: GraphBase,
    S: VisitSet<G::VertexId>,
{
    pub fn with_visit_set(visited: S) -> Self {
        Self {
            stack: Vec::new(),
            visited,
            ty: PhantomData,
        }
    }

    pub fn start(&mut self, root: G::VertexId) -> DfsRooted<'_, G, S> {
        self.stack.clear();
        self.stack.push(root);
        DfsRooted { dfs: self }
    }

    pub fn reset(&mut self) {
        self.stack.clear();
        self.visited.reset_visited();
    }

    pub fn visited(&self) -> &S {
        &self.visited
    }

    pub fn into_visited(self) -> S {
        self.visited
    }
}

impl<'a, G, S> Visitor<G> for DfsRooted<'a, G, S>
where
    G: Neighbors,
    S: VisitSet<G::VertexId>,
{
    type Item = G::VertexId;

    fn visit_next(&mut self, graph: &G) -> Option<Self::Item> {
        let Dfs { stack, visited, .. } = &mut *self.dfs;

        while let Some(vertex) = stack.pop() {
            // The same vertex may be on the stack multiple times if it was
            // pushed by several vertices before being visited.
            if !visited.visit(vertex.clone()) {
                continue;
            }

            // Pushing the neighbors in reverse makes the first one popped
            // next, which gives the order of the recursive formulation.
            let base = stack.len();
            stack.extend(
                graph
                    .neighbors(&vertex)
                    .filter(|neighbor| !visited.is_visited(neighbor)),
            );
            stack[base..].reverse();

            tracing::trace!(?vertex, "dfs visit");
            return Some(vertex);
        }

        None
    }
}
