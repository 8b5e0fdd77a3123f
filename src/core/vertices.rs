use super::base::GraphBase;

/// The set of vertices a graph consists of.
pub trait VertexSet: GraphBase {
    type VertexIdsIter<'a>: Iterator<Item = Self::VertexId>
    where
        Self: 'a;

    fn vertex_ids(&self) -> Self::VertexIdsIter<'_>;

    fn vertex_count(&self) -> usize;

    fn contains_vertex(&self, id: &Self::VertexId) -> bool {
        self.vertex_ids().any(|v| &v == id)
    }
}

/// Access to the values stored in the vertices.
pub trait Vertices: VertexSet {
    type Vertex;

    fn vertex(&self, id: &Self::VertexId) -> Option<&Self::Vertex>;

    fn find_vertex(&self, value: &Self::Vertex) -> Option<Self::VertexId>
    where
        Self::Vertex: PartialEq,
    {
        self.vertex_ids().find(|id| self.vertex(id) == Some(value))
    }
}

macro_rules! deref_vertex_set {
    ($($ref_kind:tt)*) => {
        impl<G> VertexSet for $($ref_kind)* G
        where
            G: VertexSet,
        {
            type VertexIdsIter<'a> = G::VertexIdsIter<'a>
            where
                Self: 'a;

            fn vertex_ids(&self) -> Self::VertexIdsIter<'_> {
                (**self).vertex_ids()
            }

            fn vertex_count(&self) -> usize {
                (**self).vertex_count()
            }

            fn contains_vertex(&self, id: &Self::VertexId) -> bool {
                (**self).contains_vertex(id)
            }
        }

        impl<G> Vertices for $($ref_kind)* G
        where
            G: Vertices,
        {
            type Vertex = G::Vertex;

            fn vertex(&self, id: &Self::VertexId) -> Option<&Self::Vertex> {
                (**self).vertex(id)
            }
        }
    }
}

deref_vertex_set!(&);
deref_vertex_set!(&mut);
