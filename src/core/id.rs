//! Traits and types used for identifying vertices in graphs.
//!
//! Any type usable as a hash map key can identify a vertex. This is what
//! makes an adjacency map (`HashMap<V, Vec<V>>`) a graph whose vertex IDs are
//! the values themselves. Arena-based storages use [`VertexId`], an integer
//! ID that also implements [`IntegerIdType`] and indexes the arena directly.

use std::{fmt, hash::Hash};

/// A unique identification of a vertex in a graph.
///
/// Two vertices are the same vertex if and only if their IDs are equal. For
/// arena storages this means identity, not equality of the stored values.
pub trait IdType: Clone + Eq + Hash + fmt::Debug {}

impl<T> IdType for T where T: Clone + Eq + Hash + fmt::Debug {}

/// Type-level specification that an ID type is representable by an integer.
///
/// All integer values up to some upper bound should be valid IDs and there
/// should be no discontinuity, so that the IDs can index a contiguous array.
pub trait IntegerIdType: IdType + Copy + From<usize> + Into<usize> {
    fn as_usize(&self) -> usize {
        (*self).into()
    }

    fn from_usize(index: usize) -> Self {
        Self::from(index)
    }
}

/// The default representation of an integer ID for vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub u64);

impl VertexId {
    pub const fn new(index: u64) -> Self {
        Self(index)
    }
}

impl IntegerIdType for VertexId {}

impl From<usize> for VertexId {
    fn from(index: usize) -> Self {
        Self(index as u64)
    }
}

impl From<VertexId> for usize {
    fn from(id: VertexId) -> Self {
        id.0 as usize
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_id_usize_conversion() {
        let id = VertexId::from_usize(42);
        assert_eq!(id, VertexId(42));
        assert_eq!(id.as_usize(), 42);
    }

    #[test]
    fn vertex_id_display() {
        assert_eq!(VertexId(7).to_string(), "v7");
    }
}
