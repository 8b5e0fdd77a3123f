use std::fmt;

use thiserror::Error;

use super::id::VertexId;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("adding neighbor {to} to {from} failed: {kind}")]
pub struct AddNeighborError {
    pub from: VertexId,
    pub to: VertexId,
    pub kind: AddNeighborErrorKind,
}

impl AddNeighborError {
    pub fn new(from: VertexId, to: VertexId, kind: AddNeighborErrorKind) -> Self {
        Self { from, to, kind }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddNeighborErrorKind {
    SourceAbsent,
    DestinationAbsent,
}

impl fmt::Display for AddNeighborErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            AddNeighborErrorKind::SourceAbsent => "source does not exist",
            AddNeighborErrorKind::DestinationAbsent => "destination does not exist",
        };
        f.write_str(reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message() {
        let error = AddNeighborError::new(
            VertexId(0),
            VertexId(3),
            AddNeighborErrorKind::DestinationAbsent,
        );

        assert_eq!(
            error.to_string(),
            "adding neighbor v3 to v0 failed: destination does not exist"
        );
    }
}
