use std::fmt;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
#[error("adding vertex failed: {kind}")]
pub struct AddVertexError<V> {
    pub name: V,
    pub kind: AddVertexErrorKind,
}

impl<V> AddVertexError<V> {
    pub fn new(name: V, kind: AddVertexErrorKind) -> Self {
        Self { name, kind }
    }

    /// Returns the rejected vertex name.
    pub fn into_name(self) -> V {
        self.name
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddVertexErrorKind {
    DuplicateVertex,
}

impl fmt::Display for AddVertexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            AddVertexErrorKind::DuplicateVertex => "a vertex with the same name already exists",
        };
        f.write_str(reason)
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("adding edge failed: {kind}")]
pub struct AddEdgeError<V> {
    pub from: V,
    pub to: V,
    pub kind: AddEdgeErrorKind,
}

impl<V> AddEdgeError<V> {
    pub fn new(from: V, to: V, kind: AddEdgeErrorKind) -> Self {
        Self { from, to, kind }
    }

    /// Returns `true` if the edge was rejected because one of its endpoints
    /// is not in the graph.
    pub fn is_unknown_vertex(&self) -> bool {
        matches!(
            self.kind,
            AddEdgeErrorKind::SourceAbsent | AddEdgeErrorKind::DestinationAbsent
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddEdgeErrorKind {
    SourceAbsent,
    DestinationAbsent,
}

impl fmt::Display for AddEdgeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            AddEdgeErrorKind::SourceAbsent => "source does not exist",
            AddEdgeErrorKind::DestinationAbsent => "destination does not exist",
        };
        f.write_str(reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        let error = AddVertexError::new("a", AddVertexErrorKind::DuplicateVertex);
        assert_eq!(
            error.to_string(),
            "adding vertex failed: a vertex with the same name already exists"
        );

        let error = AddEdgeError::new(1, 2, AddEdgeErrorKind::DestinationAbsent);
        assert_eq!(
            error.to_string(),
            "adding edge failed: destination does not exist"
        );
        assert!(error.is_unknown_vertex());
    }
}
