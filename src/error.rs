use crate::digraph::VertexId;

/// An error raised when a digraph operation names a vertex that does not
/// exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An edge endpoint is outside `0..vertex_count`.
    VertexOutOfRange {
        /// The offending vertex.
        vertex: VertexId,
        /// The number of vertices in the graph.
        vertex_count: usize,
    },
}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphError::VertexOutOfRange { vertex, vertex_count } => write!(
                f,
                "vertex {} is out of range for a graph of {} vertices",
                vertex, vertex_count
            ),
        }
    }
}

impl std::error::Error for GraphError {}

/// Errors that can occur while compiling a pattern.
///
/// Every variant except [`CompileError::Graph`] carries the character
/// position (not byte offset) in the pattern where the problem was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// A `)` with no open group to close.
    UnmatchedCloseParen {
        /// Position of the `)`.
        position: usize,
    },
    /// A `(` that is never closed.
    UnclosedGroup {
        /// Position of the innermost unclosed `(`.
        position: usize,
    },
    /// A `|` that is not inside any group.
    DanglingAlternation {
        /// Position of the `|`.
        position: usize,
    },
    /// A second `|` inside the same group. Only one alternation per group is
    /// supported.
    MultipleAlternation {
        /// Position of the second `|`.
        position: usize,
    },
    /// A `*` with nothing to repeat: at the start of the pattern, or right
    /// after `(`, `|` or another `*`.
    DanglingStar {
        /// Position of the `*`.
        position: usize,
    },
    /// An epsilon edge could not be added to the graph.
    Graph(GraphError),
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompileError::UnmatchedCloseParen { position } => {
                write!(f, "unmatched ')' at position {}", position)
            }
            CompileError::UnclosedGroup { position } => {
                write!(f, "unclosed '(' at position {}", position)
            }
            CompileError::DanglingAlternation { position } => write!(
                f,
                "'|' at position {} is not inside a group",
                position
            ),
            CompileError::MultipleAlternation { position } => write!(
                f,
                "second '|' in one group at position {} (only one is supported)",
                position
            ),
            CompileError::DanglingStar { position } => {
                write!(f, "'*' at position {} has nothing to repeat", position)
            }
            CompileError::Graph(err) => {
                write!(f, "failed to build epsilon graph: {}", err)
            }
        }
    }
}

impl std::error::Error for CompileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CompileError::Graph(err) => Some(err),
            _ => None,
        }
    }
}

impl From<GraphError> for CompileError {
    fn from(err: GraphError) -> CompileError {
        CompileError::Graph(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn display_names_position() {
        let err = CompileError::UnclosedGroup { position: 3 };
        assert_eq!(err.to_string(), "unclosed '(' at position 3");

        let err = CompileError::DanglingStar { position: 0 };
        assert_eq!(err.to_string(), "'*' at position 0 has nothing to repeat");
    }

    #[test]
    fn graph_error_is_source() {
        let inner = GraphError::VertexOutOfRange { vertex: 9, vertex_count: 4 };
        let err = CompileError::from(inner.clone());
        assert_eq!(err, CompileError::Graph(inner));
        assert!(err.source().is_some());
        assert!(CompileError::UnmatchedCloseParen { position: 1 }
            .source()
            .is_none());
        assert_eq!(
            err.to_string(),
            "failed to build epsilon graph: vertex 9 is out of range for a graph of 4 vertices"
        );
    }
}
