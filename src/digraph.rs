//! A minimal adjacency-list digraph.

use crate::error::GraphError;

/// A vertex in a [`Digraph`].
pub type VertexId = usize;

/// A directed graph over the vertices `0..vertex_count`, stored as one
/// adjacency list per vertex.
///
/// Edges keep their insertion order. Parallel edges and self-loops are kept
/// as given. Edges can be added but never removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digraph {
    /// Outgoing neighbours of each vertex.
    adjacency: Vec<Vec<VertexId>>,
    /// Total number of edges added so far.
    edge_count: usize,
}

impl Digraph {
    /// Create a graph of `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self { adjacency: vec![Vec::new(); vertex_count], edge_count: 0 }
    }

    /// Number of vertices, as given to [`Digraph::new`].
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges added so far, counting duplicates.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Add the edge `from -> to`.
    ///
    /// Fails without touching the graph if either endpoint is out of range.
    pub fn add_edge(
        &mut self,
        from: VertexId,
        to: VertexId,
    ) -> Result<(), GraphError> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        self.adjacency[from].push(to);
        self.edge_count += 1;
        Ok(())
    }

    /// The vertices `v` points at, in insertion order.
    ///
    /// An out-of-range `v` has no neighbours.
    pub fn adjacent(&self, v: VertexId) -> &[VertexId] {
        self.adjacency.get(v).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterate over every edge as a `(from, to)` pair, grouped by source
    /// vertex and in insertion order within each group.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(from, targets)| targets.iter().map(move |&to| (from, to)))
    }

    fn check_vertex(&self, v: VertexId) -> Result<(), GraphError> {
        if v < self.vertex_count() {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex: v,
                vertex_count: self.vertex_count(),
            })
        }
    }
}

impl std::fmt::Display for Digraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (v, targets) in self.adjacency.iter().enumerate() {
            write!(f, "{}:", v)?;
            for to in targets {
                write!(f, " {}", to)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_graph_is_isolated() {
        let g = Digraph::new(4);
        assert_eq!(g.vertex_count(), 4);
        assert_eq!(g.edge_count(), 0);
        for v in 0..4 {
            assert!(g.adjacent(v).is_empty());
        }
    }

    #[test]
    fn adjacency_keeps_order_and_duplicates() {
        let mut g = Digraph::new(3);
        g.add_edge(0, 2).unwrap();
        g.add_edge(0, 1).unwrap();
        g.add_edge(0, 2).unwrap();
        g.add_edge(1, 1).unwrap();

        assert_eq!(g.adjacent(0), &[2, 1, 2]);
        assert_eq!(g.adjacent(1), &[1]);
        assert_eq!(g.edge_count(), 4);
    }

    #[test]
    fn out_of_range_edge_is_rejected() {
        let mut g = Digraph::new(2);
        assert_eq!(
            g.add_edge(0, 2),
            Err(GraphError::VertexOutOfRange { vertex: 2, vertex_count: 2 })
        );
        assert_eq!(
            g.add_edge(5, 0),
            Err(GraphError::VertexOutOfRange { vertex: 5, vertex_count: 2 })
        );
        assert_eq!(g.edge_count(), 0);
        assert!(g.adjacent(0).is_empty());
        assert!(g.adjacent(5).is_empty());
    }

    #[test]
    fn display_lists_adjacency() {
        let mut g = Digraph::new(3);
        g.add_edge(0, 1).unwrap();
        g.add_edge(0, 2).unwrap();
        assert_eq!(g.to_string(), "0: 1 2\n1:\n2:\n");
        assert_eq!(g.edges().collect::<Vec<_>>(), vec![(0, 1), (0, 2)]);
    }
}
