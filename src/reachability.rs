//! Single and multiple source reachability by depth-first search.
//!
//! Used to compute epsilon closures: the states reachable from a set of
//! states without consuming input.

use crate::digraph::{Digraph, VertexId};

/// The set of vertices reachable from one or more sources in a [`Digraph`].
///
/// The search is depth first and iterative. Every vertex is marked the first
/// time it is seen and never pushed again, so cycles terminate and the work
/// done is bounded by the number of vertices plus edges. Results are not
/// cached: each construction runs a fresh search with its own marker.
#[derive(Debug, Clone)]
pub struct Reachability {
    marked: Vec<bool>,
}

impl Reachability {
    /// Find the vertices reachable from `source`.
    ///
    /// A source outside the graph reaches nothing.
    pub fn from_source(graph: &Digraph, source: VertexId) -> Self {
        Self::from_sources(graph, std::iter::once(source))
    }

    /// Find the vertices reachable from any of `sources`.
    ///
    /// Sources outside the graph are skipped. Sources are themselves
    /// reachable.
    pub fn from_sources<I>(graph: &Digraph, sources: I) -> Self
    where
        I: IntoIterator<Item = VertexId>,
    {
        let mut search = Self { marked: vec![false; graph.vertex_count()] };
        let mut stack = Vec::new();
        for source in sources {
            if source < search.marked.len() && !search.marked[source] {
                search.dfs(graph, source, &mut stack);
            }
        }
        search
    }

    /// Whether `v` is reachable from the sources.
    pub fn is_reachable(&self, v: VertexId) -> bool {
        self.marked.get(v).copied().unwrap_or(false)
    }

    /// The reachable vertices in ascending order.
    pub fn reachable(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.marked
            .iter()
            .enumerate()
            .filter_map(|(v, &marked)| if marked { Some(v) } else { None })
    }

    fn dfs(&mut self, graph: &Digraph, source: VertexId, stack: &mut Vec<VertexId>) {
        self.marked[source] = true;
        stack.push(source);
        while let Some(v) = stack.pop() {
            for &w in graph.adjacent(v) {
                if !self.marked[w] {
                    self.marked[w] = true;
                    stack.push(w);
                }
            }
        }
    }
}
