//! The compiled automaton.

use crate::digraph::{Digraph, VertexId};
use crate::reachability::Reachability;

/// A compiled pattern: the pattern characters plus the epsilon transitions
/// between pattern positions.
///
/// State `i` for `i < M` sits in front of pattern character `i`, and state
/// `M` (the pattern length) is the sole accepting state. Consuming a
/// character moves from `i` to `i + 1` when character `i` is that character
/// or `.`; every other move is an epsilon edge in [`Nfa::graph`].
///
/// An `Nfa` is only built by [`Compiler`](crate::Compiler) and never changes
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nfa {
    /// The pattern, one state per character.
    pattern: Vec<char>,
    /// Epsilon transitions over `pattern.len() + 1` states.
    graph: Digraph,
}

impl Nfa {
    pub(crate) fn new(pattern: Vec<char>, graph: Digraph) -> Self {
        debug_assert_eq!(graph.vertex_count(), pattern.len() + 1);
        Self { pattern, graph }
    }

    /// The pattern this automaton was compiled from.
    pub fn pattern(&self) -> &[char] {
        &self.pattern
    }

    /// The epsilon-transition graph.
    pub fn graph(&self) -> &Digraph {
        &self.graph
    }

    /// The accepting state, equal to the pattern length.
    pub fn accept_state(&self) -> VertexId {
        self.pattern.len()
    }

    /// Total number of states, including the accepting state.
    pub fn state_count(&self) -> usize {
        self.graph.vertex_count()
    }

    /// Every state reachable from `sources` through epsilon transitions
    /// alone, in ascending order. Sources are part of their own closure.
    pub fn epsilon_closure<I>(&self, sources: I) -> Vec<VertexId>
    where
        I: IntoIterator<Item = VertexId>,
    {
        Reachability::from_sources(&self.graph, sources).reachable().collect()
    }

    /// The states entered by consuming `ch` from any state in `active`.
    ///
    /// The accepting state has no character and never advances.
    pub fn step(&self, active: &[VertexId], ch: char) -> Vec<VertexId> {
        active
            .iter()
            .filter(|&&v| {
                self.pattern.get(v).map_or(false, |&p| p == ch || p == '.')
            })
            .map(|&v| v + 1)
            .collect()
    }

    /// Whether `active` contains the accepting state.
    pub fn is_accepting(&self, active: &[VertexId]) -> bool {
        active.contains(&self.accept_state())
    }
}

impl std::fmt::Display for Nfa {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for v in 0..self.state_count() {
            match self.pattern.get(v) {
                Some(ch) => write!(f, "{:>4}: {:?}", v, ch)?,
                None => write!(f, "{:>4}: ACCEPT", v)?,
            }
            let targets = self.graph.adjacent(v);
            if !targets.is_empty() {
                write!(f, " ε ->")?;
                for to in targets {
                    write!(f, " {}", to)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
