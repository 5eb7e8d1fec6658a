//! Pattern compiler: builds the epsilon-transition graph of a Thompson NFA
//! straight from the pattern text.

use crate::digraph::{Digraph, VertexId};
use crate::nfa::Nfa;
use crate::{CompileError, CompileResult};

/// Compiler that turns a pattern string into a Thompson [`Nfa`].
///
/// Each pattern character becomes one state, so no parse tree is built.
/// Groups and alternations are paired up with an explicit stack of the
/// positions of every `(` and `|` not yet closed, which keeps the compiler
/// iterative no matter how deeply groups nest.
///
/// Only one `|` per group is supported. `(A|B|C)` must be written as
/// `((A|B)|C)`.
#[derive(Debug, Default)]
pub struct Compiler {
    /// Positions of unmatched `(` and `|`.
    ops: Vec<VertexId>,
}

impl Compiler {
    /// Create a new compiler
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    /// Compile `pattern` into an automaton with one state per character plus
    /// an accepting state.
    ///
    /// A malformed pattern yields an error and no automaton.
    pub fn compile(mut self, pattern: &str) -> CompileResult<Nfa> {
        let re: Vec<char> = pattern.chars().collect();
        match self.build_epsilon_graph(&re) {
            Ok(graph) => {
                debug!(
                    "compiled {:?} into {} states and {} epsilon edges",
                    pattern,
                    graph.vertex_count(),
                    graph.edge_count()
                );
                Ok(Nfa::new(re, graph))
            }
            Err(err) => {
                debug!("failed to compile {:?}: {}", pattern, err);
                Err(err)
            }
        }
    }

    fn build_epsilon_graph(&mut self, re: &[char]) -> CompileResult<Digraph> {
        let m = re.len();
        let mut graph = Digraph::new(m + 1);

        for i in 0..m {
            // Start of the unit that ends at i, for a following '*'.
            let mut lp = i;

            match re[i] {
                '(' => self.ops.push(i),
                '|' => self.push_alternation(re, i)?,
                ')' => {
                    let or = self
                        .ops
                        .pop()
                        .ok_or(CompileError::UnmatchedCloseParen { position: i })?;
                    if re[or] == '|' {
                        lp = self
                            .ops
                            .pop()
                            .ok_or(CompileError::DanglingAlternation { position: or })?;
                        graph.add_edge(lp, or + 1)?;
                        graph.add_edge(or, i)?;
                    } else {
                        lp = or;
                    }
                }
                '*' => {
                    if i == 0 || matches!(re[i - 1], '(' | '|' | '*') {
                        return Err(CompileError::DanglingStar { position: i });
                    }
                }
                _ => {}
            }

            if re.get(i + 1) == Some(&'*') {
                graph.add_edge(lp, i + 1)?;
                graph.add_edge(i + 1, lp)?;
            }

            if matches!(re[i], '(' | '*' | ')') {
                graph.add_edge(i, i + 1)?;
            }
        }

        // A '|' is only ever pushed on top of its '(', so anything left on
        // the stack has an open group underneath.
        if let Some(position) = self.ops.iter().rev().copied().find(|&p| re[p] == '(') {
            return Err(CompileError::UnclosedGroup { position });
        }
        Ok(graph)
    }

    /// Push the '|' at `i`, which must sit directly inside a group that has
    /// no '|' yet.
    fn push_alternation(&mut self, re: &[char], i: usize) -> CompileResult<()> {
        match self.ops.last().copied() {
            None => Err(CompileError::DanglingAlternation { position: i }),
            Some(top) if re[top] == '|' => {
                Err(CompileError::MultipleAlternation { position: i })
            }
            Some(_) => {
                self.ops.push(i);
                Ok(())
            }
        }
    }
}
