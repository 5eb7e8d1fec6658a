//! Restricted regular expressions compiled to a Thompson NFA.
//!
//! A pattern of `M` characters becomes an automaton with `M + 1` states: one
//! per pattern position plus the accept state `M`. Epsilon transitions are
//! stored as a plain [`Digraph`] over those positions, and a text is matched
//! by tracking every state the automaton could be in at once. After each
//! character the active states are advanced over matching positions and then
//! widened to their epsilon closure with a [`Reachability`] search.
//!
//! ```
//! let matcher = digraph_regex::compile_pattern("((A*B|AC)D)")?;
//! assert!(matcher.recognize("AAAABD"));
//! assert!(matcher.recognize("ACD"));
//! assert!(!matcher.recognize("AAAABC"));
//! # Ok::<(), digraph_regex::CompileError>(())
//! ```
//!
//! # Syntax
//!
//! * Any character other than `(`, `)`, `|`, `*` and `.` matches itself.
//! * `.` matches any single character.
//! * `(` and `)` delimit a group.
//! * `|` alternates the two sides of its immediately enclosing group. A group
//!   may hold at most one `|`, and a `|` outside of any group is rejected.
//! * `*` following a literal, `.` or `)` repeats that unit zero or more times.
//!
//! Matching always covers the whole text. There is no substring search.
//!
//! # Crate features
//!
//! * **logging** - Emits `debug` and `trace` messages through the `log`
//!   crate while compiling and matching.

#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

#[macro_use]
mod macros;

pub mod compiler;
pub mod digraph;
mod error;
pub mod matcher;
pub mod nfa;
pub mod reachability;

pub use compiler::Compiler;
pub use digraph::{Digraph, VertexId};
pub use error::{CompileError, GraphError};
pub use matcher::Matcher;
pub use nfa::Nfa;
pub use reachability::Reachability;

/// The result of compiling a pattern.
pub type CompileResult<T> = Result<T, CompileError>;

/// Compile `pattern` into a reusable [`Matcher`].
///
/// This is shorthand for `Compiler::new().compile(pattern).map(Matcher::new)`.
///
/// # Example
///
/// ```
/// use digraph_regex::{compile_pattern, CompileError};
///
/// assert!(compile_pattern("(A|B)C")?.recognize("BC"));
/// assert_eq!(
///     compile_pattern("(A|B").unwrap_err(),
///     CompileError::UnclosedGroup { position: 0 },
/// );
/// # Ok::<(), CompileError>(())
/// ```
pub fn compile_pattern(pattern: &str) -> CompileResult<Matcher> {
    Compiler::new().compile(pattern).map(Matcher::new)
}

#[cfg(doctest)]
doc_comment::doctest!("../README.md");
