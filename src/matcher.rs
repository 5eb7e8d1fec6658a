//! Whole-text matching over a compiled automaton.

use crate::nfa::Nfa;

/// A matcher that runs a compiled [`Nfa`] against whole texts.
///
/// The automaton is never modified by matching, so one `Matcher` can serve
/// any number of [`recognize`](Matcher::recognize) calls, including calls
/// from several threads at once. Each call keeps its own active-state set.
#[derive(Debug, Clone)]
pub struct Matcher {
    nfa: Nfa,
}

impl Matcher {
    /// Create a new matcher for the given NFA
    pub fn new(nfa: Nfa) -> Self {
        Self { nfa }
    }

    /// The compiled automaton.
    pub fn nfa(&self) -> &Nfa {
        &self.nfa
    }

    /// The source pattern.
    pub fn pattern(&self) -> String {
        self.nfa.pattern().iter().collect()
    }

    /// Check if the entire input matches.
    ///
    /// The automaton starts in the epsilon closure of state 0. Each character
    /// advances every active state whose pattern character is that character
    /// or `.`, and the advanced states are widened to their epsilon closure
    /// again. The text matches if the accepting state is active once every
    /// character has been consumed.
    pub fn recognize(&self, text: &str) -> bool {
        let mut active = self.nfa.epsilon_closure(Some(0));

        for ch in text.chars() {
            let advanced = self.nfa.step(&active, ch);
            active = self.nfa.epsilon_closure(advanced);
            trace!("after {:?}: {} active states", ch, active.len());
        }

        self.nfa.is_accepting(&active)
    }
}
