//! Longest-prefix matching.
//!
//! The matcher walks the trie one word at a time, looking through delegated
//! fragments transparently (`WordTrie::step`). It remembers the last position
//! where a match could stop.
//!
//! A word may be reachable along more than one path, e.g. "to" as a literal
//! template word and "to" as a preposition inside `<preps+arts>`. The matcher
//! then forks: each candidate continues independently over the remaining
//! words, and the branch results are reduced by the [`TieBreak`] policy.
//! Resolution of a fork is final.
//!
//! Only spliced fragments create forks; an inlined trie is deterministic.
//! `TieBreak::Longest` agrees with the inlined walk on every phrase,
//! `TieBreak::Shortest` only on phrases that never fork.
//!
//! ```text
//! "to be happy"
//!        root
//!     ┌───┴────────────┐
//!   "to" (literal)   "to" (<preps+arts>)
//!     │                │
//!   "be" (end)       ✗ "be"
//!     │
//!   ✗ "happy"
//!  branch: Some(2)   branch: Some(1)
//!       └─────── Longest ─▶ 2
//! ```

use super::trie::{NodeId, WordTrie};
use crate::TieBreak;

/// Result of walking a phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct Walk {
    /// Words consumed by the chosen match, if any stopping point was reached.
    pub(crate) matched: Option<usize>,
    /// Forks encountered along every explored branch.
    pub(crate) forks: usize,
}

impl TieBreak {
    /// Reduce branch results; `None` branches never win.
    pub(crate) fn pick<I>(self, results: I) -> Option<usize>
    where
        I: IntoIterator<Item = Option<usize>>,
    {
        let found = results.into_iter().flatten();
        match self {
            TieBreak::Longest => found.max(),
            TieBreak::Shortest => found.min(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Matcher<'a> {
    trie: &'a WordTrie,
    policy: TieBreak,
}

impl<'a> Matcher<'a> {
    pub(crate) fn new(trie: &'a WordTrie, policy: TieBreak) -> Self {
        Matcher { trie, policy }
    }

    /// Walk `words` (already lower-cased) from the root.
    ///
    /// A zero-length match is only reported when the root itself can end.
    pub(crate) fn longest_prefix(&self, words: &[String]) -> Walk {
        let best = self.trie.accepts(NodeId::ROOT).then_some(0);
        self.walk(NodeId::ROOT, words, 0, best)
    }

    /// Continue from `node` after `consumed` words, with `best` the last
    /// stopping point seen on this branch.
    fn walk(&self, mut node: NodeId, words: &[String], mut consumed: usize, mut best: Option<usize>) -> Walk {
        while let Some(word) = words.get(consumed) {
            let candidates = self.trie.step(node, word);
            consumed += 1;

            match candidates.as_slice() {
                [] => break,
                [next] => {
                    if self.trie.accepts(*next) {
                        best = Some(consumed);
                    }
                    node = *next;
                }
                _ => {
                    log::trace!("fork on \"{word}\" after {} words: {} branches", consumed - 1, candidates.len());
                    let branches: Vec<Walk> = candidates
                        .iter()
                        .map(|&next| {
                            let here = self.trie.accepts(next).then_some(consumed);
                            self.walk(next, words, consumed, here)
                        })
                        .collect();

                    let chosen = self.policy.pick(branches.iter().map(|b| b.matched));
                    return Walk {
                        matched: chosen.or(best),
                        forks: 1 + branches.iter().map(|b| b.forks).sum::<usize>(),
                    };
                }
            }
        }

        Walk { matched: best, forks: 0 }
    }
}
