//! Data types for the letter board and search bookkeeping.
//!
//! Kept small and explicit so `build` and `dfs` stay easy to read.

/// Default minimum word length for a solve.
pub const DEFAULT_MIN_LEN: usize = 4;

/// Letter graph: one lower-case letter per node plus adjacency lists.
///
/// Adjacency is symmetric and may contain duplicates when the input repeats
/// an edge; the search tolerates both.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
    pub letters: Vec<char>,
    pub adj: Vec<Vec<usize>>, // neighbour node ids of node k
    pub edges_kept: usize,
    pub edges_dropped: usize, // out-of-range or self-loop pairs
}

impl Board {
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn letter(&self, node: usize) -> char {
        self.letters[node]
    }

    pub fn neighbors(&self, node: usize) -> &[usize] {
        &self.adj[node]
    }

    /// Input pairs skipped while building: out of range or self-loops.
    pub fn edges_dropped(&self) -> usize {
        self.edges_dropped
    }
}

/// Search configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchCfg {
    pub min_len: usize,
    /// Unlink trie children that can no longer match. Never changes results.
    pub prune_dead: bool,
}

impl Default for SearchCfg {
    fn default() -> Self {
        Self {
            min_len: DEFAULT_MIN_LEN,
            prune_dead: true,
        }
    }
}

/// Counters collected during one solve.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: usize,
    pub edges_kept: usize,
    pub edges_dropped: usize,
    pub dict_in: usize,
    pub dict_kept: usize,
    pub trie_nodes: usize,
    /// Starting nodes whose letter matched a root edge when reached.
    pub roots: usize,
    /// (node, trie node) states entered.
    pub visits: usize,
    pub pruned: usize,
}

/// Sorted, deduplicated words plus the counters that produced them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Solution {
    pub words: Vec<String>,
    pub stats: SearchStats,
}
