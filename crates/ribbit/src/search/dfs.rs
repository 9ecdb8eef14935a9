//! Depth-first search over the board with trie pruning.

use std::collections::BTreeSet;

use crate::dict::filter_words;
use crate::trie::{NodeId, Trie};

use super::build::build_board;
use super::types::{Board, SearchCfg, SearchStats, Solution};

/// Find every dictionary word spelled by a simple path on the board.
///
/// Returns the words sorted ascending, without duplicates.
pub fn solve<I, S>(
    letters: &str,
    edges: &[(usize, usize)],
    words: I,
    min_len: usize,
) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let cfg = SearchCfg {
        min_len,
        ..SearchCfg::default()
    };
    solve_with_cfg(letters, edges, words, cfg).words
}

/// Like [`solve`], with explicit configuration and search counters.
pub fn solve_with_cfg<I, S>(
    letters: &str,
    edges: &[(usize, usize)],
    words: I,
    cfg: SearchCfg,
) -> Solution
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let board = build_board(letters, edges);
    let mut stats = SearchStats {
        nodes: board.len(),
        edges_kept: board.edges_kept,
        edges_dropped: board.edges_dropped,
        ..SearchStats::default()
    };
    if board.is_empty() {
        return Solution {
            words: Vec::new(),
            stats,
        };
    }

    let mut dict_in = 0;
    let filtered = filter_words(
        words.into_iter().inspect(|_| dict_in += 1),
        cfg.min_len,
        board.len(),
    );
    stats.dict_in = dict_in;
    stats.dict_kept = filtered.len();
    if filtered.is_empty() {
        tracing::debug!(dict_in, min_len = cfg.min_len, "no dictionary words survive filter");
        return Solution {
            words: Vec::new(),
            stats,
        };
    }

    let trie = Trie::build(&filtered);
    stats.trie_nodes = trie.node_count();

    let mut runner = DfsRunner::new(&board, trie, cfg.prune_dead);
    runner.solve();
    stats.roots = runner.roots;
    stats.visits = runner.visits;
    stats.pruned = runner.pruned;
    tracing::debug!(
        nodes = stats.nodes,
        dict_kept = stats.dict_kept,
        visits = stats.visits,
        pruned = stats.pruned,
        found = runner.found.len(),
        "search done"
    );
    Solution {
        words: runner.found.into_iter().collect(),
        stats,
    }
}

/// DFS runner carrying the solve-local trie, path markers and accumulators.
struct DfsRunner<'a> {
    board: &'a Board,
    trie: Trie,
    prune_dead: bool,
    visited: Vec<bool>,
    found: BTreeSet<String>,
    roots: usize,
    visits: usize,
    pruned: usize,
}

impl<'a> DfsRunner<'a> {
    fn new(board: &'a Board, trie: Trie, prune_dead: bool) -> Self {
        Self {
            board,
            trie,
            prune_dead,
            visited: vec![false; board.len()],
            found: BTreeSet::new(),
            roots: 0,
            visits: 0,
            pruned: 0,
        }
    }

    fn solve(&mut self) {
        for i in 0..self.board.len() {
            // Root edges may have been pruned by earlier starts.
            if self.trie.child(Trie::ROOT, self.board.letter(i)).is_none() {
                continue;
            }
            self.roots += 1;
            self.recur(i, Trie::ROOT);
            debug_assert!(self.visited.iter().all(|v| !v));
        }
    }

    /// Enter node `i` from trie node `parent`.
    fn recur(&mut self, i: usize, parent: NodeId) {
        let board = self.board;
        let ch = board.letter(i);
        let Some(node) = self.trie.child(parent, ch) else {
            return;
        };
        self.visits += 1;
        self.visited[i] = true;

        // Clear on report so other paths to the same word do not re-add it.
        if let Some(word) = self.trie.take_word(node) {
            self.found.insert(word);
        }

        if self.trie.has_children(node) {
            for &j in board.neighbors(i) {
                if !self.visited[j] {
                    self.recur(j, node);
                }
            }
        }

        self.visited[i] = false;

        if self.prune_dead && self.trie.prune(parent, ch) {
            self.pruned += 1;
        }
    }
}
