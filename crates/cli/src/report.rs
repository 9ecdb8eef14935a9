//! JSON shape of a solve, for `--json` and `--out`.

use serde::Serialize;
use std::collections::BTreeMap;

use ribbit::{find_path, Board, SearchStats, Solution};

use crate::puzzle::Puzzle;

#[derive(Debug, Serialize)]
pub struct StatsReport {
    pub edges_dropped: usize,
    pub dict_kept: usize,
    pub trie_nodes: usize,
    pub roots: usize,
    pub visits: usize,
    pub pruned: usize,
}

impl From<SearchStats> for StatsReport {
    fn from(s: SearchStats) -> Self {
        Self {
            edges_dropped: s.edges_dropped,
            dict_kept: s.dict_kept,
            trie_nodes: s.trie_nodes,
            roots: s.roots,
            visits: s.visits,
            pruned: s.pruned,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SolveReport {
    pub letters: String,
    pub nodes: usize,
    pub edges: usize,
    pub min_len: usize,
    pub dict_size: usize,
    pub words: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paths: Option<BTreeMap<String, Vec<usize>>>,
    pub stats: StatsReport,
}

impl SolveReport {
    pub fn new(
        puzzle: &Puzzle,
        min_len: usize,
        dict_size: usize,
        solution: Solution,
        with_paths: bool,
    ) -> Self {
        let paths: Option<BTreeMap<String, Vec<usize>>> = with_paths.then(|| {
            let board = Board::new(&puzzle.letters, &puzzle.edges);
            solution
                .words
                .iter()
                .filter_map(|w| find_path(&board, w).map(|p| (w.clone(), p)))
                .collect()
        });
        Self {
            letters: puzzle.letters.clone(),
            nodes: puzzle.node_count(),
            edges: puzzle.edges.len(),
            min_len,
            dict_size,
            words: solution.words,
            paths,
            stats: solution.stats.into(),
        }
    }
}
