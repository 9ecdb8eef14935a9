//! Board construction (letters, adjacency) from raw puzzle input.

use crate::dict::fold_char;

use super::types::Board;

/// Build the board: lower-case letters and symmetric adjacency lists.
///
/// Pairs that reference a node outside `0..n` or join a node to itself are
/// dropped and counted, never reported as errors.
pub fn build_board(letters: &str, edges: &[(usize, usize)]) -> Board {
    let letters: Vec<char> = letters.chars().map(fold_char).collect();
    let n = letters.len();
    let mut adj: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut kept = 0;
    for &(u, v) in edges {
        if u >= n || v >= n || u == v {
            continue;
        }
        adj[u].push(v);
        adj[v].push(u);
        kept += 1;
    }
    Board {
        letters,
        adj,
        edges_kept: kept,
        edges_dropped: edges.len() - kept,
    }
}

impl Board {
    pub fn new(letters: &str, edges: &[(usize, usize)]) -> Self {
        build_board(letters, edges)
    }
}
