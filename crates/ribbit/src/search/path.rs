//! Recover one simple path spelling a given word.
//!
//! Plain backtracking per word, no trie. Used to show where a found word
//! lies on the board, and as an independent check of `solve`.

use crate::dict::fold_char;

use super::types::Board;

/// Node ids of one simple path whose letters spell `word`, if any.
///
/// `word` is trimmed and folded like the board letters first. The empty word
/// has no path.
pub fn find_path(board: &Board, word: &str) -> Option<Vec<usize>> {
    let target: Vec<char> = word.trim().chars().map(fold_char).collect();
    if target.is_empty() || target.len() > board.len() {
        return None;
    }
    let mut visited = vec![false; board.len()];
    let mut path = Vec::with_capacity(target.len());
    for start in 0..board.len() {
        if extend(board, &target, start, &mut visited, &mut path) {
            return Some(path);
        }
    }
    None
}

fn extend(
    board: &Board,
    target: &[char],
    i: usize,
    visited: &mut [bool],
    path: &mut Vec<usize>,
) -> bool {
    if board.letter(i) != target[path.len()] {
        return false;
    }
    visited[i] = true;
    path.push(i);
    if path.len() == target.len() {
        return true;
    }
    for &j in board.neighbors(i) {
        if !visited[j] && extend(board, target, j, visited, path) {
            return true;
        }
    }
    path.pop();
    visited[i] = false;
    false
}
