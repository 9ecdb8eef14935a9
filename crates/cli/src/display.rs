//! Text rendering for boards and results.
//!
//! Board cells are `X(nn)` (letter plus node id) on a fixed 9-column pitch:
//! 5 for the cell, 4 for the horizontal connector. Connector rows between
//! grid rows carry `|` (down), `\` (down-right) and `/` (down-left).

use std::collections::{BTreeMap, HashMap, HashSet};

use ribbit::{find_path, Board};

use crate::puzzle::Puzzle;

const CELL: usize = 9;
const RULE: usize = 60;

pub fn render_board(puzzle: &Puzzle) -> String {
    let grid = &puzzle.grid;
    if grid.is_empty() {
        return String::new();
    }
    let rows = grid.len();
    let cols = grid.iter().map(Vec::len).max().unwrap_or(0);
    let pos_to_node: HashMap<(usize, usize), usize> =
        puzzle.node_pos.iter().map(|(&n, &p)| (p, n)).collect();
    let edge_set: HashSet<(usize, usize)> = puzzle
        .edges
        .iter()
        .flat_map(|&(u, v)| [(u, v), (v, u)])
        .collect();
    let has_edge = |a: (usize, usize), b: (usize, usize)| {
        match (pos_to_node.get(&a), pos_to_node.get(&b)) {
            (Some(&u), Some(&v)) => edge_set.contains(&(u, v)),
            _ => false,
        }
    };

    let mut out = String::from("\nPuzzle Grid:\n\n");
    for row in 0..rows {
        for col in 0..cols {
            let letter = grid[row].get(col).copied().flatten();
            match (letter, pos_to_node.get(&(row, col))) {
                (Some(letter), Some(node)) => out.push_str(&format!("{letter}({node:2})")),
                _ => out.push_str("     "),
            }
            if col + 1 < cols {
                let linked = has_edge((row, col), (row, col + 1));
                out.push_str(if linked { " -- " } else { "    " });
            }
        }
        out.push('\n');

        if row + 1 < rows {
            let mut line = vec![' '; CELL * cols];
            for col in 0..cols {
                let base = col * CELL;
                if has_edge((row, col), (row + 1, col)) {
                    line[base + 1] = '|';
                }
                if has_edge((row, col), (row + 1, col + 1)) {
                    line[base + 5] = '\\';
                }
                if col > 0 && has_edge((row, col), (row + 1, col - 1)) {
                    line[base - 3] = '/';
                }
            }
            out.extend(line);
            out.push('\n');
        }
    }
    out.push('\n');
    out
}

/// Found words grouped by length, five per line.
pub fn render_results(words: &[String]) -> String {
    let rule = "=".repeat(RULE);
    let mut out = format!("\n{rule}\nFOUND {} WORDS:\n{rule}\n", words.len());
    if words.is_empty() {
        out.push_str("\nNo words found!\n");
    } else {
        let mut by_len: BTreeMap<usize, Vec<&str>> = BTreeMap::new();
        for w in words {
            by_len.entry(w.chars().count()).or_default().push(w);
        }
        for (len, group) in &by_len {
            out.push_str(&format!("\n{len}-letter words ({}):\n", group.len()));
            for chunk in group.chunks(5) {
                out.push_str("  ");
                out.push_str(&chunk.join(", "));
                out.push('\n');
            }
        }
    }
    out.push('\n');
    out
}

/// One line per word with the node ids of a path spelling it.
pub fn render_paths(board: &Board, words: &[String]) -> String {
    let mut out = String::from("Paths:\n");
    for w in words {
        let Some(path) = find_path(board, w) else {
            continue;
        };
        let ids: Vec<String> = path.iter().map(usize::to_string).collect();
        out.push_str(&format!("  {w}: {}\n", ids.join(" -> ")));
    }
    out
}
