//! Puzzle text format.
//!
//! ```text
//! # comment
//! RLOU
//! A-XS
//!
//! Connections:
//! 0-1
//! 1,2
//! 2 3
//! ```
//!
//! The grid comes first; `-`, `.`, `_` and whitespace are empty cells. Nodes
//! are numbered left-to-right, top-to-bottom, skipping empty cells. The edge
//! list follows the `Connections:` header, one pair per line.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

#[derive(Debug, PartialEq, Eq)]
pub enum PuzzleError {
    MissingConnections,
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingConnections => {
                write!(f, "puzzle must contain a 'Connections:' section")
            }
        }
    }
}

impl std::error::Error for PuzzleError {}

/// Parsed puzzle: solver input plus the grid layout used for drawing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Puzzle {
    /// Upper-case letters by node id.
    pub letters: String,
    pub edges: Vec<(usize, usize)>,
    pub grid: Vec<Vec<Option<char>>>,
    pub node_pos: BTreeMap<usize, (usize, usize)>, // node id -> (row, col)
}

impl Puzzle {
    pub fn node_count(&self) -> usize {
        self.node_pos.len()
    }
}

const EMPTY_CELLS: [char; 3] = ['-', '.', '_'];
const EDGE_SEPARATORS: [char; 3] = ['-', ',', ' '];

pub fn parse_puzzle_text(text: &str) -> Result<Puzzle, PuzzleError> {
    let lines: Vec<&str> = text.trim().lines().map(str::trim_end).collect();
    let split = lines
        .iter()
        .position(|l| l.to_lowercase().starts_with("connections"))
        .ok_or(PuzzleError::MissingConnections)?;

    let mut puzzle = Puzzle::default();
    let grid_lines = lines[..split].iter().filter(|l| !is_skipped(l));
    for (row, line) in grid_lines.enumerate() {
        let mut cells = Vec::new();
        for (col, ch) in line.chars().enumerate() {
            if EMPTY_CELLS.contains(&ch) || ch.is_whitespace() {
                cells.push(None);
                continue;
            }
            let up = ch.to_uppercase().next().unwrap_or(ch);
            puzzle.node_pos.insert(puzzle.node_pos.len(), (row, col));
            puzzle.letters.push(up);
            cells.push(Some(up));
        }
        puzzle.grid.push(cells);
    }

    for line in &lines[split + 1..] {
        let line = line.trim();
        if is_skipped(line) {
            continue;
        }
        if let Some(edge) = parse_edge(line) {
            puzzle.edges.push(edge);
        }
    }
    Ok(puzzle)
}

pub fn parse_puzzle_file(path: &Path) -> Result<Puzzle> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading puzzle {}", path.display()))?;
    let puzzle =
        parse_puzzle_text(&text).with_context(|| format!("parsing puzzle {}", path.display()))?;
    Ok(puzzle)
}

/// 4-connected grid edges (right and down neighbours) between existing nodes.
pub fn grid_edges(puzzle: &Puzzle) -> Vec<(usize, usize)> {
    let pos_to_node: BTreeMap<(usize, usize), usize> =
        puzzle.node_pos.iter().map(|(&n, &p)| (p, n)).collect();
    let mut edges = Vec::new();
    for (&(row, col), &node) in &pos_to_node {
        if let Some(&right) = pos_to_node.get(&(row, col + 1)) {
            edges.push((node, right));
        }
        if let Some(&down) = pos_to_node.get(&(row + 1, col)) {
            edges.push((node, down));
        }
    }
    edges
}

fn is_skipped(line: &str) -> bool {
    let t = line.trim();
    t.is_empty() || t.starts_with('#')
}

// First separator that splits the line into exactly two integers wins.
fn parse_edge(line: &str) -> Option<(usize, usize)> {
    for sep in EDGE_SEPARATORS {
        if !line.contains(sep) {
            continue;
        }
        let parts: Vec<&str> = line.split(sep).collect();
        if let [a, b] = parts.as_slice() {
            if let (Ok(u), Ok(v)) = (a.trim().parse(), b.trim().parse()) {
                return Some((u, v));
            }
        }
    }
    None
}
