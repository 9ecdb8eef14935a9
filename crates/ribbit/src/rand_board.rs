//! Seeded random boards and walk-derived word lists.
//!
//! Purpose
//! - Reproducible inputs for benches and randomized tests.
//! - Every output is a pure function of the params and the seed.
//!
//! `walk_words` spells words along random simple walks, so each one is
//! guaranteed to be findable on the board it was drawn from.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::fmt;

use crate::search::Board;

/// Error type for the board generator.
#[derive(Debug)]
pub enum GeneratorError {
    InvalidParams { reason: String },
}

impl GeneratorError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid generator params: {reason}"),
        }
    }
}

impl std::error::Error for GeneratorError {}

/// Parameters for an Erdős–Rényi style letter board.
#[derive(Clone, Debug)]
pub struct RandomBoardParams {
    pub nodes: usize,
    /// Probability that any given pair of nodes is joined.
    pub edge_prob: f64,
    /// Letters are drawn uniformly from these characters.
    pub alphabet: String,
}

impl Default for RandomBoardParams {
    fn default() -> Self {
        Self {
            nodes: 16,
            edge_prob: 0.25,
            alphabet: "abcdefghijklmnopqrstuvwxyz".to_string(),
        }
    }
}

impl RandomBoardParams {
    pub fn validate(&self) -> Result<(), GeneratorError> {
        if self.nodes == 0 {
            return Err(GeneratorError::invalid("need at least one node"));
        }
        if !(0.0..=1.0).contains(&self.edge_prob) {
            return Err(GeneratorError::invalid("edge_prob must lie in [0, 1]"));
        }
        if self.alphabet.is_empty() {
            return Err(GeneratorError::invalid("alphabet is empty"));
        }
        if !self.alphabet.chars().all(char::is_alphabetic) {
            return Err(GeneratorError::invalid("alphabet must be alphabetic"));
        }
        Ok(())
    }
}

/// Raw solver input: letters plus node-id pairs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RandomBoard {
    pub letters: String,
    pub edges: Vec<(usize, usize)>,
}

impl RandomBoard {
    pub fn board(&self) -> Board {
        Board::new(&self.letters, &self.edges)
    }
}

/// Draw one board. Each unordered pair `u < v` is an edge with `edge_prob`.
pub fn generate_board(params: &RandomBoardParams, seed: u64) -> Result<RandomBoard, GeneratorError> {
    params.validate()?;
    let mut rng = StdRng::seed_from_u64(seed);
    let alphabet: Vec<char> = params.alphabet.chars().collect();
    let letters: String = (0..params.nodes)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
        .collect();
    let mut edges = Vec::new();
    for u in 0..params.nodes {
        for v in (u + 1)..params.nodes {
            if rng.gen_bool(params.edge_prob) {
                edges.push((u, v));
            }
        }
    }
    Ok(RandomBoard { letters, edges })
}

/// Spell `count` words along random simple walks of 1..=`max_len` nodes.
///
/// A walk stops early when it runs out of unvisited neighbours.
pub fn walk_words(board: &Board, count: usize, max_len: usize, seed: u64) -> Vec<String> {
    let n = board.len();
    let cap = max_len.min(n);
    if cap == 0 {
        return Vec::new();
    }
    let mut rng = StdRng::seed_from_u64(seed);
    let mut visited = vec![false; n];
    let mut open: Vec<usize> = Vec::new();
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        visited.fill(false);
        let target = rng.gen_range(1..=cap);
        let mut cur = rng.gen_range(0..n);
        visited[cur] = true;
        let mut word = String::new();
        word.push(board.letter(cur));
        let mut len = 1;
        while len < target {
            open.clear();
            open.extend(board.neighbors(cur).iter().copied().filter(|&j| !visited[j]));
            let Some(&next) = open.choose(&mut rng) else {
                break;
            };
            visited[next] = true;
            word.push(board.letter(next));
            cur = next;
            len += 1;
        }
        out.push(word);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::find_path;

    #[test]
    fn validate_rejects_bad_params() {
        let ok = RandomBoardParams::default();
        assert!(ok.validate().is_ok());

        let zero = RandomBoardParams {
            nodes: 0,
            ..ok.clone()
        };
        assert!(matches!(
            zero.validate(),
            Err(GeneratorError::InvalidParams { .. })
        ));

        let prob = RandomBoardParams {
            edge_prob: 1.5,
            ..ok.clone()
        };
        assert!(prob.validate().is_err());

        let nan = RandomBoardParams {
            edge_prob: f64::NAN,
            ..ok.clone()
        };
        assert!(nan.validate().is_err());

        let digits = RandomBoardParams {
            alphabet: "ab1".to_string(),
            ..ok
        };
        let err = digits.validate().unwrap_err();
        assert!(err.to_string().contains("alphabetic"));
    }

    #[test]
    fn same_seed_same_board() {
        let p = RandomBoardParams::default();
        let a = generate_board(&p, 7).unwrap();
        let b = generate_board(&p, 7).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.letters.chars().count(), p.nodes);
        assert!(a.edges.iter().all(|&(u, v)| u < v && v < p.nodes));
    }

    #[test]
    fn edge_prob_extremes() {
        let none = RandomBoardParams {
            nodes: 6,
            edge_prob: 0.0,
            ..RandomBoardParams::default()
        };
        assert!(generate_board(&none, 1).unwrap().edges.is_empty());

        let all = RandomBoardParams {
            edge_prob: 1.0,
            ..none
        };
        assert_eq!(generate_board(&all, 1).unwrap().edges.len(), 15);
    }

    #[test]
    fn walk_words_are_on_the_board() {
        let p = RandomBoardParams {
            nodes: 12,
            edge_prob: 0.3,
            alphabet: "abcde".to_string(),
        };
        let rb = generate_board(&p, 42).unwrap();
        let board = rb.board();
        let words = walk_words(&board, 50, 6, 42);
        assert_eq!(words.len(), 50);
        for w in &words {
            let len = w.chars().count();
            assert!((1..=6).contains(&len));
            assert!(find_path(&board, w).is_some(), "{w}");
        }
    }

    #[test]
    fn walk_words_on_empty_board() {
        assert!(walk_words(&Board::default(), 10, 4, 0).is_empty());
    }
}
