//! Word search over letter graphs.
//!
//! A board is a small undirected graph with one letter per node. A word is
//! found when some simple path (no node reused) spells it. The search walks
//! the graph and a dictionary trie in lockstep, so only paths that are a
//! prefix of some dictionary word are ever extended.
//!
//! Layout
//! - `trie`: arena prefix tree over the filtered dictionary.
//! - `dict`: word normalization and filtering.
//! - `search`: board adjacency, trie-pruned DFS, `solve` entry points.
//! - `rand_board`: seeded random boards and walk-derived word lists.
//!
//! The crate does no I/O. Puzzle parsing, dictionary loading and printing live
//! in the `ribbit-cli` crate.

pub mod api;
pub mod dict;
pub mod rand_board;
pub mod search;
pub mod trie;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use search::{
    find_path, solve, solve_with_cfg, Board, SearchCfg, SearchStats, Solution, DEFAULT_MIN_LEN,
};
pub use trie::{NodeId, Trie};
