//! Curated API for benches and other callers (UNSTABLE).
//!
//! Important
//! - This is a convenience surface, not a compatibility promise. Breaking
//!   changes are allowed when they improve the design.
//! - Prefer these re-exports for consistency across callers.

// Dictionary filtering
pub use crate::dict::{filter_words, normalize_word};
// Seeded inputs
pub use crate::rand_board::{
    generate_board, walk_words, GeneratorError, RandomBoard, RandomBoardParams,
};
// Search engine
pub use crate::search::{
    find_path, solve, solve_with_cfg, Board, SearchCfg, SearchStats, Solution, DEFAULT_MIN_LEN,
};
// Trie
pub use crate::trie::{NodeId, Trie};
