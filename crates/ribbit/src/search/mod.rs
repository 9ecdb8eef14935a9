//! Word search over a letter graph.
//!
//! Pipeline
//! - `build`: letters and edges to a `Board` (lower-cased letters,
//!   symmetric adjacency, bad edges dropped).
//! - `dfs`: filter the dictionary, build the trie, then one DFS per starting
//!   node that walks the board and the trie together.
//! - `path`: recover a concrete node path for a word.
//!
//! Every search shares the trie. Found words have their terminal marker
//! cleared, and dead trie children are unlinked on the way back up, so later
//! starts do less work. Each start restores the visited markers before the
//! next one begins.

pub mod build;
pub mod dfs;
pub mod path;
pub mod types;

pub use build::build_board;
pub use dfs::{solve, solve_with_cfg};
pub use path::find_path;
pub use types::{Board, SearchCfg, SearchStats, Solution, DEFAULT_MIN_LEN};
