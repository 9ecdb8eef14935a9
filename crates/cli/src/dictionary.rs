//! Dictionary sources.
//!
//! A source hands the solver a frequency-ranked word list. The solver does
//! its own filtering, so the `min_len` and alphabetic checks here only trim
//! the list early.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_DICT: &str = "/usr/share/dict/words";
pub const DEFAULT_TOP_N: usize = 200_000;

/// Something that can produce the `top_n` most common words.
pub trait WordSource {
    fn load(&self, top_n: usize, min_len: usize) -> Result<Vec<String>>;
}

/// Ranked word list on disk: one word per line, most frequent first.
///
/// Extra whitespace-separated columns (counts, tags) are ignored, as are
/// blank lines and `#` comments.
#[derive(Clone, Debug)]
pub struct FileWordSource {
    path: PathBuf,
}

impl FileWordSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WordSource for FileWordSource {
    fn load(&self, top_n: usize, min_len: usize) -> Result<Vec<String>> {
        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("reading dictionary {}", self.path.display()))?;
        Ok(parse_ranked(&text, top_n, min_len))
    }
}

/// Take the first `top_n` entries, then keep alphabetic words of `min_len`+ chars.
pub fn parse_ranked(text: &str, top_n: usize, min_len: usize) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .filter_map(|l| l.split_whitespace().next())
        .take(top_n)
        .filter(|w| w.chars().count() >= min_len && w.chars().all(char::is_alphabetic))
        .map(str::to_string)
        .collect()
}
