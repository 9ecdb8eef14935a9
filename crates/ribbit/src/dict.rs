//! Dictionary normalization and filtering.
//!
//! Only trimmed, lower-case, purely alphabetic words whose length lies in
//! `[min_len, max_len]` reach the trie. `max_len` is the node count: a simple
//! path cannot spell anything longer. Lengths count `char`s, not bytes.
//!
//! Board letters, dictionary words and path targets all go through
//! [`fold_char`], one scalar at a time, so a word typed like the board letters
//! always matches them.

/// Lower-case one scalar; multi-scalar expansions keep the first scalar.
#[inline]
pub fn fold_char(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// [`fold_char`] over every scalar of `s`. The char count never changes.
pub fn fold_word(s: &str) -> String {
    s.chars().map(fold_char).collect()
}

/// Normalize one candidate word, or reject it.
pub fn normalize_word(raw: &str, min_len: usize, max_len: usize) -> Option<String> {
    let w = fold_word(raw.trim());
    let len = w.chars().count();
    if len == 0 || len < min_len || len > max_len {
        return None;
    }
    if !w.chars().all(char::is_alphabetic) {
        return None;
    }
    Some(w)
}

/// Apply [`normalize_word`] to every word, keeping input order.
pub fn filter_words<I, S>(words: I, min_len: usize, max_len: usize) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words
        .into_iter()
        .filter_map(|w| normalize_word(w.as_ref(), min_len, max_len))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_lowercases() {
        assert_eq!(normalize_word("  BaKe\n", 4, 10).as_deref(), Some("bake"));
    }

    #[test]
    fn length_bounds_are_inclusive() {
        assert_eq!(normalize_word("abcd", 4, 4).as_deref(), Some("abcd"));
        assert!(normalize_word("abc", 4, 10).is_none());
        assert!(normalize_word("abcde", 4, 4).is_none());
    }

    #[test]
    fn rejects_non_alphabetic() {
        assert!(normalize_word("don't", 1, 10).is_none());
        assert!(normalize_word("abc1", 1, 10).is_none());
        assert!(normalize_word("two words", 1, 20).is_none());
        assert!(normalize_word("", 0, 10).is_none());
    }

    #[test]
    fn counts_chars_not_bytes() {
        assert_eq!(normalize_word("Ärla", 4, 4).as_deref(), Some("ärla"));
    }

    #[test]
    fn folding_is_per_scalar() {
        // Whole-string lower-casing would turn the last sigma into a final sigma.
        assert_eq!(fold_word("ΟΔΟΣ"), "οδοσ");
        assert_eq!(normalize_word("ΟΔΟΣ", 4, 4).as_deref(), Some("οδοσ"));
        // 'İ' lower-cases to two scalars; only the first is kept.
        assert_eq!(fold_word("İSTA"), "ista");
        assert_eq!(normalize_word("İSTA", 4, 4).as_deref(), Some("ista"));
        assert_eq!(fold_char('Q'), 'q');
        assert_eq!(fold_char('7'), '7');
    }

    #[test]
    fn filter_keeps_order() {
        let out = filter_words(["Zeta", "ab", "alpha", "be-ta", "GAMMA"], 4, 5);
        assert_eq!(out, vec!["zeta", "alpha", "gamma"]);
    }
}
