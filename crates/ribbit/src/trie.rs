//! Arena prefix tree over the filtered dictionary.
//!
//! Nodes live in one `Vec` and are addressed by [`NodeId`]; the root is
//! always `NodeId(0)`. A node stores its outgoing character edges and, when a
//! dictionary word ends there, the full word.
//!
//! The search mutates the trie in two ways: it clears terminal markers once a
//! word has been reported, and it unlinks dead children. Unlinked nodes stay
//! in the arena but are no longer reachable from the root.

use std::collections::HashMap;

/// Index of a node in the trie arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

#[derive(Clone, Debug, Default)]
struct TrieNode {
    children: HashMap<char, NodeId>,
    word: Option<String>,
}

#[derive(Clone, Debug)]
pub struct Trie {
    nodes: Vec<TrieNode>,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    pub const ROOT: NodeId = NodeId(0);

    /// Empty trie holding only the root.
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
        }
    }

    /// Build a trie from already-filtered words.
    ///
    /// Inserting the same word twice leaves a single terminal marker.
    pub fn build<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new();
        for w in words {
            trie.insert(w.as_ref());
        }
        trie
    }

    pub fn insert(&mut self, word: &str) {
        let mut cur = Self::ROOT;
        for ch in word.chars() {
            let existing = self.nodes[cur.0].children.get(&ch).copied();
            cur = match existing {
                Some(next) => next,
                None => {
                    let next = NodeId(self.nodes.len());
                    self.nodes.push(TrieNode::default());
                    self.nodes[cur.0].children.insert(ch, next);
                    next
                }
            };
        }
        self.nodes[cur.0].word = Some(word.to_string());
    }

    /// Child of `node` along `ch`, if any dictionary word continues that way.
    #[inline]
    pub fn child(&self, node: NodeId, ch: char) -> Option<NodeId> {
        self.nodes[node.0].children.get(&ch).copied()
    }

    /// Terminal word stored at `node`.
    #[inline]
    pub fn word(&self, node: NodeId) -> Option<&str> {
        self.nodes[node.0].word.as_deref()
    }

    /// Clear and return the terminal word at `node`. Children are untouched.
    #[inline]
    pub fn take_word(&mut self, node: NodeId) -> Option<String> {
        self.nodes[node.0].word.take()
    }

    pub fn has_children(&self, node: NodeId) -> bool {
        !self.nodes[node.0].children.is_empty()
    }

    /// No terminal word and no children: nothing below can ever match.
    pub fn is_dead(&self, node: NodeId) -> bool {
        let n = &self.nodes[node.0];
        n.word.is_none() && n.children.is_empty()
    }

    /// Unlink the child of `parent` along `ch` if that child is dead.
    ///
    /// Returns true when an edge was removed.
    pub fn prune(&mut self, parent: NodeId, ch: char) -> bool {
        match self.child(parent, ch) {
            Some(c) if self.is_dead(c) => {
                self.nodes[parent.0].children.remove(&ch);
                true
            }
            _ => false,
        }
    }

    /// Follow `prefix` from the root.
    pub fn walk(&self, prefix: &str) -> Option<NodeId> {
        prefix
            .chars()
            .try_fold(Self::ROOT, |node, ch| self.child(node, ch))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.walk(word).is_some_and(|n| self.word(n).is_some())
    }

    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.walk(prefix).is_some()
    }

    /// Arena size, including unlinked nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of terminal markers still reachable from the root.
    pub fn word_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![Self::ROOT];
        while let Some(id) = stack.pop() {
            let n = &self.nodes[id.0];
            if n.word.is_some() {
                count += 1;
            }
            stack.extend(n.children.values().copied());
        }
        count
    }

    pub fn is_empty(&self) -> bool {
        self.nodes[Self::ROOT.0].children.is_empty() && self.word(Self::ROOT).is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_and_descend() {
        let t = Trie::build(["test", "tester", "wtest"]);

        let n = t.child(Trie::ROOT, 't').unwrap();
        assert!(t.word(n).is_none());
        let n = t.child(n, 'e').unwrap();
        let n = t.child(n, 's').unwrap();
        let n = t.child(n, 't').unwrap();
        assert_eq!(t.word(n), Some("test"));
        let n = t.child(n, 'e').unwrap();
        assert!(t.word(n).is_none());
        let n = t.child(n, 'r').unwrap();
        assert_eq!(t.word(n), Some("tester"));
        assert_eq!(t.child(n, 't'), None);
    }

    #[test]
    fn non_prefix_dies_at_first_divergence() {
        let t = Trie::build(["cake", "bake"]);
        let c = t.child(Trie::ROOT, 'c').unwrap();
        assert!(t.child(c, 'o').is_none());
        assert!(!t.has_prefix("cok"));
        assert!(t.has_prefix("ca"));
        assert!(!t.contains("cak"));
        assert!(t.contains("bake"));
    }

    #[test]
    fn duplicate_insert_is_harmless() {
        let t = Trie::build(["word", "word"]);
        assert_eq!(t.word_count(), 1);
        assert!(t.contains("word"));
        // root + w, o, r, d
        assert_eq!(t.node_count(), 5);
    }

    #[test]
    fn take_word_keeps_children() {
        let mut t = Trie::build(["bake", "baker"]);
        let n = t.walk("bake").unwrap();
        assert_eq!(t.take_word(n).as_deref(), Some("bake"));
        assert!(t.take_word(n).is_none());
        assert!(!t.contains("bake"));
        assert!(t.contains("baker"));
        assert!(!t.is_dead(n));
    }

    #[test]
    fn prune_only_removes_dead_children() {
        let mut t = Trie::build(["ab", "abc"]);
        let a = t.walk("a").unwrap();
        let ab = t.walk("ab").unwrap();
        let abc = t.walk("abc").unwrap();

        assert!(!t.prune(ab, 'c'));
        t.take_word(abc);
        assert!(t.prune(ab, 'c'));
        assert!(!t.has_children(ab));

        assert!(!t.prune(a, 'b'));
        t.take_word(ab);
        assert!(t.prune(a, 'b'));
        assert!(t.prune(Trie::ROOT, 'a'));
        assert!(t.is_empty());
        assert_eq!(t.word_count(), 0);
    }

    #[test]
    fn prune_missing_child_is_noop() {
        let mut t = Trie::build(["xy"]);
        assert!(!t.prune(Trie::ROOT, 'q'));
        assert!(t.contains("xy"));
    }
}
