//! Character trie with prefix, suffix and containment traversal.
//!
//! Children are kept in a `BTreeMap`, so every traversal visits siblings in
//! code-point order. Result cutoffs in [`Trie::search`] keep whichever words
//! that order reaches first, which makes them reproducible regardless of the
//! order words were inserted in.
//!
//! A trie used for suffix matching is filled with `reversed = true`. It then
//! stores every word back to front, and [`Trie::search`] returns words in that
//! stored orientation: callers flip each result back themselves.

use std::borrow::Cow;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default)]
pub struct TrieNode {
    children: BTreeMap<char, TrieNode>,
    is_word: bool,
}

impl TrieNode {
    fn descend(&self, key: &str) -> Option<&TrieNode> {
        let mut node = self;
        for ch in key.chars() {
            node = node.children.get(&ch)?;
        }
        Some(node)
    }

    fn is_prunable(&self) -> bool {
        !self.is_word && self.children.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Trie {
    root: TrieNode,
    len: usize,
}

fn orient(word: &str, reversed: bool) -> Cow<'_, str> {
    if reversed {
        Cow::Owned(word.chars().rev().collect())
    } else {
        Cow::Borrowed(word)
    }
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a trie from `words`, each stored back to front if `reversed`.
    pub fn from_words<I, S>(words: I, reversed: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new();
        for word in words {
            trie.insert(word.as_ref(), reversed);
        }
        trie
    }

    /// Number of distinct words stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert `word`. Re-inserting a stored word only re-sets its end mark.
    ///
    /// Characters are not validated here; callers filter to word tokens.
    pub fn insert(&mut self, word: &str, reversed: bool) {
        let key = orient(word, reversed);
        let mut node = &mut self.root;
        for ch in key.chars() {
            node = node.children.entry(ch).or_default();
        }
        if !node.is_word {
            node.is_word = true;
            self.len += 1;
        }
    }

    /// Remove `word`, pruning branches that no longer lead to a word.
    /// Returns `false` if the word was not stored.
    pub fn remove(&mut self, word: &str, reversed: bool) -> bool {
        let key: Vec<char> = orient(word, reversed).chars().collect();
        let removed = remove_path(&mut self.root, &key);
        if removed {
            self.len -= 1;
        }
        removed
    }

    /// Whether `word` is stored as a complete word (not merely a prefix).
    pub fn contains(&self, word: &str, reversed: bool) -> bool {
        self.root
            .descend(&orient(word, reversed))
            .is_some_and(|node| node.is_word)
    }

    /// Words stored under `prefix`, depth-first in child order.
    ///
    /// With `reversed`, `prefix` is flipped before the walk and results come
    /// back in stored (reversed) orientation. Returns an empty list as soon as
    /// a character of the prefix has no edge. Collection stops once
    /// `max_suggestions` words are found; `None` enumerates everything.
    pub fn search(
        &self,
        prefix: &str,
        reversed: bool,
        max_suggestions: Option<usize>,
    ) -> Vec<String> {
        let key = orient(prefix, reversed);
        let Some(node) = self.root.descend(&key) else {
            return Vec::new();
        };
        let mut results = Vec::new();
        let mut path = key.into_owned();
        collect_words(node, &mut path, max_suggestions, &mut results);
        results
    }

    /// Every stored word containing `substring`, in depth-first order.
    ///
    /// Visits the whole trie on each call.
    pub fn search_containing(&self, substring: &str) -> Vec<String> {
        let mut results = Vec::new();
        let mut path = String::new();
        collect_containing(&self.root, &mut path, substring, &mut results);
        results
    }
}

fn remove_path(node: &mut TrieNode, key: &[char]) -> bool {
    let Some((ch, rest)) = key.split_first() else {
        let was_word = node.is_word;
        node.is_word = false;
        return was_word;
    };
    let Some(child) = node.children.get_mut(ch) else {
        return false;
    };
    let removed = remove_path(child, rest);
    if removed && child.is_prunable() {
        node.children.remove(ch);
    }
    removed
}

fn collect_words(node: &TrieNode, path: &mut String, limit: Option<usize>, out: &mut Vec<String>) {
    if limit.is_some_and(|max| out.len() >= max) {
        return;
    }
    if node.is_word {
        out.push(path.clone());
    }
    for (&ch, child) in &node.children {
        path.push(ch);
        collect_words(child, path, limit, out);
        path.pop();
    }
}

fn collect_containing(node: &TrieNode, path: &mut String, substring: &str, out: &mut Vec<String>) {
    if node.is_word && path.contains(substring) {
        out.push(path.clone());
    }
    for (&ch, child) in &node.children {
        path.push(ch);
        collect_containing(child, path, substring, out);
        path.pop();
    }
}
