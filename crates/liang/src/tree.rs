//! The pattern tree.
//!
//! The tree is a trie over the letters of the registered patterns.
//! A node whose path is a pattern carries a code, and that code already includes
//!   the weights of every pattern that is a prefix of the path.
//! A lookup therefore only needs the deepest code found along the path it walks:
//!   this is the code of the longest matching pattern, superimposed with the shorter ones.

use crate::code::HyphenationCode;
use crate::error::{Error, Result};
use crate::letter::Letter;
use crate::pattern::Pattern;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// The code attached to a node.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
enum Slot {
    /// Code of a tree that can still be modified.
    ///
    /// `pattern` is the code the pattern was registered with, and is used to
    ///   detect conflicting registrations;
    ///   `code` is the effective code including all prefix patterns.
    Open {
        pattern: HyphenationCode,
        code: HyphenationCode,
    },
    /// Code of a compressed tree, shared between all nodes with the same effective code.
    Shared(Arc<HyphenationCode>),
}

impl Slot {
    fn code(&self) -> &HyphenationCode {
        match self {
            Slot::Open { code, .. } => code,
            Slot::Shared(code) => code,
        }
    }

    fn registered(&self) -> Option<&HyphenationCode> {
        match self {
            Slot::Open { pattern, .. } => Some(pattern),
            Slot::Shared(_) => None,
        }
    }

    fn code_mut(&mut self) -> &mut HyphenationCode {
        match self {
            Slot::Open { code, .. } => code,
            Slot::Shared(code) => Arc::make_mut(code),
        }
    }
}

/// A trie of hyphenation patterns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PatternTree {
    slot: Option<Slot>,
    children: HashMap<Letter, PatternTree>,
    #[cfg_attr(feature = "serde", serde(default))]
    compressed: bool,
}

impl PatternTree {
    pub fn new() -> PatternTree {
        Default::default()
    }

    /// Inserts a pattern and returns the node at the end of its path.
    ///
    /// Registering the same pattern twice is allowed.
    /// Registering different weights for the same letters fails with
    ///   [Error::DuplicatePattern] and leaves the tree unchanged.
    /// Patterns with no letters are ignored.
    pub fn insert(&mut self, pattern: &Pattern) -> Result<&PatternTree> {
        if self.compressed {
            return Err(Error::ImmutablePatternSet);
        }
        if pattern.is_empty() {
            return Ok(self);
        }
        let letters = pattern.letters();
        let slot = self.find(letters).and_then(|node| node.slot.as_ref());
        if let Some(existing) = slot.and_then(Slot::registered) {
            if existing != pattern.code() {
                return Err(Error::DuplicatePattern {
                    pattern: pattern.to_string(),
                    existing: Pattern::from_parts(letters.to_vec(), existing.clone())
                        .to_string(),
                });
            }
        }
        // Re-registering an identical pattern recomputes the same codes.
        let mut code = pattern.code().clone();
        let mut node = self;
        for letter in letters {
            if let Some(slot) = &node.slot {
                code.superimpose(0, slot.code());
            }
            node = node.children.entry(*letter).or_default();
        }
        node.superimpose_all(&code);
        node.slot = Some(Slot::Open {
            pattern: pattern.code().clone(),
            code,
        });
        Ok(node)
    }

    /// Returns the code of the longest pattern matching the letters starting at `start`.
    pub fn get(&self, letters: &[Letter], start: usize) -> Option<&HyphenationCode> {
        let mut best = None;
        let mut node = self;
        for letter in letters.iter().skip(start) {
            node = match node.children.get(letter) {
                None => break,
                Some(child) => child,
            };
            if let Some(slot) = &node.slot {
                best = Some(slot.code());
            }
        }
        best
    }

    /// Superimposes a code onto the codes of all strict descendants of this node.
    pub fn superimpose_all(&mut self, code: &HyphenationCode) {
        for child in self.children.values_mut() {
            if let Some(slot) = &mut child.slot {
                slot.code_mut().superimpose(0, code);
            }
            child.superimpose_all(code);
        }
    }

    /// Returns the node at the end of the path, if it exists.
    pub fn find(&self, letters: &[Letter]) -> Option<&PatternTree> {
        let mut node = self;
        for letter in letters {
            node = node.children.get(letter)?;
        }
        Some(node)
    }

    /// Returns the effective code of this node.
    pub fn code(&self) -> Option<&HyphenationCode> {
        self.slot.as_ref().map(Slot::code)
    }

    /// Shares identical codes between nodes.
    ///
    /// After compression the tree can no longer be modified.
    /// Returns the number of distinct codes.
    pub fn compress(&mut self) -> usize {
        let mut interned = HashMap::new();
        self.compress_node(&mut interned);
        log::debug!(
            "compressed {} codes into {} distinct codes",
            self.pattern_count(),
            interned.len()
        );
        interned.len()
    }

    fn compress_node(&mut self, interned: &mut HashMap<HyphenationCode, Arc<HyphenationCode>>) {
        self.compressed = true;
        if let Some(slot) = self.slot.take() {
            let shared = match slot {
                Slot::Open { code, .. } => interned
                    .entry(code.clone())
                    .or_insert_with(|| Arc::new(code))
                    .clone(),
                Slot::Shared(code) => interned
                    .entry((*code).clone())
                    .or_insert(code)
                    .clone(),
            };
            self.slot = Some(Slot::Shared(shared));
        }
        for child in self.children.values_mut() {
            child.compress_node(interned);
        }
    }

    pub fn is_compressed(&self) -> bool {
        self.compressed
    }

    /// Returns the number of nodes in the tree, excluding the root.
    pub fn node_count(&self) -> usize {
        self.children
            .values()
            .map(|child| 1 + child.node_count())
            .sum()
    }

    /// Returns the number of nodes that carry a code.
    pub fn pattern_count(&self) -> usize {
        self.slot.is_some() as usize
            + self
                .children
                .values()
                .map(PatternTree::pattern_count)
                .sum::<usize>()
    }

    fn write_children(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let mut children: Vec<(&Letter, &PatternTree)> = self.children.iter().collect();
        children.sort_by_key(|(letter, _)| **letter);
        for (letter, child) in children {
            write!(f, "{:width$}'{letter}' ", "", width = 2 * depth)?;
            match child.code() {
                None => writeln!(f, "nil")?,
                Some(code) => {
                    let digits: Vec<String> =
                        code.as_slice().iter().map(u8::to_string).collect();
                    writeln!(f, "({})", digits.join(" "))?;
                }
            }
            child.write_children(f, depth + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for PatternTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_children(f, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree(patterns: &[&str]) -> PatternTree {
        let mut tree = PatternTree::new();
        for pattern in patterns {
            tree.insert(&Pattern::parse(pattern).unwrap()).unwrap();
        }
        tree
    }

    fn letters(s: &str) -> Vec<Letter> {
        s.chars()
            .map(|c| match c {
                '.' => Letter::Boundary,
                c => Letter::Char(c),
            })
            .collect()
    }

    fn get(tree: &PatternTree, s: &str, start: usize) -> Option<Vec<u8>> {
        tree.get(&letters(s), start)
            .map(|code| code.as_slice().to_vec())
    }

    macro_rules! get_tests {
        ( $( ($name: ident, $patterns: expr, $word: expr, $start: expr, $want: expr), )+ ) => {
            $(
            #[test]
            fn $name() {
                let tree = tree(&$patterns);
                let want: Option<Vec<u8>> = $want;
                assert_eq!(get(&tree, $word, $start), want);
            }
            )+
        };
    }

    get_tests!(
        (get_empty_tree, [], "abc", 0, None),
        (get_no_match, ["ab1c"], "xyz", 0, None),
        (get_exact, ["ab1c"], "abc", 0, Some(vec![0, 0, 1, 0])),
        (get_final_node, ["a1"], "a", 0, Some(vec![0, 1])),
        (get_with_start, ["ab1c"], "xabc", 1, Some(vec![0, 0, 1, 0])),
        (get_prefix_of_path, ["ab1c"], "ab", 0, None),
        (
            get_longest_match,
            ["a1", "ab3c"],
            "abcd",
            0,
            Some(vec![0, 1, 3, 0])
        ),
        (
            get_longest_match_registered_first,
            ["ab3c", "a1"],
            "abcd",
            0,
            Some(vec![0, 1, 3, 0])
        ),
        (
            get_shorter_match_when_longer_fails,
            ["a1", "ab3c"],
            "abx",
            0,
            Some(vec![0, 1])
        ),
        (get_boundary, [".a2b"], ".ab", 0, Some(vec![0, 0, 2, 0])),
    );

    #[test]
    fn same_pattern_twice_is_allowed() {
        let mut tree = tree(&["hy3ph"]);
        tree.insert(&Pattern::parse("hy3ph").unwrap()).unwrap();
        assert_eq!(tree.pattern_count(), 1);
    }

    #[test]
    fn duplicate_pattern_leaves_tree_unchanged() {
        let mut tree = tree(&["hy3ph", "h1"]);
        let before = tree.clone();
        let got = tree.insert(&Pattern::parse("hy2ph").unwrap());
        assert_eq!(
            got.map(|_| ()),
            Err(Error::DuplicatePattern {
                pattern: "hy2ph".to_string(),
                existing: "hy3ph".to_string(),
            })
        );
        assert_eq!(tree, before);
        assert_eq!(get(&tree, "hyph", 0), Some(vec![0, 1, 3, 0, 0]));
    }

    #[test]
    fn pattern_at_interior_node() {
        let mut tree = tree(&["abc1"]);
        tree.insert(&Pattern::parse("a2b").unwrap()).unwrap();
        assert_eq!(get(&tree, "ab", 0), Some(vec![0, 2, 0]));
        assert_eq!(get(&tree, "abc", 0), Some(vec![0, 2, 0, 1]));
    }

    #[test]
    fn empty_pattern_is_ignored() {
        let mut tree = PatternTree::new();
        tree.insert(&Pattern::parse("").unwrap()).unwrap();
        assert_eq!(tree, PatternTree::new());
        assert_eq!(tree.pattern_count(), 0);
    }

    #[test]
    fn counts() {
        let tree = tree(&["ab1c", "a1", "x2y"]);
        assert_eq!(tree.node_count(), 5);
        assert_eq!(tree.pattern_count(), 3);
    }

    #[test]
    fn compress_shares_codes() {
        let mut tree = tree(&["a1b", "c1d", "e2f"]);
        let want = tree.clone();
        assert_eq!(tree.compress(), 2);
        assert!(tree.is_compressed());
        for word in ["ab", "cd", "ef"] {
            assert_eq!(get(&tree, word, 0), get(&want, word, 0));
        }
        assert_eq!(
            tree.insert(&Pattern::parse("g1").unwrap()).map(|_| ()),
            Err(Error::ImmutablePatternSet)
        );
    }

    #[test]
    fn display() {
        let tree = tree(&["a1b", "a2"]);
        assert_eq!(format!("{tree}"), "'a' (0 2)\n  'b' (0 2 0)\n");
    }
}
