//! Splicing hyphenation results into horizontal lists.
//!
//! Hyphenation works on plain words; this module translates between a word and
//!   the list of nodes it was typeset as.
//! Ligatures count as all of the characters they were built from,
//!   and boxes count as the characters inside them.

use crate::letter::Word;
use crate::node::{Char, Discretionary, Node};
use crate::table::BreakPoints;

/// Returns the word formed by the characters of a node list.
///
/// ```
/// # use liang::node::{Char, Ligature, Node};
/// # use liang::splice::word_letters;
/// let list = vec![
///     Node::Char(Char::new('o', 0)),
///     Node::Ligature(Ligature { char: 'ﬃ', font: 0, original_chars: vec!['f', 'f', 'i'] }),
///     Node::Char(Char::new('x', 0)),
/// ];
/// assert_eq!(word_letters(&list).to_string(), "offix");
/// ```
pub fn word_letters(list: &[Node]) -> Word {
    let mut word = Word::default();
    collect(list, &mut word);
    word
}

fn collect(list: &[Node], word: &mut Word) {
    for node in list {
        match node {
            Node::Char(c) => word.push(c.char),
            Node::Ligature(ligature) => {
                for c in &ligature.original_chars {
                    word.push(*c);
                }
            }
            Node::HList(hlist) => collect(&hlist.list, word),
            Node::Glue(_)
            | Node::Kern(_)
            | Node::Penalty(_)
            | Node::Discretionary(_)
            | Node::Whatsit(_) => {}
        }
    }
}

/// Inserts a hyphen discretionary at every allowed break of the word formed by the list.
///
/// The hyphen is set in the font of the character that follows the break.
/// A ligature with a break inside it is replaced by the characters it was built from.
pub fn insert_discretionaries(
    list: Vec<Node>,
    breaks: &BreakPoints,
    hyphen_char: char,
) -> Vec<Node> {
    let mut splicer = Splicer {
        seen: 0,
        breaks,
        hyphen_char,
    };
    splicer.splice(list)
}

struct Splicer<'a> {
    // Number of word characters before the current node.
    seen: usize,
    breaks: &'a BreakPoints,
    hyphen_char: char,
}

impl<'a> Splicer<'a> {
    fn splice(&mut self, list: Vec<Node>) -> Vec<Node> {
        let mut result = Vec::with_capacity(list.len() + self.breaks.count());
        for node in list {
            match node {
                Node::Char(c) => {
                    self.push_char(c, &mut result);
                }
                Node::Ligature(ligature) => {
                    let n = ligature.original_chars.len();
                    let start = self.seen;
                    let broken_inside = (1..n).any(|i| self.breaks.allows_break_after(start + i));
                    if broken_inside {
                        log::trace!("breaking apart ligature {:?}", ligature.char);
                        for c in ligature.original_chars {
                            self.push_char(Char::new(c, ligature.font), &mut result);
                        }
                    } else {
                        if n > 0 {
                            self.push_break(ligature.font, &mut result);
                        }
                        self.seen += n;
                        result.push(Node::Ligature(ligature));
                    }
                }
                Node::HList(mut hlist) => {
                    let list = std::mem::take(&mut hlist.list);
                    hlist.list = self.splice(list);
                    result.push(Node::HList(hlist));
                }
                node => result.push(node),
            }
        }
        result
    }

    fn push_char(&mut self, c: Char, result: &mut Vec<Node>) {
        self.push_break(c.font, result);
        self.seen += 1;
        result.push(Node::Char(c));
    }

    fn push_break(&self, font: u32, result: &mut Vec<Node>) {
        if self.seen > 0 && self.breaks.allows_break_after(self.seen) {
            result.push(Node::Discretionary(Discretionary::hyphen(Char::new(
                self.hyphen_char,
                font,
            ))));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{Glue, HList, Kern, Ligature};
    use texcontext::Scaled;

    fn chars(s: &str) -> Vec<Node> {
        s.chars().map(|c| Node::Char(Char::new(c, 1))).collect()
    }

    fn hyphen() -> Node {
        Node::Discretionary(Discretionary::hyphen(Char::new('-', 1)))
    }

    fn ffi() -> Node {
        Node::Ligature(Ligature {
            char: 'ﬃ',
            font: 1,
            original_chars: vec!['f', 'f', 'i'],
        })
    }

    #[test]
    fn plain_word() {
        let list = chars("hyphen");
        let breaks = BreakPoints::from_positions(6, [2]);
        let got = insert_discretionaries(list, &breaks, '-');
        let mut want = chars("hy");
        want.push(hyphen());
        want.extend(chars("phen"));
        assert_eq!(got, want);
    }

    #[test]
    fn non_char_nodes_are_kept() {
        let mut list = vec![Node::Glue(Glue {
            glue: Default::default(),
        })];
        list.extend(chars("ab"));
        list.push(Node::Kern(Kern {
            width: Scaled::ONE,
        }));
        list.extend(chars("cd"));
        let breaks = BreakPoints::from_positions(4, [2]);
        let got = insert_discretionaries(list, &breaks, '-');
        let mut want = vec![Node::Glue(Glue {
            glue: Default::default(),
        })];
        want.extend(chars("ab"));
        want.push(Node::Kern(Kern {
            width: Scaled::ONE,
        }));
        want.push(hyphen());
        want.extend(chars("cd"));
        assert_eq!(got, want);
    }

    #[test]
    fn break_before_ligature_keeps_it() {
        let mut list = chars("o");
        list.push(ffi());
        list.extend(chars("ce"));
        assert_eq!(word_letters(&list).to_string(), "office");
        let breaks = BreakPoints::from_positions(6, [1]);
        let got = insert_discretionaries(list, &breaks, '-');
        let mut want = chars("o");
        want.push(hyphen());
        want.push(ffi());
        want.extend(chars("ce"));
        assert_eq!(got, want);
    }

    #[test]
    fn break_inside_ligature_reconstructs_it() {
        let mut list = chars("o");
        list.push(ffi());
        list.extend(chars("ce"));
        let breaks = BreakPoints::from_positions(6, [2]);
        let got = insert_discretionaries(list, &breaks, '-');
        let mut want = chars("of");
        want.push(hyphen());
        want.extend(chars("fice"));
        assert_eq!(got, want);
    }

    #[test]
    fn nested_list() {
        let list = vec![Node::HList(HList {
            width: Scaled::ZERO,
            list: chars("abcd"),
        })];
        assert_eq!(word_letters(&list).to_string(), "abcd");
        let breaks = BreakPoints::from_positions(4, [2]);
        let got = insert_discretionaries(list, &breaks, '-');
        let mut inner = chars("ab");
        inner.push(hyphen());
        inner.extend(chars("cd"));
        assert_eq!(
            got,
            vec![Node::HList(HList {
                width: Scaled::ZERO,
                list: inner,
            })]
        );
    }
}
