//! Hyphenation tables per language.
//!
//! TeX selects the hyphenation table with the integer parameter `\language`,
//!   and the minima and hyphen character with `\lefthyphenmin`, `\righthyphenmin`
//!   and `\hyphenchar`.
//! These are scoped like every other parameter,
//!   so the [LanguageManager] resolves them through a [Context] each time it hyphenates.
//! Parameters that are not bound in the context fall back to the table's configuration.

use crate::config::HyphenationConfig;
use crate::error::{Error, Result};
use crate::letter::Word;
use crate::node::Node;
use crate::splice;
use crate::table::{BreakPoints, LiangTable};
use std::collections::HashMap;
use texcontext::{Category, Context};

/// Name of the integer register holding the current language.
pub const LANGUAGE: &str = "language";
/// Name of the integer register holding the left minimum.
pub const LEFT_HYPHEN_MIN: &str = "lefthyphenmin";
/// Name of the integer register holding the right minimum.
pub const RIGHT_HYPHEN_MIN: &str = "righthyphenmin";
/// Name of the integer register holding the hyphen character.
pub const HYPHEN_CHAR: &str = "hyphenchar";

/// Registry of hyphenation tables, keyed by language name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LanguageManager {
    tables: HashMap<String, LiangTable>,
    config: HyphenationConfig,
}

impl LanguageManager {
    pub fn new() -> LanguageManager {
        Default::default()
    }

    /// Returns a manager whose lazily created tables use the given configuration.
    pub fn with_config(config: HyphenationConfig) -> LanguageManager {
        LanguageManager {
            tables: Default::default(),
            config,
        }
    }

    /// Returns the table of a language.
    pub fn table(&self, language: &str) -> Result<&LiangTable> {
        self.tables
            .get(language)
            .ok_or_else(|| Error::UnknownLanguage(language.to_string()))
    }

    /// Returns the table of a language, creating an empty one if needed.
    pub fn table_mut(&mut self, language: &str) -> &mut LiangTable {
        let config = self.config;
        self.tables.entry(language.to_string()).or_insert_with(|| {
            log::debug!("creating hyphenation table for language {language}");
            LiangTable::with_config(config)
        })
    }

    /// Registers a table, returning the table previously registered for the language.
    pub fn insert(&mut self, language: &str, table: LiangTable) -> Option<LiangTable> {
        self.tables.insert(language.to_string(), table)
    }

    /// Returns the registered language names in sorted order.
    pub fn languages(&self) -> Vec<&str> {
        let mut languages: Vec<&str> = self.tables.keys().map(String::as_str).collect();
        languages.sort();
        languages
    }

    /// Returns the name of the current language, which is the decimal value of `\language`.
    pub fn current_language(&self, context: &Context) -> Result<String> {
        Ok(context.count(LANGUAGE)?.to_string())
    }

    /// Hyphenates a word with the language and parameters of the context.
    ///
    /// Letters are lower cased with the context's `\lccode` table;
    ///   a word containing a character with no lower case code is not hyphenated.
    /// Words of a language with no table are not hyphenated either.
    pub fn hyphenate_in(&self, context: &Context, word: &Word) -> Result<Option<BreakPoints>> {
        let language = self.current_language(context)?;
        let table = match self.tables.get(&language) {
            None => {
                log::debug!("no hyphenation table for language {language}");
                return Ok(None);
            }
            Some(table) => table,
        };
        let mut lower = Word::default();
        for c in word.chars() {
            match context.lccode(*c)? {
                '\0' => return Ok(None),
                lc => lower.push(lc),
            }
        }
        let left = min_in(context, LEFT_HYPHEN_MIN)?.unwrap_or(table.config().left_hyphen_min);
        let right =
            min_in(context, RIGHT_HYPHEN_MIN)?.unwrap_or(table.config().right_hyphen_min);
        Ok(table.hyphenate_with(&lower, left, right))
    }

    /// Returns the hyphen character in effect, if hyphens can be inserted.
    ///
    /// A `\hyphenchar` that is negative or not a character disables hyphenation.
    pub fn hyphen_char(&self, context: &Context) -> Result<Option<char>> {
        if context.get(Category::Count, HYPHEN_CHAR).is_some() {
            let value = context.count(HYPHEN_CHAR)?;
            return Ok(u32::try_from(value).ok().and_then(char::from_u32));
        }
        let language = self.current_language(context)?;
        Ok(Some(
            self.tables
                .get(&language)
                .map(|table| table.config().hyphen_char)
                .unwrap_or(self.config.hyphen_char),
        ))
    }

    /// Hyphenates the word formed by a node list and splices in the discretionaries.
    ///
    /// The list is returned unchanged if the word has no breaks.
    pub fn hyphenate_nodes(&self, context: &Context, list: Vec<Node>) -> Result<Vec<Node>> {
        let hyphen_char = match self.hyphen_char(context)? {
            None => return Ok(list),
            Some(c) => c,
        };
        let word = splice::word_letters(&list);
        Ok(match self.hyphenate_in(context, &word)? {
            None => list,
            Some(breaks) => splice::insert_discretionaries(list, &breaks, hyphen_char),
        })
    }
}

/// Reads a hyphenation minimum from the context, normalized to 1..=63 as TeX does.
fn min_in(context: &Context, name: &str) -> Result<Option<usize>> {
    if context.get(Category::Count, name).is_none() {
        return Ok(None);
    }
    Ok(Some(context.count(name)?.clamp(1, 63) as usize))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Char;
    use texcontext::{GroupType, Scope, Value};

    fn manager() -> LanguageManager {
        let mut manager = LanguageManager::new();
        manager.table_mut("0").add_pattern_str("hy3ph").unwrap();
        manager.table_mut("1").add_pattern_str("1p").unwrap();
        manager
    }

    fn hyphenate(manager: &LanguageManager, context: &Context, word: &str) -> Option<String> {
        let word = Word::from(word);
        manager
            .hyphenate_in(context, &word)
            .unwrap()
            .map(|breaks| breaks.apply(&word, '-'))
    }

    #[test]
    fn default_language() {
        let context = Context::new();
        assert_eq!(
            hyphenate(&manager(), &context, "hyphen"),
            Some("hy-phen".to_string())
        );
    }

    #[test]
    fn language_is_scoped() {
        let manager = manager();
        let mut context = Context::new();
        context.open_group(GroupType::Simple);
        context.set_count(LANGUAGE, 1, Scope::Local);
        assert_eq!(
            hyphenate(&manager, &context, "hyphen"),
            Some("hy-phen".to_string())
        );
        context.set_count(LEFT_HYPHEN_MIN, 1, Scope::Local);
        assert_eq!(
            hyphenate(&manager, &context, "hyphen"),
            Some("hy-phen".to_string())
        );
        context.set_count(LEFT_HYPHEN_MIN, 3, Scope::Local);
        assert_eq!(hyphenate(&manager, &context, "hyphen"), None);
        context.close_group().unwrap();
        assert_eq!(context.count(LANGUAGE), Ok(0));
    }

    #[test]
    fn minima_are_normalized() {
        let mut manager = LanguageManager::new();
        manager.table_mut("0").add_pattern_str("1b").unwrap();
        let mut context = Context::new();
        context.set_count(LEFT_HYPHEN_MIN, -5, Scope::Local);
        context.set_count(RIGHT_HYPHEN_MIN, 0, Scope::Local);
        assert_eq!(hyphenate(&manager, &context, "ab"), Some("a-b".to_string()));
    }

    #[test]
    fn unknown_language() {
        let manager = manager();
        let mut context = Context::new();
        context.set_count(LANGUAGE, 7, Scope::Local);
        assert_eq!(hyphenate(&manager, &context, "hyphen"), None);
        assert_eq!(
            manager.table("7").map(|_| ()),
            Err(Error::UnknownLanguage("7".to_string()))
        );
    }

    #[test]
    fn lccodes_of_the_context() {
        let manager = manager();
        let mut context = Context::new();
        assert_eq!(
            hyphenate(&manager, &context, "HYPHEN"),
            Some("HY-PHEN".to_string())
        );
        context.set_lccode('Y', '\0', Scope::Local);
        assert_eq!(hyphenate(&manager, &context, "HYPHEN"), None);
    }

    #[test]
    fn language_of_the_wrong_kind() {
        let manager = manager();
        let mut context = Context::new();
        context.set(Category::Count, LANGUAGE, Value::Bool(true), Scope::Local);
        assert!(matches!(
            manager.hyphenate_in(&context, &Word::from("hyphen")),
            Err(Error::Context(texcontext::Error::TypeMismatch { .. }))
        ));
    }

    #[test]
    fn hyphenate_nodes_uses_hyphen_char() {
        let manager = manager();
        let mut context = Context::new();
        let list: Vec<Node> = "hyphen"
            .chars()
            .map(|c| Node::Char(Char::new(c, 0)))
            .collect();
        let got = manager.hyphenate_nodes(&context, list.clone()).unwrap();
        assert_eq!(got.len(), 7);
        match &got[2] {
            Node::Discretionary(d) => assert_eq!(d.pre_break, vec![Node::Char(Char::new('-', 0))]),
            other => panic!("expected a discretionary, got {other:?}"),
        }

        context.set_count(HYPHEN_CHAR, -1, Scope::Local);
        let got = manager.hyphenate_nodes(&context, list.clone()).unwrap();
        assert_eq!(got, list);

        context.set_count(HYPHEN_CHAR, '=' as i32, Scope::Local);
        let got = manager.hyphenate_nodes(&context, list).unwrap();
        match &got[2] {
            Node::Discretionary(d) => assert_eq!(d.pre_break, vec![Node::Char(Char::new('=', 0))]),
            other => panic!("expected a discretionary, got {other:?}"),
        }
    }
}
