//! The scoped context.

use std::borrow::Cow;
use std::fmt::Write;

use crate::binding::{Category, Key, Value};
use crate::defaults;
use crate::error::{Error, Result};
use crate::group::{AfterGroup, Group, GroupType};
use crate::scopedmap::{Scope, ScopedMap};
use crate::types::*;

/// Dynamically scoped interpreter state.
///
/// The context holds every binding the interpreter can look up: control sequence
/// meanings, registers, code tables, fonts and so on.
/// Bindings follow TeX's grouping rules.
/// A local assignment inside a group is undone when the group closes;
/// a global assignment is visible everywhere and survives every open group.
///
/// ```
/// # use texcontext::*;
/// let mut context = Context::new();
/// context.open_group(GroupType::Simple);
/// context.set_count("x", 5, Scope::Local);
/// assert_eq!(context.count("x"), Ok(5));
/// context.close_group().unwrap();
/// assert_eq!(context.get(Category::Count, "x"), None);
/// ```
#[derive(Debug, Default)]
pub struct Context {
    bindings: ScopedMap<(Category, Key), Value, Group>,
}

impl Context {
    /// Creates a context with no bindings, at the bottom level.
    pub fn new() -> Self {
        Default::default()
    }

    /// Opens a new group.
    pub fn open_group(&mut self, group_type: GroupType) {
        self.bindings.open_frame(Group::new(group_type));
        log::trace!("entering {group_type} group (level {})", self.level());
    }

    /// Closes the current group.
    ///
    /// All local assignments made in the group are undone first.
    /// Then the deferred actions of the group run in the order they were queued,
    ///     so callbacks observe the bindings of the enclosing group.
    /// The deferred tokens are returned in order; the caller is responsible for
    ///     pushing them back into the input.
    ///
    /// At the bottom level this returns [Error::UnbalancedGroup] and changes nothing.
    pub fn close_group(&mut self) -> Result<Vec<Token>> {
        let group = self
            .bindings
            .close_frame()
            .map_err(|_| Error::UnbalancedGroup)?;
        log::trace!(
            "leaving {} group (level {})",
            group.group_type,
            self.level() + 1
        );
        let mut tokens = vec![];
        for action in group.after_group {
            match action {
                AfterGroup::Token(token) => tokens.push(token),
                AfterGroup::Callback(callback) => callback(self),
            }
        }
        Ok(tokens)
    }

    /// Queues an action to run when the current group closes.
    ///
    /// At the bottom level there is no group to close and the action is dropped.
    pub fn after_group<A: Into<AfterGroup>>(&mut self, action: A) {
        match self.bindings.payload_mut() {
            Some(group) => group.after_group.push(action.into()),
            None => log::debug!("ignoring after-group action at the bottom level"),
        }
    }

    /// Queues a callback to run when the current group closes.
    pub fn after_group_callback<F: FnOnce(&mut Context) + 'static>(&mut self, f: F) {
        self.after_group(AfterGroup::Callback(Box::new(f)));
    }

    /// Returns the current group level; 0 at the bottom level.
    pub fn level(&self) -> usize {
        self.bindings.depth()
    }

    /// Returns the type of the current group.
    pub fn group_type(&self) -> GroupType {
        self.bindings
            .frames()
            .next()
            .map(|(group, _)| group.group_type)
            .unwrap_or(GroupType::BottomLevel)
    }

    /// Describes the open groups, innermost first, in the style of `\showgroups`.
    pub fn show_groups(&self) -> String {
        let mut s = String::new();
        let mut level = self.level();
        for (group, saved) in self.bindings.frames() {
            // Writing to a String cannot fail.
            let _ = writeln!(
                s,
                "### {} group (level {level}) {saved} saved",
                group.group_type
            );
            level -= 1;
        }
        s.push_str("### bottom level");
        s
    }

    /// Returns the binding visible in the current group, or `None` if the key is unbound.
    pub fn get<K: Into<Key>>(&self, category: Category, key: K) -> Option<&Value> {
        self.bindings.get(&(category, key.into()))
    }

    /// Returns the visible binding, falling back to the built-in value of the category.
    pub fn lookup<K: Into<Key>>(&self, category: Category, key: K) -> Option<Cow<'_, Value>> {
        let binding = (category, key.into());
        match self.bindings.get(&binding) {
            Some(value) => Some(Cow::Borrowed(value)),
            None => defaults::fallback(&binding.0, &binding.1).map(Cow::Owned),
        }
    }

    /// Binds a value in the provided scope.
    pub fn set<K: Into<Key>>(&mut self, category: Category, key: K, value: Value, scope: Scope) {
        let key = key.into();
        log::trace!("{scope:?} assignment {category} {key} = {value:?}");
        self.bindings.insert((category, key), value, scope);
    }

    /// Iterates over the visible bindings of a category.
    pub fn bindings<'a>(
        &'a self,
        category: &'a Category,
    ) -> impl Iterator<Item = (&'a Key, &'a Value)> {
        self.bindings
            .iter()
            .filter(move |((c, _), _)| c == category)
            .map(|((_, k), v)| (k, v))
    }

    fn typed<T>(
        &self,
        category: Category,
        key: Key,
        expected: &'static str,
        extract: fn(&Value) -> Option<T>,
    ) -> Result<Option<T>> {
        let binding = (category, key);
        let fallback;
        let value = match self.bindings.get(&binding) {
            Some(value) => value,
            None => match defaults::fallback(&binding.0, &binding.1) {
                Some(value) => {
                    fallback = value;
                    &fallback
                }
                None => return Ok(None),
            },
        };
        match extract(value) {
            Some(t) => Ok(Some(t)),
            None => Err(Error::TypeMismatch {
                found: value.kind(),
                category: binding.0,
                key: binding.1,
                expected,
            }),
        }
    }

    /// Returns the value of an integer register.
    pub fn count<K: Into<Key>>(&self, key: K) -> Result<i32> {
        let i = self.typed(Category::Count, key.into(), "integer", |v| match v {
            Value::Integer(i) => Some(*i),
            _ => None,
        })?;
        Ok(i.unwrap_or_default())
    }

    /// Sets the value of an integer register.
    pub fn set_count<K: Into<Key>>(&mut self, key: K, value: i32, scope: Scope) {
        self.set(Category::Count, key, Value::Integer(value), scope)
    }

    /// Returns the value of a dimension register.
    pub fn dimen<K: Into<Key>>(&self, key: K) -> Result<Scaled> {
        let d = self.typed(Category::Dimen, key.into(), "dimension", |v| match v {
            Value::Dimen(d) => Some(*d),
            _ => None,
        })?;
        Ok(d.unwrap_or_default())
    }

    /// Sets the value of a dimension register.
    pub fn set_dimen<K: Into<Key>>(&mut self, key: K, value: Scaled, scope: Scope) {
        self.set(Category::Dimen, key, Value::Dimen(value), scope)
    }

    /// Returns the value of a glue register.
    pub fn skip<K: Into<Key>>(&self, key: K) -> Result<Glue> {
        let g = self.typed(Category::Skip, key.into(), "glue", |v| match v {
            Value::Glue(g) => Some(*g),
            _ => None,
        })?;
        Ok(g.unwrap_or_default())
    }

    /// Sets the value of a glue register.
    pub fn set_skip<K: Into<Key>>(&mut self, key: K, value: Glue, scope: Scope) {
        self.set(Category::Skip, key, Value::Glue(value), scope)
    }

    /// Returns the value of a token list register.
    pub fn toks<K: Into<Key>>(&self, key: K) -> Result<Vec<Token>> {
        let t = self.typed(Category::Toks, key.into(), "token list", |v| match v {
            Value::Tokens(t) => Some(t.clone()),
            _ => None,
        })?;
        Ok(t.unwrap_or_default())
    }

    /// Sets the value of a token list register.
    pub fn set_toks<K: Into<Key>>(&mut self, key: K, value: Vec<Token>, scope: Scope) {
        self.set(Category::Toks, key, Value::Tokens(value), scope)
    }

    /// Returns the category code of a character.
    pub fn catcode(&self, c: char) -> Result<CatCode> {
        let code = self.typed(Category::CatCode, c.into(), "category code", |v| match v {
            Value::CatCode(code) => Some(*code),
            _ => None,
        })?;
        Ok(code.unwrap_or_default())
    }

    /// Sets the category code of a character.
    pub fn set_catcode(&mut self, c: char, code: CatCode, scope: Scope) {
        self.set(Category::CatCode, c, Value::CatCode(code), scope)
    }

    fn char_code(&self, category: Category, c: char) -> Result<char> {
        let mapped = self.typed(category, c.into(), "character", |v| match v {
            Value::Char(c) => Some(*c),
            _ => None,
        })?;
        Ok(mapped.unwrap_or('\0'))
    }

    /// Returns the lower case code of a character; `'\0'` if it has none.
    pub fn lccode(&self, c: char) -> Result<char> {
        self.char_code(Category::LcCode, c)
    }

    /// Sets the lower case code of a character.
    pub fn set_lccode(&mut self, c: char, lc: char, scope: Scope) {
        self.set(Category::LcCode, c, Value::Char(lc), scope)
    }

    /// Returns the upper case code of a character; `'\0'` if it has none.
    pub fn uccode(&self, c: char) -> Result<char> {
        self.char_code(Category::UcCode, c)
    }

    /// Sets the upper case code of a character.
    pub fn set_uccode(&mut self, c: char, uc: char, scope: Scope) {
        self.set(Category::UcCode, c, Value::Char(uc), scope)
    }

    fn int_code(&self, category: Category, c: char) -> Result<i32> {
        let i = self.typed(category, c.into(), "integer", |v| match v {
            Value::Integer(i) => Some(*i),
            _ => None,
        })?;
        Ok(i.unwrap_or_default())
    }

    /// Returns the space factor code of a character.
    pub fn sfcode(&self, c: char) -> Result<i32> {
        self.int_code(Category::SfCode, c)
    }

    /// Returns the math code of a character.
    pub fn mathcode(&self, c: char) -> Result<i32> {
        self.int_code(Category::MathCode, c)
    }

    /// Returns the delimiter code of a character.
    pub fn delcode(&self, c: char) -> Result<i32> {
        self.int_code(Category::DelCode, c)
    }

    /// Returns the font bound to an identifier, if any.
    ///
    /// The empty identifier holds the current font.
    pub fn font<K: Into<Key>>(&self, key: K) -> Result<Option<FontRef>> {
        self.typed(Category::Font, key.into(), "font", |v| match v {
            Value::Font(f) => Some(f.clone()),
            _ => None,
        })
    }

    /// Binds a font to an identifier.
    pub fn set_font<K: Into<Key>>(&mut self, key: K, font: FontRef, scope: Scope) {
        self.set(Category::Font, key, Value::Font(font), scope)
    }

    /// Returns the current typesetting context.
    pub fn typesetting_context(&self) -> Result<TypesettingContext> {
        let tc = self.typed(Category::Typesetting, Key::unit(), "typesetting context", |v| {
            match v {
                Value::Typesetting(tc) => Some(tc.clone()),
                _ => None,
            }
        })?;
        Ok(tc.unwrap_or_default())
    }

    /// Sets the current typesetting context.
    pub fn set_typesetting_context(&mut self, tc: TypesettingContext, scope: Scope) {
        self.set(
            Category::Typesetting,
            Key::unit(),
            Value::Typesetting(tc),
            scope,
        )
    }

    /// Returns the interaction mode.
    pub fn interaction(&self) -> Result<Interaction> {
        let mode = self.typed(Category::Interaction, Key::unit(), "interaction mode", |v| {
            match v {
                Value::Interaction(mode) => Some(*mode),
                _ => None,
            }
        })?;
        Ok(mode.unwrap_or_default())
    }

    /// Sets the interaction mode.
    pub fn set_interaction(&mut self, mode: Interaction, scope: Scope) {
        self.set(
            Category::Interaction,
            Key::unit(),
            Value::Interaction(mode),
            scope,
        )
    }

    /// Returns the meaning of a control sequence or active character.
    pub fn meaning<K: Into<Key>>(&self, key: K) -> Option<&Value> {
        self.get(Category::Code, key)
    }

    /// Binds a meaning to a control sequence or active character.
    pub fn set_meaning<K: Into<Key>>(&mut self, key: K, value: Value, scope: Scope) {
        self.set(Category::Code, key, value, scope)
    }
}
