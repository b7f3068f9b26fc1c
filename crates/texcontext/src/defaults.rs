//! Values a category yields for keys that were never bound.
//!
//! These are the values INITEX starts with.

use crate::binding::{Category, Key, Value};
use crate::types::*;

const MATHCODE_DIGIT_OFFSET: u32 = 0x7000;
const MATHCODE_LETTER_OFFSET: u32 = 0x7100;
const SFCODE_DEFAULT: i32 = 1000;
const SFCODE_UPPERCASE: i32 = 999;
const DELCODE_DEFAULT: i32 = -1;
const MAGNIFICATION_DEFAULT: i32 = 1000;

/// Returns the built-in value for an unbound key, or `None` if the category has no such value.
///
/// Control sequences, fonts and file handles have no built-in values.
pub fn fallback(category: &Category, key: &Key) -> Option<Value> {
    use Category::*;
    Some(match (category, key) {
        (CatCode, Key::Char(c)) => Value::CatCode(catcode(*c)),
        (LcCode, Key::Char(c)) => Value::Char(lccode(*c)),
        (UcCode, Key::Char(c)) => Value::Char(uccode(*c)),
        (SfCode, Key::Char(c)) => Value::Integer(sfcode(*c)),
        (MathCode, Key::Char(c)) => Value::Integer(mathcode(*c)),
        (DelCode, Key::Char(_)) => Value::Integer(DELCODE_DEFAULT),
        (Count, _) => Value::Integer(0),
        (Dimen, _) => Value::Dimen(Scaled::ZERO),
        (Skip, _) | (Muskip, _) => Value::Glue(Default::default()),
        (Toks, _) => Value::Tokens(vec![]),
        (If, _) => Value::Bool(false),
        (Interaction, _) => Value::Interaction(Default::default()),
        (Magnification, _) => Value::Integer(MAGNIFICATION_DEFAULT),
        (Namespace, _) => Value::Str(String::new()),
        (Typesetting, _) => Value::Typesetting(Default::default()),
        _ => return None,
    })
}

fn catcode(c: char) -> CatCode {
    if c.is_alphabetic() {
        return CatCode::Letter;
    }
    match c {
        ' ' => CatCode::Space,
        '\\' => CatCode::Escape,
        '\r' | '\n' => CatCode::EndOfLine,
        '%' => CatCode::Comment,
        '\0' => CatCode::Ignored,
        '\u{7f}' => CatCode::Invalid,
        _ => CatCode::Other,
    }
}

// Case mappings that expand to more than one character have no single-character code.
fn single(mut chars: impl Iterator<Item = char>) -> char {
    match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => '\0',
    }
}

fn lccode(c: char) -> char {
    if c.is_alphabetic() {
        single(c.to_lowercase())
    } else {
        '\0'
    }
}

fn uccode(c: char) -> char {
    if c.is_alphabetic() {
        single(c.to_uppercase())
    } else {
        '\0'
    }
}

fn sfcode(c: char) -> i32 {
    if c.is_uppercase() {
        SFCODE_UPPERCASE
    } else {
        SFCODE_DEFAULT
    }
}

fn mathcode(c: char) -> i32 {
    let u = c as u32;
    let code = if c.is_ascii_digit() {
        u + MATHCODE_DIGIT_OFFSET
    } else if c.is_alphabetic() {
        u + MATHCODE_LETTER_OFFSET
    } else {
        u
    };
    code as i32
}
