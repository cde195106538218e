//! Locale-style string collation for version ordering keys.
//!
//! Follows the root-locale collation a browser applies in
//! `String.localeCompare`, with punctuation non-ignorable:
//!
//! 1. Primary: whitespace < punctuation and symbols (in root order) <
//!    digits < letters, letters compared without case or accents.
//! 2. Secondary: unaccented before accented.
//! 3. Tertiary: lowercase before uppercase.
//!
//! Code point order breaks any remaining tie, so the result is a total order.

use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// ASCII punctuation and symbols in root collation order
const ROOT_PUNCTUATION_ORDER: &str = "_-,;:!?.'\"()[]{}@*/\\&#%`^+<=>|~$";

/// Character groups in collation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CharClass {
    Whitespace,
    Punctuation,
    Digit,
    Letter,
}

/// A base character with the combining marks that follow it
#[derive(Debug)]
struct CollationUnit {
    base: char,
    marks: Vec<char>,
}

fn classify(c: char) -> CharClass {
    if c.is_whitespace() || c.is_control() {
        CharClass::Whitespace
    } else if c.is_numeric() {
        CharClass::Digit
    } else if c.is_alphabetic() {
        CharClass::Letter
    } else {
        CharClass::Punctuation
    }
}

fn punctuation_weight(c: char) -> u32 {
    match ROOT_PUNCTUATION_ORDER.find(c) {
        Some(position) => position as u32,
        // Non-ASCII symbols sort after the ASCII set
        None => ROOT_PUNCTUATION_ORDER.len() as u32 + c as u32,
    }
}

fn fold_case(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

fn primary_key(unit: &CollationUnit) -> (CharClass, u32) {
    let class = classify(unit.base);
    let weight = match class {
        CharClass::Punctuation => punctuation_weight(unit.base),
        CharClass::Digit => unit.base.to_digit(10).unwrap_or(unit.base as u32),
        CharClass::Whitespace | CharClass::Letter => fold_case(unit.base) as u32,
    };
    (class, weight)
}

/// Split a string into base characters carrying their accents
fn collation_units(s: &str) -> Vec<CollationUnit> {
    let mut units: Vec<CollationUnit> = Vec::new();

    for c in s.nfd() {
        match units.last_mut() {
            Some(unit) if is_combining_mark(c) => unit.marks.push(c),
            _ => units.push(CollationUnit {
                base: c,
                marks: Vec::new(),
            }),
        }
    }

    units
}

/// Compare two strings the way a locale-aware collator would
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let units_a = collation_units(a);
    let units_b = collation_units(b);

    let primary = units_a
        .iter()
        .map(primary_key)
        .cmp(units_b.iter().map(primary_key));
    if primary != Ordering::Equal {
        return primary;
    }

    let secondary = units_a
        .iter()
        .map(|u| &u.marks)
        .cmp(units_b.iter().map(|u| &u.marks));
    if secondary != Ordering::Equal {
        return secondary;
    }

    let tertiary = units_a
        .iter()
        .map(|u| u.base.is_uppercase())
        .cmp(units_b.iter().map(|u| u.base.is_uppercase()));
    if tertiary != Ordering::Equal {
        return tertiary;
    }

    a.cmp(b)
}
