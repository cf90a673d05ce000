//! Ordering of visible documents.
//!
//! Titles are compared with a small locale-aware collation that behaves like a
//! default English collator. Punctuation and spaces sort before digits, and
//! digits before letters. Letters are compared first without accents or case,
//! then accents break ties, then case (lower before upper). So
//! `"apple" < "Banana" < "banana"` and `"resume" < "résumé"`, where a plain
//! byte comparison would put every capital before every lowercase letter.
//!
//! Letters with no canonical decomposition are folded to their base letters
//! (`ø` with `o`, `ß` as `ss`), and canonically equivalent strings compare
//! equal.
//!
//! All orderings are stable: documents with equal keys keep their input order.

use crate::app::SortMode;
use crate::domain::Document;
use std::cmp::{Ordering, Reverse};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Primary weight group of a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Group {
    Punctuation,
    Digit,
    Letter,
}

impl Group {
    fn of(c: char) -> Self {
        if c.is_alphabetic() {
            Self::Letter
        } else if c.is_numeric() {
            Self::Digit
        } else {
            Self::Punctuation
        }
    }
}

/// Base letters for lower-case Latin letters NFD leaves intact.
const fn fold_letter(c: char) -> Option<&'static str> {
    Some(match c {
        'ø' => "o",
        'ß' => "ss",
        'æ' => "ae",
        'œ' => "oe",
        'ł' => "l",
        'đ' | 'ð' => "d",
        'þ' => "th",
        'ħ' => "h",
        'ı' => "i",
        _ => return None,
    })
}

/// Multi-level sort key for a string.
///
/// Field order gives the comparison precedence: base characters, then
/// accents, then case.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CollationKey {
    base: Vec<(Group, char)>,
    accents: Vec<char>,
    case: Vec<bool>,
}

impl CollationKey {
    #[must_use]
    pub fn new(s: &str) -> Self {
        let decomposed: Vec<char> = s.nfd().collect();

        let mut base = Vec::with_capacity(decomposed.len());
        for lower in decomposed
            .iter()
            .copied()
            .filter(|c| !is_combining_mark(*c))
            .flat_map(char::to_lowercase)
        {
            match fold_letter(lower) {
                Some(folded) => base.extend(folded.chars().map(|c| (Group::Letter, c))),
                None => base.push((Group::of(lower), lower)),
            }
        }

        let accents = decomposed.iter().copied().flat_map(char::to_lowercase).collect();
        let case = decomposed.iter().map(|c| c.is_uppercase()).collect();
        Self { base, accents, case }
    }
}

/// Compares two strings with the collation described in the module docs.
///
/// ```
/// use doclist::engine::sort::collate;
/// use std::cmp::Ordering;
///
/// assert_eq!(collate("apple", "Banana"), Ordering::Less);
/// assert_eq!(collate("banana", "Banana"), Ordering::Less);
/// assert_eq!(collate("resume", "résumé"), Ordering::Less);
/// ```
#[must_use]
pub fn collate(a: &str, b: &str) -> Ordering {
    CollationKey::new(a).cmp(&CollationKey::new(b))
}

/// Sorts documents in place according to `mode`.
///
/// Keys are computed once per document. The sort is stable.
pub fn sort_documents(docs: &mut [&Document], mode: SortMode) {
    let _span = tracing::trace_span!("sort_documents", count = docs.len(), sort = %mode).entered();

    match mode {
        SortMode::Title => docs.sort_by_cached_key(|d| CollationKey::new(&d.title)),
        SortMode::YearDesc => {
            docs.sort_by_cached_key(|d| (Reverse(d.year), CollationKey::new(&d.title)));
        }
        SortMode::Recency => {
            docs.sort_by_cached_key(|d| (Reverse(d.last_updated_or_empty().to_string()), Reverse(d.year)));
        }
    }
}
