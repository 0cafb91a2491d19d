//! Case folding and collation for French-language table data.

use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Composed (NFC) lowercase form, so that precomposed and decomposed
/// accents fold to the same text.
pub fn fold(s: &str) -> String {
    s.nfc().collect::<String>().to_lowercase()
}

/// Case-insensitive substring match.
pub fn contains_folded(haystack: &str, needle: &str) -> bool {
    fold(haystack).contains(&fold(needle))
}

/// Base letters only: canonical decomposition with every combining mark
/// dropped ("ș" → "s", "ő" → "o").
fn primary_key(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().filter(|c| !is_combining_mark(*c))
}

/// Locale-style comparison of two already folded strings: letters are
/// compared by their base form first ("é" sorts with "e"), accents only
/// break ties.
pub fn collate(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(primary_key(b))
        .then_with(|| a.nfc().cmp(b.nfc()))
}
