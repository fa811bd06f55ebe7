use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Lowercases and strips diacritics so that "cote" matches "Côte" and
/// "turkiye" matches "Türkiye". Decomposes to NFD and drops the
/// combining marks.
pub fn fold(input: &str) -> String {
    input
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Case- and diacritic-insensitive ordering used for every name-sorted
/// list the crate hands out, so "Åland Islands" files with the other A
/// names rather than after "Zimbabwe". Section keys fold the same way,
/// so grouping a list sorted with this comparator never reorders across
/// sections.
pub fn name_cmp(a: &str, b: &str) -> Ordering {
    fold(a).cmp(&fold(b))
}
