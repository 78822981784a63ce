//! Visual length measurement and truncation.
//!
//! A combining mark (Unicode general category Mark: Mn, Mc, Me) is printed in
//! the same terminal column as the character it attaches to. Counting marks
//! would overstate the printed width of a cell and break column alignment, so
//! every width in this crate is a count of non-mark chars.
//!
//! Truncation always cuts at a `char` boundary and keeps marks together with
//! their base character.

use unicode_normalization::char::is_combining_mark;

/// Whether `c` occupies no column of its own when printed.
pub fn is_zero_width(c: char) -> bool {
    is_combining_mark(c)
}

/// Number of columns `s` occupies: the count of chars that are not marks.
pub fn visual_length(s: &str) -> usize {
    s.chars().filter(|&c| !is_zero_width(c)).count()
}

/// Longest prefix of `s` whose visual length is at most `max_len`.
///
/// Marks following the last counted character stay in the prefix, so a base
/// character is never separated from its diacritics. Returns `s` unchanged when
/// it already fits.
pub fn truncate_to_visual_length(s: &str, max_len: usize) -> &str {
    if max_len == 0 {
        return "";
    }

    let mut counted = 0;
    for (index, c) in s.char_indices() {
        if is_zero_width(c) {
            continue;
        }
        if counted == max_len {
            return &s[..index];
        }
        counted += 1;
    }

    s
}
