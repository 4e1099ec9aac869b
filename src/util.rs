//! Shared utility functions used across the codebase.

/// Find the largest valid UTF-8 char boundary at or before `pos`.
///
/// Use when truncating strings by byte position to avoid panicking on
/// multi-byte characters.
pub fn floor_char_boundary(s: &str, pos: usize) -> usize {
    if pos >= s.len() {
        return s.len();
    }
    let mut i = pos;
    while i > 0 && !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}

/// First `max_bytes` of `s` (rounded down to a char boundary), for logs and
/// error payloads that echo upstream bodies.
pub fn preview(s: &str, max_bytes: usize) -> String {
    s[..floor_char_boundary(s, max_bytes)].to_string()
}
