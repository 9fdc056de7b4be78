/// Normalize a search string: lowercase, then trim surrounding whitespace.
///
/// Both the insert and the lookup path go through this function, so a key is
/// always compared in the same form it was stored in. Punctuation and Unicode
/// composition are left untouched.
pub fn normalize(text: &str) -> String {
    text.to_lowercase().trim().to_string()
}

/// True when nothing but whitespace remains after trimming.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}
