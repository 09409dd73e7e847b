//! String helpers that std almost, but not quite, covers.


/// Returns true if every char of `val` is whitespace. The empty string counts as blank.
pub fn is_blank(val: &str) -> bool {
    val.chars().all(char::is_whitespace)
}

/// Splits `val` on every occurrence of `delimiter`.
///
/// The trailing segment is always yielded, so a string ending with the delimiter produces a final
/// empty segment. Unlike [`str::split`], an empty delimiter doesn't split between chars, it yields
/// `val` unchanged as the only segment.
pub fn split<'a>(val: &'a str, delimiter: &str) -> Vec<&'a str> {
    if delimiter.is_empty() {
        return vec![val];
    }
    val.split(delimiter).collect()
}
