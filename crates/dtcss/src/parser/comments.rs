//! Block comment stripping.
//!
//! Comments are removed in a pre-pass over the raw source so the node
//! parsers never have to account for them mid-token. An unterminated
//! comment swallows the rest of the input, matching how CSS scanners
//! treat EOF inside a comment.

/// Removes all `/* ... */` block comments from the source.
pub fn strip_comments(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut chars = source.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '/' && chars.peek() == Some(&'*') {
            chars.next();
            while let Some(inner) = chars.next() {
                if inner == '*' && chars.peek() == Some(&'/') {
                    chars.next();
                    break;
                }
            }
            continue;
        }
        out.push(c);
    }

    out
}
