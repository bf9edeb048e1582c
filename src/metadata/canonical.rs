//! Header name canonicalization.
//!
//! The first character and every character following a `-` is upper-cased.
//! Everything else is left alone, so interior capitals survive and the
//! transform is idempotent. ASCII only: header names are tokens.

/// Rewrite a header name into Title-Case-per-segment form.
pub fn canonicalize(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut after_dash = true;

    for ch in name.chars() {
        out.push(if after_dash { ch.to_ascii_uppercase() } else { ch });
        after_dash = ch == '-';
    }

    out
}
