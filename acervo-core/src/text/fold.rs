//! Case folding for search comparisons.
//!
//! All matching in the engine happens on *folded* text: lowercased,
//! Unicode-aware, byte-for-byte comparable. Record values are folded once
//! when the index is built; queries are folded (and trimmed) once per
//! keystroke. Folding never trims record values - a value's interior and
//! edge whitespace is part of what the user sees and matches against.

/// Folds `input` into an existing buffer, reusing its capacity.
///
/// Lowercases every character. Does not trim.
#[inline]
pub fn fold_into(input: &str, out: &mut String) {
    out.clear();
    out.reserve(input.len());

    // Fast path: ASCII text folds byte-wise with no expansion.
    if input.is_ascii() {
        for b in input.bytes() {
            out.push(b.to_ascii_lowercase() as char);
        }
        return;
    }

    for c in input.chars() {
        // char::to_lowercase can expand to multiple chars (e.g. 'İ').
        for lc in c.to_lowercase() {
            out.push(lc);
        }
    }
}

/// Folds `input` into a fresh `String`.
#[inline]
#[must_use]
pub fn fold(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    fold_into(input, &mut out);
    out
}

/// Folds a user query into an existing buffer: trim, then lowercase.
///
/// Queries are trimmed because the search box routinely carries stray
/// leading/trailing whitespace; record values are not (see [`fold_into`]).
#[inline]
pub fn fold_query_into(query: &str, out: &mut String) {
    fold_into(query.trim(), out);
}

/// Folds a user query into a fresh `String`.
#[inline]
#[must_use]
pub fn fold_query(query: &str) -> String {
    fold(query.trim())
}

/// Returns `true` if `s` contains no uppercase ASCII.
///
/// Sanity check for the pre-folded input contract of the matcher
/// functions, only evaluated in debug builds. Non-ASCII uppercase is not
/// checked; the fold path handles it and the check stays O(n) over bytes.
#[inline]
pub(crate) fn looks_folded(s: &str) -> bool {
    !s.bytes().any(|b| b.is_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_ascii() {
        assert_eq!(fold("SILLA Secretarial"), "silla secretarial");
    }

    #[test]
    fn folds_accented_spanish() {
        assert_eq!(fold("DIRECCIÓN JURÍDICA"), "dirección jurídica");
        assert_eq!(fold("Ángel Ñuñez"), "ángel ñuñez");
    }

    #[test]
    fn fold_preserves_value_whitespace() {
        assert_eq!(fold("  DOS  ESPACIOS  "), "  dos  espacios  ");
    }

    #[test]
    fn fold_query_trims() {
        assert_eq!(fold_query("  SILLA \t"), "silla");
        assert_eq!(fold_query("   "), "");
    }

    #[test]
    fn fold_is_idempotent() {
        let once = fold("Álvaro PÉREZ");
        assert_eq!(fold(&once), once);
    }

    #[test]
    fn fold_into_reuses_buffer() {
        let mut buf = String::with_capacity(64);
        fold_into("ABC", &mut buf);
        assert_eq!(buf, "abc");
        fold_into("XYZ", &mut buf);
        assert_eq!(buf, "xyz");
    }
}
