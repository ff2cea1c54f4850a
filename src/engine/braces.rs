//! Balanced-delimiter scanning for object literals
//!
//! Text-level brace matching used to slice `{ ... }` regions out of JS
//! source without a real parser. Braces inside single- or double-quoted
//! string literals are ignored, backslash escapes included.

/// Find the `}` matching the `{` at byte offset `open`.
///
/// Returns the byte offset of the matching close brace, or `None` when
/// `open` does not point at a `{` or the braces never balance. Template
/// literals and regex literals are not understood; a stray brace inside
/// one will throw the count off.
pub fn balanced_span(text: &str, open: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    if bytes.get(open) != Some(&b'{') {
        return None;
    }

    let mut depth: usize = 0;
    let mut quote: Option<u8> = None;
    let mut i = open;
    while i < bytes.len() {
        let b = bytes[i];
        match quote {
            Some(q) => {
                if b == b'\\' {
                    // skip the escaped byte
                    i += 1;
                } else if b == q {
                    quote = None;
                }
            }
            None => match b {
                b'\'' | b'"' => quote = Some(b),
                b'{' => depth += 1,
                b'}' => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(i);
                    }
                }
                _ => {}
            },
        }
        i += 1;
    }
    None
}
