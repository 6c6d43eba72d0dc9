/// Link slug for a title: lower-cased, each whitespace run replaced by `-`.
///
/// Nothing else is stripped, so "Corporate & Commercial" becomes
/// "corporate-&-commercial". The whole title is lower-cased at once so a
/// word-final `Σ` becomes `ς`, matching the browser's `toLowerCase`.
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut in_whitespace = false;
    for ch in lowered.chars() {
        if is_separator(ch) {
            if !in_whitespace {
                slug.push('-');
            }
            in_whitespace = true;
        } else {
            in_whitespace = false;
            slug.push(ch);
        }
    }
    slug
}

/// The `\s` class of browser regular expressions: Unicode white space plus
/// the byte order mark, minus NEL.
fn is_separator(ch: char) -> bool {
    ch == '\u{FEFF}' || (ch.is_whitespace() && ch != '\u{0085}')
}
