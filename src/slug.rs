//! Slug Derivation
//!
//! Turns a human-readable title into the URL alias stored with a post.

/// Derive an alias from a title.
///
/// Trims the title, replaces each run of whitespace with a single `-`,
/// drops everything that is not an ASCII letter, a Cyrillic letter
/// (`а-я`, `А-Я`), a digit or `-`, then lower-cases the result.
/// Hyphens already present in the title are kept as they are.
pub fn derive_slug(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut in_whitespace = false;

    for c in title.trim_matches(is_space).chars() {
        if is_space(c) {
            if !in_whitespace {
                slug.push('-');
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;

        if is_slug_char(c) {
            slug.extend(c.to_lowercase());
        }
    }

    slug
}

/// Whitespace as the browser's `\s` class and `trim` see it.
/// Unlike `char::is_whitespace` this excludes U+0085 and includes the BOM.
fn is_space(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{b}' | '\u{c}' | '\r' | ' '
            | '\u{a0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202f}'
            | '\u{205f}'
            | '\u{3000}'
            | '\u{feff}'
    )
}

fn is_slug_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || is_cyrillic_letter(c)
}

/// Basic Cyrillic alphabet only: `ё`/`Ё` sit outside these ranges
fn is_cyrillic_letter(c: char) -> bool {
    matches!(c, 'а'..='я' | 'А'..='Я')
}
