//! URL slug derivation for blog posts.

/// Derive a URL slug from a post title.
///
/// Lower-cases the title, transliterates the Turkish letters the catalog
/// content uses (ç, ğ, ı, ö, ş, ü and their upper-case forms), turns spaces
/// into hyphens, and drops every other non-alphanumeric character. Runs of
/// hyphens are collapsed and leading/trailing hyphens trimmed, so
/// `"Kedi Maması: Alım Rehberi"` becomes `"kedi-mamasi-alim-rehberi"`.
///
/// The result is stable for a given title; uniqueness is enforced by the
/// posts table, not here.
#[must_use]
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut last_was_hyphen = true; // suppress leading hyphens

    for c in title.chars() {
        let mapped = match c {
            'ç' | 'Ç' => Some('c'),
            'ğ' | 'Ğ' => Some('g'),
            'ı' | 'İ' => Some('i'),
            'ö' | 'Ö' => Some('o'),
            'ş' | 'Ş' => Some('s'),
            'ü' | 'Ü' => Some('u'),
            ' ' | '-' | '_' => None,
            _ if c.is_ascii_alphanumeric() => Some(c.to_ascii_lowercase()),
            _ => continue,
        };

        match mapped {
            Some(ch) => {
                slug.push(ch);
                last_was_hyphen = false;
            }
            None => {
                if !last_was_hyphen {
                    slug.push('-');
                    last_was_hyphen = true;
                }
            }
        }
    }

    if slug.ends_with('-') {
        slug.pop();
    }

    slug
}
