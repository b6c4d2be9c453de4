//! Handwriting cleanup for entry names.

/// Normalize a free-text name.
///
/// Hyphens and underscores become spaces, everything other than ASCII letters
/// and spaces is dropped, runs of spaces collapse to one, and each word is
/// title-cased. Returns `None` when nothing is left.
///
/// ```
/// use cookbook_core::normalize;
///
/// assert_eq!(normalize("Riz@z RISO00tto!").as_deref(), Some("Rizz Risotto"));
/// assert_eq!(normalize("meatball_-_sub").as_deref(), Some("Meatball Sub"));
/// assert_eq!(normalize("1234 !!"), None);
/// ```
pub fn normalize(raw: &str) -> Option<String> {
    let cleaned: String = raw
        .chars()
        .map(|c| if c == '-' || c == '_' { ' ' } else { c })
        .filter(|c| c.is_ascii_alphabetic() || *c == ' ')
        .collect();

    let words: Vec<String> = cleaned.split(' ').filter(|w| !w.is_empty()).map(title_case).collect();
    if words.is_empty() {
        return None;
    }
    Some(words.join(" "))
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(word.len());
            out.push(first.to_ascii_uppercase());
            out.extend(chars.map(|c| c.to_ascii_lowercase()));
            out
        }
        None => String::new(),
    }
}
