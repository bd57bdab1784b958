use crate::config::{CATEGORY_SEPARATOR, MISSING_CATEGORY};

/// Collapses CR/LF/tabs and runs of whitespace into single spaces and trims
/// the ends. Idempotent: sanitizing sanitized text is a no-op.
pub fn sanitize(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Like [`sanitize`], but also removes the remaining interior spaces so
/// `"$ 12. 50"` becomes `"$12.50"`. Currency symbols and punctuation pass
/// through untouched.
pub fn clean_price(raw: &str) -> String {
    raw.split_whitespace().collect()
}

/// Splits a raw category field on `|`, trims each part, drops empties, and
/// dedupes preserving first-seen order. A field that yields nothing becomes
/// the `"NA"` placeholder so the result is never empty.
pub fn extract_categories(raw: &str) -> Vec<String> {
    let mut cleaned: Vec<String> = Vec::new();
    for part in raw.split('|') {
        let part = part.trim();
        if part.is_empty() || cleaned.iter().any(|c| c == part) {
            continue;
        }
        cleaned.push(part.to_string());
    }
    if cleaned.is_empty() {
        cleaned.push(MISSING_CATEGORY.to_string());
    }
    cleaned
}

/// Display form of a category list, joined with `" | "`.
pub fn join_categories(categories: &[String]) -> String {
    categories.join(CATEGORY_SEPARATOR)
}
