//! Query slugification for directory names
//!
//! The raw query string is used as the per-query subdirectory name, so it
//! must be reduced to something every filesystem accepts. Path separators,
//! reserved characters, and control characters are stripped; interior
//! whitespace runs collapse to a single underscore.

/// Turn a search query into a safe directory name.
///
/// Never returns an empty string: a query that sanitizes away entirely
/// (e.g. `"///"`) falls back to `"query"`.
///
/// # Examples
/// ```
/// # use imagescrape::utils::query_slug;
/// assert_eq!(query_slug("red panda"), "red_panda");
/// assert_eq!(query_slug("cats/dogs"), "catsdogs");
/// assert_eq!(query_slug("  spaced   out  "), "spaced_out");
/// ```
#[must_use]
pub fn query_slug(query: &str) -> String {
    let sanitized = sanitize_filename::sanitize(query.trim());

    let slug: String = sanitized
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_");

    if slug.is_empty() {
        "query".to_string()
    } else {
        slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_query_gets_underscores() {
        assert_eq!(query_slug("golden retriever puppy"), "golden_retriever_puppy");
    }

    #[test]
    fn path_separators_are_stripped() {
        assert_eq!(query_slug("a/b\\c"), "abc");
        assert!(!query_slug("../../etc/passwd").contains('/'));
    }

    #[test]
    fn reserved_characters_are_stripped() {
        let slug = query_slug("what? when: \"why\"");
        assert!(!slug.contains(['?', ':', '"']));
    }

    #[test]
    fn empty_after_sanitize_falls_back() {
        assert_eq!(query_slug("///"), "query");
        assert_eq!(query_slug(""), "query");
    }

    #[test]
    fn unicode_is_preserved() {
        assert_eq!(query_slug("猫 画像"), "猫_画像");
    }
}
