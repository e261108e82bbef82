use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

static HTML_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid regex"));
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));
static VERSE_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+\s*¶\s*").expect("valid regex"));

static SHORTENERS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (r"(?i)The .* according to ", ""),
        (r"(?i)The Book of ", ""),
        (r"(?i)The ", ""),
        (r"(?i)Chapter ", ""),
        (r"(?i)Verse ", ""),
        (r"(?i)Psalm ", "Psalm "),
    ]
    .into_iter()
    .map(|(pattern, replacement)| (Regex::new(pattern).expect("valid regex"), replacement))
    .collect()
});

/// Plain text of an API verse payload: tags stripped, whitespace collapsed,
/// and the first `<n> ¶` verse marker removed.
pub fn clean_verse_content(content: &str) -> String {
    let text = HTML_TAG.replace_all(content, "");
    let text = WHITESPACE.replace_all(&text, " ");
    let text = VERSE_MARKER.replace(text.trim(), "");
    text.trim().to_string()
}

/// Wrap every case-insensitive occurrence of any term in `<mark>` tags.
///
/// All terms go into one alternation, longest first, so a match is never
/// wrapped twice and one term cannot match inside another's markup.
pub fn highlight_search_terms(text: &str, terms: &[&str]) -> String {
    let mut terms: Vec<String> = terms
        .iter()
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect();
    if terms.is_empty() {
        return text.to_string();
    }
    terms.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    terms.dedup();

    let alternation = terms
        .iter()
        .map(|t| regex::escape(t))
        .collect::<Vec<_>>()
        .join("|");
    match RegexBuilder::new(&format!("({})", alternation))
        .case_insensitive(true)
        .build()
    {
        Ok(re) => re.replace_all(text, "<mark>$1</mark>").into_owned(),
        Err(_) => text.to_string(),
    }
}

/// Drop long-form prefixes from an API reference title, e.g.
/// `"The Gospel according to John Chapter 3"` becomes `"John 3"`.
pub fn create_short_reference(reference: &str) -> String {
    SHORTENERS
        .iter()
        .fold(reference.to_string(), |acc, (re, replacement)| {
            re.replace(&acc, *replacement).into_owned()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_markup_and_verse_markers() {
        let raw = r#"<p class="p"><span data-number="16" class="v">16</span>¶ For God so loved
            the world, that he gave his only begotten Son</p>"#;
        assert_eq!(
            clean_verse_content(raw),
            "For God so loved the world, that he gave his only begotten Son"
        );
        assert_eq!(
            clean_verse_content(
                "<p>1 ¶ In the beginning God created the heaven and the earth.</p>"
            ),
            "In the beginning God created the heaven and the earth."
        );
        assert_eq!(clean_verse_content(""), "");
    }

    #[test]
    fn only_the_first_marker_is_removed() {
        assert_eq!(clean_verse_content("3 ¶ a 4 ¶ b"), "a 4 ¶ b");
    }

    #[test]
    fn highlights_ignore_case_and_escape_terms() {
        assert_eq!(
            highlight_search_terms("Jesus wept.", &["jesus"]),
            "<mark>Jesus</mark> wept."
        );
        assert_eq!(
            highlight_search_terms("love is (kind)", &["(kind)", "  "]),
            "love is <mark>(kind)</mark>"
        );
        assert_eq!(highlight_search_terms("Jesus wept.", &[]), "Jesus wept.");
    }

    #[test]
    fn highlighting_never_touches_its_own_markup() {
        assert_eq!(
            highlight_search_terms("love is patient", &["love", "mark"]),
            "<mark>love</mark> is patient"
        );
        assert_eq!(
            highlight_search_terms("Noah made the ark, a mark of faith", &["ark", "mark"]),
            "Noah made the <mark>ark</mark>, a <mark>mark</mark> of faith"
        );
    }

    #[test]
    fn repeated_terms_wrap_once() {
        assert_eq!(
            highlight_search_terms("Jesus wept.", &["jesus", "Jesus", "JESUS "]),
            "<mark>Jesus</mark> wept."
        );
    }

    #[test]
    fn shortens_long_titles() {
        assert_eq!(
            create_short_reference("The Gospel according to John Chapter 3"),
            "John 3"
        );
        assert_eq!(create_short_reference("The Book of Ruth"), "Ruth");
        assert_eq!(create_short_reference("psalm 23"), "Psalm 23");
        assert_eq!(create_short_reference("Romans 8:28"), "Romans 8:28");
    }
}
