use crate::reference::ParsedReference;
use std::fmt;

/// API.Bible path segment for a reference, e.g. `JHN.3.16` or `GEN.1-3`.
///
/// Picks the most specific form the populated fields allow; a chapter range
/// wins over any verse fields. `None` for an invalid reference.
pub fn to_api_path(r: &ParsedReference) -> Option<String> {
    if !r.valid {
        return None;
    }
    let book_id = r.book_id?;

    let path = match (r.chapter, r.verse, r.end_chapter, r.end_verse) {
        (Some(ch), _, Some(end), _) => format!("{}.{}-{}", book_id, ch, end),
        (Some(ch), Some(v), None, Some(end)) => format!("{}.{}.{}-{}", book_id, ch, v, end),
        (Some(ch), Some(v), None, None) => format!("{}.{}.{}", book_id, ch, v),
        (Some(ch), None, None, _) => format!("{}.{}", book_id, ch),
        (None, ..) => book_id.to_string(),
    };
    Some(path)
}

/// Human form of a reference, e.g. `John 3:16` or `Genesis 1-3`; empty when invalid.
pub fn to_display_string(r: &ParsedReference) -> String {
    let name = match (r.valid, r.book_name) {
        (true, Some(name)) => name,
        _ => return String::new(),
    };

    match (r.chapter, r.verse, r.end_chapter, r.end_verse) {
        (Some(ch), _, Some(end), _) => format!("{} {}-{}", name, ch, end),
        (Some(ch), Some(v), None, Some(end)) => format!("{} {}:{}-{}", name, ch, v, end),
        (Some(ch), Some(v), None, None) => format!("{} {}:{}", name, ch, v),
        (Some(ch), None, None, _) => format!("{} {}", name, ch),
        (None, ..) => name.to_string(),
    }
}

impl fmt::Display for ParsedReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_display_string(self))
    }
}

/// `BOOK.chapter` or `BOOK.chapter.verse` identifier used by the remote API.
pub fn verse_id(book_id: &str, chapter: u32, verse: Option<u32>) -> String {
    match verse {
        Some(v) => format!("{}.{}.{}", book_id, chapter, v),
        None => format!("{}.{}", book_id, chapter),
    }
}

/// `Book chapter` or `Book chapter:verse`.
pub fn format_verse_reference(book: &str, chapter: u32, verse: Option<u32>) -> String {
    match verse {
        Some(v) => format!("{} {}:{}", book, chapter, v),
        None => format!("{} {}", book, chapter),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::parse;

    #[test]
    fn api_paths_by_specificity() {
        let cases = [
            ("John 3:16", "JHN.3.16"),
            ("Genesis 1-3", "GEN.1-3"),
            ("1 Corinthians 13:4-7", "1CO.13.4-7"),
            ("Psalm 119", "PSA.119"),
            ("Revelation", "REV"),
        ];
        for (input, expected) in cases {
            assert_eq!(to_api_path(&parse(input)).as_deref(), Some(expected), "{}", input);
        }
    }

    #[test]
    fn display_strings_by_specificity() {
        let cases = [
            ("jn 3:16", "John 3:16"),
            ("gen 1-3", "Genesis 1-3"),
            ("1 cor 13:4-7", "1 Corinthians 13:4-7"),
            ("ps 23", "Psalms 23"),
            ("sos", "Song of Solomon"),
        ];
        for (input, expected) in cases {
            assert_eq!(to_display_string(&parse(input)), expected, "{}", input);
            assert_eq!(parse(input).to_string(), expected);
        }
    }

    #[test]
    fn invalid_references_format_to_nothing() {
        let r = parse("not a verse");
        assert_eq!(to_api_path(&r), None);
        assert_eq!(to_display_string(&r), "");
    }

    #[test]
    fn chapter_range_wins_over_verse_fields() {
        // hand-built: never produced by the parser, but the formatter must still pick one form
        let r = ParsedReference {
            verse: Some(5),
            end_chapter: Some(4),
            ..parse("Exodus 2")
        };
        assert_eq!(to_api_path(&r).as_deref(), Some("EXO.2-4"));
        assert_eq!(to_display_string(&r), "Exodus 2-4");
    }

    #[test]
    fn id_and_reference_helpers() {
        assert_eq!(verse_id("PSA", 23, Some(1)), "PSA.23.1");
        assert_eq!(verse_id("PSA", 23, None), "PSA.23");
        assert_eq!(format_verse_reference("Psalms", 23, Some(1)), "Psalms 23:1");
        assert_eq!(format_verse_reference("Psalms", 23, None), "Psalms 23");
    }
}
