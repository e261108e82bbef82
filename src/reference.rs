use crate::aliases::resolve_alias;
use crate::books::{CanonicalBook, find_by_id};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::Serialize;

/// Result of parsing a free-text reference.
///
/// An unrecognized reference is the `Default` value: `valid == false` and
/// every other field absent. `is_range` is set iff one of `end_verse` or
/// `end_chapter` is, and never both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedReference {
    pub valid: bool,
    pub book_id: Option<&'static str>,
    pub book_name: Option<&'static str>,
    pub chapter: Option<u32>,
    pub verse: Option<u32>,
    pub end_verse: Option<u32>,
    pub end_chapter: Option<u32>,
    pub is_range: bool,
}

impl ParsedReference {
    fn of_book(book: &'static CanonicalBook) -> Self {
        Self {
            valid: true,
            book_id: Some(book.id),
            book_name: Some(book.name),
            ..Self::default()
        }
    }

    pub fn book(&self) -> Option<&'static CanonicalBook> {
        self.book_id.and_then(find_by_id)
    }
}

// Patterns run against the trimmed, lowercased input. The book group takes
// letters, digits and inner spaces so "1 corinthians" or "song of solomon"
// stay whole.
static VERSE_RANGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([\w\s]+)\s+(\d+):(\d+)-(\d+)$").expect("valid regex"));
static CHAPTER_RANGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([\w\s]+)\s+(\d+)-(\d+)$").expect("valid regex"));
static SINGLE_VERSE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([\w\s]+)\s+(\d+):(\d+)(?:-(\d+))?$").expect("valid regex"));
static BOOK_CHAPTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([\w\s]+)\s+(\d+)$").expect("valid regex"));

/// Parse a reference such as `"John 3:16"`, `"Genesis 1-3"` or `"1 Cor 13:4-7"`.
///
/// Patterns are tried from most to least specific; the first one that both
/// matches and names a known book wins. Never fails: anything unrecognized
/// comes back as `ParsedReference::default()`.
pub fn parse(text: &str) -> ParsedReference {
    let normalized = text.trim().to_lowercase();
    if normalized.is_empty() {
        return ParsedReference::default();
    }

    verse_range(&normalized)
        .or_else(|| chapter_range(&normalized))
        .or_else(|| single_verse(&normalized))
        .or_else(|| book_chapter(&normalized))
        .or_else(|| bare_book(&normalized))
        .unwrap_or_default()
}

fn verse_range(text: &str) -> Option<ParsedReference> {
    let caps = VERSE_RANGE.captures(text)?;
    let book = book_of(&caps)?;
    let chapter = number(&caps, 2)?;
    let verse = number(&caps, 3)?;
    let end_verse = number(&caps, 4).filter(|end| *end >= verse)?;

    Some(ParsedReference {
        chapter: Some(chapter),
        verse: Some(verse),
        end_verse: Some(end_verse),
        is_range: true,
        ..ParsedReference::of_book(book)
    })
}

fn chapter_range(text: &str) -> Option<ParsedReference> {
    let caps = CHAPTER_RANGE.captures(text)?;
    let book = book_of(&caps)?;
    let chapter = number(&caps, 2)?;
    let end_chapter = number(&caps, 3).filter(|end| *end >= chapter)?;

    Some(ParsedReference {
        chapter: Some(chapter),
        end_chapter: Some(end_chapter),
        is_range: true,
        ..ParsedReference::of_book(book)
    })
}

fn single_verse(text: &str) -> Option<ParsedReference> {
    let caps = SINGLE_VERSE.captures(text)?;
    let book = book_of(&caps)?;
    let chapter = number(&caps, 2)?;
    let verse = number(&caps, 3)?;
    let end_verse = match caps.get(4) {
        Some(_) => Some(number(&caps, 4).filter(|end| *end >= verse)?),
        None => None,
    };

    Some(ParsedReference {
        chapter: Some(chapter),
        verse: Some(verse),
        end_verse,
        is_range: end_verse.is_some(),
        ..ParsedReference::of_book(book)
    })
}

fn book_chapter(text: &str) -> Option<ParsedReference> {
    let caps = BOOK_CHAPTER.captures(text)?;
    let book = book_of(&caps)?;
    let chapter = number(&caps, 2)?;

    Some(ParsedReference {
        chapter: Some(chapter),
        ..ParsedReference::of_book(book)
    })
}

fn bare_book(text: &str) -> Option<ParsedReference> {
    let id = resolve_alias(text)?;
    find_by_id(id).map(ParsedReference::of_book)
}

fn book_of(caps: &Captures<'_>) -> Option<&'static CanonicalBook> {
    let id = resolve_alias(caps.get(1)?.as_str())?;
    find_by_id(id)
}

// Chapter and verse numbers are 1-based; zero or an overflowing token
// means the pattern does not apply.
fn number(caps: &Captures<'_>, group: usize) -> Option<u32> {
    caps.get(group)?
        .as_str()
        .parse::<u32>()
        .ok()
        .filter(|n| *n > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_verse_reference() {
        let r = parse("John 3:16");
        assert!(r.valid);
        assert_eq!(r.book_id, Some("JHN"));
        assert_eq!(r.book_name, Some("John"));
        assert_eq!(r.chapter, Some(3));
        assert_eq!(r.verse, Some(16));
        assert_eq!(r.end_verse, None);
        assert!(!r.is_range);
    }

    #[test]
    fn chapter_range_reference() {
        let r = parse("Genesis 1-3");
        assert!(r.valid);
        assert_eq!(r.book_id, Some("GEN"));
        assert_eq!(r.chapter, Some(1));
        assert_eq!(r.end_chapter, Some(3));
        assert_eq!(r.verse, None);
        assert_eq!(r.end_verse, None);
        assert!(r.is_range);
    }

    #[test]
    fn verse_range_with_numbered_book() {
        let r = parse("1 Corinthians 13:4-7");
        assert!(r.valid);
        assert_eq!(r.book_id, Some("1CO"));
        assert_eq!(r.book_name, Some("1 Corinthians"));
        assert_eq!(r.chapter, Some(13));
        assert_eq!(r.verse, Some(4));
        assert_eq!(r.end_verse, Some(7));
        assert_eq!(r.end_chapter, None);
        assert!(r.is_range);
    }

    #[test]
    fn book_and_chapter() {
        let r = parse("Psalm 119");
        assert!(r.valid);
        assert_eq!(r.book_id, Some("PSA"));
        assert_eq!(r.book_name, Some("Psalms"));
        assert_eq!(r.chapter, Some(119));
        assert_eq!(r.verse, None);
        assert!(!r.is_range);
    }

    #[test]
    fn bare_book_names() {
        let r = parse("Genesis");
        assert!(r.valid);
        assert_eq!(r.book_id, Some("GEN"));
        assert_eq!(r.chapter, None);
        assert_eq!(r.verse, None);

        assert_eq!(parse("  3 JOHN ").book_id, Some("3JN"));
        assert_eq!(parse("song of songs").book_id, Some("SNG"));
    }

    #[test]
    fn multi_word_and_abbreviated_books() {
        let r = parse("Song of Solomon 2:4");
        assert_eq!(r.book_id, Some("SNG"));
        assert_eq!((r.chapter, r.verse), (Some(2), Some(4)));

        let r = parse("1st john 4:8");
        assert_eq!(r.book_id, Some("1JN"));

        let r = parse("rev 22");
        assert_eq!((r.book_id, r.chapter), (Some("REV"), Some(22)));

        // extra inner whitespace is absorbed by the book group and trimmed
        let r = parse("john   3:16");
        assert_eq!((r.book_id, r.chapter, r.verse), (Some("JHN"), Some(3), Some(16)));
    }

    #[test]
    fn unrecognized_input_is_the_default() {
        for input in [
            "not a verse",
            "",
            "   ",
            "Hezekiah 3:16",
            "John three:sixteen",
            "John 3:",
            "John :16",
            "3:16",
        ] {
            assert_eq!(
                parse(input),
                ParsedReference::default(),
                "'{}' should not parse",
                input
            );
        }
    }

    #[test]
    fn zero_and_backwards_ranges_do_not_parse() {
        assert!(!parse("John 0").valid);
        assert!(!parse("John 3:0").valid);
        assert!(!parse("Genesis 3-1").valid);
        assert!(!parse("John 3:16-14").valid);
        assert!(!parse("John 99999999999:1").valid);
    }

    #[test]
    fn same_start_and_end_is_a_range() {
        let r = parse("Jude 1:3-3");
        assert!(r.is_range);
        assert_eq!(r.end_verse, Some(3));
    }

    #[test]
    fn at_most_one_range_end() {
        for input in ["John 3:16-18", "Genesis 1-3", "John 3:16", "Acts 2", "Ruth"] {
            let r = parse(input);
            assert!(r.valid, "{}", input);
            assert!(!(r.end_verse.is_some() && r.end_chapter.is_some()));
            assert_eq!(r.is_range, r.end_verse.is_some() || r.end_chapter.is_some());
            if r.verse.is_some() {
                assert!(r.chapter.is_some());
            }
        }
    }

    #[test]
    fn parse_is_repeatable() {
        for input in ["John 3:16", "1 Corinthians 13:4-7", "nonsense 1:1"] {
            assert_eq!(parse(input), parse(input));
        }
    }

    #[test]
    fn serializes_with_camel_case_fields() -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_value(parse("John 3:16"))?;
        assert_eq!(json["bookId"], "JHN");
        assert_eq!(json["isRange"], false);
        assert!(json["endVerse"].is_null());
        Ok(())
    }
}
