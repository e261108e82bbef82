use crate::books::{find_by_id, next_book, previous_book};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterLocation {
    pub book_id: &'static str,
    pub book_name: &'static str,
    pub chapter: u32,
}

/// Chapter after `chapter` in `book_id`, crossing into the next book at the
/// end. `None` past Revelation or for an unknown book.
///
/// `chapter_count` supplies the number of chapters in a book, so either the
/// static tables or a warmed [`crate::cache::CountCache`] can drive it.
pub fn next_chapter<F>(book_id: &str, chapter: u32, chapter_count: F) -> Option<ChapterLocation>
where
    F: Fn(&str) -> u32,
{
    let book = find_by_id(book_id)?;
    if chapter < chapter_count(book.id) {
        return Some(ChapterLocation {
            book_id: book.id,
            book_name: book.name,
            chapter: chapter + 1,
        });
    }

    next_book(book.id).map(|next| ChapterLocation {
        book_id: next.id,
        book_name: next.name,
        chapter: 1,
    })
}

/// Chapter before `chapter` in `book_id`, landing on the last chapter of the
/// previous book when at chapter 1. `None` before Genesis 1.
pub fn previous_chapter<F>(book_id: &str, chapter: u32, chapter_count: F) -> Option<ChapterLocation>
where
    F: Fn(&str) -> u32,
{
    let book = find_by_id(book_id)?;
    if chapter > 1 {
        return Some(ChapterLocation {
            book_id: book.id,
            book_name: book.name,
            chapter: chapter - 1,
        });
    }

    previous_book(book.id).map(|prev| ChapterLocation {
        book_id: prev.id,
        book_name: prev.name,
        chapter: chapter_count(prev.id),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counts::chapter_count;

    #[test]
    fn steps_within_a_book() {
        let next = next_chapter("JHN", 3, chapter_count).unwrap();
        assert_eq!((next.book_id, next.chapter), ("JHN", 4));
        let prev = previous_chapter("JHN", 3, chapter_count).unwrap();
        assert_eq!((prev.book_id, prev.chapter), ("JHN", 2));
    }

    #[test]
    fn crosses_book_boundaries() {
        let next = next_chapter("MAL", 4, chapter_count).unwrap();
        assert_eq!(next.book_id, "MAT");
        assert_eq!(next.book_name, "Matthew");
        assert_eq!(next.chapter, 1);

        let prev = previous_chapter("MAT", 1, chapter_count).unwrap();
        assert_eq!((prev.book_id, prev.chapter), ("MAL", 4));

        let prev = previous_chapter("EXO", 1, chapter_count).unwrap();
        assert_eq!((prev.book_id, prev.chapter), ("GEN", 50));
    }

    #[test]
    fn stops_at_the_ends_of_the_canon() {
        assert!(next_chapter("REV", 22, chapter_count).is_none());
        assert!(previous_chapter("GEN", 1, chapter_count).is_none());
        assert!(next_chapter("XYZ", 1, chapter_count).is_none());
    }

    #[test]
    fn uses_the_supplied_counter() {
        // a counter that thinks every book has one chapter
        let next = next_chapter("GEN", 1, |_| 1).unwrap();
        assert_eq!((next.book_id, next.chapter), ("EXO", 1));
        let prev = previous_chapter("EXO", 1, |_| 7).unwrap();
        assert_eq!((prev.book_id, prev.chapter), ("GEN", 7));
    }
}
