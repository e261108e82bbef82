use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Testament {
    Old,
    New,
}

impl fmt::Display for Testament {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Testament::Old => write!(f, "Old Testament"),
            Testament::New => write!(f, "New Testament"),
        }
    }
}

impl FromStr for Testament {
    type Err = String;

    // Accepts both the `old`/`new` and `OT`/`NT` tag vocabularies.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "old" | "ot" => Ok(Testament::Old),
            "new" | "nt" => Ok(Testament::New),
            other => Err(format!("unknown testament '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CanonicalBook {
    pub id: &'static str,
    pub name: &'static str,
    pub testament: Testament,
}

const fn ot(id: &'static str, name: &'static str) -> CanonicalBook {
    CanonicalBook {
        id,
        name,
        testament: Testament::Old,
    }
}

const fn nt(id: &'static str, name: &'static str) -> CanonicalBook {
    CanonicalBook {
        id,
        name,
        testament: Testament::New,
    }
}

/// The 66 books in canonical reading order.
pub static BOOKS: [CanonicalBook; 66] = [
    // Old Testament
    ot("GEN", "Genesis"),
    ot("EXO", "Exodus"),
    ot("LEV", "Leviticus"),
    ot("NUM", "Numbers"),
    ot("DEU", "Deuteronomy"),
    ot("JOS", "Joshua"),
    ot("JDG", "Judges"),
    ot("RUT", "Ruth"),
    ot("1SA", "1 Samuel"),
    ot("2SA", "2 Samuel"),
    ot("1KI", "1 Kings"),
    ot("2KI", "2 Kings"),
    ot("1CH", "1 Chronicles"),
    ot("2CH", "2 Chronicles"),
    ot("EZR", "Ezra"),
    ot("NEH", "Nehemiah"),
    ot("EST", "Esther"),
    ot("JOB", "Job"),
    ot("PSA", "Psalms"),
    ot("PRO", "Proverbs"),
    ot("ECC", "Ecclesiastes"),
    ot("SNG", "Song of Solomon"),
    ot("ISA", "Isaiah"),
    ot("JER", "Jeremiah"),
    ot("LAM", "Lamentations"),
    ot("EZK", "Ezekiel"),
    ot("DAN", "Daniel"),
    ot("HOS", "Hosea"),
    ot("JOL", "Joel"),
    ot("AMO", "Amos"),
    ot("OBA", "Obadiah"),
    ot("JON", "Jonah"),
    ot("MIC", "Micah"),
    ot("NAM", "Nahum"),
    ot("HAB", "Habakkuk"),
    ot("ZEP", "Zephaniah"),
    ot("HAG", "Haggai"),
    ot("ZEC", "Zechariah"),
    ot("MAL", "Malachi"),
    // New Testament
    nt("MAT", "Matthew"),
    nt("MRK", "Mark"),
    nt("LUK", "Luke"),
    nt("JHN", "John"),
    nt("ACT", "Acts"),
    nt("ROM", "Romans"),
    nt("1CO", "1 Corinthians"),
    nt("2CO", "2 Corinthians"),
    nt("GAL", "Galatians"),
    nt("EPH", "Ephesians"),
    nt("PHP", "Philippians"),
    nt("COL", "Colossians"),
    nt("1TH", "1 Thessalonians"),
    nt("2TH", "2 Thessalonians"),
    nt("1TI", "1 Timothy"),
    nt("2TI", "2 Timothy"),
    nt("TIT", "Titus"),
    nt("PHM", "Philemon"),
    nt("HEB", "Hebrews"),
    nt("JAS", "James"),
    nt("1PE", "1 Peter"),
    nt("2PE", "2 Peter"),
    nt("1JN", "1 John"),
    nt("2JN", "2 John"),
    nt("3JN", "3 John"),
    nt("JUD", "Jude"),
    nt("REV", "Revelation"),
];

/// Books in canonical order, optionally restricted to one testament.
pub fn list_books(testament: Option<Testament>) -> Vec<&'static CanonicalBook> {
    BOOKS
        .iter()
        .filter(|b| testament.is_none_or(|t| b.testament == t))
        .collect()
}

pub fn find_by_id(id: &str) -> Option<&'static CanonicalBook> {
    BOOKS.iter().find(|b| b.id == id)
}

pub fn find_by_name(name: &str, case_insensitive: bool) -> Option<&'static CanonicalBook> {
    let name = name.trim();
    BOOKS.iter().find(|b| {
        if case_insensitive {
            b.name.eq_ignore_ascii_case(name)
        } else {
            b.name == name
        }
    })
}

/// Position of a book in canonical order.
pub fn book_index(id: &str) -> Option<usize> {
    BOOKS.iter().position(|b| b.id == id)
}

pub fn next_book(id: &str) -> Option<&'static CanonicalBook> {
    book_index(id).and_then(|i| BOOKS.get(i + 1))
}

pub fn previous_book(id: &str) -> Option<&'static CanonicalBook> {
    book_index(id)
        .and_then(|i| i.checked_sub(1))
        .map(|i| &BOOKS[i])
}
