//! Response shapes for the API.Bible v1 endpoints we call.
//!
//! Every endpoint wraps its payload in `{ "data": ... }`. Fields the service
//! sometimes omits are defaulted so a sparse payload still decodes.

use crate::books::{Testament, find_by_id};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BibleVerse {
    pub id: String,
    #[serde(default)]
    pub org_id: String,
    #[serde(default)]
    pub book_id: String,
    #[serde(default)]
    pub chapter_id: String,
    #[serde(default)]
    pub bible_id: String,
    #[serde(default)]
    pub reference: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BibleChapter {
    pub id: String,
    #[serde(default)]
    pub bible_id: String,
    #[serde(default)]
    pub number: String,
    #[serde(default)]
    pub book_id: String,
    #[serde(default)]
    pub reference: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub verse_count: u32,
}

/// Entry of `/books/{id}/chapters`; `number` is `"intro"` for the preface pseudo-chapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterSummary {
    pub id: String,
    #[serde(default)]
    pub bible_id: String,
    #[serde(default)]
    pub book_id: String,
    pub number: String,
    #[serde(default)]
    pub reference: String,
}

impl ChapterSummary {
    pub fn is_intro(&self) -> bool {
        self.number.eq_ignore_ascii_case("intro")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BibleBook {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub name_long: String,
    #[serde(default)]
    pub abbreviation: Option<String>,
    #[serde(default)]
    pub chapters: Vec<ChapterSummary>,
}

impl BibleBook {
    /// Testament from the local registry; `None` for books outside the 66.
    pub fn testament(&self) -> Option<Testament> {
        find_by_id(&self.id).map(|b| b.testament)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchVerse {
    pub id: String,
    #[serde(default)]
    pub reference: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub book_id: String,
    #[serde(default)]
    pub chapter_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    #[serde(default)]
    pub verses: Vec<SearchVerse>,
    #[serde(default)]
    pub total: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BibleVersion {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub abbreviation: String,
    pub language: Language,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Passage {
    pub id: String,
    #[serde(default)]
    pub bible_id: String,
    #[serde(default)]
    pub reference: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub verse_count: u32,
}
