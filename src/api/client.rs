//! Async client for the API.Bible v1 REST service.

use super::config::ApiConfig;
use super::types::{
    BibleBook, BibleChapter, BibleVerse, BibleVersion, ChapterSummary, Envelope, Passage,
    SearchResult,
};
use crate::cache::CountCache;
use crate::error::{Error, Result};
use crate::format::verse_id;
use crate::votd;
use chrono::NaiveDate;
use reqwest::Url;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

// Content options shared by chapter, verse and passage requests.
const CONTENT_OPTIONS: [(&str, &str); 5] = [
    ("content-type", "html"),
    ("include-notes", "false"),
    ("include-titles", "true"),
    ("include-verse-numbers", "true"),
    ("include-verse-spans", "true"),
];

pub struct Client {
    http: reqwest::Client,
    config: ApiConfig,
}

impl Client {
    pub fn new(config: ApiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { http, config })
    }

    /// `{base}/bibles/{bible_id}/{segments...}` with each segment percent-encoded.
    fn url(&self, segments: &[&str]) -> Result<Url> {
        let base = &self.config.base_url;
        let mut url = Url::parse(base)
            .map_err(|e| Error::Config(format!("invalid base url '{}': {}", base, e)))?;
        url.path_segments_mut()
            .map_err(|_| Error::Config(format!("base url '{}' cannot take a path", base)))?
            .pop_if_empty()
            .push("bibles")
            .push(&self.config.bible_id)
            .extend(segments);
        Ok(url)
    }

    async fn get<T: DeserializeOwned>(&self, url: Url, query: &[(&str, &str)]) -> Result<T> {
        debug!(%url, "GET");

        let response = self
            .http
            .get(url)
            .query(query)
            .header("api-key", &self.config.api_key)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Status {
                status: status.as_u16(),
                body: body.chars().take(200).collect(),
            });
        }

        let envelope: Envelope<T> = response.json().await?;
        Ok(envelope.data)
    }

    pub async fn books(&self) -> Result<Vec<BibleBook>> {
        self.get(self.url(&["books"])?, &[]).await
    }

    pub async fn book(&self, book_id: &str) -> Result<BibleBook> {
        self.get(self.url(&["books", book_id])?, &[]).await
    }

    pub async fn book_chapters(&self, book_id: &str) -> Result<Vec<ChapterSummary>> {
        self.get(self.url(&["books", book_id, "chapters"])?, &[]).await
    }

    /// Numbered chapters of a book, not counting the `intro` entry.
    pub async fn chapter_count(&self, book_id: &str) -> Result<u32> {
        let chapters = self.book_chapters(book_id).await?;
        Ok(count_numbered_chapters(&chapters))
    }

    pub async fn chapter(&self, chapter_id: &str) -> Result<BibleChapter> {
        let mut query = CONTENT_OPTIONS.to_vec();
        query.push(("include-chapter-numbers", "true"));
        self.get(self.url(&["chapters", chapter_id])?, &query).await
    }

    pub async fn chapter_verses(&self, chapter_id: &str) -> Result<Vec<BibleVerse>> {
        self.get(self.url(&["chapters", chapter_id, "verses"])?, &[]).await
    }

    pub async fn verse_count(&self, chapter_id: &str) -> Result<u32> {
        Ok(self.chapter_verses(chapter_id).await?.len() as u32)
    }

    pub async fn verse(&self, verse_id: &str) -> Result<BibleVerse> {
        self.get(self.url(&["verses", verse_id])?, &CONTENT_OPTIONS).await
    }

    pub async fn search(&self, query: &str, offset: u32, limit: u32) -> Result<SearchResult> {
        let offset = offset.to_string();
        let limit = limit.to_string();
        self.get(
            self.url(&["search"])?,
            &[("query", query), ("offset", &offset), ("limit", &limit)],
        )
        .await
    }

    /// Passage by API path, e.g. `GEN.1-3` or `1CO.13.4-7`.
    pub async fn passage(&self, reference: &str) -> Result<Passage> {
        self.get(self.url(&["passages", reference])?, &CONTENT_OPTIONS).await
    }

    /// Every Bible the key can access; not scoped to the configured Bible id.
    pub async fn versions(&self) -> Result<Vec<BibleVersion>> {
        let mut url = self.url(&[])?;
        url.path_segments_mut()
            .map_err(|_| Error::Config("base url cannot take a path".to_string()))?
            .pop();
        self.get(url, &[]).await
    }

    /// The day's verse, or John 3:16 when the day's pick cannot be fetched.
    pub async fn verse_of_the_day(&self, date: NaiveDate) -> Result<BibleVerse> {
        let id = votd::select(date);
        match self.verse(id).await {
            Ok(verse) => Ok(verse),
            Err(e) if id != votd::FALLBACK_VERSE => {
                warn!(verse = id, error = %e, "verse of the day failed, using fallback");
                self.verse(votd::FALLBACK_VERSE).await
            }
            Err(e) => Err(e),
        }
    }

    /// Chapter count from the API, or from the cache / static tables when
    /// the call fails or comes back empty. Successful answers are recorded.
    pub async fn chapter_count_or_fallback(
        &self,
        book_id: &str,
        cache: Option<&mut CountCache>,
    ) -> u32 {
        match self.chapter_count(book_id).await {
            Ok(n) if n > 0 => {
                if let Some(cache) = cache {
                    cache.record_chapter_count(book_id, n);
                }
                n
            }
            outcome => {
                let fallback = cache
                    .map(|c| c.chapter_count(book_id))
                    .unwrap_or_else(|| crate::counts::chapter_count(book_id));
                warn!(book = book_id, ?outcome, fallback, "chapter count unavailable");
                fallback
            }
        }
    }

    pub async fn verse_count_or_fallback(
        &self,
        book_id: &str,
        chapter: u32,
        cache: Option<&mut CountCache>,
    ) -> u32 {
        match self.verse_count(&verse_id(book_id, chapter, None)).await {
            Ok(n) if n > 0 => {
                if let Some(cache) = cache {
                    cache.record_verse_count(book_id, chapter, n);
                }
                n
            }
            outcome => {
                let fallback = cache
                    .map(|c| c.verse_count(book_id, chapter))
                    .unwrap_or_else(|| crate::counts::verse_count(book_id, chapter));
                warn!(book = book_id, chapter, ?outcome, fallback, "verse count unavailable");
                fallback
            }
        }
    }
}

fn count_numbered_chapters(chapters: &[ChapterSummary]) -> u32 {
    chapters.iter().filter(|c| !c.is_intro()).count() as u32
}
