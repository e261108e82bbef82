//! Client-side cache of chapter and verse counts seen from the remote API.
//!
//! Stored as a bincode file so the navigation selectors can show real
//! counts when the service later becomes unreachable. Lookups that miss the
//! cache fall through to the static tables in [`crate::counts`].

use crate::counts;
use crate::error::{Error, Result};
use crate::format::verse_id;
use bincode::{Decode, Encode};
use directories::ProjectDirs;
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const CACHE_FILE_NAME: &str = "counts.bin";

// A full cache of every KJV chapter is well under 64 KiB. The limit stops a
// corrupt length prefix from turning into a huge allocation.
const MAX_CACHE_BYTES: usize = 1 << 20;

#[derive(Debug, Default, Clone, PartialEq, Eq, Encode, Decode)]
pub struct CountCache {
    chapters: BTreeMap<String, u32>, // book id -> chapter count
    verses: BTreeMap<String, u32>,   // BOOK.chapter -> verse count
}

impl CountCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform data directory location, e.g. `~/.local/share/kjv-ref/counts.bin`.
    pub fn default_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("org", "kjv-ref", "kjv-ref")
            .ok_or_else(|| Error::Config("could not determine home directory".to_string()))?;
        Ok(dirs.data_local_dir().join(CACHE_FILE_NAME))
    }

    /// Read a cache file. A missing file is an empty cache, not an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no count cache yet");
            return Ok(Self::new());
        }

        let data = fs::read(path)?;
        let config = bincode::config::standard().with_limit::<MAX_CACHE_BYTES>();
        let (cache, _): (CountCache, usize) = bincode::decode_from_slice(&data, config)?;
        debug!(
            path = %path.display(),
            chapters = cache.chapters.len(),
            verses = cache.verses.len(),
            "loaded count cache"
        );
        Ok(cache)
    }

    /// Cache at `path`, or an empty one when there is no path or the file
    /// cannot be read. Counts then come from the static tables.
    pub fn open(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::new();
        };
        Self::load(path).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "ignoring unreadable count cache");
            Self::new()
        })
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let f = File::create(path)?;
        let mut writer = BufWriter::new(f);

        let config = bincode::config::standard().with_limit::<MAX_CACHE_BYTES>();
        bincode::encode_into_std_write(self, &mut writer, config)?;
        writer.flush()?;

        Ok(())
    }

    // Zero counts come from empty API payloads and are never worth keeping.
    pub fn record_chapter_count(&mut self, book_id: &str, count: u32) {
        if count > 0 {
            self.chapters.insert(book_id.to_string(), count);
        }
    }

    pub fn record_verse_count(&mut self, book_id: &str, chapter: u32, count: u32) {
        if count > 0 {
            self.verses.insert(verse_id(book_id, chapter, None), count);
        }
    }

    pub fn chapter_count(&self, book_id: &str) -> u32 {
        self.chapters
            .get(book_id)
            .copied()
            .unwrap_or_else(|| counts::chapter_count(book_id))
    }

    pub fn verse_count(&self, book_id: &str, chapter: u32) -> u32 {
        self.verses
            .get(&verse_id(book_id, chapter, None))
            .copied()
            .unwrap_or_else(|| counts::verse_count(book_id, chapter))
    }

    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty() && self.verses.is_empty()
    }
}
