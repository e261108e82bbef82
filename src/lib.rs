//! KJV scripture references: book registry, alias resolution, reference
//! parsing and formatting, degraded-mode chapter/verse counts, and an
//! API.Bible client.
//!
//! The core (`books`, `aliases`, `reference`, `format`, `counts`) is pure
//! and synchronous over static data. It never performs I/O and never
//! fails: an unrecognized reference is `ParsedReference::default()`, an
//! unknown count is a documented default.
//!
//! ```
//! use kjv_ref::{parse, to_api_path};
//!
//! let r = parse("1 Corinthians 13:4-7");
//! assert_eq!(to_api_path(&r).as_deref(), Some("1CO.13.4-7"));
//! ```

pub mod aliases;
pub mod api;
pub mod books;
pub mod cache;
pub mod counts;
pub mod error;
pub mod format;
pub mod navigation;
pub mod reference;
pub mod text;
pub mod votd;

pub use aliases::resolve_alias;
pub use books::{CanonicalBook, Testament, find_by_id, find_by_name, list_books};
pub use counts::{chapter_count, verse_count};
pub use error::{Error, Result};
pub use format::{to_api_path, to_display_string};
pub use reference::{ParsedReference, parse};
