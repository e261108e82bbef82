use clap::Parser;
use kjv_ref::api::{ApiConfig, Client};
use kjv_ref::books::find_by_id;
use kjv_ref::cache::CountCache;
use kjv_ref::error::{Error, Result};
use kjv_ref::format::verse_id;
use kjv_ref::navigation::{ChapterLocation, next_chapter, previous_chapter};
use kjv_ref::text::{clean_verse_content, create_short_reference, highlight_search_terms};
use kjv_ref::{ParsedReference, list_books, parse, resolve_alias, to_api_path};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

mod args;
use args::{Cli, Commands};

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    run(cli).await.map_err(|e| {
        debug!(error = %e, "command failed");
        e.user_message().into()
    })
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let cache_path = resolve_cache_path(&cli);
    let mut cache = CountCache::open(cache_path.as_deref());

    match cli.command {
        Commands::Parse { ref text, json } => {
            let text = text.join(" ");
            let r = parse(&text);
            if json {
                println!("{}", serde_json::to_string_pretty(&r)?);
            }
            let r = require_valid(r, text)?;
            if !json {
                print_reference(&r);
            }
        }
        Commands::Books { testament } => {
            for (i, book) in list_books(testament).iter().enumerate() {
                println!(
                    "{:>2}. {:<4} {:<16} {:>3} chapters",
                    i + 1,
                    book.id,
                    book.name,
                    cache.chapter_count(book.id)
                );
            }
        }
        Commands::Counts {
            ref book,
            chapter,
            online,
        } => {
            let book_id = resolve_book(book)?;
            let count = if online {
                let client = client(&cli)?;
                let count = match chapter {
                    Some(ch) => {
                        client
                            .verse_count_or_fallback(book_id, ch, Some(&mut cache))
                            .await
                    }
                    None => {
                        client
                            .chapter_count_or_fallback(book_id, Some(&mut cache))
                            .await
                    }
                };
                save_cache(&cache, cache_path.as_deref());
                count
            } else {
                match chapter {
                    Some(ch) => cache.verse_count(book_id, ch),
                    None => cache.chapter_count(book_id),
                }
            };
            match chapter {
                Some(ch) => println!("{} {}: {} verses", book_id, ch, count),
                None => println!("{}: {} chapters", book_id, count),
            }
        }
        Commands::Next { ref reference } => {
            let r = parse_required(reference)?;
            let (book_id, chapter) = start_of(&r)?;
            let chapter = r.end_chapter.unwrap_or(chapter);
            print_location(next_chapter(book_id, chapter, |id| cache.chapter_count(id)));
        }
        Commands::Prev { ref reference } => {
            let r = parse_required(reference)?;
            let (book_id, chapter) = start_of(&r)?;
            print_location(previous_chapter(book_id, chapter, |id| {
                cache.chapter_count(id)
            }));
        }
        Commands::Verse { ref reference } => {
            let r = parse_required(reference)?;
            let path = to_api_path(&r).ok_or_else(|| Error::UnknownReference(r.to_string()))?;
            let client = client(&cli)?;
            if r.verse.is_some() && !r.is_range {
                let verse = client.verse(&path).await?;
                println!("{}", create_short_reference(&verse.reference));
                println!("{}", clean_verse_content(&verse.content));
            } else {
                let passage = client.passage(&path).await?;
                println!("{}", create_short_reference(&passage.reference));
                println!("{}", clean_verse_content(&passage.content));
            }
        }
        Commands::Chapter { ref reference } => {
            let r = parse_required(reference)?;
            let (book_id, chapter) = start_of(&r)?;
            let client = client(&cli)?;
            let data = client.chapter(&verse_id(book_id, chapter, None)).await?;

            println!("{}", create_short_reference(&data.reference));
            println!("{}", clean_verse_content(&data.content));

            cache.record_verse_count(book_id, chapter, data.verse_count);
            save_cache(&cache, cache_path.as_deref());
        }
        Commands::Search {
            ref query,
            offset,
            limit,
            highlight,
        } => {
            let query = query.join(" ");
            let client = client(&cli)?;
            let result = client.search(&query, offset, limit).await?;
            let terms: Vec<&str> = query.split_whitespace().collect();

            println!("{} results for '{}'", result.total, query);
            for verse in &result.verses {
                let text = if highlight {
                    highlight_search_terms(&verse.text, &terms)
                } else {
                    verse.text.clone()
                };
                println!("{:<20} {}", verse.reference, text);
            }
        }
        Commands::Votd => {
            let client = client(&cli)?;
            let today = chrono::Local::now().date_naive();
            let verse = client.verse_of_the_day(today).await?;
            println!("{}", create_short_reference(&verse.reference));
            println!("{}", clean_verse_content(&verse.content));
        }
    }

    Ok(())
}

fn client(cli: &Cli) -> Result<Client> {
    let mut config = match &cli.config {
        Some(path) => ApiConfig::load(path)?.with_overrides(|key| std::env::var(key).ok())?,
        None => ApiConfig::from_env()?,
    };

    if let Some(key) = &cli.api_key {
        config.api_key = key.clone();
    }
    if let Some(id) = &cli.bible_id {
        config.bible_id = id.clone();
    }
    if !config.has_api_key() {
        warn!("no API key configured; the service will reject requests");
    }

    Client::new(config)
}

// Without a usable data directory the cache lives in memory for this run.
fn resolve_cache_path(cli: &Cli) -> Option<PathBuf> {
    match &cli.cache {
        Some(path) => Some(path.clone()),
        None => CountCache::default_path()
            .inspect_err(|e| warn!(error = %e, "count cache disabled"))
            .ok(),
    }
}

fn parse_required(words: &[String]) -> Result<ParsedReference> {
    let text = words.join(" ");
    require_valid(parse(&text), text)
}

fn require_valid(r: ParsedReference, text: String) -> Result<ParsedReference> {
    if r.valid {
        Ok(r)
    } else {
        Err(Error::UnknownReference(text))
    }
}

/// Book id and chapter a reference starts at; whole-book references start at chapter 1.
fn start_of(r: &ParsedReference) -> Result<(&'static str, u32)> {
    let book_id = r
        .book_id
        .ok_or_else(|| Error::UnknownReference(r.to_string()))?;
    Ok((book_id, r.chapter.unwrap_or(1)))
}

fn resolve_book(text: &str) -> Result<&'static str> {
    resolve_alias(text)
        .or_else(|| find_by_id(&text.trim().to_uppercase()).map(|b| b.id))
        .ok_or_else(|| Error::UnknownReference(text.to_string()))
}

fn print_reference(r: &ParsedReference) {
    println!("{}", r);
    if let Some(path) = to_api_path(r) {
        println!("  api path:  {}", path);
    }
    if let Some(book) = r.book() {
        println!("  testament: {}", book.testament);
    }
}

fn print_location(location: Option<ChapterLocation>) {
    match location {
        Some(loc) => println!(
            "{} {}  ({})",
            loc.book_name,
            loc.chapter,
            verse_id(loc.book_id, loc.chapter, None)
        ),
        None => println!("(none)"),
    }
}

fn save_cache(cache: &CountCache, path: Option<&Path>) {
    let Some(path) = path else {
        return;
    };
    if let Err(e) = cache.save(path) {
        warn!(path = %path.display(), error = %e, "could not write count cache");
    }
}
