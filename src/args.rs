use clap::{Parser, Subcommand};
use kjv_ref::Testament;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "kjv-ref")]
#[command(about = "Parse, look up and fetch KJV scripture references", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// JSON config file with base_url, api_key, bible_id, timeout_secs
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// API.Bible key (overrides config and KJV_REF_API_KEY)
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Bible id to query (defaults to the KJV)
    #[arg(long, global = true)]
    pub bible_id: Option<String>,

    /// Count cache file (defaults to the platform data dir)
    #[arg(long, global = true)]
    pub cache: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a reference and print its canonical forms
    #[command(alias = "p")]
    Parse {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,

        /// Print the parsed reference as JSON
        #[arg(long)]
        json: bool,
    },

    /// List books in canonical order
    #[command(alias = "ls")]
    Books {
        /// old|new (also accepts ot|nt)
        #[arg(short, long)]
        testament: Option<Testament>,
    },

    /// Chapter count of a book, or verse count of one chapter
    Counts {
        /// Book name, alias or id
        book: String,

        chapter: Option<u32>,

        /// Ask the API first and remember its answer
        #[arg(long)]
        online: bool,
    },

    /// Chapter following a reference
    Next {
        #[arg(required = true, num_args = 1..)]
        reference: Vec<String>,
    },

    /// Chapter preceding a reference
    Prev {
        #[arg(required = true, num_args = 1..)]
        reference: Vec<String>,
    },

    /// Fetch the text of a verse or verse range
    #[command(alias = "v")]
    Verse {
        #[arg(required = true, num_args = 1..)]
        reference: Vec<String>,
    },

    /// Fetch a whole chapter
    #[command(alias = "c")]
    Chapter {
        #[arg(required = true, num_args = 1..)]
        reference: Vec<String>,
    },

    /// Keyword search
    #[command(alias = "s")]
    Search {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        #[arg(long, default_value_t = 0)]
        offset: u32,

        #[arg(long, default_value_t = 20)]
        limit: u32,

        /// Wrap matched terms in <mark> tags
        #[arg(long)]
        highlight: bool,
    },

    /// Verse of the day
    Votd,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multi_word_references_are_collected() {
        let cli = Cli::parse_from(["kjv-ref", "parse", "1", "Corinthians", "13:4-7", "--json"]);
        match cli.command {
            Commands::Parse { text, json } => {
                assert_eq!(text.join(" "), "1 Corinthians 13:4-7");
                assert!(json);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn testament_flag_parses() {
        let cli = Cli::parse_from(["kjv-ref", "books", "--testament", "nt"]);
        assert!(matches!(
            cli.command,
            Commands::Books {
                testament: Some(Testament::New)
            }
        ));
        assert!(Cli::try_parse_from(["kjv-ref", "books", "-t", "apocrypha"]).is_err());
    }

    #[test]
    fn search_defaults() {
        let cli = Cli::parse_from(["kjv-ref", "-v", "search", "living", "water"]);
        assert!(cli.verbose);
        match cli.command {
            Commands::Search {
                query,
                offset,
                limit,
                highlight,
            } => {
                assert_eq!(query, vec!["living", "water"]);
                assert_eq!((offset, limit), (0, 20));
                assert!(!highlight);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
