use crate::books::find_by_name;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Lowercase abbreviations and variant spellings, each mapping to exactly one book id.
const ALIASES: &[(&str, &str)] = &[
    ("gen", "GEN"),
    ("genesis", "GEN"),
    ("ex", "EXO"),
    ("exo", "EXO"),
    ("exodus", "EXO"),
    ("lev", "LEV"),
    ("leviticus", "LEV"),
    ("num", "NUM"),
    ("numbers", "NUM"),
    ("deut", "DEU"),
    ("deu", "DEU"),
    ("deuteronomy", "DEU"),
    ("josh", "JOS"),
    ("jos", "JOS"),
    ("joshua", "JOS"),
    ("judg", "JDG"),
    ("jdg", "JDG"),
    ("judges", "JDG"),
    ("ru", "RUT"),
    ("ruth", "RUT"),
    ("1sam", "1SA"),
    ("1 sam", "1SA"),
    ("1 samuel", "1SA"),
    ("1st samuel", "1SA"),
    ("2sam", "2SA"),
    ("2 sam", "2SA"),
    ("2 samuel", "2SA"),
    ("2nd samuel", "2SA"),
    ("1ki", "1KI"),
    ("1 ki", "1KI"),
    ("1 kings", "1KI"),
    ("1st kings", "1KI"),
    ("2ki", "2KI"),
    ("2 ki", "2KI"),
    ("2 kings", "2KI"),
    ("2nd kings", "2KI"),
    ("1chr", "1CH"),
    ("1 chr", "1CH"),
    ("1 chron", "1CH"),
    ("1 chronicles", "1CH"),
    ("1st chronicles", "1CH"),
    ("2chr", "2CH"),
    ("2 chr", "2CH"),
    ("2 chron", "2CH"),
    ("2 chronicles", "2CH"),
    ("2nd chronicles", "2CH"),
    ("ezra", "EZR"),
    ("neh", "NEH"),
    ("nehemiah", "NEH"),
    ("est", "EST"),
    ("esther", "EST"),
    ("job", "JOB"),
    ("ps", "PSA"),
    ("psa", "PSA"),
    ("psalm", "PSA"),
    ("psalms", "PSA"),
    ("prov", "PRO"),
    ("pro", "PRO"),
    ("proverbs", "PRO"),
    ("eccl", "ECC"),
    ("ecc", "ECC"),
    ("ecclesiastes", "ECC"),
    ("song", "SNG"),
    ("sos", "SNG"),
    ("song of solomon", "SNG"),
    ("song of songs", "SNG"),
    ("isa", "ISA"),
    ("isaiah", "ISA"),
    ("jer", "JER"),
    ("jeremiah", "JER"),
    ("lam", "LAM"),
    ("lamentations", "LAM"),
    ("ezek", "EZK"),
    ("ezk", "EZK"),
    ("ezekiel", "EZK"),
    ("dan", "DAN"),
    ("daniel", "DAN"),
    ("hos", "HOS"),
    ("hosea", "HOS"),
    ("joel", "JOL"),
    ("amos", "AMO"),
    ("obad", "OBA"),
    ("oba", "OBA"),
    ("obadiah", "OBA"),
    ("jonah", "JON"),
    ("jon", "JON"),
    ("mic", "MIC"),
    ("micah", "MIC"),
    ("nah", "NAM"),
    ("nahum", "NAM"),
    ("hab", "HAB"),
    ("habakkuk", "HAB"),
    ("zeph", "ZEP"),
    ("zep", "ZEP"),
    ("zephaniah", "ZEP"),
    ("hag", "HAG"),
    ("haggai", "HAG"),
    ("zech", "ZEC"),
    ("zec", "ZEC"),
    ("zechariah", "ZEC"),
    ("mal", "MAL"),
    ("malachi", "MAL"),
    ("matt", "MAT"),
    ("mat", "MAT"),
    ("matthew", "MAT"),
    ("mk", "MRK"),
    ("mark", "MRK"),
    ("lk", "LUK"),
    ("luke", "LUK"),
    ("jn", "JHN"),
    ("john", "JHN"),
    ("acts", "ACT"),
    ("rom", "ROM"),
    ("romans", "ROM"),
    ("1cor", "1CO"),
    ("1 cor", "1CO"),
    ("1 corinthians", "1CO"),
    ("1st corinthians", "1CO"),
    ("2cor", "2CO"),
    ("2 cor", "2CO"),
    ("2 corinthians", "2CO"),
    ("2nd corinthians", "2CO"),
    ("gal", "GAL"),
    ("galatians", "GAL"),
    ("eph", "EPH"),
    ("ephesians", "EPH"),
    ("phil", "PHP"),
    ("php", "PHP"),
    ("philippians", "PHP"),
    ("col", "COL"),
    ("colossians", "COL"),
    ("1thess", "1TH"),
    ("1 thess", "1TH"),
    ("1 thessalonians", "1TH"),
    ("1st thessalonians", "1TH"),
    ("2thess", "2TH"),
    ("2 thess", "2TH"),
    ("2 thessalonians", "2TH"),
    ("2nd thessalonians", "2TH"),
    ("1tim", "1TI"),
    ("1 tim", "1TI"),
    ("1 timothy", "1TI"),
    ("1st timothy", "1TI"),
    ("2tim", "2TI"),
    ("2 tim", "2TI"),
    ("2 timothy", "2TI"),
    ("2nd timothy", "2TI"),
    ("tit", "TIT"),
    ("titus", "TIT"),
    ("philem", "PHM"),
    ("phm", "PHM"),
    ("philemon", "PHM"),
    ("heb", "HEB"),
    ("hebrews", "HEB"),
    ("jas", "JAS"),
    ("james", "JAS"),
    ("1pet", "1PE"),
    ("1 pet", "1PE"),
    ("1 peter", "1PE"),
    ("1st peter", "1PE"),
    ("2pet", "2PE"),
    ("2 pet", "2PE"),
    ("2 peter", "2PE"),
    ("2nd peter", "2PE"),
    ("1jn", "1JN"),
    ("1 jn", "1JN"),
    ("1 john", "1JN"),
    ("1st john", "1JN"),
    ("2jn", "2JN"),
    ("2 jn", "2JN"),
    ("2 john", "2JN"),
    ("2nd john", "2JN"),
    ("3jn", "3JN"),
    ("3 jn", "3JN"),
    ("3 john", "3JN"),
    ("3rd john", "3JN"),
    ("jude", "JUD"),
    ("rev", "REV"),
    ("revelation", "REV"),
];

static ALIAS_MAP: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| ALIASES.iter().copied().collect());

/// Resolve free text to a canonical book id.
///
/// The alias table is consulted first, then the registry's display names.
/// Both lookups are case-insensitive and ignore surrounding whitespace.
pub fn resolve_alias(text: &str) -> Option<&'static str> {
    let normalized = text.trim().to_lowercase();
    if normalized.is_empty() {
        return None;
    }

    if let Some(id) = ALIAS_MAP.get(normalized.as_str()) {
        return Some(id);
    }

    find_by_name(&normalized, true).map(|b| b.id)
}
