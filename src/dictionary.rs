use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info, trace};

use crate::error::Result;
use crate::word::Word;

/// Five-letter entries in common system word lists that are never answers: Roman numerals and
/// the like.
pub const EXCLUDED: &[&str] = &[
    "xviii", "xxiii", "xxvii", "xxxii", "xxxiv", "xxxvi", "xxxix", "lxvii", "cxvii", "mcmxc",
];

/// Read a word list with one word per line, keeping only lowercase five-letter words.
pub fn load(path: impl AsRef<Path>, extra_exclusions: &[String]) -> Result<Vec<Word>> {
    let path = path.as_ref();
    debug!("reading dictionary {:?}", path);
    let file = File::open(path)?;
    let lines = BufReader::new(file).lines().collect::<std::io::Result<Vec<_>>>()?;
    let words = from_lines(lines.iter().map(String::as_str), extra_exclusions);
    info!("{} usable words in {:?}", words.len(), path);
    Ok(words)
}

/// Same as [`load`], over lines already in memory. The result is sorted and has no duplicates.
pub fn from_lines<'a>(lines: impl Iterator<Item = &'a str>, extra_exclusions: &[String]) -> Vec<Word> {
    // A BTreeSet keeps the order deterministic, which makes debugging easier.
    let mut words = BTreeSet::new();
    for line in lines {
        let line = line.trim();
        // Capitalised entries are proper nouns.
        if !line.bytes().all(|b| b.is_ascii_lowercase()) {
            trace!("skipping {:?}", line);
            continue;
        }
        let Ok(word) = Word::new(line) else {
            trace!("skipping {:?}", line);
            continue;
        };
        if is_excluded(line, extra_exclusions) {
            trace!("excluding {:?}", line);
            continue;
        }
        words.insert(word);
    }
    words.into_iter().collect()
}

fn is_excluded(word: &str, extra: &[String]) -> bool {
    EXCLUDED.contains(&word) || extra.iter().any(|x| x.eq_ignore_ascii_case(word))
}
