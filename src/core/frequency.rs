/// Word frequency counter
///
/// Text is lowercased, split on whitespace runs and each token has the
/// punctuation set trimmed from both edges (interior punctuation stays).
/// Counts are kept in first-seen order.

use std::collections::HashMap;
use std::path::Path;

use log::{debug, info};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::Result;
use crate::utils::file_utils::{read_text, write_text};
use crate::utils::output_formatter::render_frequency;

/// Token counts in order of first occurrence
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
    /// Tokens made only of punctuation, dropped instead of counted as ""
    pub discarded: usize,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, token: &str) {
        match self.index.get(token) {
            Some(&pos) => self.entries[pos].1 += 1,
            None => {
                self.index.insert(token.to_string(), self.entries.len());
                self.entries.push((token.to_string(), 1));
            }
        }
    }

    pub fn get(&self, token: &str) -> Option<usize> {
        self.index.get(token).map(|&pos| self.entries[pos].1)
    }

    /// Iterate `(token, count)` pairs in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(token, count)| (token.as_str(), *count))
    }

    /// Number of distinct tokens
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }
}

impl Serialize for FrequencyTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (token, count) in &self.entries {
            map.serialize_entry(token, count)?;
        }
        map.end()
    }
}

/// Trim every character in `punctuation` from both edges of `token`
pub fn clean_token<'a>(token: &'a str, punctuation: &str) -> &'a str {
    token.trim_matches(|c: char| punctuation.contains(c))
}

pub fn count_words(text: &str, punctuation: &str) -> FrequencyTable {
    let mut table = FrequencyTable::new();
    let lowered = text.to_lowercase();

    for raw in lowered.split_whitespace() {
        let token = clean_token(raw, punctuation);
        if token.is_empty() {
            debug!("Dropping punctuation-only token {:?}", raw);
            table.discarded += 1;
        } else {
            table.add(token);
        }
    }

    table
}

/// Count the words of `input` and write `token: count` lines to `output`
pub fn frequency_file(input: &Path, output: &Path, punctuation: &str) -> Result<FrequencyTable> {
    let text = read_text(input)?;
    let table = count_words(&text, punctuation);
    write_text(output, &render_frequency(&table))?;
    info!(
        "Counted {} token(s), {} distinct, in {}",
        table.total(),
        table.len(),
        input.display()
    );
    Ok(table)
}
