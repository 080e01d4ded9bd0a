//! Word, sentence, and paragraph statistics for the text analyzer widget.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Toggles controlling which characters are counted.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsOptions {
    #[serde(default)]
    pub include_whitespace: bool,
    #[serde(default)]
    pub include_punctuation: bool,
}

/// Aggregate metrics for a text, computed in one pass over the input.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TextStats {
    pub words: usize,
    pub characters: usize,
    pub sentences: usize,
    pub paragraphs: usize,
    /// ceil(words / 200), in minutes.
    pub reading_minutes: usize,
    pub longest_sentence_words: usize,
    pub shortest_sentence_words: usize,
    pub longest_sentence: String,
    pub shortest_sentence: String,
    pub longest_paragraph_words: usize,
    pub shortest_paragraph_words: usize,
}

/// Analyzes `text`: words are whitespace-split non-empty tokens, sentences
/// split on `[.!?]+` runs, paragraphs on blank-line runs.
pub fn analyze_text(text: &str, options: &StatsOptions) -> TextStats {
    let words = word_count(text);

    let sentences: Vec<&str> = sentence_regex()
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    let sentence_lengths: Vec<usize> = sentences.iter().map(|s| word_count(s)).collect();
    let (longest_idx, shortest_idx) = extremes(&sentence_lengths);

    let paragraph_lengths: Vec<usize> = paragraph_regex()
        .split(text)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(word_count)
        .collect();
    let (longest_para, shortest_para) = extremes(&paragraph_lengths);

    TextStats {
        words,
        characters: character_count(text, options),
        sentences: sentences.len(),
        paragraphs: paragraph_lengths.len(),
        reading_minutes: words.div_ceil(200),
        longest_sentence_words: longest_idx.map_or(0, |i| sentence_lengths[i]),
        shortest_sentence_words: shortest_idx.map_or(0, |i| sentence_lengths[i]),
        longest_sentence: longest_idx.map_or(String::new(), |i| sentences[i].to_string()),
        shortest_sentence: shortest_idx.map_or(String::new(), |i| sentences[i].to_string()),
        longest_paragraph_words: longest_para.map_or(0, |i| paragraph_lengths[i]),
        shortest_paragraph_words: shortest_para.map_or(0, |i| paragraph_lengths[i]),
    }
}

fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

fn character_count(text: &str, options: &StatsOptions) -> usize {
    text.chars()
        .filter(|ch| {
            if ch.is_whitespace() {
                options.include_whitespace
            } else if ch.is_alphanumeric() || *ch == '_' {
                true
            } else {
                options.include_punctuation
            }
        })
        .count()
}

/// Indices of the longest and shortest entries; ties resolve to the first.
fn extremes(lengths: &[usize]) -> (Option<usize>, Option<usize>) {
    let mut longest = None;
    let mut shortest = None;
    for (idx, &len) in lengths.iter().enumerate() {
        if longest.map_or(true, |l: usize| len > lengths[l]) {
            longest = Some(idx);
        }
        if shortest.map_or(true, |s: usize| len < lengths[s]) {
            shortest = Some(idx);
        }
    }
    (longest, shortest)
}

fn sentence_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[.!?]+").unwrap())
}

fn paragraph_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n[ \t]*\n[\s]*").unwrap())
}
