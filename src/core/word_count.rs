use crate::core::WordCount;

pub const WORD_SEPARATOR: char = ' ';

/// Counts every token of `phrase` split on `separator`.
///
/// A trailing separator does not produce a token, but consecutive separators
/// do produce an empty one, which is counted like any other word.
pub fn tally(phrase: &str, separator: char) -> WordCount {
    let mut words = WordCount::new();
    for token in phrase.split_terminator(separator) {
        let word = token.trim_matches(|c: char| c.is_ascii_punctuation());
        *words.entry(word.to_string()).or_insert(0) += 1;
    }
    tracing::debug!("Tallied {} distinct words", words.len());
    words
}

pub fn count_words(phrase: &str) -> WordCount {
    tally(phrase, WORD_SEPARATOR)
}

/// Entries ordered by descending count, ties broken alphabetically.
pub fn sorted_by_count(words: &WordCount) -> Vec<(&str, usize)> {
    let mut entries: Vec<(&str, usize)> = words.iter().map(|(w, c)| (w.as_str(), *c)).collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    entries
}
