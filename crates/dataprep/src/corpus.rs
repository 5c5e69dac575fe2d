use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;

/// Raw text content of one language's source material.
///
/// All lengths here are character counts, not byte counts; the French
/// corpus is full of multi-byte accented characters.
#[derive(Debug, Clone)]
pub struct Corpus {
    text: String,
    n_chars: usize,
}

impl Corpus {
    pub fn new(text: String) -> Self {
        let n_chars = text.chars().count();
        Self { text, n_chars }
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read corpus {}", path.display()))?;
        let corpus = Self::new(text);
        info!("loaded {} ({} characters)", path.display(), corpus.n_chars);
        Ok(corpus)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn n_chars(&self) -> usize {
        self.n_chars
    }

    /// Keep only the first `n_chars` characters. No-op when the corpus is
    /// already that short.
    pub fn truncate_to(&mut self, n_chars: usize) {
        if self.n_chars <= n_chars {
            return;
        }
        let end = char_boundary(&self.text, n_chars);
        self.text.truncate(end);
        self.n_chars = n_chars;
    }

    /// Split at the `floor(n_chars * train_fraction)` character boundary.
    pub fn split_train_val(&self, train_fraction: f64) -> (&str, &str) {
        let n_train = (self.n_chars as f64 * train_fraction) as usize;
        self.text.split_at(char_boundary(&self.text, n_train))
    }
}

/// Byte offset of the `n`-th character, or the text length if there are
/// fewer than `n` characters.
fn char_boundary(text: &str, n: usize) -> usize {
    text.char_indices()
        .nth(n)
        .map(|(offset, _)| offset)
        .unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        let mut corpus = Corpus::new("àéîõü vowels".to_string());
        corpus.truncate_to(5);
        assert_eq!(corpus.n_chars(), 5);
        assert_eq!(corpus.text(), "àéîõü");
    }

    #[test]
    fn test_truncate_is_noop_on_shorter_corpus() {
        let mut corpus = Corpus::new("short".to_string());
        corpus.truncate_to(100);
        assert_eq!(corpus.n_chars(), 5);
        assert_eq!(corpus.text(), "short");
    }

    #[test]
    fn test_split_sizes_sum_to_corpus_size() {
        let corpus = Corpus::new("abcdefghijklmnopqrst".to_string());
        let (train, val) = corpus.split_train_val(0.9);
        assert_eq!(train.chars().count(), 18);
        assert_eq!(val.chars().count(), 2);
        assert_eq!(
            train.chars().count() + val.chars().count(),
            corpus.n_chars()
        );
    }

    #[test]
    fn test_split_boundary_floors() {
        // 15 * 0.9 = 13.5, so the train side gets 13 characters.
        let corpus = Corpus::new("ABCDEFGHIJKLMNO".to_string());
        let (train, val) = corpus.split_train_val(0.9);
        assert_eq!(train, "ABCDEFGHIJKLM");
        assert_eq!(val, "NO");
    }

    #[test]
    fn test_split_respects_char_boundaries() {
        let corpus = Corpus::new("éééééééééé".to_string());
        let (train, val) = corpus.split_train_val(0.9);
        assert_eq!(train.chars().count(), 9);
        assert_eq!(val, "é");
    }
}
