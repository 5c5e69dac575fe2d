use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use crate::error::{Result, VocabError};

/// Character-to-integer vocabulary shared across corpora.
///
/// Ids are dense in `[0, vocab_size)` and assigned by sorted character
/// order, so two builds over the same text always agree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharVocab {
    pub vocab_size: usize,
    pub itos: Vec<char>,
    pub stoi: HashMap<char, u32>,
}

impl CharVocab {
    /// Build a vocabulary from every unique character in `text`.
    pub fn from_text(text: &str) -> Self {
        let chars: BTreeSet<char> = text.chars().collect();
        let itos: Vec<char> = chars.into_iter().collect();
        let stoi: HashMap<char, u32> = itos
            .iter()
            .enumerate()
            .map(|(i, &ch)| (ch, i as u32))
            .collect();

        Self {
            vocab_size: itos.len(),
            itos,
            stoi,
        }
    }

    pub fn get_id(&self, ch: char) -> Option<u32> {
        self.stoi.get(&ch).copied()
    }

    pub fn get_char(&self, id: u32) -> Option<char> {
        self.itos.get(id as usize).copied()
    }

    pub fn len(&self) -> usize {
        self.itos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.itos.is_empty()
    }

    /// Encode a string as one id per character.
    pub fn encode(&self, text: &str) -> Result<Vec<u32>> {
        text.chars()
            .map(|ch| self.get_id(ch).ok_or(VocabError::CharNotFound(ch)))
            .collect()
    }

    /// Decode a sequence of ids back into a string.
    pub fn decode(&self, ids: &[u32]) -> Result<String> {
        ids.iter()
            .map(|&id| self.get_char(id).ok_or(VocabError::IdNotFound(id)))
            .collect()
    }

    /// Persist the full lookup structure (size, itos, stoi) as JSON.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let vocab: Self = serde_json::from_reader(reader)?;
        Ok(vocab)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_follow_sorted_order() {
        let vocab = CharVocab::from_text("cba\nab");
        assert_eq!(vocab.len(), 4);
        assert_eq!(vocab.itos, vec!['\n', 'a', 'b', 'c']);
        assert_eq!(vocab.get_id('\n'), Some(0));
        assert_eq!(vocab.get_id('c'), Some(3));
    }

    #[test]
    fn test_vocab_size_counts_unique_chars() {
        let text = "to be or not to be";
        let vocab = CharVocab::from_text(text);
        let unique: std::collections::HashSet<char> = text.chars().collect();
        assert_eq!(vocab.len(), unique.len());
        assert_eq!(vocab.vocab_size, vocab.len());
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let text = "HAMLET:\nWords, words, words. Où çà?";
        let vocab = CharVocab::from_text(text);
        let ids = vocab.encode(text).unwrap();
        assert_eq!(ids.len(), text.chars().count());
        assert_eq!(vocab.decode(&ids).unwrap(), text);
    }

    #[test]
    fn test_unknown_char_is_an_error() {
        let vocab = CharVocab::from_text("abc");
        assert!(matches!(
            vocab.encode("abz"),
            Err(VocabError::CharNotFound('z'))
        ));
        assert!(matches!(
            vocab.decode(&[0, 99]),
            Err(VocabError::IdNotFound(99))
        ));
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("meta_joint.json");

        let vocab = CharVocab::from_text("le théâtre classique\n!");
        vocab.save(&path).unwrap();
        let loaded = CharVocab::load(&path).unwrap();

        assert_eq!(loaded.vocab_size, vocab.vocab_size);
        assert_eq!(loaded.itos, vocab.itos);
        assert_eq!(loaded.stoi, vocab.stoi);
    }
}
