use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use charvocab::CharVocab;
use log::info;

use crate::bins;
use crate::config::PrepConfig;
use crate::corpus::Corpus;

/// Sizes reported after a joint preparation run. All counts are characters
/// (equivalently, encoded ids).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrepSummary {
    pub english_chars: usize,
    pub french_chars: usize,
    pub vocab_size: usize,
    pub english_train: usize,
    pub english_val: usize,
    pub french_train: usize,
    pub french_val: usize,
    pub joint_train: usize,
    pub joint_val: usize,
}

/// Jointly prepare the English and French corpora for character-level
/// modeling.
///
/// The longer corpus is truncated to the shorter's character count, then a
/// single shared vocabulary is built from the truncated pair. That one
/// vocabulary encodes every split below, per-language and joint, so ids
/// are consistent across all six `.bin` files and the persisted meta.
pub fn prepare_joint(config: &PrepConfig) -> Result<PrepSummary> {
    let mut english = Corpus::load(&config.english_input)?;
    let mut french = Corpus::load(&config.french_input)?;

    let shorter = english.n_chars().min(french.n_chars());
    if english.n_chars() > shorter {
        english.truncate_to(shorter);
        info!("truncated English corpus to {} characters", shorter);
    }
    if french.n_chars() > shorter {
        french.truncate_to(shorter);
        info!("truncated French corpus to {} characters", shorter);
    }

    let combined = format!("{}\n{}", english.text(), french.text());
    let vocab = CharVocab::from_text(&combined);
    info!(
        "combined corpus: {} characters, vocab size {}",
        combined.chars().count(),
        vocab.len()
    );

    let (eng_train, eng_val) = english.split_train_val(config.train_fraction);
    let (fr_train, fr_val) = french.split_train_val(config.train_fraction);

    let eng_train_ids = vocab.encode(eng_train)?;
    let eng_val_ids = vocab.encode(eng_val)?;
    let fr_train_ids = vocab.encode(fr_train)?;
    let fr_val_ids = vocab.encode(fr_val)?;

    write_split(&config.english_out_dir, &eng_train_ids, &eng_val_ids)?;
    write_split(&config.french_out_dir, &fr_train_ids, &fr_val_ids)?;

    // Joint splits: English ids first, then French.
    let mut joint_train = eng_train_ids.clone();
    joint_train.extend_from_slice(&fr_train_ids);
    let mut joint_val = eng_val_ids.clone();
    joint_val.extend_from_slice(&fr_val_ids);
    write_split(&config.joint_out_dir, &joint_train, &joint_val)?;

    if let Some(parent) = config.meta_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    vocab
        .save(&config.meta_path)
        .with_context(|| format!("Failed to save {}", config.meta_path.display()))?;

    Ok(PrepSummary {
        english_chars: english.n_chars(),
        french_chars: french.n_chars(),
        vocab_size: vocab.len(),
        english_train: eng_train_ids.len(),
        english_val: eng_val_ids.len(),
        french_train: fr_train_ids.len(),
        french_val: fr_val_ids.len(),
        joint_train: joint_train.len(),
        joint_val: joint_val.len(),
    })
}

fn write_split(dir: &Path, train_ids: &[u32], val_ids: &[u32]) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    bins::write_ids(dir.join("train.bin"), train_ids)?;
    bins::write_ids(dir.join("val.bin"), val_ids)?;
    Ok(())
}
