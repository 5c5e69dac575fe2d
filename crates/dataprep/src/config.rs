use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Paths and split fraction for the joint preparation run. Defaults mirror
/// the repository's data layout, so running the tool from the repo root
/// with no flags does the right thing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PrepConfig {
    /// English corpus (tiny-shakespeare layout).
    pub english_input: PathBuf,
    /// French corpus, already reformatted to the tiny-shakespeare layout.
    pub french_input: PathBuf,
    /// Where the English train.bin / val.bin land.
    pub english_out_dir: PathBuf,
    /// Where the French train.bin / val.bin land.
    pub french_out_dir: PathBuf,
    /// Where the joint train.bin / val.bin land.
    pub joint_out_dir: PathBuf,
    /// Vocabulary meta JSON (size, itos, stoi).
    pub meta_path: PathBuf,
    /// Character-count fraction of each corpus that goes to train.
    pub train_fraction: f64,
}

impl Default for PrepConfig {
    fn default() -> Self {
        Self {
            english_input: PathBuf::from("data/english/shakespeare/input.txt"),
            french_input: PathBuf::from("data/french/TheatreClassique/train_reformatted.txt"),
            english_out_dir: PathBuf::from("data/english/shakespeare"),
            french_out_dir: PathBuf::from("data/french/TheatreClassique"),
            joint_out_dir: PathBuf::from("data/eng_fr_plays_char/joint_data"),
            meta_path: PathBuf::from("data/eng_fr_plays_char/meta_joint.json"),
            train_fraction: 0.9,
        }
    }
}

impl PrepConfig {
    pub fn from_yaml<P: AsRef<Path>>(path: P) -> Result<Self> {
        load_yaml(path.as_ref())
    }
}

/// Flat hyperparameter set consumed by the external training driver. This
/// crate only defines and validates the schema; nothing here trains.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    pub out_dir: String,
    pub eval_interval: usize,
    pub eval_iters: usize,
    pub log_interval: usize,
    /// Validation loss is not meaningful under distillation, so checkpoint
    /// on every eval regardless of it.
    pub always_save_checkpoint: bool,
    pub wandb_log: bool,
    pub wandb_project: String,
    pub wandb_run_name: String,
    /// Directory holding train.bin and val.bin.
    pub dataset: String,
    pub gradient_accumulation_steps: usize,
    pub batch_size: usize,
    /// Context of up to this many previous characters.
    pub block_size: usize,
    pub n_layer: usize,
    pub n_head: usize,
    pub n_embd: usize,
    pub dropout: f64,
    pub learning_rate: f64,
    pub max_iters: usize,
    pub lr_decay_iters: f64,
    pub min_lr: f64,
    pub beta2: f64,
    pub warmup_iters: usize,
    /// Checkpoint directory of the English teacher model.
    pub eng_teacher_path: String,
    /// Checkpoint directory of the French teacher model.
    pub fr_teacher_path: String,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            out_dir: "out-eng-fr-distill-char".to_string(),
            eval_interval: 250,
            eval_iters: 200,
            log_interval: 10,
            always_save_checkpoint: true,
            wandb_log: true,
            wandb_project: "multilingual-distillation".to_string(),
            wandb_run_name: "english-french-same-arch-as-teachers".to_string(),
            dataset: "data/eng_fr_plays_char/joint_data".to_string(),
            gradient_accumulation_steps: 1,
            batch_size: 64,
            block_size: 256,
            // baby GPT, same shape as the teachers
            n_layer: 6,
            n_head: 6,
            n_embd: 384,
            dropout: 0.2,
            learning_rate: 1e-3,
            max_iters: 15_000,
            // effectively no LR decay
            lr_decay_iters: 1e6,
            min_lr: 1e-4,
            beta2: 0.99,
            // no warmup for distillation
            warmup_iters: 0,
            eng_teacher_path: "out-shakespeare-char".to_string(),
            fr_teacher_path: "out-theatre-classique-char".to_string(),
        }
    }
}

impl TrainConfig {
    pub fn from_yaml<P: AsRef<Path>>(path: P) -> Result<Self> {
        load_yaml(path.as_ref())
    }
}

fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config {}", path.display()))
}
