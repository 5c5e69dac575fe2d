use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use dataprep::{prepare_joint, PrepConfig};

/// Jointly prepare the English and French play corpora for character-level
/// modeling: shared vocabulary, per-language and joint train/val bins.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// YAML file overriding the default preparation paths
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// English corpus input file
    #[arg(long)]
    english: Option<PathBuf>,

    /// French corpus input file (reformatted transcript)
    #[arg(long)]
    french: Option<PathBuf>,

    /// Output directory for the joint train.bin / val.bin
    #[arg(long)]
    joint_dir: Option<PathBuf>,

    /// Train split fraction
    #[arg(long)]
    train_fraction: Option<f64>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => PrepConfig::from_yaml(path)?,
        None => PrepConfig::default(),
    };
    if let Some(path) = cli.english {
        config.english_input = path;
    }
    if let Some(path) = cli.french {
        config.french_input = path;
    }
    if let Some(dir) = cli.joint_dir {
        config.joint_out_dir = dir;
    }
    if let Some(fraction) = cli.train_fraction {
        config.train_fraction = fraction;
    }

    let summary = prepare_joint(&config)?;

    println!("length of English dataset: {} characters", summary.english_chars);
    println!("length of French dataset: {} characters", summary.french_chars);
    println!("vocab size: {}", summary.vocab_size);
    println!("English train has {} tokens", summary.english_train);
    println!("English val has {} tokens", summary.english_val);
    println!("French train has {} tokens", summary.french_train);
    println!("French val has {} tokens", summary.french_val);
    println!("joint train has {} tokens", summary.joint_train);
    println!("joint val has {} tokens", summary.joint_val);
    println!("Saved vocabulary meta to {:?}", config.meta_path);

    Ok(())
}
