use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use dataprep::reformat::reformat_file;

/// Convert a `[CHARACTER:] dialogue` transcript to the blank-line-delimited
/// tiny-shakespeare layout.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Transcript in bracket notation
    #[arg(short, long)]
    input: PathBuf,

    /// Where to write the reformatted transcript
    #[arg(short, long)]
    output: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let entries = reformat_file(&cli.input, &cli.output)?;
    println!(
        "Conversion complete. Wrote {} dialogue entries to {:?}",
        entries, cli.output
    );
    Ok(())
}
