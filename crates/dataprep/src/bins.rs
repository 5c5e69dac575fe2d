use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};

/// Write ids as fixed-width little-endian unsigned 16-bit integers, one per
/// id. Ids above `u16::MAX` wrap via the truncating cast; nothing checks
/// the vocabulary size against the encoding width.
pub fn write_ids<P: AsRef<Path>>(path: P, ids: &[u32]) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    for &id in ids {
        writer.write_all(&(id as u16).to_le_bytes())?;
    }
    writer.flush()?;
    Ok(())
}

/// Read a `.bin` file written by [`write_ids`].
pub fn read_ids<P: AsRef<Path>>(path: P) -> Result<Vec<u32>> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;
    let mut bytes = Vec::new();
    BufReader::new(file).read_to_end(&mut bytes)?;
    anyhow::ensure!(
        bytes.len() % 2 == 0,
        "{} has an odd byte count; not a u16 id file",
        path.display()
    );
    Ok(bytes
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]) as u32)
        .collect())
}
