use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use regex::Regex;

/// Rewrite a speaker-tagged play transcript from bracket notation into the
/// blank-line-delimited dialogue layout of the English reference corpus:
///
/// ```text
/// [CHARACTER:] Line of dialogue
/// ```
///
/// becomes
///
/// ```text
/// CHARACTER:
/// Line of dialogue
/// <blank line>
/// ```
///
/// Non-matching non-empty lines are dropped; empty lines are skipped.
/// Returns the number of dialogue entries written.
pub fn reformat_script<R: BufRead, W: Write>(input: R, output: &mut W) -> Result<usize> {
    let pattern = Regex::new(r"^\[(.+?):\]\s*(.*)$")?;

    let mut entries = 0;
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(caps) = pattern.captures(line) {
            let speaker = caps[1].trim();
            let text = caps[2].trim();
            writeln!(output, "{}:\n{}\n", speaker, text)?;
            entries += 1;
        }
    }
    Ok(entries)
}

pub fn reformat_file<P: AsRef<Path>>(input: P, output: P) -> Result<usize> {
    let input = input.as_ref();
    let output = output.as_ref();
    let reader = BufReader::new(
        File::open(input).with_context(|| format!("Failed to open {}", input.display()))?,
    );
    let mut writer = BufWriter::new(
        File::create(output).with_context(|| format!("Failed to create {}", output.display()))?,
    );
    let entries = reformat_script(reader, &mut writer)?;
    writer.flush()?;
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn reformat(input: &str) -> (String, usize) {
        let mut out = Vec::new();
        let entries = reformat_script(Cursor::new(input), &mut out).unwrap();
        (String::from_utf8(out).unwrap(), entries)
    }

    #[test]
    fn test_bracketed_line_becomes_dialogue_entry() {
        let (out, entries) = reformat("[A:] hello\n");
        assert_eq!(out, "A:\nhello\n\n");
        assert_eq!(entries, 1);
    }

    #[test]
    fn test_unmatched_lines_are_dropped() {
        let (out, entries) = reformat("no brackets here\n[B:] bonjour\n");
        assert_eq!(out, "B:\nbonjour\n\n");
        assert_eq!(entries, 1);
    }

    #[test]
    fn test_empty_lines_contribute_nothing() {
        let (out, entries) = reformat("\n\n[PHÈDRE:] Quel funeste poison\n\n");
        assert_eq!(out, "PHÈDRE:\nQuel funeste poison\n\n");
        assert_eq!(entries, 1);
    }

    #[test]
    fn test_lazy_speaker_match_stops_at_first_colon() {
        // The speaker group is lazy, so a colon inside the dialogue stays
        // with the dialogue.
        let (out, _) = reformat("[ORESTE:] Oui: je viens\n");
        assert_eq!(out, "ORESTE:\nOui: je viens\n\n");
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        let (out, _) = reformat("  [C:]    spaced out   \n");
        assert_eq!(out, "C:\nspaced out\n\n");
    }
}
