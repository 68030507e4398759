//! JSON party definitions and frame export.

use std::{fs::File, io::{BufReader, BufWriter, Write}, path::Path};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::swing::SwingometerFrame;
use crate::types::{Color, PartyRegistry};

/// One entry of a party definition file.
#[derive(Debug, Deserialize)]
struct PartyEntry {
    name: String,
    abbreviation: String,
    #[serde(default)]
    color: Option<Color>,
}

fn registry_from_entries(entries: Vec<PartyEntry>) -> Result<PartyRegistry> {
    let mut parties = PartyRegistry::new();
    for entry in entries {
        parties.register(&entry.name, &entry.abbreviation, entry.color)?;
    }
    Ok(parties)
}

/// Parses a JSON array of `{ "name", "abbreviation", "color"? }` party definitions.
pub fn parties_from_str(json: &str) -> Result<PartyRegistry> {
    let entries = serde_json::from_str(json)
        .context("[io::json] Failed to parse party definitions")?;
    registry_from_entries(entries)
}

/// Reads party definitions from a JSON file.
pub fn read_parties(path: &Path) -> Result<PartyRegistry> {
    let file = File::open(path)
        .with_context(|| format!("[io::json] Failed to open party file: {}", path.display()))?;
    let entries = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("[io::json] Failed to parse party definitions in {}", path.display()))?;
    registry_from_entries(entries)
}

/// Writes a frame as pretty-printed JSON.
pub fn write_frame(frame: &SwingometerFrame, writer: impl Write) -> Result<()> {
    let mut writer = BufWriter::new(writer);
    serde_json::to_writer_pretty(&mut writer, frame)
        .context("[io::json] Failed to serialize swingometer frame")?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Writes a frame as pretty-printed JSON to a file at `path`.
pub fn write_frame_to_file(frame: &SwingometerFrame, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("[io::json] Failed to create output file: {}", path.display()))?;
    write_frame(frame, file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parties_parse_with_optional_color() {
        let json = r##"[
            { "name": "Labour", "abbreviation": "LAB", "color": "#e4003b" },
            { "name": "Green", "abbreviation": "GRN" }
        ]"##;
        let parties = parties_from_str(json).unwrap();

        assert_eq!(parties.len(), 2);
        assert_eq!(parties.get("LAB").unwrap().color, Color::rgb(0xe4, 0x00, 0x3b));
        assert!(parties.get("GRN").is_some());
    }

    #[test]
    fn parties_reject_bad_color_and_duplicates() {
        assert!(parties_from_str(r#"[{ "name": "X", "abbreviation": "X", "color": "red" }]"#).is_err());
        assert!(parties_from_str(r#"[{ "name": "X", "abbreviation": "X" }, { "name": "Y", "abbreviation": "X" }]"#).is_err());
    }
}
