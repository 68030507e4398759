//! Plain-text seat filters: one district id per line.

use std::{collections::HashSet, fs, path::Path};

use anyhow::{Context, Result};

/// Parses a seat filter, ignoring blank lines and `#` comments.
pub fn seat_filter_from_str(text: &str) -> HashSet<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_owned)
        .collect()
}

/// Reads a seat filter file.
pub fn read_seat_filter(path: &Path) -> Result<HashSet<String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("[io::text] Failed to read seat filter: {}", path.display()))?;
    Ok(seat_filter_from_str(&text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_skips_blanks_and_comments() {
        let filter = seat_filter_from_str("# marginals\n001\n\n  002  \n#003\n");
        assert_eq!(filter, HashSet::from(["001".to_owned(), "002".to_owned()]));
    }
}
