//! CSV reading operations.

use std::{collections::HashMap, fs::File, io::Cursor, path::Path};

use anyhow::{Context, Result, bail, ensure};
use polars::{frame::DataFrame, io::SerReader, prelude::{CsvReadOptions, CsvReader, StringChunked}};

use crate::types::{CurrentResult, Party, PartyRegistry, PartyVotes};

/// Options shared by every result file: header row, every column read as text
/// so district ids keep their leading zeros.
fn result_csv_options() -> CsvReadOptions {
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
}

/// Reads a CSV file from `path` into a Polars DataFrame of string columns.
pub(crate) fn read_csv(path: &Path) -> Result<DataFrame> {
    let file = File::open(path)
        .with_context(|| format!("[io::csv::read] Failed to open CSV file: {}", path.display()))?;
    result_csv_options()
        .into_reader_with_file_handle(file)
        .finish()
        .with_context(|| format!("[io::csv::read] Failed to read CSV from {:?}", path))
}

/// Reads a CSV from a string into a DataFrame of string columns.
pub(crate) fn read_csv_string(csv: &str) -> Result<DataFrame> {
    CsvReader::new(Cursor::new(csv.as_bytes()))
        .with_options(result_csv_options())
        .finish()
        .context("[io::csv::read] Failed to read CSV from string")
}

/// Header names in column order.
fn column_names(df: &DataFrame) -> Vec<String> {
    df.get_column_names().into_iter().map(|name| name.as_str().to_owned()).collect()
}

fn string_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a StringChunked> {
    df.column(name)?.str()
        .with_context(|| format!("[io::csv::read] Column '{name}' is not a text column"))
}

/// Trimmed, non-empty district id for a row.
fn district_id<'a>(districts: &'a StringChunked, row: usize) -> Result<&'a str> {
    districts.get(row).map(str::trim).filter(|id| !id.is_empty())
        .with_context(|| format!("[io::csv::read] Missing district id on data row {}", row + 1))
}

fn parse_votes(cell: Option<&str>, district: &str, party: &Party) -> Result<u64> {
    match cell.map(str::trim) {
        None | Some("") => Ok(0),
        Some(text) => text.parse()
            .with_context(|| format!("[io::csv::read] Invalid vote count '{text}' for {} in district '{district}'", party.abbreviation)),
    }
}

/// Parse prior-election tallies: first column is the district id,
/// every other column is a party abbreviation holding its vote count.
pub(crate) fn previous_results_from_df(df: &DataFrame, parties: &PartyRegistry) -> Result<HashMap<String, PartyVotes>> {
    let names = column_names(df);
    ensure!(names.len() >= 2, "[io::csv::read] Previous results need a district column and at least one party column");

    let districts = string_column(df, &names[0])?;
    let columns = names[1..].iter()
        .map(|abbreviation| {
            let party = parties.get(abbreviation.trim())
                .with_context(|| format!("[io::csv::read] Unknown party column '{abbreviation}'"))?;
            Ok((party, string_column(df, abbreviation)?))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut results = HashMap::with_capacity(df.height());
    for row in 0..df.height() {
        let district = district_id(districts, row)?;
        let votes = columns.iter()
            .map(|&(party, column)| Ok((party.clone(), parse_votes(column.get(row), district, party)?)))
            .collect::<Result<PartyVotes>>()?;

        if votes.values().all(|&count| count == 0) {
            tracing::warn!(district, "[io::csv::read] district has no recorded votes and will be ignored");
        }
        ensure!(results.insert(district.to_owned(), votes).is_none(), "[io::csv::read] Duplicate district '{district}'");
    }

    tracing::debug!(districts = results.len(), parties = columns.len(), "[io::csv::read] loaded previous results");
    Ok(results)
}

/// Parse current results: columns `district,status,party`, status one of
/// `leading`, `elected` or `none` (case-insensitive, empty means none).
pub(crate) fn current_results_from_df(df: &DataFrame, parties: &PartyRegistry) -> Result<HashMap<String, CurrentResult>> {
    let names = column_names(df);
    ensure!(names.len() >= 3, "[io::csv::read] Current results need district, status and party columns");

    let districts = string_column(df, &names[0])?;
    let statuses = string_column(df, &names[1])?;
    let winners = string_column(df, &names[2])?;

    let mut results = HashMap::with_capacity(df.height());
    for row in 0..df.height() {
        let district = district_id(districts, row)?;
        let status = statuses.get(row).map(str::trim).unwrap_or("").to_ascii_lowercase();
        let party = || -> Result<Party> {
            let abbreviation = winners.get(row).map(str::trim).filter(|abbr| !abbr.is_empty())
                .with_context(|| format!("[io::csv::read] District '{district}' is {status} but names no party"))?;
            parties.get(abbreviation).cloned()
                .with_context(|| format!("[io::csv::read] Unknown party '{abbreviation}' in district '{district}'"))
        };

        let result = match status.as_str() {
            "" | "none" => CurrentResult::NoResult,
            "leading" => CurrentResult::Leading(party()?),
            "elected" => CurrentResult::Elected(party()?),
            other => bail!("[io::csv::read] Unknown result status '{other}' in district '{district}'"),
        };
        ensure!(results.insert(district.to_owned(), result).is_none(), "[io::csv::read] Duplicate district '{district}'");
    }

    tracing::debug!(districts = results.len(), "[io::csv::read] loaded current results");
    Ok(results)
}

/// Reads prior-election tallies from a CSV file.
pub fn read_previous_results(path: &Path, parties: &PartyRegistry) -> Result<HashMap<String, PartyVotes>> {
    previous_results_from_df(&read_csv(path)?, parties)
        .with_context(|| format!("[io::csv::read] Failed to load previous results from {}", path.display()))
}

/// Reads current results from a CSV file.
pub fn read_current_results(path: &Path, parties: &PartyRegistry) -> Result<HashMap<String, CurrentResult>> {
    current_results_from_df(&read_csv(path)?, parties)
        .with_context(|| format!("[io::csv::read] Failed to load current results from {}", path.display()))
}

/// Parses prior-election tallies from CSV text.
pub fn previous_results_from_str(csv: &str, parties: &PartyRegistry) -> Result<HashMap<String, PartyVotes>> {
    previous_results_from_df(&read_csv_string(csv)?, parties)
}

/// Parses current results from CSV text.
pub fn current_results_from_str(csv: &str, parties: &PartyRegistry) -> Result<HashMap<String, CurrentResult>> {
    current_results_from_df(&read_csv_string(csv)?, parties)
}
