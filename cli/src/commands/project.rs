use std::{collections::HashMap, io};

use anyhow::{Context, Result, bail, ensure};
use swingometer::{
    FocusPair, Party, PartyRegistry, SwingState, SwingometerFrame, read_current_results, read_parties,
    read_previous_results, read_seat_filter, write_frame, write_frame_to_file,
};

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::ProjectArgs) -> Result<()> {
    tracing::info!("[project] loading parties from {}", args.parties.display());
    let parties = read_parties(&args.parties)?;
    let focus = focus_pair(&parties, &args.focus)?;

    tracing::info!("[project] loading previous results from {}", args.previous.display());
    let previous = read_previous_results(&args.previous, &parties)?;

    let current = args.current.as_deref()
        .map(|path| {
            tracing::info!("[project] loading current results from {}", path.display());
            read_current_results(path, &parties)
        })
        .transpose()?
        .unwrap_or_default();
    let seat_filter = args.filter.as_deref().map(read_seat_filter).transpose()?;
    let national_swing = national_swing(&parties, &args.swing)?;

    let state = SwingState::new(previous, focus)
        .with_current(current)
        .with_national_swing(national_swing)
        .with_seat_filter(seat_filter)
        .with_label_increment(args.increment);

    tracing::info!(
        "[project] projecting {} districts for {} vs {}",
        state.previous.len(), state.focus.left.abbreviation, state.focus.right.abbreviation,
    );
    let frame = SwingometerFrame::compute(&state);
    tracing::info!(
        "[project] {} needs {:+.2} points to win, {} needs {:+.2}",
        state.focus.left.abbreviation, frame.left_to_win * 100.0,
        state.focus.right.abbreviation, frame.right_to_win * 100.0,
    );

    match &args.output {
        Some(path) => {
            tracing::info!("[project] writing frame to {}", path.display());
            write_frame_to_file(&frame, path)
        }
        None => write_frame(&frame, io::stdout().lock()),
    }
}

/// Resolve `LEFT,RIGHT` abbreviations into a focus pair.
fn focus_pair(parties: &PartyRegistry, names: &[String]) -> Result<FocusPair> {
    let [left, right] = names else {
        bail!("[project] --focus takes exactly two parties, got {}", names.len());
    };
    let pair = FocusPair::new(lookup(parties, left)?, lookup(parties, right)?);
    ensure!(pair.left != pair.right, "[project] Focus parties must differ");
    Ok(pair)
}

fn lookup(parties: &PartyRegistry, abbreviation: &str) -> Result<Party> {
    parties.get(abbreviation.trim()).cloned()
        .with_context(|| format!("[project] Unknown party '{abbreviation}'"))
}

/// Parse `PARTY=POINTS` entries into share changes (fractions).
fn national_swing(parties: &PartyRegistry, entries: &[String]) -> Result<HashMap<Party, f64>> {
    entries.iter()
        .map(|entry| {
            let (abbreviation, points) = entry.split_once('=')
                .with_context(|| format!("[project] Expected PARTY=POINTS, got '{entry}'"))?;
            let points = points.trim().parse::<f64>()
                .with_context(|| format!("[project] Invalid swing '{points}' for {abbreviation}"))?;
            Ok((lookup(parties, abbreviation)?, points / 100.0))
        })
        .collect()
}
