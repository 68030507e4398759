use anyhow::{Context, Result};
use swingometer::{aggregate_votes, read_parties, read_previous_results, swing_between};

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::SwingArgs) -> Result<()> {
    let parties = read_parties(&args.parties)?;
    let from = parties.get(args.from.trim())
        .with_context(|| format!("[swing] Unknown party '{}'", args.from))?;
    let to = parties.get(args.to.trim())
        .with_context(|| format!("[swing] Unknown party '{}'", args.to))?;

    tracing::info!("[swing] loading results from {} and {}", args.prior.display(), args.current.display());
    let prior = aggregate_votes(read_previous_results(&args.prior, &parties)?.values());
    let current = aggregate_votes(read_previous_results(&args.current, &parties)?.values());

    let swing = swing_between(&prior, &current, from, to);
    println!("{} -> {}: {:+.2} points", from.abbreviation, to.abbreviation, swing * 100.0);

    Ok(())
}
