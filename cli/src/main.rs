mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::{project, swing};
use tracing_subscriber::EnvFilter;

/// Log to stderr at a level chosen by `-v`, unless `RUST_LOG` says otherwise.
fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    init_logging(cli.verbose);
    match &cli.command {
        Commands::Project(args) => project::run(&cli, args),
        Commands::Swing(args) => swing::run(&cli, args),
    }
}

fn main() -> anyhow::Result<()> { run() }
