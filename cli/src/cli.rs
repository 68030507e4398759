use std::path::PathBuf;

/// Swingometer CLI (argument schema only)
#[derive(clap::Parser, Debug)]
#[command(name = "swingometer", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Project seats under uniform swing and write the swingometer frame as JSON
    Project(ProjectArgs),

    /// Compute the two-party swing between two sets of results
    Swing(SwingArgs),
}

#[derive(clap::Args, Debug)]
pub struct ProjectArgs {
    /// Party definitions (JSON array of name, abbreviation, color)
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub parties: PathBuf,

    /// Previous-election results (CSV: district, then one column per party)
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub previous: PathBuf,

    /// Focus parties as LEFT,RIGHT abbreviations, e.g. LAB,CON
    #[arg(long, value_delimiter = ',', required = true)]
    pub focus: Vec<String>,

    /// Current results (CSV: district,status,party)
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub current: Option<PathBuf>,

    /// Seats to highlight, one district id per line
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub filter: Option<PathBuf>,

    /// Label every N seats beyond the current midpoint (0 disables)
    #[arg(long, default_value_t = 0)]
    pub increment: usize,

    /// National change in vote share in percentage points, e.g. CON=-3.5 (repeatable)
    #[arg(long = "swing", value_name = "PARTY=POINTS")]
    pub swing: Vec<String>,

    /// Output frame file, defaults to stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct SwingArgs {
    /// Party definitions (JSON array of name, abbreviation, color)
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub parties: PathBuf,

    /// Earlier results (CSV: district, then one column per party)
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub prior: PathBuf,

    /// Later results, same layout as --prior
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub current: PathBuf,

    /// Party losing share
    #[arg(long)]
    pub from: String,

    /// Party gaining share
    #[arg(long)]
    pub to: String,
}
