use clap::{Args, Parser, Subcommand, ValueHint};
use std::path::PathBuf;

/// Organizational hierarchy CLI (argument schema only)
#[derive(Parser, Debug)]
#[command(name = "sangathan", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Hierarchy API base URL (default: $SANGATHAN_API_URL, then localhost)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print per-level counts for a scope
    Counts(CountsArgs),

    /// List the hierarchy subset visible in a scope
    Show(ShowArgs),

    /// Fetch a state's hierarchy and write the snapshot to a file
    Fetch(FetchArgs),
}

#[derive(Args, Debug)]
pub struct ScopeArgs {
    /// State id (required unless reading a snapshot with --input)
    #[arg(long)]
    pub state: Option<u64>,

    /// Narrow to one district
    #[arg(long)]
    pub district: Option<u64>,

    /// Narrow to one assembly (wins over --district)
    #[arg(long)]
    pub assembly: Option<u64>,

    /// Restrict to a party's configured levels
    #[arg(long)]
    pub party: Option<u64>,
}

#[derive(Args, Debug)]
pub struct CountsArgs {
    #[command(flatten)]
    pub scope: ScopeArgs,

    /// Aggregate an exported snapshot instead of fetching
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub input: Option<PathBuf>,

    /// Emit JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    #[command(flatten)]
    pub scope: ScopeArgs,

    /// Read an exported snapshot instead of fetching
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub input: Option<PathBuf>,

    /// Emit JSON instead of a listing
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct FetchArgs {
    /// State id
    #[arg(long)]
    pub state: u64,

    /// Restrict to a party's configured levels
    #[arg(long)]
    pub party: Option<u64>,

    /// Output snapshot file
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub output: PathBuf,

    /// Overwrite if the file exists
    #[arg(long)]
    pub force: bool,
}
