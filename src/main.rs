use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use sangathan::cli::{Cli, Commands};
use sangathan::commands::{counts, fetch, show};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Counts(args) => counts::run(&cli, args),
        Commands::Show(args) => show::run(&cli, args),
        Commands::Fetch(args) => fetch::run(&cli, args),
    }
}

fn init_tracing(verbose: u8) {
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
