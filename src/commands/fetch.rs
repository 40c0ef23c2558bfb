use anyhow::{Context, Result};

use crate::cli::{Cli, FetchArgs};
use crate::client::HierarchyClient;
use crate::config::ClientConfig;
use crate::io::write_snapshot;

pub fn run(cli: &Cli, args: &FetchArgs) -> Result<()> {
    let config = ClientConfig::resolve(cli.api_url.as_deref());
    let client = HierarchyClient::new(&config)?;
    let snapshot = client
        .fetch(args.state, args.party)
        .with_context(|| format!("fetch hierarchy for state {}", args.state))?;

    write_snapshot(&args.output, &snapshot, args.force)?;
    println!(
        "Fetched state {} -> {} ({} state nodes, {} org nodes)",
        args.state,
        args.output.display(),
        snapshot.state_nodes().len(),
        snapshot.org_nodes().len(),
    );
    Ok(())
}
