pub mod counts;
pub mod fetch;
pub mod show;

use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::cli::{Cli, ScopeArgs};
use crate::client::HierarchyClient;
use crate::config::ClientConfig;
use crate::hierarchy::HierarchySnapshot;
use crate::io::read_snapshot;

/// Load the hierarchy for a scoped command: from a snapshot file when
/// `--input` is given, from the backend otherwise.
pub(crate) fn fetch_or_load(cli: &Cli, scope: &ScopeArgs, input: Option<&Path>) -> Result<HierarchySnapshot> {
    if let Some(path) = input {
        return read_snapshot(path);
    }
    let Some(state_id) = scope.state else {
        bail!("--state is required unless --input is given");
    };
    let config = ClientConfig::resolve(cli.api_url.as_deref());
    let client = HierarchyClient::new(&config)?;
    client
        .fetch(state_id, scope.party)
        .with_context(|| format!("fetch hierarchy for state {state_id}"))
}
