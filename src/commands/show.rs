use anyhow::Result;

use crate::cli::{Cli, ShowArgs};
use crate::hierarchy::{scoped_view, ScopedView};
use crate::types::Scope;

use super::fetch_or_load;

pub fn run(cli: &Cli, args: &ShowArgs) -> Result<()> {
    let snapshot = fetch_or_load(cli, &args.scope, args.input.as_deref())?;
    let scope = Scope::resolve(args.scope.district, args.scope.assembly);
    let view = scoped_view(&snapshot, scope);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print_listing(&view);
    }
    Ok(())
}

fn print_listing(view: &ScopedView<'_>) {
    for node in &view.state_nodes {
        println!("{:<10} {:>6}  {}", node.level_type, node.id, node.name);
    }
    for node in &view.org_nodes {
        println!("{:<10} {:>6}  {}", node.level_key, node.id, node.name);
    }
}
