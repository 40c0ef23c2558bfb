use anyhow::Result;

use crate::cli::{Cli, CountsArgs};
use crate::hierarchy::{aggregate, DashboardCounts};
use crate::types::Scope;

use super::fetch_or_load;

pub fn run(cli: &Cli, args: &CountsArgs) -> Result<()> {
    let snapshot = fetch_or_load(cli, &args.scope, args.input.as_deref())?;
    let scope = Scope::resolve(args.scope.district, args.scope.assembly);
    let counts = aggregate(&snapshot, scope)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&counts)?);
    } else {
        print_table(&counts);
    }
    Ok(())
}

fn print_table(counts: &DashboardCounts) {
    println!("districts        {}", counts.districts);
    println!("assemblies       {}", counts.assemblies);
    println!("blocks           {}", counts.blocks);
    println!("mandals          {}", counts.mandals);
    println!("polling centers  {}", counts.polling_centers);
    println!("booths           {}", counts.booths);

    // Dynamic, party-defined levels beyond the fixed set.
    let dynamic: Vec<_> = counts
        .levels
        .iter()
        .filter(|(key, _)| !matches!(key.as_str(), "block" | "mandal" | "polling center" | "pollingcenter" | "booth"))
        .collect();
    if !dynamic.is_empty() {
        println!();
        for (level, n) in dynamic {
            println!("{level:<16} {n}");
        }
    }
}
