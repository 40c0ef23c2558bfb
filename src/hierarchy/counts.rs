use std::collections::BTreeMap;

use serde::Serialize;

use crate::types::{LevelKind, Scope};

use super::node::{OrgNode, StateNode};
use super::snapshot::{HierarchyError, HierarchySnapshot};

/// Per-level counts for one scope.
///
/// The fixed fields alias well-known buckets; `levels` carries every
/// normalized bucket including party-defined dynamic ones, so unknown levels
/// are preserved rather than lost. `Default` is the all-zero value used while
/// no hierarchy data is loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardCounts {
    pub districts: u64,
    pub assemblies: u64,
    pub blocks: u64,
    pub mandals: u64,
    pub polling_centers: u64,
    pub booths: u64,
    /// Every level bucket keyed by normalized level name.
    #[serde(flatten)]
    pub levels: BTreeMap<String, u64>,
}

/// Number of state nodes whose `level_type` equals `level_type` exactly
/// (case-sensitive).
pub fn count_by_level_type(nodes: &[StateNode], level_type: &str) -> u64 {
    nodes.iter().filter(|node| node.level_type == level_type).count() as u64
}

/// Compute the dashboard counts for `scope` over one snapshot. Pure: same
/// inputs always yield the same counts.
pub fn aggregate(snapshot: &HierarchySnapshot, scope: Scope) -> Result<DashboardCounts, HierarchyError> {
    match scope {
        Scope::State => {
            let districts = count_by_level_type(snapshot.state_nodes(), "District");
            let assemblies = count_by_level_type(snapshot.state_nodes(), "Assembly");
            let levels = bucket_by_level(snapshot.org_nodes().iter());
            Ok(with_aliases(districts, assemblies, levels))
        }
        Scope::District { district_id } => {
            let assemblies: Vec<u64> = snapshot.children_of(district_id).iter().map(|a| a.id).collect();
            let reached = snapshot.descendants_of_assemblies(&assemblies)?;
            let levels = bucket_by_level(reached.into_iter());
            // The district itself is always the one row in scope.
            Ok(with_aliases(1, assemblies.len() as u64, levels))
        }
        Scope::Assembly { assembly_id } => {
            let reached = snapshot.descendants_of_assembly(assembly_id)?;
            let levels = bucket_by_level(reached.into_iter());
            Ok(with_aliases(0, 1, levels))
        }
    }
}

fn bucket_by_level<'a>(nodes: impl Iterator<Item = &'a OrgNode>) -> BTreeMap<String, u64> {
    let mut levels: BTreeMap<String, u64> = BTreeMap::new();
    for node in nodes {
        *levels.entry(node.level_key.clone()).or_default() += 1;
    }
    levels
}

/// Fill the fixed convenience fields from the level buckets. Both spellings
/// of the polling-center level contribute to the same field.
fn with_aliases(districts: u64, assemblies: u64, levels: BTreeMap<String, u64>) -> DashboardCounts {
    let mut counts = DashboardCounts { districts, assemblies, levels, ..Default::default() };
    for (key, &n) in &counts.levels {
        match LevelKind::from_key(key) {
            LevelKind::Block => counts.blocks += n,
            LevelKind::Mandal => counts.mandals += n,
            LevelKind::PollingCenter => counts.polling_centers += n,
            LevelKind::Booth => counts.booths += n,
            LevelKind::Other(_) => {}
        }
    }
    counts
}
