use ahash::AHashSet;
use serde::Serialize;

use crate::types::Scope;

use super::node::{OrgNode, StateNode};
use super::snapshot::HierarchySnapshot;

/// The display-relevant subset of a snapshot for one scope. Borrows from the
/// snapshot; the source collections are never copied or mutated.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScopedView<'a> {
    pub state_nodes: Vec<&'a StateNode>,
    pub org_nodes: Vec<&'a OrgNode>,
}

/// Derive the subset of both collections visible in `scope`. Pure and
/// synchronous; recompute whenever the snapshot or the scope changes.
pub fn scoped_view(snapshot: &HierarchySnapshot, scope: Scope) -> ScopedView<'_> {
    match scope {
        Scope::State => ScopedView {
            state_nodes: snapshot.state_nodes().iter().collect(),
            org_nodes: snapshot.org_nodes().iter().collect(),
        },
        Scope::District { district_id } => {
            let assembly_ids: AHashSet<u64> =
                snapshot.children_of(district_id).iter().map(|a| a.id).collect();
            ScopedView {
                state_nodes: snapshot
                    .state_nodes()
                    .iter()
                    .filter(|node| node.id == district_id || node.parent == Some(district_id))
                    .collect(),
                org_nodes: snapshot
                    .org_nodes()
                    .iter()
                    .filter(|node| node.assembly.is_some_and(|a| assembly_ids.contains(&a)))
                    .collect(),
            }
        }
        Scope::Assembly { assembly_id } => ScopedView {
            state_nodes: snapshot
                .state_nodes()
                .iter()
                .filter(|node| node.id == assembly_id)
                .collect(),
            org_nodes: snapshot
                .org_nodes()
                .iter()
                .filter(|node| node.assembly == Some(assembly_id))
                .collect(),
        },
    }
}
