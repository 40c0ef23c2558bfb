use std::collections::VecDeque;

use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::node::{OrgNode, StateNode};

/// Invariant violations surfaced by snapshot construction and the
/// descendant walk.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HierarchyError {
    #[error("duplicate id {id} in fetched hierarchy")]
    DuplicateId { id: u64 },
    #[error("cycle detected in parent links at node {id}")]
    CycleDetected { id: u64 },
}

/// One fetched, indexed copy of both hierarchy collections.
///
/// Adjacency indices are built once here; the aggregator and the view filter
/// only read them. Deserializing re-runs construction, so the invariant
/// checks apply to snapshot files as well as live responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawSnapshot", into = "RawSnapshot")]
pub struct HierarchySnapshot {
    state_nodes: Vec<StateNode>,
    org_nodes: Vec<OrgNode>,

    // State node indices by parent id.
    state_children: AHashMap<u64, Vec<u32>>,
    // Org node indices by owning assembly (direct attachment only).
    assembly_direct: AHashMap<u64, Vec<u32>>,
    // Org node indices by parent org node (nodes not claimed by an assembly).
    org_children: AHashMap<u64, Vec<u32>>,
}

/// Serialized form: just the two collections, indices rebuilt on read.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawSnapshot {
    state_nodes: Vec<StateNode>,
    org_nodes: Vec<OrgNode>,
}

impl TryFrom<RawSnapshot> for HierarchySnapshot {
    type Error = HierarchyError;

    fn try_from(raw: RawSnapshot) -> Result<Self, Self::Error> {
        Self::new(raw.state_nodes, raw.org_nodes)
    }
}

impl From<HierarchySnapshot> for RawSnapshot {
    fn from(snapshot: HierarchySnapshot) -> Self {
        Self { state_nodes: snapshot.state_nodes, org_nodes: snapshot.org_nodes }
    }
}

impl HierarchySnapshot {
    /// Index both collections. Ids must be unique within each collection.
    /// Attachment violations (both or neither of parent/assembly set) are
    /// logged, not rejected; such rows are unreachable by the walks.
    pub fn new(state_nodes: Vec<StateNode>, org_nodes: Vec<OrgNode>) -> Result<Self, HierarchyError> {
        let mut seen = AHashSet::with_capacity(state_nodes.len());
        for node in &state_nodes {
            if !seen.insert(node.id) {
                return Err(HierarchyError::DuplicateId { id: node.id });
            }
        }
        let mut seen = AHashSet::with_capacity(org_nodes.len());
        for node in &org_nodes {
            if !seen.insert(node.id) {
                return Err(HierarchyError::DuplicateId { id: node.id });
            }
        }

        let mut state_children: AHashMap<u64, Vec<u32>> = AHashMap::new();
        for (idx, node) in state_nodes.iter().enumerate() {
            if let Some(parent) = node.parent {
                state_children.entry(parent).or_default().push(idx as u32);
            }
        }

        let mut assembly_direct: AHashMap<u64, Vec<u32>> = AHashMap::new();
        let mut org_children: AHashMap<u64, Vec<u32>> = AHashMap::new();
        for (idx, node) in org_nodes.iter().enumerate() {
            match (node.parent, node.assembly) {
                (None, Some(assembly)) => {
                    assembly_direct.entry(assembly).or_default().push(idx as u32);
                }
                (Some(parent), None) => {
                    org_children.entry(parent).or_default().push(idx as u32);
                }
                (Some(_), Some(_)) => {
                    tracing::warn!(
                        id = node.id,
                        "org node claims both a parent and an assembly; unreachable by the descendant walk"
                    );
                }
                (None, None) => {
                    tracing::warn!(id = node.id, "org node has neither parent nor assembly");
                }
            }
        }

        Ok(Self { state_nodes, org_nodes, state_children, assembly_direct, org_children })
    }

    pub fn state_nodes(&self) -> &[StateNode] {
        &self.state_nodes
    }

    pub fn org_nodes(&self) -> &[OrgNode] {
        &self.org_nodes
    }

    /// State nodes whose parent is `id` (the "children of district" lookup).
    pub fn children_of(&self, id: u64) -> Vec<&StateNode> {
        match self.state_children.get(&id) {
            Some(indices) => indices.iter().map(|&idx| &self.state_nodes[idx as usize]).collect(),
            None => Vec::new(),
        }
    }

    /// Org nodes attached directly beneath `assembly_id`.
    pub fn direct_children_of_assembly(&self, assembly_id: u64) -> Vec<&OrgNode> {
        match self.assembly_direct.get(&assembly_id) {
            Some(indices) => indices.iter().map(|&idx| &self.org_nodes[idx as usize]).collect(),
            None => Vec::new(),
        }
    }

    /// Direct children plus all transitive descendants of one assembly.
    pub fn descendants_of_assembly(&self, assembly_id: u64) -> Result<Vec<&OrgNode>, HierarchyError> {
        self.descendants_of_assemblies(&[assembly_id])
    }

    /// Union of direct children and transitive descendants across all the
    /// given assemblies, in breadth-first visit order.
    ///
    /// The parent/child graph is produced server-side and assumed acyclic;
    /// the visited set turns a violated assumption into an error instead of
    /// an endless walk.
    pub fn descendants_of_assemblies(&self, assembly_ids: &[u64]) -> Result<Vec<&OrgNode>, HierarchyError> {
        let mut visited: AHashSet<u64> = AHashSet::new();
        let mut queue: VecDeque<u32> = VecDeque::new();
        let mut found: Vec<&OrgNode> = Vec::new();

        for &assembly in assembly_ids {
            if let Some(direct) = self.assembly_direct.get(&assembly) {
                for &idx in direct {
                    let node = &self.org_nodes[idx as usize];
                    if !visited.insert(node.id) {
                        return Err(HierarchyError::CycleDetected { id: node.id });
                    }
                    queue.push_back(idx);
                    found.push(node);
                }
            }
        }

        while let Some(idx) = queue.pop_front() {
            let frontier_id = self.org_nodes[idx as usize].id;
            if let Some(children) = self.org_children.get(&frontier_id) {
                for &child_idx in children {
                    let child = &self.org_nodes[child_idx as usize];
                    if !visited.insert(child.id) {
                        return Err(HierarchyError::CycleDetected { id: child.id });
                    }
                    queue.push_back(child_idx);
                    found.push(child);
                }
            }
        }

        Ok(found)
    }
}
