//! Wire-format DTOs for the hierarchy endpoint, decoded exactly as the
//! backend spells them and converted into the domain model at this boundary.

use serde::Deserialize;

use crate::hierarchy::{HierarchyError, HierarchySnapshot, OrgNode, StateNode};

#[derive(Debug, Deserialize)]
pub(crate) struct Envelope {
    pub success: bool,
    #[serde(default)]
    pub data: Option<Payload>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Payload {
    #[serde(default)]
    pub state_hierarchy: Vec<StateNodeDto>,
    #[serde(default)]
    pub after_assembly_hierarchy: Vec<OrgNodeDto>,
}

/// State-level row. `ParentId` really is capitalized on the wire.
#[derive(Debug, Deserialize)]
pub(crate) struct StateNodeDto {
    pub id: u64,
    #[serde(rename = "ParentId", default)]
    pub parent_id: Option<u64>,
    #[serde(rename = "levelType")]
    pub level_type: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Post-assembly row. `display_level_name` is snake_case on the wire while
/// its siblings are camelCase; both label fields are optional and the
/// display one wins.
#[derive(Debug, Deserialize)]
pub(crate) struct OrgNodeDto {
    pub id: u64,
    #[serde(rename = "parentId", default)]
    pub parent_id: Option<u64>,
    #[serde(rename = "parentAssemblyId", default)]
    pub parent_assembly_id: Option<u64>,
    #[serde(rename = "levelName", default)]
    pub level_name: Option<String>,
    #[serde(default)]
    pub display_level_name: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

pub(crate) fn snapshot_from_payload(payload: Payload) -> Result<HierarchySnapshot, HierarchyError> {
    let state_nodes = payload
        .state_hierarchy
        .into_iter()
        .map(|dto| StateNode {
            id: dto.id,
            parent: dto.parent_id,
            level_type: dto.level_type,
            name: dto.name.unwrap_or_default(),
        })
        .collect();

    let org_nodes = payload
        .after_assembly_hierarchy
        .into_iter()
        .map(|dto| {
            let label = dto.display_level_name.as_deref().or(dto.level_name.as_deref());
            OrgNode::new(
                dto.id,
                dto.parent_id,
                dto.parent_assembly_id,
                dto.name.unwrap_or_default(),
                label,
            )
        })
        .collect();

    HierarchySnapshot::new(state_nodes, org_nodes)
}
