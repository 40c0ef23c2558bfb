use serde::{Deserialize, Serialize};

use crate::types::{normalize_label, LevelKind};

/// A District or Assembly row from the state hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateNode {
    pub id: u64,
    /// Containing node (an Assembly's owning District); None for top-level rows.
    pub parent: Option<u64>,
    /// Discriminator exactly as the backend spells it ("District", "Assembly", ...).
    /// Level counting matches on it verbatim, so the casing is preserved.
    pub level_type: String,
    pub name: String,
}

/// A post-assembly row: block, mandal, polling center, booth, or a
/// party-defined dynamic level.
///
/// Exactly one of `parent` / `assembly` is meaningfully set: a node either
/// hangs directly under an assembly (`assembly` set) or under another org
/// node (`parent` set).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgNode {
    pub id: u64,
    /// Immediate parent org node, if any.
    pub parent: Option<u64>,
    /// Owning assembly, set only when the node attaches directly beneath it.
    pub assembly: Option<u64>,
    pub name: String,
    /// Normalized bucket key (trimmed, lower-cased, spaces retained).
    pub level_key: String,
}

impl OrgNode {
    /// Build a node from a raw level label, applying the normalize-once rule.
    /// Missing or blank labels land in the "unknown" bucket.
    pub fn new(
        id: u64,
        parent: Option<u64>,
        assembly: Option<u64>,
        name: impl Into<String>,
        label: Option<&str>,
    ) -> Self {
        let level_key = match label.map(normalize_label).filter(|key| !key.is_empty()) {
            Some(key) => key,
            None => {
                tracing::warn!(id, "org node has no level label, bucketing as \"unknown\"");
                "unknown".to_string()
            }
        };
        Self { id, parent, assembly, name: name.into(), level_key }
    }

    pub fn kind(&self) -> LevelKind {
        LevelKind::from_key(&self.level_key)
    }
}
