/// Normalize a raw level label into its bucket key: trimmed, lower-cased,
/// inner whitespace retained. Applied once at ingestion; call sites never
/// re-derive the key.
pub fn normalize_label(label: &str) -> String {
    label.trim().to_lowercase()
}

/// Typed classification of an organizational level below the assembly.
///
/// The fixed variants are the built-in levels; party-defined dynamic levels
/// fall through to `Other` carrying their normalized key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LevelKind {
    Block,
    Mandal,
    PollingCenter,
    Booth,
    Other(String),
}

impl LevelKind {
    /// Classify an already-normalized bucket key. Both spellings of the
    /// polling-center level appear in the wild and map to the same kind.
    pub fn from_key(key: &str) -> Self {
        match key {
            "block" => LevelKind::Block,
            "mandal" => LevelKind::Mandal,
            "polling center" | "pollingcenter" => LevelKind::PollingCenter,
            "booth" => LevelKind::Booth,
            other => LevelKind::Other(other.to_string()),
        }
    }

    pub fn to_str(&self) -> &str {
        match self {
            LevelKind::Block => "block",
            LevelKind::Mandal => "mandal",
            LevelKind::PollingCenter => "polling center",
            LevelKind::Booth => "booth",
            LevelKind::Other(name) => name,
        }
    }
}
