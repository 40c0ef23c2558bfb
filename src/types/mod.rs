mod level;
mod scope;

pub use level::{normalize_label, LevelKind};
pub use scope::Scope;
