#![doc = "Sangathan public API"]
pub mod cli;
mod client;
pub mod commands;
mod config;
mod dashboard;
mod hierarchy;
mod io;
mod types;

#[doc(inline)]
pub use client::{decode_snapshot, FetchError, HierarchyClient};

#[doc(inline)]
pub use config::ClientConfig;

#[doc(inline)]
pub use dashboard::{DashboardSession, Generation, SessionState};

#[doc(inline)]
pub use hierarchy::{
    aggregate, count_by_level_type, scoped_view, DashboardCounts, HierarchyError,
    HierarchySnapshot, OrgNode, ScopedView, StateNode,
};

#[doc(inline)]
pub use io::{read_snapshot, write_snapshot};

#[doc(inline)]
pub use types::{normalize_label, LevelKind, Scope};
