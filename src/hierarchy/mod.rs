mod counts;
mod node;
mod snapshot;
mod view;

pub use counts::{aggregate, count_by_level_type, DashboardCounts};
pub use node::{OrgNode, StateNode};
pub use snapshot::{HierarchyError, HierarchySnapshot};
pub use view::{scoped_view, ScopedView};
